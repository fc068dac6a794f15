use super::Timer;

impl Timer {
    /// DIV (FF04): bits 13:6 of the machine-cycle counter.
    #[inline]
    pub(crate) fn div(&self) -> u8 {
        (self.internal_counter >> 6) as u8
    }

    /// DIV write.
    ///
    /// Writing any value resets the internal counter. If the selected input
    /// bit was 1, the reset is a falling edge and TIMA increments once.
    pub(crate) fn write_div(&mut self) {
        if self.enabled() && self.counter_bit() {
            self.increment_tima();
        }
        self.internal_counter = 0;
    }

    #[inline]
    pub(crate) fn read_tima(&self) -> u8 {
        self.tima
    }

    /// TIMA write. A write during the overflow window cancels the pending
    /// reload and interrupt.
    pub(crate) fn write_tima(&mut self, value: u8) {
        self.tima = value;
        self.overflow = false;
    }

    #[inline]
    pub(crate) fn read_tma(&self) -> u8 {
        self.tma
    }

    pub(crate) fn write_tma(&mut self, value: u8) {
        self.tma = value;
    }

    /// TAC read; the unused upper bits read as 1.
    #[inline]
    pub(crate) fn read_tac(&self) -> u8 {
        self.tac | 0b1111_1000
    }

    /// TAC write.
    ///
    /// On DMG, disabling the timer or switching the clock source while
    /// the selected input bit is 1 triggers a single TIMA increment.
    pub(crate) fn write_tac(&mut self, value: u8) {
        let old_bit = self.enabled() && self.counter_bit();
        self.tac = value & 0x07;
        let new_bit = self.enabled() && self.counter_bit();
        if old_bit && !new_bit {
            self.increment_tima();
        }
    }
}
