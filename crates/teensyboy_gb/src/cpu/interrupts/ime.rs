use super::super::Cpu;

/// Steps between EI/DI and the IME change: the instruction itself, then
/// the one after it.
const IME_DELAY: u8 = 2;

impl Cpu {
    /// Schedule IME to be set once the instruction after this one completes.
    /// A DI still in flight keeps counting down on its own.
    #[inline]
    pub(in crate::cpu) fn arm_ime_enable(&mut self) {
        self.ime_enable_countdown = IME_DELAY;
    }

    /// Schedule IME to be cleared with the same delay as EI. An EI still in
    /// flight is cancelled.
    #[inline]
    pub(in crate::cpu) fn arm_ime_disable(&mut self) {
        self.ime_disable_countdown = IME_DELAY;
        self.ime_enable_countdown = 0;
    }

    /// Advance the delayed IME changes by one executed instruction.
    ///
    /// Called at the end of every step that executed an opcode; HALT idle
    /// steps and interrupt dispatch do not count.
    #[inline]
    pub(in crate::cpu) fn tick_ime_countdowns(&mut self) {
        if self.ime_enable_countdown > 0 {
            self.ime_enable_countdown -= 1;
            if self.ime_enable_countdown == 0 {
                self.ime = true;
            }
        }
        if self.ime_disable_countdown > 0 {
            self.ime_disable_countdown -= 1;
            if self.ime_disable_countdown == 0 {
                self.ime = false;
            }
        }
    }
}
