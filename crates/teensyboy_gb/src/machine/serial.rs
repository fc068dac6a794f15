use crate::cpu::InterruptFlags;

/// Very small serial interface modelled via SB/SC.
///
/// There is no link partner: a transfer started with the internal clock
/// (SC bit 7 set while bit 0 is 1) completes immediately, appends the
/// current SB value to `output`, clears the start bit and requests the
/// Serial interrupt. Test ROMs report their results this way.
pub(crate) struct Serial {
    pub(crate) sb: u8,
    pub(crate) sc: u8,
    pub(crate) output: Vec<u8>,
}

impl Default for Serial {
    fn default() -> Self {
        Self {
            sb: 0x00,
            sc: 0x7E,
            output: Vec::new(),
        }
    }
}

impl Serial {
    pub(super) fn write_sb(&mut self, value: u8) {
        self.sb = value;
    }

    pub(super) fn write_sc(&mut self, value: u8, if_reg: &mut u8) {
        self.sc = value;
        // Internal clock & start bit set?
        if (self.sc & 0x81) == 0x81 {
            self.output.push(self.sb);
            log::trace!("serial out: 0x{:02X}", self.sb);
            // Clear transfer start bit.
            self.sc &= !0x80;
            *if_reg |= InterruptFlags::SERIAL.bits();
        }
    }

    pub(super) fn read_sc(&self) -> u8 {
        // Unused bits 1-6 read as 1 on DMG.
        self.sc | 0x7E
    }
}
