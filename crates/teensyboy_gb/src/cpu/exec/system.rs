use crate::cpu::opcodes::base_cost;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// STOP is a 2-byte instruction; the padding byte is fetched and
    /// discarded. There is no low-power mode to enter, so it otherwise
    /// behaves like NOP.
    pub(super) fn exec_stop<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let _padding = self.fetch8(bus);
        base_cost(opcode)
    }

    pub(super) fn exec_di(&mut self, opcode: u8) -> u32 {
        self.arm_ime_disable();
        base_cost(opcode)
    }

    pub(super) fn exec_ei(&mut self, opcode: u8) -> u32 {
        // IME becomes 1 after the *next* instruction completes.
        self.arm_ime_enable();
        base_cost(opcode)
    }
}
