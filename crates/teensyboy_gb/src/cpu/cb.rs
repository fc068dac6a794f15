use super::opcodes::{base_cost, cb_cost};
use super::{Bus, Cpu, Flag};

/// Opcode byte of the CB prefix.
const PREFIX_CB: u8 = 0xCB;

impl Cpu {
    /// Handle CB-prefixed instructions (bit operations, shifts, and rotates).
    ///
    /// The returned cost includes the prefix fetch.
    pub(super) fn step_cb<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let cb = self.fetch8(bus);
        let x = cb >> 6;
        let y = (cb >> 3) & 0x07;
        let z = cb & 0x07;

        match x {
            0 => {
                // Rotates, shifts and SWAP.
                let value = self.read_reg8(bus, z);
                let (result, carry) = self.alu_shift(y, value);
                self.regs.set_flags(result == 0, false, false, carry);
                self.write_reg8(bus, z, result);
            }
            1 => {
                // BIT b, r: preserve C, set H=1, N=0.
                let value = self.read_reg8(bus, z);
                let bit_set = (value & (1 << y)) != 0;
                let carry = self.get_flag(Flag::C);
                self.regs.set_flags(!bit_set, false, true, carry);
            }
            2 => {
                // RES b, r
                let value = self.read_reg8(bus, z);
                self.write_reg8(bus, z, value & !(1 << y));
            }
            _ => {
                // SET b, r
                let value = self.read_reg8(bus, z);
                self.write_reg8(bus, z, value | (1 << y));
            }
        }

        base_cost(PREFIX_CB) + cb_cost(cb)
    }
}
