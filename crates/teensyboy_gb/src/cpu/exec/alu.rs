use crate::cpu::opcodes::base_cost;
use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    fn apply_alu_op(&mut self, operation: u8, value: u8) {
        match operation {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => self.alu_cp(value),
        }
    }

    pub(super) fn exec_alu_reg_group<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!((0x80..=0xBF).contains(&opcode));
        let operation = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, opcode & 0x07);
        self.apply_alu_op(operation, value);
        base_cost(opcode)
    }

    pub(super) fn exec_alu_imm<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE
        ));
        let value = self.fetch8(bus);
        // The immediate forms share the operation field with 0x80..=0xBF.
        self.apply_alu_op((opcode >> 3) & 0x07, value);
        base_cost(opcode)
    }

    /// RLCA/RRCA/RLA/RRA. Unlike their CB counterparts these always clear Z.
    pub(super) fn exec_rotate_a(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));

        let (result, carry) = self.alu_shift((opcode >> 3) & 0x03, self.regs.a);
        self.regs.a = result;
        self.regs.set_flags(false, false, false, carry);

        base_cost(opcode)
    }

    pub(super) fn exec_add_hl_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));
        let value = match opcode {
            0x09 => self.regs.bc(),
            0x19 => self.regs.de(),
            0x29 => self.regs.hl(),
            _ => self.regs.sp,
        };
        self.alu_add16_hl(value);
        base_cost(opcode)
    }

    pub(super) fn exec_add_sp_r8<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let imm = self.fetch8(bus);
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
        base_cost(opcode)
    }

    pub(super) fn exec_ld_hl_sp_r8<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let imm = self.fetch8(bus);
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
        base_cost(opcode)
    }

    pub(super) fn exec_daa(&mut self, opcode: u8) -> u32 {
        self.alu_daa();
        base_cost(opcode)
    }

    pub(super) fn exec_cpl(&mut self, opcode: u8) -> u32 {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::H, true);
        self.set_flag(Flag::N, true);
        base_cost(opcode)
    }

    pub(super) fn exec_scf(&mut self, opcode: u8) -> u32 {
        self.set_flag(Flag::C, true);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::N, false);
        base_cost(opcode)
    }

    pub(super) fn exec_ccf(&mut self, opcode: u8) -> u32 {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::C, !carry);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::N, false);
        base_cost(opcode)
    }
}
