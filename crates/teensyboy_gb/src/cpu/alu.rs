use super::flags::{
    borrow_sub8, carry_add16, carry_add8, half_borrow_sub8, half_carry_add16, half_carry_add8,
    zero8,
};
use super::{Cpu, Flag};

impl Cpu {
    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true).
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = use_carry && self.get_flag(Flag::C);
        let result = a.wrapping_add(value).wrapping_add(u8::from(carry_in));

        self.regs.a = result;
        self.regs.set_flags(
            zero8(result),
            false,
            half_carry_add8(a, value, carry_in),
            carry_add8(a, value, carry_in),
        );
    }

    /// Core 8-bit SUB/SBC operation on A.
    ///
    /// `use_carry` selects between SUB (false) and SBC (true).
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let borrow_in = use_carry && self.get_flag(Flag::C);
        let result = a.wrapping_sub(value).wrapping_sub(u8::from(borrow_in));

        self.regs.a = result;
        self.regs.set_flags(
            zero8(result),
            true,
            half_borrow_sub8(a, value, borrow_in),
            borrow_sub8(a, value, borrow_in),
        );
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;
        self.regs.set_flags(zero8(result), false, true, false);
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;
        self.regs.set_flags(zero8(result), false, false, false);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;
        self.regs.set_flags(zero8(result), false, false, false);
    }

    /// Compare A with `value`, setting flags as if `A - value` was performed.
    /// A itself is not modified.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        let a = self.regs.a;
        self.regs.set_flags(
            zero8(a.wrapping_sub(value)),
            true,
            half_borrow_sub8(a, value, false),
            borrow_sub8(a, value, false),
        );
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    ///
    /// Uses C, H, N, and A to compute a correction value. Updates A, Z, H, C
    /// and leaves N unchanged.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust: u8 = if self.get_flag(Flag::C) { 0x60 } else { 0x00 };
        if self.get_flag(Flag::H) {
            adjust |= 0x06;
        }

        if !self.get_flag(Flag::N) {
            // After an addition.
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            a = a.wrapping_sub(adjust);
        }

        self.set_flag(Flag::C, adjust >= 0x60);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::Z, zero8(a));
        self.regs.a = a;
    }

    /// 8-bit increment used by INC r and INC (HL). C is left unchanged.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flag::Z, zero8(result));
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, half_carry_add8(value, 1, false));
        result
    }

    /// 8-bit decrement used by DEC r and DEC (HL). C is left unchanged.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flag::Z, zero8(result));
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, half_borrow_sub8(value, 1, false));
        result
    }

    /// 16-bit add for `ADD HL,rr`. Z is unaffected.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();

        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, half_carry_add16(hl, value));
        self.set_flag(Flag::C, carry_add16(hl, value));

        self.regs.set_hl(hl.wrapping_add(value));
    }

    /// Add a signed 8-bit immediate to a 16-bit base (ADD SP,r8 and
    /// LD HL,SP+r8).
    ///
    /// Z and N are cleared; H and C come from the unsigned low-byte add.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let low = base as u8;
        self.regs.set_flags(
            false,
            false,
            half_carry_add8(low, imm8, false),
            carry_add8(low, imm8, false),
        );
        base.wrapping_add(imm8 as i8 as i16 as u16)
    }

    /// Shared rotate/shift core for the CB-prefixed group and the
    /// accumulator rotates. `op` is bits 3..5 of the CB opcode.
    ///
    /// Returns the result and the carry out; the caller decides how Z is
    /// reported.
    pub(super) fn alu_shift(&self, op: u8, value: u8) -> (u8, bool) {
        let carry_in = self.get_flag(Flag::C);
        match op {
            // RLC
            0 => (value.rotate_left(1), value & 0x80 != 0),
            // RRC
            1 => (value.rotate_right(1), value & 0x01 != 0),
            // RL
            2 => ((value << 1) | u8::from(carry_in), value & 0x80 != 0),
            // RR
            3 => ((value >> 1) | (u8::from(carry_in) << 7), value & 0x01 != 0),
            // SLA
            4 => (value << 1, value & 0x80 != 0),
            // SRA
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            // SWAP
            6 => (value.rotate_left(4), false),
            // SRL
            _ => (value >> 1, value & 0x01 != 0),
        }
    }
}
