//! Opcode descriptor tables.
//!
//! `BASE_OPCODES` covers the unprefixed opcodes and `CB_OPCODES` the
//! 0xCB-prefixed ones. Execution is a `match` over the opcode byte, but every
//! cycle cost it charges is read from these tables so they stay the single
//! source of truth for timing.
//!
//! Costs are in machine cycles. For conditional control flow `cycles` is the
//! branch-not-taken cost and `cycles_taken` the branch-taken cost; for every
//! other instruction the two are equal. `CB_OPCODES` costs exclude the one
//! cycle charged for fetching the 0xCB prefix itself.

/// Static description of one opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpcodeInfo {
    pub mnemonic: &'static str,
    /// Instruction length in bytes, including any prefix and operands.
    pub length: u8,
    pub cycles: u8,
    pub cycles_taken: u8,
}

impl OpcodeInfo {
    /// Whether the CPU implements this opcode. Opcode holes fault.
    #[inline]
    pub const fn is_defined(&self) -> bool {
        self.cycles != 0
    }

    #[inline]
    pub const fn is_conditional(&self) -> bool {
        self.cycles != self.cycles_taken
    }
}

/// Placeholder for the DMG opcode holes (D3, DB, DD, E3, E4, EB, EC, ED, F4,
/// FC, FD).
pub const ILLEGAL: OpcodeInfo = OpcodeInfo {
    mnemonic: "ILLEGAL",
    length: 1,
    cycles: 0,
    cycles_taken: 0,
};

const fn op(mnemonic: &'static str, length: u8, cycles: u8) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        length,
        cycles,
        cycles_taken: cycles,
    }
}

const fn branch(mnemonic: &'static str, length: u8, cycles: u8, cycles_taken: u8) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        length,
        cycles,
        cycles_taken,
    }
}

/// Cost of an unconditional base opcode.
#[inline]
pub(crate) fn base_cost(opcode: u8) -> u32 {
    BASE_OPCODES[opcode as usize].cycles as u32
}

/// Cost of a conditional base opcode given the evaluated condition.
#[inline]
pub(crate) fn base_branch_cost(opcode: u8, taken: bool) -> u32 {
    let info = &BASE_OPCODES[opcode as usize];
    if taken {
        info.cycles_taken as u32
    } else {
        info.cycles as u32
    }
}

/// Cost of a CB-prefixed opcode, excluding the prefix fetch.
#[inline]
pub(crate) fn cb_cost(opcode: u8) -> u32 {
    CB_OPCODES[opcode as usize].cycles as u32
}

/// Mnemonic for the instruction starting with `opcode`. `next` is the byte
/// after it and only matters for the CB prefix.
pub fn mnemonic(opcode: u8, next: u8) -> &'static str {
    if opcode == 0xCB {
        CB_OPCODES[next as usize].mnemonic
    } else {
        BASE_OPCODES[opcode as usize].mnemonic
    }
}

pub static BASE_OPCODES: [OpcodeInfo; 256] = [
    // 0x00
    op("NOP", 1, 1),
    op("LD BC,d16", 3, 3),
    op("LD (BC),A", 1, 2),
    op("INC BC", 1, 2),
    op("INC B", 1, 1),
    op("DEC B", 1, 1),
    op("LD B,d8", 2, 2),
    op("RLCA", 1, 1),
    op("LD (a16),SP", 3, 5),
    op("ADD HL,BC", 1, 2),
    op("LD A,(BC)", 1, 2),
    op("DEC BC", 1, 2),
    op("INC C", 1, 1),
    op("DEC C", 1, 1),
    op("LD C,d8", 2, 2),
    op("RRCA", 1, 1),
    // 0x10
    op("STOP", 2, 1),
    op("LD DE,d16", 3, 3),
    op("LD (DE),A", 1, 2),
    op("INC DE", 1, 2),
    op("INC D", 1, 1),
    op("DEC D", 1, 1),
    op("LD D,d8", 2, 2),
    op("RLA", 1, 1),
    op("JR r8", 2, 3),
    op("ADD HL,DE", 1, 2),
    op("LD A,(DE)", 1, 2),
    op("DEC DE", 1, 2),
    op("INC E", 1, 1),
    op("DEC E", 1, 1),
    op("LD E,d8", 2, 2),
    op("RRA", 1, 1),
    // 0x20
    branch("JR NZ,r8", 2, 2, 3),
    op("LD HL,d16", 3, 3),
    op("LD (HL+),A", 1, 2),
    op("INC HL", 1, 2),
    op("INC H", 1, 1),
    op("DEC H", 1, 1),
    op("LD H,d8", 2, 2),
    op("DAA", 1, 1),
    branch("JR Z,r8", 2, 2, 3),
    op("ADD HL,HL", 1, 2),
    op("LD A,(HL+)", 1, 2),
    op("DEC HL", 1, 2),
    op("INC L", 1, 1),
    op("DEC L", 1, 1),
    op("LD L,d8", 2, 2),
    op("CPL", 1, 1),
    // 0x30
    branch("JR NC,r8", 2, 2, 3),
    op("LD SP,d16", 3, 3),
    op("LD (HL-),A", 1, 2),
    op("INC SP", 1, 2),
    op("INC (HL)", 1, 3),
    op("DEC (HL)", 1, 3),
    op("LD (HL),d8", 2, 3),
    op("SCF", 1, 1),
    branch("JR C,r8", 2, 2, 3),
    op("ADD HL,SP", 1, 2),
    op("LD A,(HL-)", 1, 2),
    op("DEC SP", 1, 2),
    op("INC A", 1, 1),
    op("DEC A", 1, 1),
    op("LD A,d8", 2, 2),
    op("CCF", 1, 1),
    // 0x40
    op("LD B,B", 1, 1),
    op("LD B,C", 1, 1),
    op("LD B,D", 1, 1),
    op("LD B,E", 1, 1),
    op("LD B,H", 1, 1),
    op("LD B,L", 1, 1),
    op("LD B,(HL)", 1, 2),
    op("LD B,A", 1, 1),
    op("LD C,B", 1, 1),
    op("LD C,C", 1, 1),
    op("LD C,D", 1, 1),
    op("LD C,E", 1, 1),
    op("LD C,H", 1, 1),
    op("LD C,L", 1, 1),
    op("LD C,(HL)", 1, 2),
    op("LD C,A", 1, 1),
    // 0x50
    op("LD D,B", 1, 1),
    op("LD D,C", 1, 1),
    op("LD D,D", 1, 1),
    op("LD D,E", 1, 1),
    op("LD D,H", 1, 1),
    op("LD D,L", 1, 1),
    op("LD D,(HL)", 1, 2),
    op("LD D,A", 1, 1),
    op("LD E,B", 1, 1),
    op("LD E,C", 1, 1),
    op("LD E,D", 1, 1),
    op("LD E,E", 1, 1),
    op("LD E,H", 1, 1),
    op("LD E,L", 1, 1),
    op("LD E,(HL)", 1, 2),
    op("LD E,A", 1, 1),
    // 0x60
    op("LD H,B", 1, 1),
    op("LD H,C", 1, 1),
    op("LD H,D", 1, 1),
    op("LD H,E", 1, 1),
    op("LD H,H", 1, 1),
    op("LD H,L", 1, 1),
    op("LD H,(HL)", 1, 2),
    op("LD H,A", 1, 1),
    op("LD L,B", 1, 1),
    op("LD L,C", 1, 1),
    op("LD L,D", 1, 1),
    op("LD L,E", 1, 1),
    op("LD L,H", 1, 1),
    op("LD L,L", 1, 1),
    op("LD L,(HL)", 1, 2),
    op("LD L,A", 1, 1),
    // 0x70
    op("LD (HL),B", 1, 2),
    op("LD (HL),C", 1, 2),
    op("LD (HL),D", 1, 2),
    op("LD (HL),E", 1, 2),
    op("LD (HL),H", 1, 2),
    op("LD (HL),L", 1, 2),
    op("HALT", 1, 1),
    op("LD (HL),A", 1, 2),
    op("LD A,B", 1, 1),
    op("LD A,C", 1, 1),
    op("LD A,D", 1, 1),
    op("LD A,E", 1, 1),
    op("LD A,H", 1, 1),
    op("LD A,L", 1, 1),
    op("LD A,(HL)", 1, 2),
    op("LD A,A", 1, 1),
    // 0x80
    op("ADD A,B", 1, 1),
    op("ADD A,C", 1, 1),
    op("ADD A,D", 1, 1),
    op("ADD A,E", 1, 1),
    op("ADD A,H", 1, 1),
    op("ADD A,L", 1, 1),
    op("ADD A,(HL)", 1, 2),
    op("ADD A,A", 1, 1),
    op("ADC A,B", 1, 1),
    op("ADC A,C", 1, 1),
    op("ADC A,D", 1, 1),
    op("ADC A,E", 1, 1),
    op("ADC A,H", 1, 1),
    op("ADC A,L", 1, 1),
    op("ADC A,(HL)", 1, 2),
    op("ADC A,A", 1, 1),
    // 0x90
    op("SUB B", 1, 1),
    op("SUB C", 1, 1),
    op("SUB D", 1, 1),
    op("SUB E", 1, 1),
    op("SUB H", 1, 1),
    op("SUB L", 1, 1),
    op("SUB (HL)", 1, 2),
    op("SUB A", 1, 1),
    op("SBC A,B", 1, 1),
    op("SBC A,C", 1, 1),
    op("SBC A,D", 1, 1),
    op("SBC A,E", 1, 1),
    op("SBC A,H", 1, 1),
    op("SBC A,L", 1, 1),
    op("SBC A,(HL)", 1, 2),
    op("SBC A,A", 1, 1),
    // 0xA0
    op("AND B", 1, 1),
    op("AND C", 1, 1),
    op("AND D", 1, 1),
    op("AND E", 1, 1),
    op("AND H", 1, 1),
    op("AND L", 1, 1),
    op("AND (HL)", 1, 2),
    op("AND A", 1, 1),
    op("XOR B", 1, 1),
    op("XOR C", 1, 1),
    op("XOR D", 1, 1),
    op("XOR E", 1, 1),
    op("XOR H", 1, 1),
    op("XOR L", 1, 1),
    op("XOR (HL)", 1, 2),
    op("XOR A", 1, 1),
    // 0xB0
    op("OR B", 1, 1),
    op("OR C", 1, 1),
    op("OR D", 1, 1),
    op("OR E", 1, 1),
    op("OR H", 1, 1),
    op("OR L", 1, 1),
    op("OR (HL)", 1, 2),
    op("OR A", 1, 1),
    op("CP B", 1, 1),
    op("CP C", 1, 1),
    op("CP D", 1, 1),
    op("CP E", 1, 1),
    op("CP H", 1, 1),
    op("CP L", 1, 1),
    op("CP (HL)", 1, 2),
    op("CP A", 1, 1),
    // 0xC0
    branch("RET NZ", 1, 2, 5),
    op("POP BC", 1, 3),
    branch("JP NZ,a16", 3, 3, 4),
    op("JP a16", 3, 4),
    branch("CALL NZ,a16", 3, 3, 6),
    op("PUSH BC", 1, 4),
    op("ADD A,d8", 2, 2),
    op("RST 00H", 1, 4),
    branch("RET Z", 1, 2, 5),
    op("RET", 1, 4),
    branch("JP Z,a16", 3, 3, 4),
    op("PREFIX CB", 2, 1),
    branch("CALL Z,a16", 3, 3, 6),
    op("CALL a16", 3, 6),
    op("ADC A,d8", 2, 2),
    op("RST 08H", 1, 4),
    // 0xD0
    branch("RET NC", 1, 2, 5),
    op("POP DE", 1, 3),
    branch("JP NC,a16", 3, 3, 4),
    ILLEGAL,
    branch("CALL NC,a16", 3, 3, 6),
    op("PUSH DE", 1, 4),
    op("SUB d8", 2, 2),
    op("RST 10H", 1, 4),
    branch("RET C", 1, 2, 5),
    op("RETI", 1, 4),
    branch("JP C,a16", 3, 3, 4),
    ILLEGAL,
    branch("CALL C,a16", 3, 3, 6),
    ILLEGAL,
    op("SBC A,d8", 2, 2),
    op("RST 18H", 1, 4),
    // 0xE0
    op("LDH (a8),A", 2, 3),
    op("POP HL", 1, 3),
    op("LD (C),A", 1, 2),
    ILLEGAL,
    ILLEGAL,
    op("PUSH HL", 1, 4),
    op("AND d8", 2, 2),
    op("RST 20H", 1, 4),
    op("ADD SP,r8", 2, 4),
    op("JP HL", 1, 1),
    op("LD (a16),A", 3, 4),
    ILLEGAL,
    ILLEGAL,
    ILLEGAL,
    op("XOR d8", 2, 2),
    op("RST 28H", 1, 4),
    // 0xF0
    op("LDH A,(a8)", 2, 3),
    op("POP AF", 1, 3),
    op("LD A,(C)", 1, 2),
    op("DI", 1, 1),
    ILLEGAL,
    op("PUSH AF", 1, 4),
    op("OR d8", 2, 2),
    op("RST 30H", 1, 4),
    op("LD HL,SP+r8", 2, 3),
    op("LD SP,HL", 1, 2),
    op("LD A,(a16)", 3, 4),
    op("EI", 1, 1),
    ILLEGAL,
    ILLEGAL,
    op("CP d8", 2, 2),
    op("RST 38H", 1, 4),
];

pub static CB_OPCODES: [OpcodeInfo; 256] = build_cb_table();

/// Register forms cost two cycles after the prefix and every `(HL)` form,
/// `BIT b,(HL)` included, costs four.
const fn build_cb_table() -> [OpcodeInfo; 256] {
    let mut table = [ILLEGAL; 256];
    let mut i = 0;
    while i < 256 {
        let cycles = if i & 0x07 == 6 { 4 } else { 2 };
        table[i] = op(CB_MNEMONICS[i], 2, cycles);
        i += 1;
    }
    table
}

const CB_MNEMONICS: [&str; 256] = [
    "RLC B", "RLC C", "RLC D", "RLC E", "RLC H", "RLC L", "RLC (HL)", "RLC A",
    "RRC B", "RRC C", "RRC D", "RRC E", "RRC H", "RRC L", "RRC (HL)", "RRC A",
    "RL B", "RL C", "RL D", "RL E", "RL H", "RL L", "RL (HL)", "RL A",
    "RR B", "RR C", "RR D", "RR E", "RR H", "RR L", "RR (HL)", "RR A",
    "SLA B", "SLA C", "SLA D", "SLA E", "SLA H", "SLA L", "SLA (HL)", "SLA A",
    "SRA B", "SRA C", "SRA D", "SRA E", "SRA H", "SRA L", "SRA (HL)", "SRA A",
    "SWAP B", "SWAP C", "SWAP D", "SWAP E", "SWAP H", "SWAP L", "SWAP (HL)", "SWAP A",
    "SRL B", "SRL C", "SRL D", "SRL E", "SRL H", "SRL L", "SRL (HL)", "SRL A",
    "BIT 0,B", "BIT 0,C", "BIT 0,D", "BIT 0,E", "BIT 0,H", "BIT 0,L", "BIT 0,(HL)", "BIT 0,A",
    "BIT 1,B", "BIT 1,C", "BIT 1,D", "BIT 1,E", "BIT 1,H", "BIT 1,L", "BIT 1,(HL)", "BIT 1,A",
    "BIT 2,B", "BIT 2,C", "BIT 2,D", "BIT 2,E", "BIT 2,H", "BIT 2,L", "BIT 2,(HL)", "BIT 2,A",
    "BIT 3,B", "BIT 3,C", "BIT 3,D", "BIT 3,E", "BIT 3,H", "BIT 3,L", "BIT 3,(HL)", "BIT 3,A",
    "BIT 4,B", "BIT 4,C", "BIT 4,D", "BIT 4,E", "BIT 4,H", "BIT 4,L", "BIT 4,(HL)", "BIT 4,A",
    "BIT 5,B", "BIT 5,C", "BIT 5,D", "BIT 5,E", "BIT 5,H", "BIT 5,L", "BIT 5,(HL)", "BIT 5,A",
    "BIT 6,B", "BIT 6,C", "BIT 6,D", "BIT 6,E", "BIT 6,H", "BIT 6,L", "BIT 6,(HL)", "BIT 6,A",
    "BIT 7,B", "BIT 7,C", "BIT 7,D", "BIT 7,E", "BIT 7,H", "BIT 7,L", "BIT 7,(HL)", "BIT 7,A",
    "RES 0,B", "RES 0,C", "RES 0,D", "RES 0,E", "RES 0,H", "RES 0,L", "RES 0,(HL)", "RES 0,A",
    "RES 1,B", "RES 1,C", "RES 1,D", "RES 1,E", "RES 1,H", "RES 1,L", "RES 1,(HL)", "RES 1,A",
    "RES 2,B", "RES 2,C", "RES 2,D", "RES 2,E", "RES 2,H", "RES 2,L", "RES 2,(HL)", "RES 2,A",
    "RES 3,B", "RES 3,C", "RES 3,D", "RES 3,E", "RES 3,H", "RES 3,L", "RES 3,(HL)", "RES 3,A",
    "RES 4,B", "RES 4,C", "RES 4,D", "RES 4,E", "RES 4,H", "RES 4,L", "RES 4,(HL)", "RES 4,A",
    "RES 5,B", "RES 5,C", "RES 5,D", "RES 5,E", "RES 5,H", "RES 5,L", "RES 5,(HL)", "RES 5,A",
    "RES 6,B", "RES 6,C", "RES 6,D", "RES 6,E", "RES 6,H", "RES 6,L", "RES 6,(HL)", "RES 6,A",
    "RES 7,B", "RES 7,C", "RES 7,D", "RES 7,E", "RES 7,H", "RES 7,L", "RES 7,(HL)", "RES 7,A",
    "SET 0,B", "SET 0,C", "SET 0,D", "SET 0,E", "SET 0,H", "SET 0,L", "SET 0,(HL)", "SET 0,A",
    "SET 1,B", "SET 1,C", "SET 1,D", "SET 1,E", "SET 1,H", "SET 1,L", "SET 1,(HL)", "SET 1,A",
    "SET 2,B", "SET 2,C", "SET 2,D", "SET 2,E", "SET 2,H", "SET 2,L", "SET 2,(HL)", "SET 2,A",
    "SET 3,B", "SET 3,C", "SET 3,D", "SET 3,E", "SET 3,H", "SET 3,L", "SET 3,(HL)", "SET 3,A",
    "SET 4,B", "SET 4,C", "SET 4,D", "SET 4,E", "SET 4,H", "SET 4,L", "SET 4,(HL)", "SET 4,A",
    "SET 5,B", "SET 5,C", "SET 5,D", "SET 5,E", "SET 5,H", "SET 5,L", "SET 5,(HL)", "SET 5,A",
    "SET 6,B", "SET 6,C", "SET 6,D", "SET 6,E", "SET 6,H", "SET 6,L", "SET 6,(HL)", "SET 6,A",
    "SET 7,B", "SET 7,C", "SET 7,D", "SET 7,E", "SET 7,H", "SET 7,L", "SET 7,(HL)", "SET 7,A",
];
