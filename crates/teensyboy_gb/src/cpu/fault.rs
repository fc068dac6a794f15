use std::fmt;

use thiserror::Error;

/// Point-in-time copy of the register file and engine flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CpuSnapshot {
    pub af: u16,
    pub bc: u16,
    pub de: u16,
    pub hl: u16,
    pub sp: u16,
    pub pc: u16,
    pub ime: bool,
    pub halted: bool,
    pub total_cycles: u64,
}

impl fmt::Display for CpuSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AF=0x{:04X} BC=0x{:04X} DE=0x{:04X} HL=0x{:04X} SP=0x{:04X} PC=0x{:04X} IME={} HALT={} cycles={}",
            self.af,
            self.bc,
            self.de,
            self.hl,
            self.sp,
            self.pc,
            u8::from(self.ime),
            u8::from(self.halted),
            self.total_cycles,
        )
    }
}

/// Unrecoverable CPU fault. The CPU enters `CpuState::Stopped` when one is
/// raised.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum CpuFault {
    /// `pc` is the address of the opcode byte itself (the 0xCB prefix for
    /// extended opcodes).
    #[error("invalid opcode 0x{opcode:02X} (CB-prefixed: {prefixed}) at PC=0x{pc:04X} ({snapshot})")]
    InvalidOpcode {
        opcode: u8,
        prefixed: bool,
        pc: u16,
        snapshot: CpuSnapshot,
    },
}

impl CpuFault {
    pub fn snapshot(&self) -> &CpuSnapshot {
        match self {
            CpuFault::InvalidOpcode { snapshot, .. } => snapshot,
        }
    }
}
