mod bus;
mod gameboy;
mod serial;
mod timer;

use thiserror::Error;

use crate::cartridge::CartridgeError;
use crate::cpu::CpuFault;

pub use bus::GameBoyBus;
pub use gameboy::{GameBoy, RunSummary, StopReason};

/// Total addressable memory for the Game Boy (64 KiB).
///
/// Cartridge ROM and external RAM are routed to the cartridge; the flat
/// array backs VRAM, WRAM, OAM, unmodelled I/O and HRAM.
const MEMORY_SIZE: usize = 0x10000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmulatorError {
    #[error("no cartridge loaded")]
    NoCartridge,
    #[error(transparent)]
    Cartridge(#[from] CartridgeError),
    #[error(transparent)]
    Cpu(#[from] CpuFault),
}
