pub mod cartridge;
pub mod config;
pub mod cpu;
pub mod debug;
pub mod machine;

pub use cartridge::{Cartridge, CartridgeError, CartridgeHeader};
pub use config::EmulatorConfig;
pub use cpu::{Cpu, CpuFault, CpuSnapshot, CpuState};
pub use debug::{DebugSink, LogSink};
pub use machine::{EmulatorError, GameBoy, RunSummary, StopReason};

/// Number of underlying clock ticks in one machine cycle.
pub const CLOCKS_PER_MCYCLE: u32 = 4;
