mod alu;
mod bus;
mod cb;
mod exec;
mod fault;
pub mod flags;
mod helpers;
mod init;
mod interrupts;
pub mod opcodes;
mod regs;
mod step;

pub use bus::Bus;
pub use fault::{CpuFault, CpuSnapshot};
pub use interrupts::InterruptFlags;
pub use regs::{Flag, Registers};

/// Address of the interrupt request register (IF).
pub const IF_ADDR: u16 = 0xFF0F;
/// Address of the interrupt enable register (IE).
pub const IE_ADDR: u16 = 0xFFFF;

/// Coarse execution state of the CPU as observed by the host loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CpuState {
    /// The host has not started the engine (or has stopped it).
    Paused,
    /// Fetching and executing instructions.
    Running,
    /// Waiting in HALT for an interrupt request.
    Halted,
    /// An unrecoverable fault occurred; only `reset` leaves this state.
    Stopped,
}

/// Game Boy CPU core (LR35902 / SM83).
///
/// All mutable engine state lives here so that several machines can run
/// side by side. Cycle costs are counted in machine cycles.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    pub ime: bool,
    pub halted: bool,
    /// Cooperative run flag checked at the top of every `step`.
    running: bool,
    /// Countdown armed by EI (and RETI). IME is set when it reaches zero.
    ime_enable_countdown: u8,
    /// Countdown armed by DI. IME is cleared when it reaches zero.
    ime_disable_countdown: u8,
    /// Cost of the previous step; the timer catches up by this much at the
    /// start of the next one.
    last_cycles: u32,
    total_cycles: u64,
    fault: Option<CpuFault>,
}

impl Cpu {
    /// Current execution state.
    pub fn state(&self) -> CpuState {
        if self.fault.is_some() {
            CpuState::Stopped
        } else if !self.running {
            CpuState::Paused
        } else if self.halted {
            CpuState::Halted
        } else {
            CpuState::Running
        }
    }

    /// Allow `step` to make progress. Has no effect once a fault occurred.
    pub fn start(&mut self) {
        if self.fault.is_none() {
            self.running = true;
        }
    }

    /// Cooperative stop; the next `step` returns without doing anything.
    pub fn stop(&mut self) {
        self.running = false;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Total machine cycles consumed since construction or reset.
    #[inline]
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    /// Machine cycles charged by the most recent step.
    #[inline]
    pub fn last_cycles(&self) -> u32 {
        self.last_cycles
    }

    /// The fault that stopped the CPU, if any.
    pub fn fault(&self) -> Option<&CpuFault> {
        self.fault.as_ref()
    }

    /// Capture the register file and engine flags.
    pub fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot {
            af: self.regs.af(),
            bc: self.regs.bc(),
            de: self.regs.de(),
            hl: self.regs.hl(),
            sp: self.regs.sp,
            pc: self.regs.pc,
            ime: self.ime,
            halted: self.halted,
            total_cycles: self.total_cycles,
        }
    }

    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.regs.flag(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.regs.set_flag(flag, value);
    }
}
