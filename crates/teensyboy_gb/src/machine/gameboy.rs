use crate::cartridge::{self, Cartridge};
use crate::config::EmulatorConfig;
use crate::cpu::opcodes;
use crate::cpu::{Bus, Cpu, CpuSnapshot, CpuState};
use crate::debug::{DebugSink, LogSink};

use super::{EmulatorError, GameBoyBus};

/// Why `GameBoy::run` returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The step budget was used up.
    StepLimit,
    /// PC reached the configured breakpoint. The instruction there has not
    /// executed yet.
    Breakpoint(u16),
    /// Total cycles went past the configured limit.
    CycleLimit,
    /// The CPU is not running (never started, or stopped by the host).
    Paused,
}

/// Outcome of one `GameBoy::run` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Steps executed by this call.
    pub steps: u64,
    /// Machine cycles charged by this call.
    pub cycles: u64,
    pub reason: StopReason,
}

/// High-level Game Boy machine.
///
/// Holds the CPU core, the bus and the debug hooks. This is the entry point
/// used by hosts.
pub struct GameBoy {
    pub cpu: Cpu,
    pub(crate) bus: GameBoyBus,
    config: EmulatorConfig,
    sink: Box<dyn DebugSink>,
    /// Set once a trace trigger fires; stays on until reset.
    tracing: bool,
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new(EmulatorConfig::default())
    }
}

impl GameBoy {
    pub fn new(config: EmulatorConfig) -> Self {
        Self {
            cpu: Cpu::new(),
            bus: GameBoyBus::default(),
            config,
            sink: Box::new(LogSink),
            tracing: false,
        }
    }

    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// Replace the sink that receives faults and state dumps.
    pub fn set_debug_sink(&mut self, sink: Box<dyn DebugSink>) {
        self.sink = sink;
    }

    /// Return CPU, RAM and I/O to the power-on state. The cartridge stays
    /// inserted, including its RAM contents.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.bus.reset();
        self.tracing = false;
    }

    /// Parse `rom`, insert it and reset the machine. The CPU is left paused.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), EmulatorError> {
        let cartridge = cartridge::load(rom)?;
        self.bus.insert_cartridge(cartridge);
        self.reset();
        Ok(())
    }

    /// Let the CPU run. Fails without a cartridge, and after a fault until
    /// `reset`.
    pub fn start(&mut self) -> Result<(), EmulatorError> {
        if self.bus.cartridge().is_none() {
            return Err(EmulatorError::NoCartridge);
        }
        if let Some(fault) = self.cpu.fault() {
            return Err(fault.clone().into());
        }
        self.cpu.start();
        log::info!("started at PC=0x{:04X}", self.cpu.regs.pc);
        Ok(())
    }

    /// Cooperative stop; takes effect before the next step.
    pub fn stop(&mut self) {
        if self.cpu.is_running() {
            log::info!("stopped at PC=0x{:04X}", self.cpu.regs.pc);
        }
        self.cpu.stop();
    }

    pub fn state(&self) -> CpuState {
        self.cpu.state()
    }

    /// Whether per-instruction trace logging has been switched on.
    pub fn is_tracing(&self) -> bool {
        self.tracing
    }

    /// Execute one CPU step. A fault is passed to the debug sink before it
    /// is returned.
    pub fn step(&mut self) -> Result<u32, EmulatorError> {
        if self.cpu.is_running() {
            self.trace_instruction();
        }

        match self.cpu.step(&mut self.bus) {
            Ok(cycles) => Ok(cycles),
            Err(fault) => {
                self.sink.on_fault(&fault);
                Err(fault.into())
            }
        }
    }

    /// Step until the budget runs out, a configured stop condition hits, or
    /// the CPU stops running. `None` uses `EmulatorConfig::steps_per_run`.
    ///
    /// The breakpoint is not reported for the instruction the run starts
    /// on, so calling `run` again after a breakpoint resumes past it.
    pub fn run(&mut self, max_steps: Option<u64>) -> Result<RunSummary, EmulatorError> {
        let budget = max_steps.unwrap_or(self.config.steps_per_run);
        let start_cycles = self.cpu.total_cycles();
        let mut steps = 0u64;

        let reason = loop {
            if !self.cpu.is_running() {
                break StopReason::Paused;
            }
            if let Some(limit) = self.config.cycle_limit {
                if self.cpu.total_cycles() > limit {
                    log::info!(
                        "cycle limit {limit} reached at PC=0x{:04X}",
                        self.cpu.regs.pc
                    );
                    break StopReason::CycleLimit;
                }
            }
            if let Some(pc) = self.config.break_at_pc {
                if steps > 0 && self.cpu.regs.pc == pc {
                    log::info!("breakpoint at PC=0x{pc:04X}");
                    break StopReason::Breakpoint(pc);
                }
            }
            if steps >= budget {
                break StopReason::StepLimit;
            }

            self.step()?;
            steps += 1;
        };

        Ok(RunSummary {
            steps,
            cycles: self.cpu.total_cycles() - start_cycles,
            reason,
        })
    }

    /// Send a register snapshot to the debug sink and return it.
    pub fn dump_state(&mut self) -> CpuSnapshot {
        let snapshot = self.cpu.snapshot();
        self.sink.on_snapshot(&snapshot);
        snapshot
    }

    /// Bytes the program sent over the serial port.
    pub fn serial_output(&self) -> &[u8] {
        self.bus.serial_output()
    }

    /// Drain the captured serial bytes. Hosts that poll this keep the
    /// buffer bounded for long-running programs.
    pub fn take_serial_output(&mut self) -> Vec<u8> {
        self.bus.take_serial_output()
    }

    pub fn bus(&self) -> &GameBoyBus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut GameBoyBus {
        &mut self.bus
    }

    pub fn cartridge(&self) -> Option<&dyn Cartridge> {
        self.bus.cartridge()
    }

    pub fn cartridge_mut(&mut self) -> Option<&mut (dyn Cartridge + 'static)> {
        self.bus.cartridge_mut()
    }

    fn trace_instruction(&mut self) {
        if !self.tracing {
            let by_cycle = self
                .config
                .trace_from_cycle
                .is_some_and(|cycle| self.cpu.total_cycles() >= cycle);
            let by_pc = self.config.trace_from_pc == Some(self.cpu.regs.pc);
            if !(by_cycle || by_pc) {
                return;
            }
            log::info!(
                "instruction trace enabled at PC=0x{:04X}, cycle {}",
                self.cpu.regs.pc,
                self.cpu.total_cycles()
            );
            self.tracing = true;
        }

        if log::log_enabled!(log::Level::Trace) {
            let pc = self.cpu.regs.pc;
            let opcode = self.bus.read8(pc);
            let next = self.bus.read8(pc.wrapping_add(1));
            log::trace!(
                "{:04X}: {:02X} {:<12} {}",
                pc,
                opcode,
                opcodes::mnemonic(opcode, next),
                self.cpu.snapshot()
            );
        }
    }
}
