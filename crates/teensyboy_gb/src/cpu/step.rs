use super::{Bus, Cpu, CpuFault};

/// Cost of one idle step while halted.
const HALT_IDLE_CYCLES: u32 = 1;

impl Cpu {
    /// Execute one step: an instruction, an interrupt dispatch, or one
    /// halted idle cycle. Returns the machine cycles charged.
    ///
    /// The timer first catches up by the cost of the previous step, so the
    /// first step after `start` advances it by zero. A paused or stopped CPU
    /// returns `Ok(0)` without touching the bus. Executing an opcode hole
    /// returns the fault once; the CPU stays in `CpuState::Stopped` until
    /// `reset`.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32, CpuFault> {
        if !self.running {
            return Ok(0);
        }

        for _ in 0..self.last_cycles {
            bus.timer_tick_mcycle();
        }

        if let Some(cycles) = self.handle_interrupts(bus) {
            return Ok(self.finish_step(cycles));
        }

        if self.halted {
            return Ok(self.finish_step(HALT_IDLE_CYCLES));
        }

        let opcode = self.fetch8(bus);
        let cycles = match self.exec_opcode(bus, opcode) {
            Ok(cycles) => cycles,
            Err(fault) => {
                self.last_cycles = 0;
                return Err(fault);
            }
        };

        let cycles = self.finish_step(cycles);
        self.tick_ime_countdowns();
        Ok(cycles)
    }

    #[inline]
    fn finish_step(&mut self, cycles: u32) -> u32 {
        self.last_cycles = cycles;
        self.total_cycles += u64::from(cycles);
        cycles
    }
}
