use super::super::{Bus, Cpu, IE_ADDR, IF_ADDR};
use super::InterruptFlags;

/// Machine cycles charged for an interrupt dispatch.
pub(in crate::cpu) const DISPATCH_CYCLES: u32 = 5;

impl Cpu {
    /// Evaluate pending interrupts at the top of a step.
    ///
    /// Any pending source wakes a halted CPU. A source is only serviced when
    /// IME is set and the CPU was not halted at entry; the woken CPU runs
    /// the next instruction first. Returns `Some(cycles)` if a dispatch
    /// consumed this step.
    pub(in crate::cpu) fn handle_interrupts<B: Bus>(&mut self, bus: &mut B) -> Option<u32> {
        if !self.ime && !self.halted {
            return None;
        }

        let iflags = bus.read8(IF_ADDR);
        let ie = bus.read8(IE_ADDR);
        let source = InterruptFlags::pending(iflags, ie).highest_priority()?;

        let was_halted = self.halted;
        self.halted = false;
        if !self.ime || was_halted {
            return None;
        }

        let pc = self.regs.pc;
        let vector = source.vector();
        log::debug!(
            "GB CPU interrupt: {source:?} vector=0x{vector:04X} pc=0x{pc:04X} sp=0x{sp:04X} IF=0x{iflags:02X} IE=0x{ie:02X}",
            sp = self.regs.sp,
            iflags = iflags & 0x1F,
        );

        self.ime = false;
        bus.write8(IF_ADDR, iflags & !source.bits());
        self.push_u16(bus, pc);
        self.regs.pc = vector;

        Some(DISPATCH_CYCLES)
    }
}
