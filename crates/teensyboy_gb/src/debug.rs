//! Hooks for observing the machine from the outside.

use crate::cpu::{CpuFault, CpuSnapshot};

/// Receives register snapshots on fatal faults and on demand.
pub trait DebugSink {
    /// Called once when the CPU stops on a fault.
    fn on_fault(&mut self, fault: &CpuFault);

    /// Called by `GameBoy::dump_state`.
    fn on_snapshot(&mut self, snapshot: &CpuSnapshot);
}

/// Default sink: writes through the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DebugSink for LogSink {
    fn on_fault(&mut self, fault: &CpuFault) {
        log::error!("CPU fault: {fault}");
    }

    fn on_snapshot(&mut self, snapshot: &CpuSnapshot) {
        log::info!("CPU state: {snapshot}");
    }
}
