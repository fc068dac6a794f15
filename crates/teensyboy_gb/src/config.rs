use typed_builder::TypedBuilder;

/// Default step budget for `GameBoy::run` when the caller passes `None`.
pub const DEFAULT_STEPS_PER_RUN: u64 = 10_000_000;

/// Debug and run-loop settings for a `GameBoy`.
///
/// ```
/// use teensyboy_gb::EmulatorConfig;
///
/// let config = EmulatorConfig::builder()
///     .break_at_pc(Some(0x0150))
///     .cycle_limit(Some(1_000_000))
///     .build();
/// assert_eq!(config.trace_from_pc, None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct EmulatorConfig {
    /// Stop the run loop before executing the instruction at this address.
    #[builder(default)]
    pub break_at_pc: Option<u16>,
    /// Stop the run loop once the total machine-cycle count exceeds this.
    #[builder(default)]
    pub cycle_limit: Option<u64>,
    /// Start per-instruction trace logging once this many cycles have run.
    #[builder(default)]
    pub trace_from_cycle: Option<u64>,
    /// Start per-instruction trace logging the first time PC reaches this
    /// address.
    #[builder(default)]
    pub trace_from_pc: Option<u16>,
    #[builder(default = DEFAULT_STEPS_PER_RUN)]
    pub steps_per_run: u64,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_disable_every_debug_hook() {
        let config = EmulatorConfig::default();
        assert_eq!(config.break_at_pc, None);
        assert_eq!(config.cycle_limit, None);
        assert_eq!(config.trace_from_cycle, None);
        assert_eq!(config.trace_from_pc, None);
        assert_eq!(config.steps_per_run, DEFAULT_STEPS_PER_RUN);
    }

    #[test]
    fn builder_overrides_fields() {
        let config = EmulatorConfig::builder()
            .trace_from_cycle(Some(42))
            .steps_per_run(5)
            .build();
        assert_eq!(config.trace_from_cycle, Some(42));
        assert_eq!(config.steps_per_run, 5);
    }
}
