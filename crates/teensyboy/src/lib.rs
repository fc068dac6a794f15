use anyhow::{anyhow, bail, Context, Result};
use teensyboy_gb::{CpuSnapshot, EmulatorConfig, GameBoy, RunSummary};

pub const USAGE: &str = "usage: teensyboy <rom> [--steps N] [--break-pc HEX] \
                         [--cycle-limit N] [--trace-pc HEX] [--trace-cycle N]";

/// Command line options for the headless runner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub rom_path: String,
    pub steps: Option<u64>,
    pub config: EmulatorConfig,
}

impl Options {
    /// Parse the arguments following the program name.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut rom_path = None;
        let mut steps = None;
        let mut config = EmulatorConfig::default();

        while let Some(arg) = args.next() {
            if !arg.starts_with("--") {
                if rom_path.is_some() {
                    bail!("unexpected argument '{arg}'");
                }
                rom_path = Some(arg);
                continue;
            }

            let value = args
                .next()
                .ok_or_else(|| anyhow!("missing value for '{arg}'"))?;
            match arg.as_str() {
                "--steps" => steps = Some(parse_dec(&value)?),
                "--break-pc" => config.break_at_pc = Some(parse_hex(&value)?),
                "--cycle-limit" => config.cycle_limit = Some(parse_dec(&value)?),
                "--trace-pc" => config.trace_from_pc = Some(parse_hex(&value)?),
                "--trace-cycle" => config.trace_from_cycle = Some(parse_dec(&value)?),
                other => bail!("unknown option '{other}'"),
            }
        }

        let rom_path = rom_path.ok_or_else(|| anyhow!("no ROM path given"))?;
        Ok(Self {
            rom_path,
            steps,
            config,
        })
    }
}

fn parse_dec(text: &str) -> Result<u64> {
    text.parse()
        .with_context(|| format!("'{text}' is not a decimal number"))
}

fn parse_hex(text: &str) -> Result<u16> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    u16::from_str_radix(digits, 16).with_context(|| format!("'{text}' is not a 16-bit hex address"))
}

/// What a finished run leaves behind for the host to report.
pub struct Outcome {
    pub summary: RunSummary,
    pub serial: Vec<u8>,
    pub snapshot: CpuSnapshot,
}

/// Load `rom`, run it with `options` and collect the results.
pub fn run(options: &Options, rom: &[u8]) -> Result<Outcome> {
    let mut gb = GameBoy::new(options.config.clone());
    gb.load_rom(rom).context("failed to load cartridge")?;
    gb.start()?;

    let summary = gb.run(options.steps).context("emulation stopped on a fault")?;
    log::info!(
        "run finished after {} steps / {} cycles: {:?}",
        summary.steps,
        summary.cycles,
        summary.reason
    );

    Ok(Outcome {
        summary,
        serial: gb.serial_output().to_vec(),
        snapshot: gb.dump_state(),
    })
}
