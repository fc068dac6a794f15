use anyhow::{Context, Result};
use teensyboy::{Options, USAGE};

fn main() -> Result<()> {
    env_logger::init();

    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            std::process::exit(2);
        }
    };

    log::info!("Playing ROM path: '{}'", options.rom_path);
    let rom = std::fs::read(&options.rom_path)
        .with_context(|| format!("failed to read ROM file '{}'", options.rom_path))?;

    let outcome = teensyboy::run(&options, &rom)?;

    if !outcome.serial.is_empty() {
        println!("{}", String::from_utf8_lossy(&outcome.serial));
    }
    println!("stopped: {:?}", outcome.summary.reason);
    println!("{}", outcome.snapshot);
    Ok(())
}
