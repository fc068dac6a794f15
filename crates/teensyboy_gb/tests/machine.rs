use once_cell::sync::Lazy;
use teensyboy_gb::cpu::Bus;
use teensyboy_gb::{
    CartridgeError, CartridgeHeader, CpuState, EmulatorConfig, EmulatorError, GameBoy, StopReason,
};

const BANK_SIZE: usize = 0x4000;

/// Four-bank MBC1+RAM+BATTERY image. Byte 0 of every bank holds the bank
/// number; the entry point jumps to `program` at 0x0150.
fn build_rom(program: &[u8]) -> Vec<u8> {
    let mut rom = vec![0u8; 4 * BANK_SIZE];
    for bank in 0..4 {
        rom[bank * BANK_SIZE] = bank as u8;
    }
    rom[0x0100..0x0104].copy_from_slice(&[0x00, 0xC3, 0x50, 0x01]);
    rom[0x0134..0x013B].copy_from_slice(b"BANKING");
    rom[0x0147] = 0x03;
    rom[0x0148] = 0x01;
    rom[0x0149] = 0x02;
    rom[0x014D] = CartridgeHeader::compute_checksum(&rom).unwrap();
    rom[0x0150..0x0150 + program.len()].copy_from_slice(program);
    rom
}

#[rustfmt::skip]
static BANKING_ROM: Lazy<Vec<u8>> = Lazy::new(|| {
    build_rom(&[
        0x3E, 0x0A, 0xEA, 0x00, 0x00, // enable external RAM
        0x3E, 0x02, 0xEA, 0x00, 0x20, // select ROM bank 2
        0xFA, 0x00, 0x40,             // LD A,(0x4000)
        0xE0, 0x80,                   // LDH (0x80),A
        0x3E, 0x5A, 0xEA, 0x00, 0xA0, // LD (0xA000),0x5A
        0xF3, 0x76,                   // DI ; HALT
    ])
});

#[rustfmt::skip]
static HELLO_ROM: Lazy<Vec<u8>> = Lazy::new(|| {
    let mut program = Vec::new();
    for byte in b"Hello" {
        program.extend_from_slice(&[0x3E, *byte, 0xE0, 0x01, 0x3E, 0x81, 0xE0, 0x02]);
    }
    // Spin on the last instruction so the breakpoint test has a target.
    program.extend_from_slice(&[0x18, 0xFE]);
    build_rom(&program)
});

fn boot(config: EmulatorConfig, rom: &[u8]) -> GameBoy {
    let mut gb = GameBoy::new(config);
    gb.load_rom(rom).expect("fixture ROM must load");
    gb.start().expect("fixture ROM is inserted");
    gb
}

#[test]
fn banked_reads_and_battery_ram() {
    let mut gb = boot(EmulatorConfig::default(), &BANKING_ROM);

    let summary = gb.run(Some(100)).unwrap();
    assert_eq!(summary.reason, StopReason::StepLimit);
    assert_eq!(gb.state(), CpuState::Halted);
    assert_eq!(gb.bus_mut().read8(0xFF80), 2);

    let cart = gb.cartridge().expect("cartridge inserted");
    assert!(cart.has_battery());
    assert_eq!(cart.header().title, "BANKING");
    assert_eq!(cart.ram().len(), 0x2000);
    assert_eq!(cart.ram()[0], 0x5A);
}

#[test]
fn save_ram_must_match_the_cartridge() {
    let mut gb = boot(EmulatorConfig::default(), &BANKING_ROM);
    let cart = gb.cartridge_mut().expect("cartridge inserted");

    assert_eq!(
        cart.load_ram(&[0u8; 16]),
        Err(CartridgeError::RamSizeMismatch {
            expected: 0x2000,
            actual: 16,
        })
    );

    let mut save = vec![0u8; 0x2000];
    save[0x10] = 0x77;
    cart.load_ram(&save).unwrap();

    // External RAM stays unreadable until the program enables it.
    assert_eq!(gb.bus_mut().read8(0xA010), 0xFF);
    gb.bus_mut().write8(0x0000, 0x0A);
    assert_eq!(gb.bus_mut().read8(0xA010), 0x77);
}

#[test]
fn serial_output_and_breakpoint() {
    let spin_pc = 0x0150 + 5 * 8;
    let config = EmulatorConfig::builder()
        .break_at_pc(Some(spin_pc))
        .build();
    let mut gb = boot(config, &HELLO_ROM);

    let summary = gb.run(None).unwrap();
    assert_eq!(summary.reason, StopReason::Breakpoint(spin_pc));
    assert_eq!(gb.serial_output(), b"Hello");
    assert_eq!(gb.dump_state().pc, spin_pc);
}

#[test]
fn unsupported_cartridges_are_rejected() {
    let mut rom = HELLO_ROM.clone();
    rom[0x0147] = 0x13;
    rom[0x014D] = CartridgeHeader::compute_checksum(&rom).unwrap();

    let mut gb = GameBoy::default();
    assert_eq!(
        gb.load_rom(&rom),
        Err(EmulatorError::Cartridge(
            CartridgeError::UnsupportedController(0x13)
        ))
    );
    assert_eq!(gb.start(), Err(EmulatorError::NoCartridge));
}

#[test]
fn invalid_opcode_stops_the_machine() {
    let mut gb = boot(EmulatorConfig::default(), &build_rom(&[0xFC]));

    let err = gb.run(None).unwrap_err();
    assert!(err.to_string().contains("invalid opcode 0xFC"));
    assert_eq!(gb.state(), CpuState::Stopped);
    assert_eq!(gb.run(None).unwrap().reason, StopReason::Paused);

    gb.reset();
    assert_eq!(gb.state(), CpuState::Paused);
    gb.start().unwrap();
}
