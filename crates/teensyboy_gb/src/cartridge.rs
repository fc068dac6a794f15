//! Cartridge controllers.
//!
//! A cartridge answers reads and writes in the ROM window (0x0000-0x7FFF)
//! and the external RAM window (0xA000-0xBFFF). Writes into the ROM window
//! program the controller's bank registers.

mod header;
mod mbc1;

use thiserror::Error;

pub use header::{CartridgeHeader, RamLayout};
pub use mbc1::{BankMode, Mbc1};

/// Size of one switchable ROM bank.
pub const ROM_BANK_SIZE: usize = 0x4000;
/// Size of one full external RAM bank.
pub const RAM_BANK_SIZE: usize = 0x2000;

/// Why a ROM image could not be turned into a cartridge.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartridgeError {
    #[error("ROM image is {len} bytes, too small to hold a cartridge header")]
    TooSmall { len: usize },
    #[error("invalid ROM size code 0x{0:02X}")]
    InvalidRomSize(u8),
    #[error("invalid RAM size code 0x{0:02X}")]
    InvalidRamSize(u8),
    #[error("ROM image is {actual} bytes but the header declares {expected}")]
    Truncated { expected: usize, actual: usize },
    #[error("unsupported cartridge type 0x{0:02X}")]
    UnsupportedController(u8),
    #[error("save RAM is {actual} bytes but the cartridge has {expected}")]
    RamSizeMismatch { expected: usize, actual: usize },
}

/// Memory bank controller interface shared by every cartridge type.
pub trait Cartridge {
    /// Read from the ROM or external RAM window.
    fn read(&self, addr: u16) -> u8;

    /// Write to a bank register (ROM window) or external RAM.
    fn write(&mut self, addr: u16, value: u8);

    fn header(&self) -> &CartridgeHeader;

    /// Raw external RAM, all banks concatenated.
    fn ram(&self) -> &[u8];

    /// Replace the external RAM contents, e.g. from a save file.
    fn load_ram(&mut self, data: &[u8]) -> Result<(), CartridgeError>;

    /// Whether the external RAM is battery backed and worth persisting.
    fn has_battery(&self) -> bool;
}

/// Parse the header of `rom` and build the matching controller.
pub fn load(rom: &[u8]) -> Result<Box<dyn Cartridge>, CartridgeError> {
    let header = CartridgeHeader::parse(rom)?;

    let expected = header.rom_banks * ROM_BANK_SIZE;
    if rom.len() < expected {
        return Err(CartridgeError::Truncated {
            expected,
            actual: rom.len(),
        });
    }

    let computed = CartridgeHeader::compute_checksum(rom);
    if computed != Some(header.header_checksum) {
        log::warn!(
            "cartridge header checksum mismatch: stored 0x{:02X}, computed {:02X?}",
            header.header_checksum,
            computed
        );
    }

    match header.cartridge_type {
        0x01..=0x03 => {
            log::info!(
                "loaded cartridge \"{}\": type 0x{:02X}, {} ROM banks, {} RAM bank(s) of {} bytes",
                header.title,
                header.cartridge_type,
                header.rom_banks,
                header.ram.banks,
                header.ram.bank_size
            );
            Ok(Box::new(Mbc1::new(rom, header)))
        }
        other => Err(CartridgeError::UnsupportedController(other)),
    }
}
