use std::ops::Range;

use super::{CartridgeError, RAM_BANK_SIZE};

pub(crate) const TITLE: Range<usize> = 0x0134..0x0144;
pub(crate) const CARTRIDGE_TYPE: usize = 0x0147;
pub(crate) const ROM_SIZE: usize = 0x0148;
pub(crate) const RAM_SIZE: usize = 0x0149;
pub(crate) const CHECKSUM: usize = 0x014D;
/// First byte past the header.
const HEADER_END: usize = 0x0150;

/// External RAM geometry declared by header byte 0x0149.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RamLayout {
    pub banks: usize,
    pub bank_size: usize,
}

impl RamLayout {
    pub const NONE: Self = Self {
        banks: 0,
        bank_size: RAM_BANK_SIZE,
    };

    fn from_code(code: u8) -> Result<Self, CartridgeError> {
        let (banks, bank_size) = match code {
            0x00 => return Ok(Self::NONE),
            // A single 2 KiB chip.
            0x01 => (1, 0x800),
            0x02 => (1, RAM_BANK_SIZE),
            0x03 => (4, RAM_BANK_SIZE),
            0x04 => (16, RAM_BANK_SIZE),
            0x05 => (8, RAM_BANK_SIZE),
            other => return Err(CartridgeError::InvalidRamSize(other)),
        };
        Ok(Self { banks, bank_size })
    }

    #[inline]
    pub fn total_bytes(&self) -> usize {
        self.banks * self.bank_size
    }
}

/// Fields of the cartridge header at 0x0100-0x014F that the loader needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartridgeHeader {
    pub title: String,
    pub cartridge_type: u8,
    pub rom_size_code: u8,
    pub ram_size_code: u8,
    pub rom_banks: usize,
    pub ram: RamLayout,
    pub header_checksum: u8,
}

impl CartridgeHeader {
    pub fn parse(rom: &[u8]) -> Result<Self, CartridgeError> {
        if rom.len() < HEADER_END {
            return Err(CartridgeError::TooSmall { len: rom.len() });
        }

        let rom_size_code = rom[ROM_SIZE];
        if rom_size_code > 8 {
            return Err(CartridgeError::InvalidRomSize(rom_size_code));
        }
        let ram_size_code = rom[RAM_SIZE];
        let ram = RamLayout::from_code(ram_size_code)?;

        // Titles are upper-case ASCII padded with NULs; newer headers reuse
        // the tail for manufacturer/CGB bytes, so stop at the first NUL.
        let title = rom[TITLE]
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '?' })
            .collect::<String>()
            .trim_end()
            .to_owned();

        Ok(Self {
            title,
            cartridge_type: rom[CARTRIDGE_TYPE],
            rom_size_code,
            ram_size_code,
            rom_banks: 2usize << rom_size_code,
            ram,
            header_checksum: rom[CHECKSUM],
        })
    }

    /// Header checksum over 0x0134..=0x014C as computed by the boot ROM.
    /// `None` if `rom` ends before the checksummed range does.
    pub fn compute_checksum(rom: &[u8]) -> Option<u8> {
        rom.get(TITLE.start..CHECKSUM).map(|bytes| {
            bytes
                .iter()
                .fold(0u8, |acc, &b| acc.wrapping_sub(b).wrapping_sub(1))
        })
    }

    pub fn checksum_ok(&self, rom: &[u8]) -> bool {
        Self::compute_checksum(rom) == Some(self.header_checksum)
    }

    /// MBC1+RAM+BATTERY.
    #[inline]
    pub fn has_battery(&self) -> bool {
        self.cartridge_type == 0x03
    }
}
