use super::{Cartridge, CartridgeError, CartridgeHeader, ROM_BANK_SIZE};

/// How the 2-bit secondary register is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BankMode {
    /// Secondary bits are ignored; RAM is fixed to bank 0.
    #[default]
    Simple,
    /// Secondary bits extend the ROM bank number and select the RAM bank.
    Advanced,
}

/// MBC1 cartridge state.
///
/// Bank 0 is always mapped at 0x0000-0x3FFF; the switchable window at
/// 0x4000-0x7FFF and the external RAM window follow the bank registers.
/// Bank numbers beyond what the image holds wrap modulo the bank count.
pub struct Mbc1 {
    header: CartridgeHeader,
    rom: Vec<u8>,
    ram: Vec<u8>,
    rom_banks: usize,
    ram_banks: usize,
    ram_bank_size: usize,
    ram_enable: bool,
    /// 5-bit ROM bank register (0x2000-0x3FFF).
    primary: u8,
    /// 2-bit RAM bank / upper ROM bank register (0x4000-0x5FFF).
    secondary: u8,
    mode: BankMode,
}

impl Mbc1 {
    pub fn new(rom: &[u8], header: CartridgeHeader) -> Self {
        let rom_banks = (rom.len() / ROM_BANK_SIZE).max(1);
        Self {
            rom: rom.to_vec(),
            ram: vec![0; header.ram.total_bytes()],
            rom_banks,
            ram_banks: header.ram.banks,
            ram_bank_size: header.ram.bank_size,
            ram_enable: false,
            primary: 1,
            secondary: 0,
            mode: BankMode::Simple,
            header,
        }
    }

    /// Bank currently visible at 0x4000-0x7FFF.
    pub fn rom_bank(&self) -> usize {
        let primary = match self.primary & 0x1F {
            0 => 1,
            bank => bank as usize,
        };
        let bank = match self.mode {
            BankMode::Simple => primary,
            BankMode::Advanced => ((self.secondary as usize) << 5) | primary,
        };
        bank % self.rom_banks
    }

    /// RAM bank currently visible at 0xA000-0xBFFF, if any RAM exists.
    pub fn ram_bank(&self) -> Option<usize> {
        if self.ram_banks == 0 {
            return None;
        }
        let bank = match self.mode {
            BankMode::Simple => 0,
            BankMode::Advanced => self.secondary as usize,
        };
        Some(bank % self.ram_banks)
    }

    pub fn ram_enabled(&self) -> bool {
        self.ram_enable
    }

    pub fn mode(&self) -> BankMode {
        self.mode
    }

    /// Offset into `ram` for an address in the external RAM window. Chips
    /// smaller than the window mirror across it.
    fn ram_offset(&self, addr: u16) -> Option<usize> {
        if !self.ram_enable {
            return None;
        }
        let bank = self.ram_bank()?;
        let offset = (addr as usize - 0xA000) % self.ram_bank_size;
        Some(bank * self.ram_bank_size + offset)
    }

    fn read_rom(&self, bank: usize, addr: u16) -> u8 {
        let index = bank * ROM_BANK_SIZE + (addr as usize & (ROM_BANK_SIZE - 1));
        self.rom.get(index).copied().unwrap_or(0xFF)
    }
}

impl Cartridge for Mbc1 {
    fn read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x3FFF => self.read_rom(0, addr),
            0x4000..=0x7FFF => self.read_rom(self.rom_bank(), addr),
            0xA000..=0xBFFF => self
                .ram_offset(addr)
                .and_then(|i| self.ram.get(i).copied())
                .unwrap_or(0xFF),
            _ => 0xFF,
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => {
                // RAM enable: lower 4 bits must be 0x0A.
                self.ram_enable = (value & 0x0F) == 0x0A;
                log::debug!("MBC1 RAM enable={}", self.ram_enable);
            }
            0x2000..=0x3FFF => {
                self.primary = value & 0x1F;
                log::debug!("MBC1 primary bank={:#04x} -> ROM bank {}", self.primary, self.rom_bank());
            }
            0x4000..=0x5FFF => {
                self.secondary = value & 0x03;
                log::debug!("MBC1 secondary bank={}", self.secondary);
            }
            0x6000..=0x7FFF => {
                self.mode = if value & 0x01 == 0 {
                    BankMode::Simple
                } else {
                    BankMode::Advanced
                };
                log::debug!("MBC1 bank mode={:?}", self.mode);
            }
            0xA000..=0xBFFF => match self.ram_offset(addr) {
                Some(i) if i < self.ram.len() => self.ram[i] = value,
                _ => log::warn!(
                    "MBC1 write to disabled or absent RAM at 0x{addr:04X} (value 0x{value:02X})"
                ),
            },
            _ => {}
        }
    }

    fn header(&self) -> &CartridgeHeader {
        &self.header
    }

    fn ram(&self) -> &[u8] {
        &self.ram
    }

    fn load_ram(&mut self, data: &[u8]) -> Result<(), CartridgeError> {
        if data.len() != self.ram.len() {
            return Err(CartridgeError::RamSizeMismatch {
                expected: self.ram.len(),
                actual: data.len(),
            });
        }
        self.ram.copy_from_slice(data);
        Ok(())
    }

    fn has_battery(&self) -> bool {
        self.header.has_battery()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::test_rom;

    fn mbc1(rom_size_code: u8, ram_size_code: u8) -> Mbc1 {
        let rom = test_rom::build(0x03, rom_size_code, ram_size_code);
        let header = CartridgeHeader::parse(&rom).expect("valid header");
        Mbc1::new(&rom, header)
    }

    #[test]
    fn power_on_state() {
        let cart = mbc1(4, 0x03);
        assert!(!cart.ram_enabled());
        assert_eq!(cart.mode(), BankMode::Simple);
        assert_eq!(cart.rom_bank(), 1);
        assert_eq!(cart.ram_bank(), Some(0));
        assert_eq!(cart.read(0x0000), 0);
        assert_eq!(cart.read(0x4000), 1);
    }

    #[test]
    fn selecting_bank_five_on_a_32_bank_image() {
        let mut cart = mbc1(4, 0);
        assert_eq!(cart.rom_banks, 32);
        cart.write(0x2000, 0x05);
        assert_eq!(cart.read(0x4000), 5);
        assert_eq!(cart.read(0x7FFF), !5);
    }

    #[test]
    fn bank_zero_selects_bank_one() {
        let mut cart = mbc1(4, 0);
        cart.write(0x2000, 0x00);
        assert_eq!(cart.rom_bank(), 1);
        assert_eq!(cart.read(0x4000), 1);
        // Only the low five bits are latched; 0x20 is also bank 0 -> 1.
        cart.write(0x3FFF, 0x20);
        assert_eq!(cart.read(0x4000), 1);
    }

    #[test]
    fn fixed_window_always_serves_bank_zero() {
        let mut cart = mbc1(6, 0);
        cart.write(0x6000, 0x01);
        cart.write(0x4000, 0x01);
        cart.write(0x2000, 0x07);
        assert_eq!(cart.read(0x0000), 0);
        assert_eq!(cart.read(0x3FFF), !0);
    }

    #[test]
    fn simple_mode_ignores_secondary_bits_for_rom() {
        let mut cart = mbc1(6, 0);
        cart.write(0x2000, 0x03);
        cart.write(0x4000, 0x01);
        assert_eq!(cart.read(0x4000), 3);

        cart.write(0x6000, 0x01);
        assert_eq!(cart.read(0x4000), 0x23);

        cart.write(0x6000, 0x00);
        assert_eq!(cart.read(0x4000), 3);
    }

    #[test]
    fn out_of_range_banks_wrap() {
        // 8 banks: bank 0x1D wraps to 5.
        let mut cart = mbc1(2, 0);
        cart.write(0x2000, 0x1D);
        assert_eq!(cart.rom_bank(), 5);
        assert_eq!(cart.read(0x4000), 5);

        // Advanced mode on a 4-bank image: (2 << 5) | 3 = 67 -> 3.
        let mut cart = mbc1(1, 0);
        cart.write(0x6000, 0x01);
        cart.write(0x4000, 0x02);
        cart.write(0x2000, 0x03);
        assert_eq!(cart.read(0x4000), 3);
    }

    #[test]
    fn ram_requires_the_enable_nibble() {
        let mut cart = mbc1(0, 0x02);
        cart.write(0xA000, 0x42);
        assert_eq!(cart.read(0xA000), 0xFF);

        cart.write(0x0000, 0x1A);
        cart.write(0xA000, 0x42);
        assert_eq!(cart.read(0xA000), 0x42);

        cart.write(0x1FFF, 0x0B);
        assert_eq!(cart.read(0xA000), 0xFF);
        cart.write(0x0000, 0x0A);
        assert_eq!(cart.read(0xA000), 0x42);
    }

    #[test]
    fn absent_ram_reads_open_bus() {
        let mut cart = mbc1(0, 0);
        cart.write(0x0000, 0x0A);
        cart.write(0xA000, 0x12);
        assert_eq!(cart.read(0xA000), 0xFF);
        assert_eq!(cart.ram_bank(), None);
        assert!(cart.ram().is_empty());
    }

    #[test]
    fn advanced_mode_banks_ram() {
        let mut cart = mbc1(0, 0x03);
        cart.write(0x0000, 0x0A);
        cart.write(0x6000, 0x01);
        for bank in 0..4u8 {
            cart.write(0x4000, bank);
            cart.write(0xA123, 0xB0 | bank);
        }
        for bank in 0..4u8 {
            cart.write(0x4000, bank);
            assert_eq!(cart.read(0xA123), 0xB0 | bank);
        }

        // Simple mode pins RAM to bank 0.
        cart.write(0x6000, 0x00);
        cart.write(0x4000, 0x03);
        assert_eq!(cart.read(0xA123), 0xB0);
        assert_eq!(cart.ram()[3 * 0x2000 + 0x123], 0xB3);
    }

    #[test]
    fn small_ram_mirrors_across_the_window() {
        let mut cart = mbc1(0, 0x01);
        cart.write(0x0000, 0x0A);
        cart.write(0xA000, 0x77);
        assert_eq!(cart.read(0xA800), 0x77);
        assert_eq!(cart.ram().len(), 0x800);
    }

    #[test]
    fn load_ram_restores_save_data() {
        let mut cart = mbc1(0, 0x02);
        let mut save = vec![0u8; 0x2000];
        save[0x10] = 0x99;
        cart.load_ram(&save).expect("matching size");
        cart.write(0x0000, 0x0A);
        assert_eq!(cart.read(0xA010), 0x99);

        assert_eq!(
            cart.load_ram(&[0u8; 16]),
            Err(CartridgeError::RamSizeMismatch {
                expected: 0x2000,
                actual: 16
            })
        );
    }
}
