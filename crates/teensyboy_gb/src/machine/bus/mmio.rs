use super::GameBoyBus;

impl GameBoyBus {
    pub(super) fn read8_mmio(&mut self, addr: u16) -> u8 {
        match addr {
            // Cartridge ROM and external RAM go through the controller.
            // Without a cartridge the lines float high.
            0x0000..=0x7FFF | 0xA000..=0xBFFF => self
                .cartridge
                .as_ref()
                .map_or(0xFF, |cart| cart.read(addr)),

            // Echo RAM: 0xE000..0xFDFF mirrors 0xC000..0xDDFF.
            0xE000..=0xFDFF => self.memory[(addr - 0x2000) as usize],

            // Unusable.
            0xFEA0..=0xFEFF => 0xFF,

            // Serial transfer registers.
            0xFF01 => self.serial.sb,
            0xFF02 => self.serial.read_sc(),

            0xFF04 => self.timer.div(),
            0xFF05 => self.timer.read_tima(),
            0xFF06 => self.timer.read_tma(),
            0xFF07 => self.timer.read_tac(),

            // Interrupt flags and enable.
            0xFF0F => self.if_reg | 0b1110_0000,
            0xFFFF => self.ie_reg,

            _ => self.memory[addr as usize],
        }
    }

    pub(super) fn write8_mmio(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x7FFF | 0xA000..=0xBFFF => match self.cartridge.as_mut() {
                Some(cart) => cart.write(addr, value),
                None => log::warn!(
                    "write to cartridge space 0x{addr:04X} with no cartridge (value 0x{value:02X})"
                ),
            },

            0xE000..=0xFDFF => self.memory[(addr - 0x2000) as usize] = value,

            0xFEA0..=0xFEFF => {
                log::warn!("write to unusable memory 0x{addr:04X} (value 0x{value:02X})");
            }

            0xFF01 => self.serial.write_sb(value),
            0xFF02 => self.serial.write_sc(value, &mut self.if_reg),

            0xFF04 => self.timer.write_div(),
            0xFF05 => self.timer.write_tima(value),
            0xFF06 => self.timer.write_tma(value),
            0xFF07 => self.timer.write_tac(value),

            0xFF0F => self.if_reg = value & 0x1F,
            0xFFFF => self.ie_reg = value,

            _ => self.memory[addr as usize] = value,
        }
    }
}
