use crate::cpu::Bus;

use super::GameBoyBus;

impl Bus for GameBoyBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.read8_mmio(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.write8_mmio(addr, value)
    }

    fn timer_tick_mcycle(&mut self) {
        self.timer.tick_mcycle(&mut self.if_reg);
    }
}
