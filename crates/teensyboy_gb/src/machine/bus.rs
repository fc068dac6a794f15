use super::{serial::Serial, timer::Timer, MEMORY_SIZE};
use crate::cartridge::Cartridge;

mod init;
mod mmio;
mod traits;

/// System bus: cartridge, work/video RAM, I/O registers and HRAM behind the
/// 64 KiB address space the CPU sees.
pub struct GameBoyBus {
    /// Backing store for everything that is not the cartridge or a modelled
    /// I/O register.
    pub(crate) memory: Box<[u8; MEMORY_SIZE]>,
    pub(crate) serial: Serial,
    pub(crate) if_reg: u8,
    pub(crate) ie_reg: u8,
    cartridge: Option<Box<dyn Cartridge>>,
    /// Timer / divider state.
    timer: Timer,
}

impl Default for GameBoyBus {
    fn default() -> Self {
        let mut bus = Self {
            memory: Box::new([0; MEMORY_SIZE]),
            serial: Serial::default(),
            if_reg: 0,
            ie_reg: 0,
            cartridge: None,
            timer: Timer::new(),
        };
        bus.apply_dmg_initial_io_state();
        bus
    }
}

impl GameBoyBus {
    /// Insert a cartridge, replacing any previous one.
    pub fn insert_cartridge(&mut self, cartridge: Box<dyn Cartridge>) {
        self.cartridge = Some(cartridge);
    }

    pub fn cartridge(&self) -> Option<&dyn Cartridge> {
        self.cartridge.as_deref()
    }

    pub fn cartridge_mut(&mut self) -> Option<&mut (dyn Cartridge + 'static)> {
        self.cartridge.as_deref_mut()
    }

    pub fn take_cartridge(&mut self) -> Option<Box<dyn Cartridge>> {
        self.cartridge.take()
    }

    /// Bytes sent over the serial port so far.
    pub fn serial_output(&self) -> &[u8] {
        &self.serial.output
    }

    /// Drain the captured serial bytes, leaving the buffer empty.
    pub fn take_serial_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.serial.output)
    }

    /// Reset RAM and I/O to power-on state. The cartridge stays inserted.
    pub fn reset(&mut self) {
        self.memory.fill(0);
        self.serial = Serial::default();
        self.timer = Timer::new();
        self.apply_dmg_initial_io_state();
    }
}
