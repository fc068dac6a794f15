/// Abstraction over the Game Boy bus (memory and IO).
///
/// Implementations must expose IF at `0xFF0F` and IE at `0xFFFF`, and route
/// cartridge ROM (`0x0000..=0x7FFF`) and external RAM (`0xA000..=0xBFFF`)
/// to the cartridge controller.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Advance the timer by one machine cycle.
    ///
    /// `Cpu::step` calls this once per machine cycle charged by the previous
    /// step, before interrupts are evaluated. Buses without a timer can
    /// leave the default no-op.
    fn timer_tick_mcycle(&mut self) {}
}
