use super::{Cpu, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Create a CPU in the DMG post-boot state. The CPU starts paused; call
    /// `start` once a cartridge is in place.
    pub fn new() -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            running: false,
            ime_enable_countdown: 0,
            ime_disable_countdown: 0,
            last_cycles: 0,
            total_cycles: 0,
            fault: None,
        };
        cpu.apply_dmg_boot_state();
        cpu
    }

    /// Return to the post-boot state, clearing any recorded fault. The CPU
    /// is left paused.
    pub fn reset(&mut self) {
        self.halted = false;
        self.running = false;
        self.ime_enable_countdown = 0;
        self.ime_disable_countdown = 0;
        self.last_cycles = 0;
        self.total_cycles = 0;
        self.fault = None;
        self.apply_dmg_boot_state();
    }

    /// Initialize registers to match the DMG boot ROM's state after it
    /// hands control to cartridge code.
    fn apply_dmg_boot_state(&mut self) {
        self.regs = Registers::post_boot();

        // IME is clear when control reaches 0x0100; the game enables
        // interrupts itself via EI/RETI.
        self.ime = false;
    }
}
