use super::GameBoyBus;

impl GameBoyBus {
    /// Initialize I/O registers to match the DMG power-on state the boot
    /// ROM leaves behind.
    ///
    /// RAM is left zeroed so runs are reproducible.
    pub(super) fn apply_dmg_initial_io_state(&mut self) {
        // Joypad.
        self.memory[0xFF00] = 0xCF;

        // Serial.
        self.serial.sb = 0x00;
        self.serial.sc = 0x7E;

        // Divider / timer.
        self.timer.init_dmg();

        // The hardware happens to have the VBlank request set at PC=0x0100.
        self.if_reg = 0x01;
        self.ie_reg = 0x00;

        // Sound registers. There is no APU, but software reads them back.
        const SOUND: [(u16, u8); 21] = [
            (0xFF10, 0x80),
            (0xFF11, 0xBF),
            (0xFF12, 0xF3),
            (0xFF13, 0xFF),
            (0xFF14, 0xBF),
            (0xFF16, 0x3F),
            (0xFF17, 0x00),
            (0xFF18, 0xFF),
            (0xFF19, 0xBF),
            (0xFF1A, 0x7F),
            (0xFF1B, 0xFF),
            (0xFF1C, 0x9F),
            (0xFF1D, 0xFF),
            (0xFF1E, 0xBF),
            (0xFF20, 0xFF),
            (0xFF21, 0x00),
            (0xFF22, 0x00),
            (0xFF23, 0xBF),
            (0xFF24, 0x77),
            (0xFF25, 0xF3),
            (0xFF26, 0xF1),
        ];
        for (addr, value) in SOUND {
            self.memory[addr as usize] = value;
        }

        // LCD registers.
        self.memory[0xFF40] = 0x91; // LCDC
        self.memory[0xFF41] = 0x85; // STAT
        self.memory[0xFF42] = 0x00; // SCY
        self.memory[0xFF43] = 0x00; // SCX
        self.memory[0xFF45] = 0x00; // LYC
        self.memory[0xFF47] = 0xFC; // BGP
        self.memory[0xFF4A] = 0x00; // WY
        self.memory[0xFF4B] = 0x00; // WX
    }
}
