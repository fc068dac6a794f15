mod ime;
mod service;

bitflags::bitflags! {
    /// Interrupt request/enable bits as laid out in IF (0xFF0F) and
    /// IE (0xFFFF). Lower bits have higher priority.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 1 << 0;
        const STAT   = 1 << 1;
        const TIMER  = 1 << 2;
        const SERIAL = 1 << 3;
        const JOYPAD = 1 << 4;
    }
}

impl InterruptFlags {
    /// Pending sources from raw IF and IE bytes. Bits 5..7 are ignored.
    #[inline]
    pub fn pending(iflags: u8, ie: u8) -> Self {
        Self::from_bits_truncate(iflags & ie)
    }

    /// The single highest-priority source in `self`, if any.
    #[inline]
    pub fn highest_priority(self) -> Option<Self> {
        if self.is_empty() {
            return None;
        }
        Self::from_bits(1 << self.bits().trailing_zeros())
    }

    /// Handler address for a single source: 0x40, 0x48, 0x50, 0x58, 0x60.
    ///
    /// Only meaningful when exactly one bit is set; the lowest set bit wins
    /// otherwise.
    #[inline]
    pub fn vector(self) -> u16 {
        0x0040 + (self.bits().trailing_zeros() as u16) * 8
    }
}

#[cfg(test)]
mod tests {
    use super::InterruptFlags;

    #[test]
    fn vblank_outranks_every_other_source() {
        let pending = InterruptFlags::pending(0x1F, 0xFF);
        assert_eq!(pending.highest_priority(), Some(InterruptFlags::VBLANK));
    }

    #[test]
    fn pending_masks_by_enable_and_upper_bits() {
        let pending = InterruptFlags::pending(0xE5, 0x04);
        assert_eq!(pending, InterruptFlags::TIMER);
        assert!(InterruptFlags::pending(0xE0, 0xFF).is_empty());
        assert_eq!(InterruptFlags::empty().highest_priority(), None);
    }

    #[test]
    fn vectors_are_spaced_eight_bytes_apart() {
        assert_eq!(InterruptFlags::VBLANK.vector(), 0x40);
        assert_eq!(InterruptFlags::STAT.vector(), 0x48);
        assert_eq!(InterruptFlags::TIMER.vector(), 0x50);
        assert_eq!(InterruptFlags::SERIAL.vector(), 0x58);
        assert_eq!(InterruptFlags::JOYPAD.vector(), 0x60);
    }
}
