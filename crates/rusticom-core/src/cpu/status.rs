use bitflags::bitflags;

bitflags! {
    /// The 8-bit processor status register (P).
    ///
    /// Bit layout:
    /// ```text
    /// 7 6 5 4 3 2 1 0
    /// N V U B D I Z C
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        /// Carry flag (C): carry out of bit 7, or no borrow on subtraction.
        const CARRY     = 0b0000_0001;
        /// Zero flag (Z).
        const ZERO      = 0b0000_0010;
        /// Interrupt disable (I): masks IRQ while set.
        const INTERRUPT = 0b0000_0100;
        /// Decimal mode (D): latched but ignored by the 2A03.
        const DECIMAL   = 0b0000_1000;
        /// Break flag (B): only meaningful in the byte pushed by BRK/PHP.
        const BREAK     = 0b0001_0000;
        /// Unused bit: hardware reads it back as 1.
        const UNUSED    = 0b0010_0000;
        /// Overflow flag (V): signed arithmetic overflow.
        const OVERFLOW  = 0b0100_0000;
        /// Negative flag (N): bit 7 of the last result.
        const NEGATIVE  = 0b1000_0000;
    }
}

impl Status {
    /// Sets Z and N from a result byte.
    #[inline]
    pub fn set_zn(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }

    #[inline]
    pub fn carry(&self) -> u8 {
        u8::from(self.contains(Status::CARRY))
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::UNUSED | Status::INTERRUPT
    }
}
