//! CPU-visible PPU registers.

use bitflags::bitflags;

bitflags! {
    /// PPU control register (`$2000`).
    ///
    /// Bit layout:
    /// ```text
    /// 7 6 5 4 3 2 1 0
    /// N M S B s I n n
    /// ```
    /// - `n n`: base nametable select (copied into the `t` register)
    /// - `I`: VRAM increment (0=+1, 1=+32)
    /// - `s`: sprite pattern table
    /// - `B`: background pattern table
    /// - `S`: sprite size
    /// - `M`: master/slave select
    /// - `N`: generate NMI at VBlank start
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Control: u8 {
        const NAMETABLE_X      = 0b0000_0001;
        const NAMETABLE_Y      = 0b0000_0010;
        const INCREMENT_32     = 0b0000_0100;
        const SPRITE_TABLE     = 0b0000_1000;
        const BACKGROUND_TABLE = 0b0001_0000;
        const SPRITE_SIZE_16   = 0b0010_0000;
        const MASTER_SLAVE     = 0b0100_0000;
        const GENERATE_NMI     = 0b1000_0000;
    }
}

impl Control {
    /// `$2007` address increment: 1 across, 32 down.
    pub fn vram_increment(self) -> u16 {
        if self.contains(Control::INCREMENT_32) {
            32
        } else {
            1
        }
    }

    /// Base address of the background pattern table.
    pub fn background_table(self) -> u16 {
        if self.contains(Control::BACKGROUND_TABLE) {
            0x1000
        } else {
            0x0000
        }
    }
}

bitflags! {
    /// PPU mask register (`$2001`): layer enables, grayscale, emphasis.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Mask: u8 {
        const GRAYSCALE            = 0b0000_0001;
        const SHOW_BACKGROUND_LEFT = 0b0000_0010;
        const SHOW_SPRITES_LEFT    = 0b0000_0100;
        const SHOW_BACKGROUND      = 0b0000_1000;
        const SHOW_SPRITES         = 0b0001_0000;
        const EMPHASIZE_RED        = 0b0010_0000;
        const EMPHASIZE_GREEN      = 0b0100_0000;
        const EMPHASIZE_BLUE       = 0b1000_0000;
    }
}

impl Mask {
    /// Scroll counters only advance while either layer is enabled.
    pub fn rendering_enabled(self) -> bool {
        self.intersects(Mask::SHOW_BACKGROUND | Mask::SHOW_SPRITES)
    }
}

bitflags! {
    /// PPU status register (`$2002`). Only the top three bits exist; the
    /// rest of the byte returns stale bus contents.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status: u8 {
        const SPRITE_OVERFLOW = 0b0010_0000;
        const SPRITE_ZERO_HIT = 0b0100_0000;
        /// Reading `$2002` clears this bit.
        const VERTICAL_BLANK  = 0b1000_0000;
    }
}
