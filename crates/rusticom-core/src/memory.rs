//! Shared definitions for the NES memory map.
//!
//! Centralizing address-related constants keeps the hardware layout in one
//! location and makes it easier to reference the console documentation while
//! reading the decode logic in [`crate::bus`] and [`crate::ppu`].

/// CPU memory map details.
pub mod cpu {
    /// Internal work RAM size (2 KiB, mirrored four times below `$2000`).
    pub const INTERNAL_RAM_SIZE: usize = 0x0800;
    /// Last address of the internal RAM region including mirrors.
    pub const RAM_MIRROR_END: u16 = 0x1FFF;
    /// Mask applied when decoding internal RAM mirrors (`addr & 0x07FF`).
    pub const RAM_MIRROR_MASK: u16 = 0x07FF;

    /// First CPU address of the mirrored PPU register window.
    pub const PPU_REGISTER_START: u16 = 0x2000;
    /// Last CPU address of the mirrored PPU register window.
    pub const PPU_REGISTER_END: u16 = 0x3FFF;
    /// Mask selecting one of the eight PPU registers (`addr & 0x0007`).
    pub const PPU_REGISTER_MASK: u16 = 0x0007;

    /// First APU/IO register address.
    pub const APU_IO_START: u16 = 0x4000;
    /// Last APU channel register address.
    pub const APU_IO_END: u16 = 0x4013;
    /// APU status register.
    pub const APU_STATUS: u16 = 0x4015;
    /// OAM DMA trigger register.
    pub const OAM_DMA: u16 = 0x4014;
    /// Controller port 1 (strobe on write, serial data on read).
    pub const CONTROLLER_1: u16 = 0x4016;
    /// Controller port 2 on read; APU frame counter on write.
    pub const CONTROLLER_2: u16 = 0x4017;
    /// Start of the disabled/test register region.
    pub const TEST_REGION_START: u16 = 0x4018;
    /// End of the disabled/test register region.
    pub const TEST_REGION_END: u16 = 0x401F;

    /// Base address of the hardware stack page (`$0100 | SP`).
    pub const STACK_PAGE: u16 = 0x0100;

    /// NMI vector location (`$FFFA/$FFFB`).
    pub const NMI_VECTOR: u16 = 0xFFFA;
    /// Reset vector location (`$FFFC/$FFFD`).
    pub const RESET_VECTOR: u16 = 0xFFFC;
    /// IRQ/BRK vector location (`$FFFE/$FFFF`).
    pub const IRQ_VECTOR: u16 = 0xFFFE;

    /// First address the NROM mapper claims for PRG ROM.
    pub const PRG_ROM_START: u16 = 0x8000;
}

/// PPU address space layout.
pub mod ppu {
    /// Mask folding the 64 KiB PPU bus down to its 16 KiB address space.
    pub const ADDR_MASK: u16 = 0x3FFF;

    /// Last pattern-table address.
    pub const PATTERN_END: u16 = 0x1FFF;
    /// Size of one pattern plane (4 KiB).
    pub const PATTERN_PLANE_SIZE: usize = 0x1000;

    /// First nametable address.
    pub const NAMETABLE_START: u16 = 0x2000;
    /// Last nametable address before the palette window.
    pub const NAMETABLE_END: u16 = 0x3EFF;
    /// Size of one nametable bank (1 KiB).
    pub const NAMETABLE_SIZE: usize = 0x0400;

    /// First palette RAM address.
    pub const PALETTE_START: u16 = 0x3F00;
    /// Palette RAM size (32 bytes, mirrored through `$3FFF`).
    pub const PALETTE_RAM_SIZE: usize = 0x20;

    /// Object attribute memory size (64 sprites x 4 bytes).
    pub const OAM_SIZE: usize = 256;

    /// Attribute table base inside each nametable.
    pub const ATTRIBUTE_BASE: u16 = 0x23C0;

    /// Dots per scanline (0..=340).
    pub const DOTS_PER_SCANLINE: u16 = 341;
    /// Scanline index on which the vertical blank flag rises.
    pub const VBLANK_SCANLINE: i16 = 241;
    /// Last scanline before the counter wraps back to the pre-render line.
    pub const LAST_SCANLINE: i16 = 260;
    /// The pre-render scanline.
    pub const PRE_RENDER_SCANLINE: i16 = -1;

    /// Visible frame width in pixels.
    pub const FRAME_WIDTH: usize = 256;
    /// Visible frame height in pixels.
    pub const FRAME_HEIGHT: usize = 240;
}
