//! CHR backing storage.
//!
//! A board exposes either CHR ROM from the cartridge image or writable CHR
//! RAM. Wrapping the two in one enum lets the cartridge share the mapper
//! offset handling for both.

use crate::cartridge::header::CHR_BANK_SIZE;
use crate::rng::SplitMix64;

/// PPU-side CHR storage behind the mapper.
#[derive(Debug, Clone)]
pub enum ChrStorage {
    /// Read-only CHR data from the cartridge image.
    Rom(Box<[u8]>),
    /// 8 KiB of writable CHR RAM on the board.
    Ram(Box<[u8]>),
}

impl ChrStorage {
    /// Builds CHR storage: ROM when the image carries CHR data, otherwise an
    /// 8 KiB RAM plane filled with power-on noise.
    pub fn new(chr_rom: Vec<u8>, rng: &mut SplitMix64) -> Self {
        if chr_rom.is_empty() {
            let mut ram = vec![0u8; CHR_BANK_SIZE].into_boxed_slice();
            rng.fill_bytes(&mut ram);
            Self::Ram(ram)
        } else {
            Self::Rom(chr_rom.into_boxed_slice())
        }
    }

    /// Reads the byte at a mapper-resolved offset.
    pub fn read(&self, offset: usize) -> u8 {
        let bytes = match self {
            Self::Rom(rom) => rom,
            Self::Ram(ram) => ram,
        };
        if bytes.is_empty() {
            return 0;
        }
        bytes[offset % bytes.len()]
    }

    /// Writes through a mapper-resolved offset; ROM silently drops the byte.
    pub fn write(&mut self, offset: usize, data: u8) {
        if let Self::Ram(ram) = self {
            let len = ram.len();
            ram[offset % len] = data;
        }
    }

    /// Raw view of the CHR contents, for tests and tile viewers.
    pub fn as_slice(&self) -> &[u8] {
        match self {
            Self::Rom(rom) => rom,
            Self::Ram(ram) => ram,
        }
    }
}
