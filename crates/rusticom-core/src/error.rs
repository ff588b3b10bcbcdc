use thiserror::Error;

use crate::cartridge::header::NES_HEADER_LEN;
use crate::memory::cpu::INTERNAL_RAM_SIZE;

/// Setup and parse errors surfaced to the host.
///
/// Per-cycle execution never fails: unmapped reads return 0 and stray writes
/// are discarded, matching hardware. Everything that can go wrong happens
/// while a cartridge image is parsed or a test harness seeds RAM.
#[derive(Debug, Error)]
pub enum Error {
    /// Provided buffer is shorter than the 16-byte iNES header.
    #[error("header expected {NES_HEADER_LEN} bytes, got {actual}")]
    TooShort { actual: usize },

    /// Magic number ("NES<EOF>") is missing.
    #[error("missing NES magic bytes")]
    InvalidMagic,

    /// A ROM section (trainer/PRG/CHR) is shorter than the header advertises.
    #[error("{section} section expected {expected} bytes, got {actual}")]
    SectionTooShort {
        section: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The header names a mapper this core does not implement.
    #[error("mapper {0} is not supported")]
    UnsupportedMapper(u8),

    /// A host RAM load does not fit inside the 2 KiB internal RAM.
    #[error(
        "RAM load of {len} bytes at {offset:#06X} exceeds the {INTERNAL_RAM_SIZE} byte internal RAM"
    )]
    RamLoadOutOfRange { offset: usize, len: usize },
}
