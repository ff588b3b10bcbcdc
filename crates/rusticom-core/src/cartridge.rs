//! iNES cartridge parsing and bus-facing access.
//!
//! A [`Cartridge`] owns the parsed image sections plus the mapper that
//! translates bus addresses into them. Both buses give the cartridge first
//! refusal on every transaction; `None` results mean the address belongs to
//! console-internal memory.

use tracing::info;

use crate::cartridge::header::{Header, Mirroring, NES_HEADER_LEN, TRAINER_LEN};
use crate::cartridge::mapper::{mapper_for, ChrStorage, Mapper};
use crate::error::Error;
use crate::rng::SplitMix64;

pub mod header;
pub mod mapper;

/// Parsed NES cartridge: header metadata, ROM sections, and mapper state.
#[derive(Debug, Clone)]
pub struct Cartridge {
    header: Header,
    trainer: Option<Box<[u8; TRAINER_LEN]>>,
    prg_rom: Box<[u8]>,
    chr: ChrStorage,
    mapper: Box<dyn Mapper>,
}

impl Cartridge {
    /// Parses a cartridge from an in-memory iNES image.
    ///
    /// Fails on a malformed header, a truncated body, or an unsupported
    /// mapper id. Loading the image bytes from disk is the host's job.
    pub fn new(bytes: &[u8]) -> Result<Self, Error> {
        let header = Header::parse(bytes)?;
        let mapper = mapper_for(&header)?;

        let mut cursor = NES_HEADER_LEN;
        let trainer = if header.trainer_present() {
            let block = section(bytes, &mut cursor, TRAINER_LEN, "trainer")?;
            let mut trainer = Box::new([0u8; TRAINER_LEN]);
            trainer.copy_from_slice(&block);
            Some(trainer)
        } else {
            None
        };

        let prg_rom = section(bytes, &mut cursor, header.prg_rom_size(), "PRG ROM")?;
        let chr_rom = section(bytes, &mut cursor, header.chr_rom_size(), "CHR ROM")?;

        info!(
            mapper = header.mapper_id(),
            prg_banks = header.prg_banks,
            chr_banks = header.chr_banks,
            mirroring = ?header.mirroring(),
            "cartridge parsed"
        );

        Ok(Self {
            header,
            trainer,
            prg_rom: prg_rom.into_boxed_slice(),
            chr: ChrStorage::new(chr_rom, &mut SplitMix64::default()),
            mapper,
        })
    }

    /// Header metadata parsed from the image.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Hardwired nametable mirroring for this board.
    pub fn mirroring(&self) -> Mirroring {
        self.header.mirroring()
    }

    /// Trainer block, when one was present in the image.
    pub fn trainer(&self) -> Option<&[u8; TRAINER_LEN]> {
        self.trainer.as_deref()
    }

    /// CPU-bus read; `None` declines the address.
    pub fn cpu_read(&self, addr: u16) -> Option<u8> {
        let offset = self.mapper.cpu_map_read(addr)?;
        if self.prg_rom.is_empty() {
            return Some(0);
        }
        Some(self.prg_rom[offset % self.prg_rom.len()])
    }

    /// CPU-bus write; returns whether the cartridge claimed the address.
    /// NROM maps the PRG window on writes too, but the backing is ROM, so
    /// the byte is dropped.
    pub fn cpu_write(&mut self, addr: u16, data: u8) -> bool {
        self.mapper.cpu_map_write(addr, data).is_some()
    }

    /// PPU-bus read; `None` declines the address.
    pub fn ppu_read(&self, addr: u16) -> Option<u8> {
        let offset = self.mapper.ppu_map_read(addr)?;
        Some(self.chr.read(offset))
    }

    /// PPU-bus write; returns whether the cartridge claimed the address.
    pub fn ppu_write(&mut self, addr: u16, data: u8) -> bool {
        match self.mapper.ppu_map_write(addr) {
            Some(offset) => {
                self.chr.write(offset, data);
                true
            }
            None => false,
        }
    }
}

fn section(
    bytes: &[u8],
    cursor: &mut usize,
    len: usize,
    name: &'static str,
) -> Result<Vec<u8>, Error> {
    if len == 0 {
        return Ok(Vec::new());
    }

    let remaining = bytes.len().saturating_sub(*cursor);
    let slice = bytes
        .get(*cursor..*cursor + len)
        .ok_or(Error::SectionTooShort {
            section: name,
            expected: len,
            actual: remaining,
        })?;

    *cursor += len;
    Ok(slice.to_vec())
}
