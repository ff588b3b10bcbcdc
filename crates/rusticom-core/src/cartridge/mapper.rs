//! Cartridge mapper interface.
//!
//! A mapper sits between the console buses and the physical PRG/CHR arrays.
//! For every bus transaction it either claims the address and yields the
//! physical offset to use, or declines it so the bus can keep decoding.
//! `Option` keeps "declined" distinct from "mapped to offset 0".

use std::fmt::Debug;

use dyn_clone::DynClone;

use crate::cartridge::header::Header;
use crate::error::Error;

pub mod chr_storage;
pub mod mapper0;

pub use chr_storage::ChrStorage;
pub use mapper0::Mapper0;

/// Address translation for one cartridge board family.
///
/// Offsets index into the cartridge's PRG or CHR array. Write hooks take the
/// data byte because banked boards latch it; NROM ignores it.
pub trait Mapper: DynClone + Debug + Send {
    /// Maps a CPU read. `Some(offset)` indexes PRG memory.
    fn cpu_map_read(&self, addr: u16) -> Option<usize>;

    /// Maps a CPU write. `Some(offset)` indexes PRG memory.
    fn cpu_map_write(&mut self, addr: u16, data: u8) -> Option<usize>;

    /// Maps a PPU read. `Some(offset)` indexes CHR memory.
    fn ppu_map_read(&self, addr: u16) -> Option<usize>;

    /// Maps a PPU write. `Some(offset)` indexes CHR memory; boards without
    /// CHR RAM decline all writes.
    fn ppu_map_write(&mut self, addr: u16) -> Option<usize>;
}

dyn_clone::clone_trait_object!(Mapper);

/// Instantiates the mapper named by the header, or reports it unsupported.
pub fn mapper_for(header: &Header) -> Result<Box<dyn Mapper>, Error> {
    match header.mapper_id() {
        0 => Ok(Box::new(Mapper0::new(header.prg_banks, header.chr_banks))),
        id => Err(Error::UnsupportedMapper(id)),
    }
}
