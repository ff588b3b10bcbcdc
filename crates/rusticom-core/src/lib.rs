//! Cycle-driven NES (NTSC) emulation core.
//!
//! The console is a [`bus::Bus`] owning the 6502 CPU, the 2C02 PPU, 2 KiB of
//! work RAM, the controller ports, and an optional [`cartridge::Cartridge`].
//! A host drives it by calling [`bus::Bus::clock`] in a tight loop — one
//! call is one PPU dot, and every third dot runs one CPU cycle — until the
//! PPU reports a finished 256x240 frame, then presents
//! [`ppu::frame::FrameBuffer`] and repeats:
//!
//! ```no_run
//! use rusticom_core::{Bus, Cartridge};
//!
//! # fn load_image() -> Vec<u8> { Vec::new() }
//! let mut bus = Bus::new();
//! let cartridge = Cartridge::new(&load_image()).expect("valid iNES image");
//! bus.connect_rom(cartridge);
//! bus.reset();
//!
//! loop {
//!     bus.clock();
//!     if bus.ppu.take_frame_complete() {
//!         break; // hand bus.ppu.frame() to the presenter
//!     }
//! }
//! ```
//!
//! Presentation, ROM file I/O, and input polling are host concerns; the
//! core exposes byte-level APIs for all three. Audio is not emulated: the
//! APU register block accepts and discards writes.

pub mod bus;
pub mod cartridge;
pub mod controller;
pub mod cpu;
pub mod error;
pub mod memory;
pub mod ppu;
pub mod register;
pub mod rng;

pub use bus::Bus;
pub use cartridge::header::Mirroring;
pub use cartridge::Cartridge;
pub use controller::Button;
pub use cpu::disassemble::disassemble;
pub use cpu::{Cpu, CpuSnapshot};
pub use error::Error;
pub use ppu::Ppu;
