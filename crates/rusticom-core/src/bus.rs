//! The system bus.
//!
//! Owns every component and routes CPU-bus transactions in a fixed priority
//! order: cartridge first refusal, then internal RAM (mirrored every 2 KiB),
//! the PPU register window (mirrored every 8 bytes), the discarded APU/IO
//! block, and the controller ports. The CPU itself never holds a reference
//! back to the bus; each tick hands it a short-lived [`CpuBus`] view over
//! the other components, so ownership stays tree-shaped.
//!
//! [`Bus::clock`] is the system heartbeat: the PPU advances every call, the
//! CPU every third call (one CPU cycle is three PPU dots), and a pending PPU
//! NMI edge is delivered once both have ticked.

use tracing::warn;

use crate::cartridge::Cartridge;
use crate::controller::{Button, Controller};
use crate::cpu::Cpu;
use crate::error::Error;
use crate::memory::cpu::{
    APU_IO_END, APU_IO_START, APU_STATUS, CONTROLLER_1, CONTROLLER_2, INTERNAL_RAM_SIZE, OAM_DMA,
    PPU_REGISTER_END, PPU_REGISTER_MASK, PPU_REGISTER_START, RAM_MIRROR_END, RAM_MIRROR_MASK,
};
use crate::ppu::Ppu;
use crate::rng::SplitMix64;

/// CPU-visible memory operations.
///
/// The CPU core is generic over this so tests can execute against a flat
/// memory image without assembling a full console.
pub trait Interface {
    fn read(&mut self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, data: u8);
}

/// The console: CPU, PPU, cartridge slot, RAM, and controller ports.
#[derive(Debug)]
pub struct Bus {
    pub cpu: Cpu,
    pub ppu: Ppu,
    cartridge: Option<Cartridge>,
    ram: [u8; INTERNAL_RAM_SIZE],
    controllers: [Controller; 2],
    dma: Option<OamDma>,
    /// System ticks (PPU dots) since power-on.
    ticks: u64,
}

impl Bus {
    /// Powered-on console with no cartridge. RAM comes up as noise.
    pub fn new() -> Self {
        let mut ram = [0u8; INTERNAL_RAM_SIZE];
        SplitMix64::default().fill_bytes(&mut ram);

        Self {
            cpu: Cpu::new(),
            ppu: Ppu::new(),
            cartridge: None,
            ram,
            controllers: [Controller::new(), Controller::new()],
            dma: None,
            ticks: 0,
        }
    }

    /// Inserts a cartridge. The slot is occupied for the lifetime of the
    /// bus; a second call is ignored.
    pub fn connect_rom(&mut self, cartridge: Cartridge) {
        if self.cartridge.is_some() {
            warn!("cartridge already connected, ignoring");
            return;
        }
        self.cartridge = Some(cartridge);
    }

    pub fn cartridge(&self) -> Option<&Cartridge> {
        self.cartridge.as_ref()
    }

    /// Resets CPU and PPU and restarts system time. RAM contents are left
    /// as they are, matching hardware.
    pub fn reset(&mut self) {
        self.ppu.reset();
        self.dma = None;
        self.ticks = 0;

        let Self {
            cpu,
            ppu,
            cartridge,
            ram,
            controllers,
            dma,
            ..
        } = self;
        let mut view = CpuBus {
            ram,
            ppu,
            cartridge: cartridge.as_mut(),
            controllers,
            dma,
            odd_cpu_cycle: false,
        };
        cpu.reset(&mut view);
    }

    /// Advances the system by one PPU dot. Every third dot the CPU runs one
    /// cycle (or the in-flight OAM DMA steals it); a pending NMI edge is
    /// then delivered at the tick boundary.
    pub fn clock(&mut self) {
        self.ppu.clock(self.cartridge.as_ref());

        if self.ticks % 3 == 0 {
            if self.dma.is_some() {
                self.step_dma();
            } else {
                let odd_cpu_cycle = self.cpu.clock_count() & 1 == 1;
                let Self {
                    cpu,
                    ppu,
                    cartridge,
                    ram,
                    controllers,
                    dma,
                    ..
                } = self;
                let mut view = CpuBus {
                    ram,
                    ppu,
                    cartridge: cartridge.as_mut(),
                    controllers,
                    dma,
                    odd_cpu_cycle,
                };
                cpu.clock(&mut view);
            }
        }

        if self.ppu.take_nmi() {
            let Self {
                cpu,
                ppu,
                cartridge,
                ram,
                controllers,
                dma,
                ..
            } = self;
            let mut view = CpuBus {
                ram,
                ppu,
                cartridge: cartridge.as_mut(),
                controllers,
                dma,
                odd_cpu_cycle: false,
            };
            cpu.nmi(&mut view);
        }

        self.ticks += 1;
    }

    /// Clocks until the PPU finishes the current frame.
    pub fn run_frame(&mut self) {
        loop {
            self.clock();
            if self.ppu.take_frame_complete() {
                break;
            }
        }
    }

    /// CPU-bus read with full side effects (controller shifts, PPU status
    /// clears). Hosts and tests use this; the CPU goes through its view.
    pub fn cpu_read(&mut self, addr: u16) -> u8 {
        self.view().read(addr)
    }

    /// CPU-bus write.
    pub fn cpu_write(&mut self, addr: u16, data: u8) {
        self.view().write(addr, data);
    }

    /// Side-effect-free read with the same address decoding as
    /// [`Bus::cpu_read`]. Never advances controller latches, clears
    /// PPUSTATUS bits, or refills the PPUDATA buffer.
    pub fn debug_read(&self, addr: u16) -> u8 {
        if let Some(value) = self
            .cartridge
            .as_ref()
            .and_then(|cart| cart.cpu_read(addr))
        {
            return value;
        }

        match addr {
            0x0000..=RAM_MIRROR_END => self.ram[usize::from(addr & RAM_MIRROR_MASK)],
            PPU_REGISTER_START..=PPU_REGISTER_END => {
                self.ppu.cpu_debug_read(addr & PPU_REGISTER_MASK)
            }
            CONTROLLER_1 | CONTROLLER_2 => self.controllers[usize::from(addr & 1)].peek(),
            _ => 0,
        }
    }

    /// Copies a block into internal RAM, for test harnesses. Fails when the
    /// block does not fit in the 2 KiB array.
    pub fn load_ram(&mut self, offset: usize, bytes: &[u8]) -> Result<(), Error> {
        let end = offset
            .checked_add(bytes.len())
            .filter(|&end| end <= INTERNAL_RAM_SIZE)
            .ok_or(Error::RamLoadOutOfRange {
                offset,
                len: bytes.len(),
            })?;
        self.ram[offset..end].copy_from_slice(bytes);
        Ok(())
    }

    /// Replaces a pad's live button byte.
    pub fn set_controller(&mut self, port: usize, byte: u8) {
        self.controllers[port & 1].set_input(byte);
    }

    /// Updates one button on a pad.
    pub fn set_button(&mut self, port: usize, button: Button, pressed: bool) {
        self.controllers[port & 1].set_button(button, pressed);
    }

    /// System ticks (PPU dots) since power-on.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    fn view(&mut self) -> CpuBus<'_> {
        let odd_cpu_cycle = self.cpu.clock_count() & 1 == 1;
        let Self {
            ppu,
            cartridge,
            ram,
            controllers,
            dma,
            ..
        } = self;
        CpuBus {
            ram,
            ppu,
            cartridge: cartridge.as_mut(),
            controllers,
            dma,
            odd_cpu_cycle,
        }
    }

    /// Runs one DMA micro-step on the CPU's cycle slot.
    fn step_dma(&mut self) {
        let Some(mut dma) = self.dma.take() else {
            return;
        };

        let done = {
            let Self {
                ppu,
                cartridge,
                ram,
                controllers,
                dma: dma_slot,
                ..
            } = self;
            let mut view = CpuBus {
                ram,
                ppu,
                cartridge: cartridge.as_mut(),
                controllers,
                dma: dma_slot,
                odd_cpu_cycle: false,
            };
            dma.step(&mut view)
        };

        if !done {
            self.dma = Some(dma);
        }
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed view of the bus handed to the CPU for one operation. Keeping the
/// CPU out of the view is what lets the bus own the CPU without a reference
/// cycle.
pub(crate) struct CpuBus<'a> {
    ram: &'a mut [u8; INTERNAL_RAM_SIZE],
    ppu: &'a mut Ppu,
    cartridge: Option<&'a mut Cartridge>,
    controllers: &'a mut [Controller; 2],
    dma: &'a mut Option<OamDma>,
    odd_cpu_cycle: bool,
}

impl Interface for CpuBus<'_> {
    fn read(&mut self, addr: u16) -> u8 {
        if let Some(value) = self
            .cartridge
            .as_deref()
            .and_then(|cart| cart.cpu_read(addr))
        {
            return value;
        }

        match addr {
            0x0000..=RAM_MIRROR_END => self.ram[usize::from(addr & RAM_MIRROR_MASK)],
            PPU_REGISTER_START..=PPU_REGISTER_END => self
                .ppu
                .cpu_read(addr & PPU_REGISTER_MASK, self.cartridge.as_deref()),
            // APU and OAMDMA reads float; controller ports shift out a bit.
            CONTROLLER_1 | CONTROLLER_2 => self.controllers[usize::from(addr & 1)].read(),
            _ => 0,
        }
    }

    fn write(&mut self, addr: u16, data: u8) {
        if let Some(cart) = self.cartridge.as_deref_mut() {
            if cart.cpu_write(addr, data) {
                return;
            }
        }

        match addr {
            0x0000..=RAM_MIRROR_END => self.ram[usize::from(addr & RAM_MIRROR_MASK)] = data,
            PPU_REGISTER_START..=PPU_REGISTER_END => self.ppu.cpu_write(
                addr & PPU_REGISTER_MASK,
                data,
                self.cartridge.as_deref_mut(),
            ),
            OAM_DMA => *self.dma = Some(OamDma::new(data, self.odd_cpu_cycle)),
            // APU registers and the $4017 frame counter: accepted, discarded.
            APU_IO_START..=APU_IO_END | APU_STATUS | CONTROLLER_2 => {}
            // The strobe line is shared, so one write samples both pads.
            CONTROLLER_1 => {
                for pad in self.controllers.iter_mut() {
                    pad.write_strobe(data);
                }
            }
            _ => {}
        }
    }
}

/// In-flight OAM DMA transfer.
///
/// A write to `$4014` stalls the CPU and copies one 256-byte page into OAM
/// through the OAMDATA register, one byte per two CPU cycles, after a dummy
/// alignment cycle (two when the write lands on an odd CPU cycle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OamDma {
    page: u8,
    offset: u16,
    dummy_cycles: u8,
    read_phase: bool,
    latch: u8,
}

impl OamDma {
    fn new(page: u8, start_on_odd_cycle: bool) -> Self {
        Self {
            page,
            offset: 0,
            dummy_cycles: 1 + u8::from(start_on_odd_cycle),
            read_phase: true,
            latch: 0,
        }
    }

    /// One CPU cycle of the transfer; true once all 256 bytes are in OAM.
    fn step(&mut self, view: &mut CpuBus<'_>) -> bool {
        if self.dummy_cycles > 0 {
            self.dummy_cycles -= 1;
            return false;
        }

        if self.read_phase {
            let addr = (u16::from(self.page) << 8) | self.offset;
            self.latch = view.read(addr);
            self.read_phase = false;
            return false;
        }

        // OAMDATA lives at $2004 in the register window.
        view.write(PPU_REGISTER_START | 0x0004, self.latch);
        self.offset += 1;
        self.read_phase = true;
        self.offset >= 256
    }
}
