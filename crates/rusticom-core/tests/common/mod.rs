#![allow(dead_code)]

use std::sync::Once;

use rusticom_core::bus::Interface;
use rusticom_core::{Bus, Cartridge, Cpu};

static INIT_LOGGING: Once = Once::new();

/// Installs a test subscriber once so `RUST_LOG` works under `cargo test`.
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub const PRG_BANK: usize = 16 * 1024;
pub const CHR_BANK: usize = 8 * 1024;

/// Builds an NROM-128 iNES image in memory.
///
/// `program` lands at `$8000`; the reset vector points there and the NMI
/// vector at `nmi_handler` (also an offset from `$8000`).
pub fn build_nrom(program: &[u8], nmi_handler: u16, chr_banks: u8, flags6: u8) -> Vec<u8> {
    assert!(program.len() <= PRG_BANK);

    let mut prg = vec![0xEA; PRG_BANK]; // NOP padding
    prg[..program.len()].copy_from_slice(program);

    // Vectors live in the last six bytes of the bank ($FFFA-$FFFF mirrors
    // $BFFA-$BFFF on NROM-128).
    let nmi = 0x8000u16.wrapping_add(nmi_handler);
    prg[PRG_BANK - 6] = nmi as u8;
    prg[PRG_BANK - 5] = (nmi >> 8) as u8;
    prg[PRG_BANK - 4] = 0x00; // reset -> $8000
    prg[PRG_BANK - 3] = 0x80;
    prg[PRG_BANK - 2] = 0x00; // IRQ/BRK -> $8000
    prg[PRG_BANK - 1] = 0x80;

    let mut image = vec![
        b'N', b'E', b'S', 0x1A, 1, chr_banks, flags6, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ];
    image.extend_from_slice(&prg);
    image.extend(std::iter::repeat(0u8).take(usize::from(chr_banks) * CHR_BANK));
    image
}

/// A console booted with the given program: cartridge connected, reset run,
/// and the reset sequence's eight cycles burned off.
pub fn boot_with_program(program: &[u8]) -> Bus {
    init_logging();

    let image = build_nrom(program, 0x0000, 1, 0);
    let mut bus = Bus::new();
    bus.connect_rom(Cartridge::new(&image).expect("test image parses"));
    bus.reset();
    run_until_instruction_boundary(&mut bus);
    bus
}

/// Clocks the bus by whole CPU cycles (three dots each).
pub fn step_cpu_cycles(bus: &mut Bus, cycles: usize) {
    for _ in 0..cycles * 3 {
        bus.clock();
    }
}

/// Clocks until the CPU sits between instructions.
pub fn run_until_instruction_boundary(bus: &mut Bus) {
    loop {
        step_cpu_cycles(bus, 1);
        if bus.cpu.complete() {
            return;
        }
    }
}

/// Executes `count` whole instructions through the bus.
pub fn run_instructions(bus: &mut Bus, count: usize) {
    for _ in 0..count {
        run_until_instruction_boundary(bus);
    }
}

/// Flat 64 KiB memory image for CPU-only tests; no mirrors, no devices.
pub struct FlatBus {
    pub mem: Box<[u8; 0x10000]>,
}

impl FlatBus {
    pub fn new() -> Self {
        Self {
            mem: vec![0u8; 0x10000].try_into().expect("sized vec"),
        }
    }

    /// Loads a program at `origin` and points the reset vector at it.
    pub fn with_program(origin: u16, program: &[u8]) -> Self {
        let mut bus = Self::new();
        bus.mem[usize::from(origin)..usize::from(origin) + program.len()]
            .copy_from_slice(program);
        bus.mem[0xFFFC] = origin as u8;
        bus.mem[0xFFFD] = (origin >> 8) as u8;
        bus
    }
}

impl Interface for FlatBus {
    fn read(&mut self, addr: u16) -> u8 {
        self.mem[usize::from(addr)]
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.mem[usize::from(addr)] = data;
    }
}

/// A reset CPU over a flat memory image, with the reset cycles burned off.
pub fn cpu_with_program(origin: u16, program: &[u8]) -> (Cpu, FlatBus) {
    init_logging();

    let mut bus = FlatBus::with_program(origin, program);
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);
    while {
        cpu.clock(&mut bus);
        !cpu.complete()
    } {}
    (cpu, bus)
}

/// Runs one whole instruction and returns how many cycles it took.
pub fn step_instruction(cpu: &mut Cpu, bus: &mut FlatBus) -> usize {
    let mut cycles = 0;
    loop {
        cpu.clock(bus);
        cycles += 1;
        if cpu.complete() {
            return cycles;
        }
    }
}
