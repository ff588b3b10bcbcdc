//! Whole-frame timing and VBlank NMI delivery.

mod common;

use common::{build_nrom, init_logging};
use rusticom_core::{Bus, Cartridge};

/// 262 scanlines x 341 dots.
const DOTS_PER_FRAME: u64 = 89_342;

fn boot(image: &[u8]) -> Bus {
    init_logging();
    let mut bus = Bus::new();
    bus.connect_rom(Cartridge::new(image).expect("test image parses"));
    bus.reset();
    bus
}

#[test]
fn one_frame_completes_every_89342_dots() {
    // Rendering stays disabled; the parked CPU never touches the PPU.
    let image = build_nrom(&[0x4C, 0x00, 0x80], 0, 1, 0);
    let mut bus = boot(&image);

    let mut rising_edges = 0;
    for _ in 0..DOTS_PER_FRAME {
        bus.clock();
        if bus.ppu.take_frame_complete() {
            rising_edges += 1;
        }
    }

    assert_eq!(rising_edges, 1);
    assert_eq!(bus.ppu.scanline(), 0);
    assert_eq!(bus.ppu.dot(), 0);

    // The next frame lands on the same cadence.
    for _ in 0..DOTS_PER_FRAME {
        bus.clock();
        if bus.ppu.take_frame_complete() {
            rising_edges += 1;
        }
    }
    assert_eq!(rising_edges, 2);
    assert_eq!(bus.ppu.frame_count(), 2);
}

#[test]
fn vblank_nmi_vectors_the_cpu_through_fffa() {
    // $8000: enable NMI generation, then spin. NMI handler spins at $8100.
    let mut program = vec![0xEA; 0x103];
    program[..8].copy_from_slice(&[
        0xA9, 0x80, // LDA #$80
        0x8D, 0x00, 0x20, // STA $2000
        0x4C, 0x05, 0x80, // JMP $8005
    ]);
    program[0x100..0x103].copy_from_slice(&[0x4C, 0x00, 0x81]); // JMP $8100

    let image = build_nrom(&program, 0x0100, 1, 0);
    let mut bus = boot(&image);

    // Run until the dot after the VBlank flag rises on the first frame.
    while !(bus.ppu.scanline() == 241 && bus.ppu.dot() == 2) {
        bus.clock();
    }

    let vector = u16::from_le_bytes([bus.debug_read(0xFFFA), bus.debug_read(0xFFFB)]);
    assert_eq!(vector, 0x8100);
    assert_eq!(
        bus.cpu.snapshot().pc,
        vector,
        "CPU's next instruction is the NMI handler entry"
    );

    // The handler keeps spinning there for the rest of the frame.
    for _ in 0..3_000 {
        bus.clock();
    }
    assert_eq!(bus.cpu.snapshot().pc, 0x8100);
}

#[test]
fn nmi_stays_quiet_when_disabled() {
    let image = build_nrom(&[0x4C, 0x00, 0x80], 0x0100, 1, 0);
    let mut bus = boot(&image);

    for _ in 0..2 * DOTS_PER_FRAME {
        bus.clock();
    }

    let pc = bus.cpu.snapshot().pc;
    assert!(
        (0x8000..0x8003).contains(&pc),
        "CPU still in the main loop, got {pc:#06X}"
    );
}

#[test]
fn vblank_flag_spans_scanlines_241_through_260() {
    let image = build_nrom(&[0x4C, 0x00, 0x80], 0, 1, 0);
    let mut bus = boot(&image);

    while !(bus.ppu.scanline() == 250 && bus.ppu.dot() == 0) {
        bus.clock();
    }
    assert_ne!(bus.debug_read(0x2002) & 0x80, 0, "set mid-vblank");

    // Cleared on the pre-render line.
    while !(bus.ppu.scanline() == 0 && bus.ppu.dot() == 0) {
        bus.clock();
    }
    assert_eq!(bus.debug_read(0x2002) & 0x80, 0, "cleared after pre-render");
}
