//! Bus decode, mirrors, and the side-effect-free debug path.

mod common;

use anyhow::Result;
use common::{boot_with_program, init_logging, step_cpu_cycles};
use rusticom_core::{Bus, Error};

// An infinite loop keeps the CPU parked while tests poke the bus directly.
const PARK: &[u8] = &[0x4C, 0x00, 0x80]; // JMP $8000

#[test]
fn internal_ram_mirrors_every_2k() {
    let mut bus = boot_with_program(PARK);

    bus.cpu_write(0x07FF, 0xAA);
    assert_eq!(bus.cpu_read(0x1FFF), 0xAA);

    bus.cpu_write(0x0000, 0x55);
    for mirror in [0x0800, 0x1000, 0x1800] {
        assert_eq!(bus.cpu_read(mirror), 0x55);
    }
}

#[test]
fn ppu_registers_mirror_every_8_bytes() {
    let mut bus = boot_with_program(PARK);

    // $3FF8 decodes to PPUCTRL, same as $2000.
    bus.cpu_write(0x3FF8, 0xAA);
    assert_eq!(bus.debug_read(0x2000), 0xAA);

    bus.cpu_write(0x2000, 0x13);
    assert_eq!(bus.debug_read(0x3FF8), 0x13);
}

#[test]
fn apu_block_reads_zero_and_swallows_writes() {
    let mut bus = boot_with_program(PARK);

    for addr in (0x4000..=0x4013).chain([0x4015, 0x4018, 0x401F]) {
        bus.cpu_write(addr, 0xFF);
        assert_eq!(bus.cpu_read(addr), 0);
    }
}

#[test]
fn unmapped_reads_return_zero() {
    let mut bus = boot_with_program(PARK);
    assert_eq!(bus.cpu_read(0x5000), 0);
    assert_eq!(bus.cpu_read(0x7FFF), 0);
}

#[test]
fn load_ram_rejects_blocks_past_2k() -> Result<()> {
    init_logging();
    let mut bus = Bus::new();

    bus.load_ram(0x0000, &[1, 2, 3])?;
    assert_eq!(bus.debug_read(0x0000), 1);
    assert_eq!(bus.debug_read(0x0002), 3);

    bus.load_ram(0x07FE, &[9, 9])?;

    let err = bus
        .load_ram(0x07FF, &[1, 2])
        .expect_err("two bytes cannot fit at $07FF");
    assert!(matches!(err, Error::RamLoadOutOfRange { offset: 0x07FF, len: 2 }));

    Ok(())
}

#[test]
fn debug_read_is_side_effect_free() {
    let mut bus = boot_with_program(PARK);

    // Controller: a debug read must not shift the latch.
    bus.set_controller(0, 0xC0); // A + B
    bus.cpu_write(0x4016, 0x01);
    assert_eq!(bus.debug_read(0x4016), 1);
    assert_eq!(bus.debug_read(0x4016), 1);
    assert_eq!(bus.cpu_read(0x4016), 1);
    assert_eq!(bus.cpu_read(0x4016), 1);
    assert_eq!(bus.cpu_read(0x4016), 0);

    // PPUSTATUS: wait for vblank, then confirm debug reads keep the flag
    // while a real read clears it.
    while bus.ppu.scanline() != 245 {
        bus.clock();
    }
    assert_ne!(bus.debug_read(0x2002) & 0x80, 0);
    assert_ne!(bus.debug_read(0x2002) & 0x80, 0);
    assert_ne!(bus.cpu_read(0x2002) & 0x80, 0);
    assert_eq!(bus.debug_read(0x2002) & 0x80, 0);
}

#[test]
fn oam_dma_copies_a_page_through_oamdata() -> Result<()> {
    let mut bus = boot_with_program(PARK);

    let page: Vec<u8> = (0..=255).collect();
    bus.load_ram(0x0200, &page)?;

    bus.cpu_write(0x2003, 0x00); // OAMADDR = 0
    bus.cpu_write(0x4014, 0x02); // DMA from $0200

    // 513/514 stolen CPU cycles; give it room.
    step_cpu_cycles(&mut bus, 520);

    bus.cpu_write(0x2003, 0x00);
    assert_eq!(bus.cpu_read(0x2004), 0x00);
    bus.cpu_write(0x2003, 0x7F);
    assert_eq!(bus.cpu_read(0x2004), 0x7F);
    bus.cpu_write(0x2003, 0xFF);
    assert_eq!(bus.cpu_read(0x2004), 0xFF);

    Ok(())
}

#[test]
fn second_cartridge_is_ignored() {
    init_logging();

    let image_a = common::build_nrom(&[0x4C, 0x00, 0x80], 0, 1, 0);
    let mut image_b = common::build_nrom(&[0x4C, 0x00, 0x80], 0, 1, 0);
    // Different first PRG byte so the two images are distinguishable.
    image_b[16] = 0xEA;

    let mut bus = Bus::new();
    bus.connect_rom(rusticom_core::Cartridge::new(&image_a).unwrap());
    bus.connect_rom(rusticom_core::Cartridge::new(&image_b).unwrap());

    assert_eq!(bus.debug_read(0x8000), 0x4C);
}
