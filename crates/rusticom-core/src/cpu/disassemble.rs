//! Side-effect-free disassembly.
//!
//! Walks a bus address range through [`crate::bus::Bus::debug_read`] only,
//! so disassembling never disturbs PPU latches or controller shift
//! registers. Debug overlays call this every frame around the current PC.

use std::collections::BTreeMap;

use crate::bus::Bus;
use crate::cpu::addressing::Addressing;
use crate::cpu::lookup::LOOKUP_TABLE;

/// Disassembles `[start, end]`, producing one line per decoded instruction
/// keyed by its start address. Every address in the range belongs to exactly
/// one line.
pub fn disassemble(bus: &Bus, start: u16, end: u16) -> BTreeMap<u16, String> {
    let mut lines = BTreeMap::new();
    // Walk with 32-bit addresses so a range ending at $FFFF terminates.
    let mut addr = u32::from(start);

    while addr <= u32::from(end) {
        let line_addr = addr as u16;
        let opcode = bus.debug_read(line_addr);
        let instruction = &LOOKUP_TABLE[opcode as usize];
        addr += 1;

        let mut operand = [0u8; 2];
        for slot in operand.iter_mut().take(instruction.addressing.operand_len() as usize) {
            *slot = bus.debug_read(addr as u16);
            addr += 1;
        }

        let name = instruction.mnemonic.name();
        let byte = operand[0];
        let word = u16::from_le_bytes(operand);
        let text = match instruction.addressing {
            Addressing::Implied => name.to_string(),
            Addressing::Accumulator => format!("{name} A"),
            Addressing::Immediate => format!("{name} #${byte:02X}"),
            Addressing::ZeroPage => format!("{name} ${byte:02X}"),
            Addressing::ZeroPageX => format!("{name} ${byte:02X},X"),
            Addressing::ZeroPageY => format!("{name} ${byte:02X},Y"),
            Addressing::Relative => {
                let target = (addr as u16).wrapping_add(byte as i8 as i16 as u16);
                format!("{name} ${target:04X}")
            }
            Addressing::Absolute => format!("{name} ${word:04X}"),
            Addressing::AbsoluteX => format!("{name} ${word:04X},X"),
            Addressing::AbsoluteY => format!("{name} ${word:04X},Y"),
            Addressing::Indirect => format!("{name} (${word:04X})"),
            Addressing::IndirectX => format!("{name} (${byte:02X},X)"),
            Addressing::IndirectY => format!("{name} (${byte:02X}),Y"),
        };

        lines.insert(line_addr, text);
    }

    lines
}
