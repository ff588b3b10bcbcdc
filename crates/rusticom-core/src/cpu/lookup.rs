use crate::cpu::addressing::Addressing as A;
use crate::cpu::instruction::{Instruction, Mnemonic as M};

// Short aliases for addressing modes (to keep the 16x16 table readable)
const IMP: A = A::Implied;
const ACC: A = A::Accumulator;
const IMM: A = A::Immediate;
const REL: A = A::Relative;
const ZP: A = A::ZeroPage;
const ZPX: A = A::ZeroPageX;
const ZPY: A = A::ZeroPageY;
const ABS: A = A::Absolute;
const ABX: A = A::AbsoluteX;
const ABY: A = A::AbsoluteY;
const IND: A = A::Indirect;
const INX: A = A::IndirectX;
const INY: A = A::IndirectY;

macro_rules! op {
    ($ins:ident, $addr:ident, $cycles:expr) => {
        Instruction {
            mnemonic: M::$ins,
            addressing: $addr,
            cycles: $cycles,
        }
    };
}

/// The full 256-slot opcode matrix with reference cycle counts.
///
/// Undocumented slots hold `Nop` with the addressing mode of the original
/// instruction so that byte length and base timing stay correct.
#[rustfmt::skip]
pub(crate) static LOOKUP_TABLE: [Instruction; 256] = [
    // 0                 1                 2                 3                 4                 5                 6                 7
    // 8                 9                 A                 B                 C                 D                 E                 F

    // 0x00
    op!(Brk, IMP, 7), op!(Ora, INX, 6), op!(Nop, IMP, 2), op!(Nop, INX, 8), op!(Nop, ZP, 3),  op!(Ora, ZP, 3),  op!(Asl, ZP, 5),  op!(Nop, ZP, 5),
    op!(Php, IMP, 3), op!(Ora, IMM, 2), op!(Asl, ACC, 2), op!(Nop, IMM, 2), op!(Nop, ABS, 4), op!(Ora, ABS, 4), op!(Asl, ABS, 6), op!(Nop, ABS, 6),

    // 0x10
    op!(Bpl, REL, 2), op!(Ora, INY, 5), op!(Nop, IMP, 2), op!(Nop, INY, 8), op!(Nop, ZPX, 4), op!(Ora, ZPX, 4), op!(Asl, ZPX, 6), op!(Nop, ZPX, 6),
    op!(Clc, IMP, 2), op!(Ora, ABY, 4), op!(Nop, IMP, 2), op!(Nop, ABY, 7), op!(Nop, ABX, 4), op!(Ora, ABX, 4), op!(Asl, ABX, 7), op!(Nop, ABX, 7),

    // 0x20
    op!(Jsr, ABS, 6), op!(And, INX, 6), op!(Nop, IMP, 2), op!(Nop, INX, 8), op!(Bit, ZP, 3),  op!(And, ZP, 3),  op!(Rol, ZP, 5),  op!(Nop, ZP, 5),
    op!(Plp, IMP, 4), op!(And, IMM, 2), op!(Rol, ACC, 2), op!(Nop, IMM, 2), op!(Bit, ABS, 4), op!(And, ABS, 4), op!(Rol, ABS, 6), op!(Nop, ABS, 6),

    // 0x30
    op!(Bmi, REL, 2), op!(And, INY, 5), op!(Nop, IMP, 2), op!(Nop, INY, 8), op!(Nop, ZPX, 4), op!(And, ZPX, 4), op!(Rol, ZPX, 6), op!(Nop, ZPX, 6),
    op!(Sec, IMP, 2), op!(And, ABY, 4), op!(Nop, IMP, 2), op!(Nop, ABY, 7), op!(Nop, ABX, 4), op!(And, ABX, 4), op!(Rol, ABX, 7), op!(Nop, ABX, 7),

    // 0x40
    op!(Rti, IMP, 6), op!(Eor, INX, 6), op!(Nop, IMP, 2), op!(Nop, INX, 8), op!(Nop, ZP, 3),  op!(Eor, ZP, 3),  op!(Lsr, ZP, 5),  op!(Nop, ZP, 5),
    op!(Pha, IMP, 3), op!(Eor, IMM, 2), op!(Lsr, ACC, 2), op!(Nop, IMM, 2), op!(Jmp, ABS, 3), op!(Eor, ABS, 4), op!(Lsr, ABS, 6), op!(Nop, ABS, 6),

    // 0x50
    op!(Bvc, REL, 2), op!(Eor, INY, 5), op!(Nop, IMP, 2), op!(Nop, INY, 8), op!(Nop, ZPX, 4), op!(Eor, ZPX, 4), op!(Lsr, ZPX, 6), op!(Nop, ZPX, 6),
    op!(Cli, IMP, 2), op!(Eor, ABY, 4), op!(Nop, IMP, 2), op!(Nop, ABY, 7), op!(Nop, ABX, 4), op!(Eor, ABX, 4), op!(Lsr, ABX, 7), op!(Nop, ABX, 7),

    // 0x60
    op!(Rts, IMP, 6), op!(Adc, INX, 6), op!(Nop, IMP, 2), op!(Nop, INX, 8), op!(Nop, ZP, 3),  op!(Adc, ZP, 3),  op!(Ror, ZP, 5),  op!(Nop, ZP, 5),
    op!(Pla, IMP, 4), op!(Adc, IMM, 2), op!(Ror, ACC, 2), op!(Nop, IMM, 2), op!(Jmp, IND, 5), op!(Adc, ABS, 4), op!(Ror, ABS, 6), op!(Nop, ABS, 6),

    // 0x70
    op!(Bvs, REL, 2), op!(Adc, INY, 5), op!(Nop, IMP, 2), op!(Nop, INY, 8), op!(Nop, ZPX, 4), op!(Adc, ZPX, 4), op!(Ror, ZPX, 6), op!(Nop, ZPX, 6),
    op!(Sei, IMP, 2), op!(Adc, ABY, 4), op!(Nop, IMP, 2), op!(Nop, ABY, 7), op!(Nop, ABX, 4), op!(Adc, ABX, 4), op!(Ror, ABX, 7), op!(Nop, ABX, 7),

    // 0x80
    op!(Nop, IMM, 2), op!(Sta, INX, 6), op!(Nop, IMM, 2), op!(Nop, INX, 6), op!(Sty, ZP, 3),  op!(Sta, ZP, 3),  op!(Stx, ZP, 3),  op!(Nop, ZP, 3),
    op!(Dey, IMP, 2), op!(Nop, IMM, 2), op!(Txa, IMP, 2), op!(Nop, IMM, 2), op!(Sty, ABS, 4), op!(Sta, ABS, 4), op!(Stx, ABS, 4), op!(Nop, ABS, 4),

    // 0x90
    op!(Bcc, REL, 2), op!(Sta, INY, 6), op!(Nop, IMP, 2), op!(Nop, INY, 6), op!(Sty, ZPX, 4), op!(Sta, ZPX, 4), op!(Stx, ZPY, 4), op!(Nop, ZPY, 4),
    op!(Tya, IMP, 2), op!(Sta, ABY, 5), op!(Txs, IMP, 2), op!(Nop, ABY, 5), op!(Nop, ABX, 5), op!(Sta, ABX, 5), op!(Nop, ABY, 5), op!(Nop, ABY, 5),

    // 0xA0
    op!(Ldy, IMM, 2), op!(Lda, INX, 6), op!(Ldx, IMM, 2), op!(Nop, INX, 6), op!(Ldy, ZP, 3),  op!(Lda, ZP, 3),  op!(Ldx, ZP, 3),  op!(Nop, ZP, 3),
    op!(Tay, IMP, 2), op!(Lda, IMM, 2), op!(Tax, IMP, 2), op!(Nop, IMM, 2), op!(Ldy, ABS, 4), op!(Lda, ABS, 4), op!(Ldx, ABS, 4), op!(Nop, ABS, 4),

    // 0xB0
    op!(Bcs, REL, 2), op!(Lda, INY, 5), op!(Nop, IMP, 2), op!(Nop, INY, 5), op!(Ldy, ZPX, 4), op!(Lda, ZPX, 4), op!(Ldx, ZPY, 4), op!(Nop, ZPY, 4),
    op!(Clv, IMP, 2), op!(Lda, ABY, 4), op!(Tsx, IMP, 2), op!(Nop, ABY, 4), op!(Ldy, ABX, 4), op!(Lda, ABX, 4), op!(Ldx, ABY, 4), op!(Nop, ABY, 4),

    // 0xC0
    op!(Cpy, IMM, 2), op!(Cmp, INX, 6), op!(Nop, IMM, 2), op!(Nop, INX, 8), op!(Cpy, ZP, 3),  op!(Cmp, ZP, 3),  op!(Dec, ZP, 5),  op!(Nop, ZP, 5),
    op!(Iny, IMP, 2), op!(Cmp, IMM, 2), op!(Dex, IMP, 2), op!(Nop, IMM, 2), op!(Cpy, ABS, 4), op!(Cmp, ABS, 4), op!(Dec, ABS, 6), op!(Nop, ABS, 6),

    // 0xD0
    op!(Bne, REL, 2), op!(Cmp, INY, 5), op!(Nop, IMP, 2), op!(Nop, INY, 8), op!(Nop, ZPX, 4), op!(Cmp, ZPX, 4), op!(Dec, ZPX, 6), op!(Nop, ZPX, 6),
    op!(Cld, IMP, 2), op!(Cmp, ABY, 4), op!(Nop, IMP, 2), op!(Nop, ABY, 7), op!(Nop, ABX, 4), op!(Cmp, ABX, 4), op!(Dec, ABX, 7), op!(Nop, ABX, 7),

    // 0xE0
    op!(Cpx, IMM, 2), op!(Sbc, INX, 6), op!(Nop, IMM, 2), op!(Nop, INX, 8), op!(Cpx, ZP, 3),  op!(Sbc, ZP, 3),  op!(Inc, ZP, 5),  op!(Nop, ZP, 5),
    op!(Inx, IMP, 2), op!(Sbc, IMM, 2), op!(Nop, IMP, 2), op!(Nop, IMM, 2), op!(Cpx, ABS, 4), op!(Sbc, ABS, 4), op!(Inc, ABS, 6), op!(Nop, ABS, 6),

    // 0xF0
    op!(Beq, REL, 2), op!(Sbc, INY, 5), op!(Nop, IMP, 2), op!(Nop, INY, 8), op!(Nop, ZPX, 4), op!(Sbc, ZPX, 4), op!(Inc, ZPX, 6), op!(Nop, ZPX, 6),
    op!(Sed, IMP, 2), op!(Sbc, ABY, 4), op!(Nop, IMP, 2), op!(Nop, ABY, 7), op!(Nop, ABX, 4), op!(Sbc, ABX, 4), op!(Inc, ABX, 7), op!(Nop, ABX, 7),
];
