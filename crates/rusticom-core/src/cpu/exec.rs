//! Opcode handlers.
//!
//! Each handler returns 1 when the instruction is one of the documented
//! read operations that pays an extra cycle on a page-crossed indexed
//! access; the execution core ANDs that with the addressing mode's report.
//! Branches charge their own penalty cycles directly.

use crate::bus::Interface;
use crate::cpu::addressing::Addressing;
use crate::cpu::instruction::Mnemonic;
use crate::cpu::status::Status;
use crate::cpu::Cpu;
use crate::memory::cpu::IRQ_VECTOR;

impl Cpu {
    pub(crate) fn execute<B: Interface>(&mut self, mnemonic: Mnemonic, bus: &mut B) -> u8 {
        match mnemonic {
            // Arithmetic
            Mnemonic::Adc => {
                let operand = self.fetch(bus);
                self.add_with_carry(operand);
                1
            }
            Mnemonic::Sbc => {
                // Subtraction is addition of the operand's complement.
                let operand = self.fetch(bus) ^ 0xFF;
                self.add_with_carry(operand);
                1
            }
            Mnemonic::Cmp => {
                let operand = self.fetch(bus);
                self.compare(self.a, operand);
                1
            }
            Mnemonic::Cpx => {
                let operand = self.fetch(bus);
                self.compare(self.x, operand);
                0
            }
            Mnemonic::Cpy => {
                let operand = self.fetch(bus);
                self.compare(self.y, operand);
                0
            }

            // Loads and stores
            Mnemonic::Lda => {
                self.a = self.fetch(bus);
                self.status.set_zn(self.a);
                1
            }
            Mnemonic::Ldx => {
                self.x = self.fetch(bus);
                self.status.set_zn(self.x);
                1
            }
            Mnemonic::Ldy => {
                self.y = self.fetch(bus);
                self.status.set_zn(self.y);
                1
            }
            Mnemonic::Sta => {
                bus.write(self.addr_abs, self.a);
                0
            }
            Mnemonic::Stx => {
                bus.write(self.addr_abs, self.x);
                0
            }
            Mnemonic::Sty => {
                bus.write(self.addr_abs, self.y);
                0
            }

            // Logic
            Mnemonic::And => {
                self.a &= self.fetch(bus);
                self.status.set_zn(self.a);
                1
            }
            Mnemonic::Eor => {
                self.a ^= self.fetch(bus);
                self.status.set_zn(self.a);
                1
            }
            Mnemonic::Ora => {
                self.a |= self.fetch(bus);
                self.status.set_zn(self.a);
                1
            }
            Mnemonic::Bit => {
                let operand = self.fetch(bus);
                self.status.set(Status::ZERO, self.a & operand == 0);
                self.status.set(Status::NEGATIVE, operand & 0x80 != 0);
                self.status.set(Status::OVERFLOW, operand & 0x40 != 0);
                0
            }

            // Shifts and rotates
            Mnemonic::Asl => {
                let operand = self.fetch(bus);
                let result = operand << 1;
                self.status.set(Status::CARRY, operand & 0x80 != 0);
                self.status.set_zn(result);
                self.write_back(bus, result);
                0
            }
            Mnemonic::Lsr => {
                let operand = self.fetch(bus);
                let result = operand >> 1;
                self.status.set(Status::CARRY, operand & 0x01 != 0);
                self.status.set_zn(result);
                self.write_back(bus, result);
                0
            }
            Mnemonic::Rol => {
                let operand = self.fetch(bus);
                let result = (operand << 1) | self.status.carry();
                self.status.set(Status::CARRY, operand & 0x80 != 0);
                self.status.set_zn(result);
                self.write_back(bus, result);
                0
            }
            Mnemonic::Ror => {
                let operand = self.fetch(bus);
                let result = (self.status.carry() << 7) | (operand >> 1);
                self.status.set(Status::CARRY, operand & 0x01 != 0);
                self.status.set_zn(result);
                self.write_back(bus, result);
                0
            }

            // Increments and decrements
            Mnemonic::Inc => {
                let result = self.fetch(bus).wrapping_add(1);
                bus.write(self.addr_abs, result);
                self.status.set_zn(result);
                0
            }
            Mnemonic::Dec => {
                let result = self.fetch(bus).wrapping_sub(1);
                bus.write(self.addr_abs, result);
                self.status.set_zn(result);
                0
            }
            Mnemonic::Inx => {
                self.x = self.x.wrapping_add(1);
                self.status.set_zn(self.x);
                0
            }
            Mnemonic::Iny => {
                self.y = self.y.wrapping_add(1);
                self.status.set_zn(self.y);
                0
            }
            Mnemonic::Dex => {
                self.x = self.x.wrapping_sub(1);
                self.status.set_zn(self.x);
                0
            }
            Mnemonic::Dey => {
                self.y = self.y.wrapping_sub(1);
                self.status.set_zn(self.y);
                0
            }

            // Register transfers
            Mnemonic::Tax => {
                self.x = self.a;
                self.status.set_zn(self.x);
                0
            }
            Mnemonic::Tay => {
                self.y = self.a;
                self.status.set_zn(self.y);
                0
            }
            Mnemonic::Tsx => {
                self.x = self.s;
                self.status.set_zn(self.x);
                0
            }
            Mnemonic::Txa => {
                self.a = self.x;
                self.status.set_zn(self.a);
                0
            }
            Mnemonic::Txs => {
                self.s = self.x;
                0
            }
            Mnemonic::Tya => {
                self.a = self.y;
                self.status.set_zn(self.a);
                0
            }

            // Stack
            Mnemonic::Pha => {
                self.push(bus, self.a);
                0
            }
            Mnemonic::Php => {
                // The pushed copy always carries B and the unused bit.
                let pushed = self.status | Status::BREAK | Status::UNUSED;
                self.push(bus, pushed.bits());
                0
            }
            Mnemonic::Pla => {
                self.a = self.pop(bus);
                self.status.set_zn(self.a);
                0
            }
            Mnemonic::Plp => {
                let value = self.pop(bus);
                self.restore_status(value);
                0
            }

            // Control flow
            Mnemonic::Jmp => {
                self.pc = self.addr_abs;
                0
            }
            Mnemonic::Jsr => {
                self.pc = self.pc.wrapping_sub(1);
                self.push_word(bus, self.pc);
                self.pc = self.addr_abs;
                0
            }
            Mnemonic::Rts => {
                self.pc = self.pop_word(bus).wrapping_add(1);
                0
            }
            Mnemonic::Brk => {
                // Software interrupt: the saved PC skips the padding byte.
                self.pc = self.pc.wrapping_add(1);
                self.push_word(bus, self.pc);

                let pushed = self.status | Status::BREAK | Status::UNUSED;
                self.push(bus, pushed.bits());
                self.status.insert(Status::INTERRUPT);

                self.pc = {
                    let lo = bus.read(IRQ_VECTOR);
                    let hi = bus.read(IRQ_VECTOR.wrapping_add(1));
                    u16::from_le_bytes([lo, hi])
                };
                0
            }
            Mnemonic::Rti => {
                let value = self.pop(bus);
                self.restore_status(value);
                self.pc = self.pop_word(bus);
                0
            }

            // Branches
            Mnemonic::Bcc => {
                self.branch(!self.status.contains(Status::CARRY));
                0
            }
            Mnemonic::Bcs => {
                self.branch(self.status.contains(Status::CARRY));
                0
            }
            Mnemonic::Bne => {
                self.branch(!self.status.contains(Status::ZERO));
                0
            }
            Mnemonic::Beq => {
                self.branch(self.status.contains(Status::ZERO));
                0
            }
            Mnemonic::Bpl => {
                self.branch(!self.status.contains(Status::NEGATIVE));
                0
            }
            Mnemonic::Bmi => {
                self.branch(self.status.contains(Status::NEGATIVE));
                0
            }
            Mnemonic::Bvc => {
                self.branch(!self.status.contains(Status::OVERFLOW));
                0
            }
            Mnemonic::Bvs => {
                self.branch(self.status.contains(Status::OVERFLOW));
                0
            }

            // Flag manipulation
            Mnemonic::Clc => {
                self.status.remove(Status::CARRY);
                0
            }
            Mnemonic::Cld => {
                self.status.remove(Status::DECIMAL);
                0
            }
            Mnemonic::Cli => {
                self.status.remove(Status::INTERRUPT);
                0
            }
            Mnemonic::Clv => {
                self.status.remove(Status::OVERFLOW);
                0
            }
            Mnemonic::Sec => {
                self.status.insert(Status::CARRY);
                0
            }
            Mnemonic::Sed => {
                self.status.insert(Status::DECIMAL);
                0
            }
            Mnemonic::Sei => {
                self.status.insert(Status::INTERRUPT);
                0
            }

            // Official NOP plus the undocumented multi-byte variants. The
            // $1C-family absolute,X forms share the read instructions'
            // page-cross penalty.
            Mnemonic::Nop => match self.opcode {
                0x1C | 0x3C | 0x5C | 0x7C | 0xDC | 0xFC => 1,
                _ => 0,
            },
        }
    }

    /// ADC core shared with SBC: binary add with carry-in, setting C, V, Z, N.
    fn add_with_carry(&mut self, operand: u8) {
        let sum = u16::from(self.a) + u16::from(operand) + u16::from(self.status.carry());
        let result = sum as u8;

        self.status.set(Status::CARRY, sum > 0xFF);
        self.status
            .set(Status::OVERFLOW, (!(self.a ^ operand) & (self.a ^ result)) & 0x80 != 0);
        self.status.set_zn(result);

        self.a = result;
    }

    fn compare(&mut self, register: u8, operand: u8) {
        self.status.set(Status::CARRY, register >= operand);
        self.status.set_zn(register.wrapping_sub(operand));
    }

    /// Routes a shift/rotate result to the accumulator or back to memory.
    fn write_back<B: Interface>(&mut self, bus: &mut B, value: u8) {
        if matches!(self.mode, Addressing::Accumulator | Addressing::Implied) {
            self.a = value;
        } else {
            bus.write(self.addr_abs, value);
        }
    }

    /// Conditional branch: one extra cycle when taken, another when the
    /// target sits on a different page than the following instruction.
    fn branch(&mut self, taken: bool) {
        if !taken {
            return;
        }

        self.cycles += 1;
        self.addr_abs = self.pc.wrapping_add(self.addr_rel);
        if self.addr_abs & 0xFF00 != self.pc & 0xFF00 {
            self.cycles += 1;
        }
        self.pc = self.addr_abs;
    }

    /// Loads P from a stack byte: B does not exist as a register bit and the
    /// unused bit always reads back 1.
    fn restore_status(&mut self, value: u8) {
        self.status = Status::from_bits_retain(value);
        self.status.remove(Status::BREAK);
        self.status.insert(Status::UNUSED);
    }
}
