//! Decoding and encoding of 32-bit Universal Machine instruction words.

use crate::bits::{get_field, set_field};
use crate::opcode::{InvalidOpcode, Opcode};

/// A 3-bit register selector, always `0..=7`.
pub type RegisterId = u8;

/// The 25-bit immediate carried by [`Instruction::LoadImmediate`].
pub type Immediate25 = u32;

/// A decoded instruction, one variant per opcode.
///
/// Every non-[`LoadImmediate`](Instruction::LoadImmediate) opcode shares the
/// `0x00 rA rB rC` register layout (bits 8..6, 5..3, 2..0); bits 27..9 are
/// reserved and ignored on decode. `LoadImmediate` instead carries a 3-bit
/// register and a 25-bit immediate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `if $r[C] != 0 then $r[A] := $r[B]`
    ConditionalMove { a: RegisterId, b: RegisterId, c: RegisterId },
    /// `$r[A] := $m[$r[B]][$r[C]]`
    SegmentedLoad { a: RegisterId, b: RegisterId, c: RegisterId },
    /// `$m[$r[A]][$r[B]] := $r[C]`
    SegmentedStore { a: RegisterId, b: RegisterId, c: RegisterId },
    /// `$r[A] := $r[B] + $r[C]`
    Add { a: RegisterId, b: RegisterId, c: RegisterId },
    /// `$r[A] := $r[B] * $r[C]`
    Multiply { a: RegisterId, b: RegisterId, c: RegisterId },
    /// `$r[A] := $r[B] / $r[C]`
    Divide { a: RegisterId, b: RegisterId, c: RegisterId },
    /// `$r[A] := !($r[B] & $r[C])`
    Nand { a: RegisterId, b: RegisterId, c: RegisterId },
    /// Stops execution.
    Halt,
    /// `$r[B] := map($r[C])`
    Map { b: RegisterId, c: RegisterId },
    /// `unmap($r[C])`
    Unmap { c: RegisterId },
    /// Emits the low byte of `$r[C]`.
    Output { c: RegisterId },
    /// Reads one byte into `$r[C]`.
    Input { c: RegisterId },
    /// Replaces segment 0 with segment `$r[B]`, then jumps to `$r[C]`.
    LoadProgram { b: RegisterId, c: RegisterId },
    /// `$r[A] := imm`
    LoadImmediate { a: RegisterId, imm: Immediate25 },
}

fn abc(word: u32) -> (RegisterId, RegisterId, RegisterId) {
    let word = word as u64;
    (
        get_field(word, 3, 6) as RegisterId,
        get_field(word, 3, 3) as RegisterId,
        get_field(word, 3, 0) as RegisterId,
    )
}

impl Instruction {
    /// Number of bytes occupied by one instruction word.
    pub const LEN: usize = 4;

    /// Decodes a 32-bit instruction word.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOpcode`] if bits 31..28 do not name one of the
    /// fourteen known opcodes.
    pub fn decode(word: u32) -> Result<Self, InvalidOpcode> {
        let opcode = Opcode::try_from((word >> 28) as u8)?;
        let (a, b, c) = abc(word);

        Ok(match opcode {
            Opcode::ConditionalMove => Instruction::ConditionalMove { a, b, c },
            Opcode::SegmentedLoad => Instruction::SegmentedLoad { a, b, c },
            Opcode::SegmentedStore => Instruction::SegmentedStore { a, b, c },
            Opcode::Add => Instruction::Add { a, b, c },
            Opcode::Multiply => Instruction::Multiply { a, b, c },
            Opcode::Divide => Instruction::Divide { a, b, c },
            Opcode::Nand => Instruction::Nand { a, b, c },
            Opcode::Halt => Instruction::Halt,
            Opcode::Map => Instruction::Map { b, c },
            Opcode::Unmap => Instruction::Unmap { c },
            Opcode::Output => Instruction::Output { c },
            Opcode::Input => Instruction::Input { c },
            Opcode::LoadProgram => Instruction::LoadProgram { b, c },
            Opcode::LoadImmediate => {
                let word = word as u64;
                let a = get_field(word, 3, 25) as RegisterId;
                let imm = get_field(word, 25, 0) as Immediate25;
                Instruction::LoadImmediate { a, imm }
            }
        })
    }

    /// Encodes this instruction back into a 32-bit word.
    ///
    /// Inverse of [`decode`](Self::decode) modulo the reserved bits, which
    /// this encoder always sets to zero.
    pub fn encode(&self) -> u32 {
        let (opcode, word) = match *self {
            Instruction::ConditionalMove { a, b, c } => (Opcode::ConditionalMove, encode_abc(a, b, c)),
            Instruction::SegmentedLoad { a, b, c } => (Opcode::SegmentedLoad, encode_abc(a, b, c)),
            Instruction::SegmentedStore { a, b, c } => (Opcode::SegmentedStore, encode_abc(a, b, c)),
            Instruction::Add { a, b, c } => (Opcode::Add, encode_abc(a, b, c)),
            Instruction::Multiply { a, b, c } => (Opcode::Multiply, encode_abc(a, b, c)),
            Instruction::Divide { a, b, c } => (Opcode::Divide, encode_abc(a, b, c)),
            Instruction::Nand { a, b, c } => (Opcode::Nand, encode_abc(a, b, c)),
            Instruction::Halt => (Opcode::Halt, 0),
            Instruction::Map { b, c } => (Opcode::Map, encode_abc(0, b, c)),
            Instruction::Unmap { c } => (Opcode::Unmap, encode_abc(0, 0, c)),
            Instruction::Output { c } => (Opcode::Output, encode_abc(0, 0, c)),
            Instruction::Input { c } => (Opcode::Input, encode_abc(0, 0, c)),
            Instruction::LoadProgram { b, c } => (Opcode::LoadProgram, encode_abc(0, b, c)),
            Instruction::LoadImmediate { a, imm } => {
                let word = set_field(0, 3, 25, a as u64).expect("register id fits 3 bits");
                let word = set_field(word, 25, 0, imm as u64).expect("caller-provided 25-bit immediate");
                (Opcode::LoadImmediate, word as u32)
            }
        };

        word | ((u8::from(opcode) as u32) << 28)
    }
}

fn encode_abc(a: RegisterId, b: RegisterId, c: RegisterId) -> u32 {
    let word = set_field(0, 3, 6, a as u64).expect("register id fits 3 bits");
    let word = set_field(word, 3, 3, b as u64).expect("register id fits 3 bits");
    let word = set_field(word, 3, 0, c as u64).expect("register id fits 3 bits");
    word as u32
}
