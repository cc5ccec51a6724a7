//! The fourteen opcodes of the Universal Machine ISA.

use core::fmt;

/// Instruction opcode, decoded from bits 31..28 of an instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
#[repr(u8)]
pub enum Opcode {
    /// `if $r[C] != 0 then $r[A] := $r[B]`
    ConditionalMove = 0,
    /// `$r[A] := $m[$r[B]][$r[C]]`
    SegmentedLoad = 1,
    /// `$m[$r[A]][$r[B]] := $r[C]`
    SegmentedStore = 2,
    /// `$r[A] := ($r[B] + $r[C]) mod 2^32`
    Add = 3,
    /// `$r[A] := ($r[B] * $r[C]) mod 2^32`
    Multiply = 4,
    /// `$r[A] := $r[B] / $r[C]`, a panic if `$r[C] == 0`
    Divide = 5,
    /// `$r[A] := !($r[B] & $r[C])`
    Nand = 6,
    /// Stops execution.
    Halt = 7,
    /// `$r[B] := map(num_words = $r[C])`
    Map = 8,
    /// `unmap($r[C])`
    Unmap = 9,
    /// Emits the low byte of `$r[C]`, a panic if it exceeds `255`.
    Output = 10,
    /// Reads one byte into `$r[C]`, or `0xffff_ffff` at end-of-stream.
    Input = 11,
    /// Replaces segment 0 with a copy of segment `$r[B]` (no-op if `0`), then
    /// redirects `$pc` to `$r[C]`.
    LoadProgram = 12,
    /// `$r[A'] := imm`, where `A'` and `imm` use the special 13-layout.
    LoadImmediate = 13,
}

/// The fetched opcode nibble did not name one of the fourteen known opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidOpcode(pub u8);

impl fmt::Display for InvalidOpcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid opcode {:#x}", self.0)
    }
}

impl std::error::Error for InvalidOpcode {}

impl TryFrom<u8> for Opcode {
    type Error = InvalidOpcode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use Opcode::*;
        Ok(match value {
            0 => ConditionalMove,
            1 => SegmentedLoad,
            2 => SegmentedStore,
            3 => Add,
            4 => Multiply,
            5 => Divide,
            6 => Nand,
            7 => Halt,
            8 => Map,
            9 => Unmap,
            10 => Output,
            11 => Input,
            12 => LoadProgram,
            13 => LoadImmediate,
            other => return Err(InvalidOpcode(other)),
        })
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> Self {
        op as u8
    }
}
