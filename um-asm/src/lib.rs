//! Instruction encoding for the Universal Machine ISA.
//!
//! This crate is pure data transformation: bit-field packing, the opcode
//! table, and the [`Instruction`] decode/encode type. It has no machine
//! state and no I/O beyond [`read_word_be`], so it is equally usable by an
//! interpreter, a disassembler, or an assembler.

mod bits;
mod instruction;
mod opcode;

pub use bits::{get_field, read_word_be, set_field, BitpackOverflow};
pub use instruction::{Immediate25, Instruction, RegisterId};
pub use opcode::{InvalidOpcode, Opcode};
