//! Runtime failure taxonomy.
//!
//! Errors are layered the way the interpreter is layered: [`SegmentFault`] is
//! the most specific, [`Fault`] is what an instruction handler returns, and
//! [`RunError`] is what the dispatch loop and the CLI boundary see, with the
//! faulting program counter attached.

use thiserror::Error;

/// A segment-table access violated one of its invariants.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SegmentFault {
    /// `get`/`set`/`length` addressed a segment ID that is not currently mapped.
    #[error("segment {id} is not mapped")]
    Unmapped {
        /// The segment ID that was addressed.
        id: u32,
    },
    /// `get`/`set` addressed a word offset at or past a segment's length.
    #[error("offset {offset} is out of bounds for segment {id} of length {len}")]
    OutOfBounds {
        /// The segment ID that was addressed.
        id: u32,
        /// The offset that was requested.
        offset: u32,
        /// The segment's logical length in words.
        len: u32,
    },
    /// `unmap` was called on segment 0, which must remain mapped for the
    /// life of the machine.
    #[error("segment 0 cannot be unmapped")]
    UnmapProgramSegment,
    /// `unmap` was called on an ID that is not currently mapped.
    #[error("cannot unmap segment {id}, it is not mapped")]
    UnmapNotMapped {
        /// The segment ID that was addressed.
        id: u32,
    },
    /// `load program` targeted a segment ID that is not currently mapped.
    #[error("load program targeted unmapped segment {id}")]
    LoadProgramUnmapped {
        /// The segment ID that was addressed.
        id: u32,
    },
}

/// A fault raised while executing a single instruction.
///
/// Every variant is fatal: the dispatch loop never recovers from one, it
/// attaches the faulting program counter and hands a [`RunError`] to the
/// caller.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Opcode 5 (`divide`) with `$r[C] == 0`.
    #[error("division by zero")]
    DivideByZero,
    /// Opcode 10 (`output`) with `$r[C] > 255`.
    #[error("output value {value:#x} exceeds a single byte")]
    OutputRange {
        /// The out-of-range register value.
        value: u32,
    },
    /// The fetched instruction's opcode nibble is not one of the fourteen
    /// known opcodes.
    #[error(transparent)]
    InvalidOpcode(#[from] um_asm::InvalidOpcode),
    /// A segment table invariant was violated.
    #[error(transparent)]
    Segment(#[from] SegmentFault),
    /// An internal bit-field encode did not fit its field width. Only
    /// reachable if a caller constructs an out-of-range instruction by hand;
    /// decoding never produces one.
    #[error(transparent)]
    Bitpack(#[from] um_asm::BitpackOverflow),
    /// The program counter, after advancing, points past the end of segment 0.
    #[error("program counter {pc} is out of bounds for segment 0 of length {len}")]
    PcOutOfBounds {
        /// The out-of-bounds program counter.
        pc: u32,
        /// Segment 0's logical length in words.
        len: u32,
    },
}

/// A fatal error surfaced to the host: a [`Fault`] located at the program
/// counter that raised it, or an I/O failure loading the program file.
#[derive(Debug, Error)]
pub enum RunError {
    /// The program file could not be read.
    #[error("failed to load program: {0}")]
    Load(#[from] std::io::Error),
    /// Execution faulted at the given program counter.
    #[error("fault at pc={pc}: {fault}")]
    Execution {
        /// The underlying fault.
        fault: Fault,
        /// The program counter of the instruction that faulted.
        pc: u32,
    },
}

impl RunError {
    /// Attaches a program counter to a [`Fault`], producing a [`RunError`].
    pub fn at(fault: Fault, pc: u32) -> Self {
        RunError::Execution { fault, pc }
    }
}
