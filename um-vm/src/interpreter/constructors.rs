//! Exposed constructor for [`Machine`].

use std::io::{Read, Write};

use super::Machine;
use crate::consts::REGISTER_COUNT;
use crate::segment::SegmentTable;

impl<R, W> Machine<R, W>
where
    R: Read,
    W: Write,
{
    /// Builds a fresh machine with `program` installed as segment 0, all
    /// registers zeroed, the program counter at zero, and an empty free-ID
    /// pool — the state the loader hands off to the dispatch loop.
    pub fn new(program: Vec<u32>, input: R, output: W) -> Self {
        Machine {
            registers: [0; REGISTER_COUNT],
            pc: 0,
            segments: SegmentTable::new(program),
            input,
            output,
        }
    }
}
