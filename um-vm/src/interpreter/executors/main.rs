//! Fetch, decode, execute, advance — until `halt` or a fault.

use std::io::{Read, Write};

use um_asm::Instruction;

use super::super::{Flow, Machine};
use crate::consts::PROGRAM_SEGMENT;
use crate::error::{Fault, RunError};

impl<R, W> Machine<R, W>
where
    R: Read,
    W: Write,
{
    /// Drives the machine until it halts or faults.
    ///
    /// On success, returns normally with the machine positioned just past
    /// its last executed instruction. On any fault, returns a [`RunError`]
    /// carrying the faulting program counter; the machine's state at that
    /// point is not specified further, matching the policy that faults are
    /// fatal to the run (§7: no error is recovered locally).
    pub fn run(&mut self) -> Result<(), RunError> {
        loop {
            match self.step()? {
                Flow::Halt => return Ok(()),
                Flow::Next | Flow::Jump(_) => {}
            }
        }
    }

    /// Executes a single cycle: fetch, decode, execute, and apply the
    /// resulting [`Flow`] to the program counter.
    pub fn step(&mut self) -> Result<Flow, RunError> {
        let pc = self.pc;
        let len = self
            .segments
            .length(PROGRAM_SEGMENT)
            .expect("segment 0 is mapped for the life of the machine");

        if pc >= len {
            let fault = Fault::PcOutOfBounds { pc, len };
            tracing::error!(pc, %fault, "fault");
            return Err(RunError::at(fault, pc));
        }

        let word = self
            .segments
            .get(PROGRAM_SEGMENT, pc)
            .expect("bounds already checked above");

        tracing::trace!(pc, word, "fetch");

        let flow = self
            .decode_and_execute(word)
            .map_err(|fault| {
                tracing::error!(pc, %fault, "fault");
                RunError::at(fault, pc)
            })?;

        self.pc = match flow {
            Flow::Next => pc.wrapping_add(1),
            Flow::Jump(target) => target,
            Flow::Halt => pc,
        };

        Ok(flow)
    }

    fn decode_and_execute(&mut self, word: u32) -> Result<Flow, Fault> {
        let decoded = Instruction::decode(word)?;
        self.instruction(decoded)
    }
}
