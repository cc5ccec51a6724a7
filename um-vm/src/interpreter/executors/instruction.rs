//! Maps one decoded [`Instruction`] onto the machine's state, returning the
//! [`Flow`] the dispatch loop should apply.

use std::io::{Read, Write};

use um_asm::Instruction;

use super::super::{Flow, Machine};
use crate::error::Fault;

impl<R, W> Machine<R, W>
where
    R: Read,
    W: Write,
{
    pub(crate) fn instruction(&mut self, instruction: Instruction) -> Result<Flow, Fault> {
        match instruction {
            Instruction::ConditionalMove { a, b, c } => {
                self.conditional_move(a, b, c);
            }

            Instruction::SegmentedLoad { a, b, c } => {
                self.segmented_load(a, b, c)?;
            }

            Instruction::SegmentedStore { a, b, c } => {
                self.segmented_store(a, b, c)?;
            }

            Instruction::Add { a, b, c } => {
                self.add(a, b, c);
            }

            Instruction::Multiply { a, b, c } => {
                self.multiply(a, b, c);
            }

            Instruction::Divide { a, b, c } => {
                self.divide(a, b, c)?;
            }

            Instruction::Nand { a, b, c } => {
                self.nand(a, b, c);
            }

            Instruction::Halt => {
                return Ok(Flow::Halt);
            }

            Instruction::Map { b, c } => {
                self.map(b, c);
            }

            Instruction::Unmap { c } => {
                self.unmap(c)?;
            }

            Instruction::Output { c } => {
                self.output(c)?;
            }

            Instruction::Input { c } => {
                self.input(c);
            }

            Instruction::LoadProgram { b, c } => {
                return self.load_program(b, c);
            }

            Instruction::LoadImmediate { a, imm } => {
                self.load_immediate(a, imm);
            }
        }

        Ok(Flow::Next)
    }
}
