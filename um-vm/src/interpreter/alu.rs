//! Conditional move and the arithmetic/logic opcodes.
//!
//! All arithmetic here is unsigned modulo 2^32, which is exactly what Rust's
//! `u32` wrapping operators already give us — no explicit modulus needed.

use std::io::{Read, Write};

use um_asm::RegisterId;

use super::Machine;
use crate::error::Fault;

impl<R, W> Machine<R, W>
where
    R: Read,
    W: Write,
{
    pub(super) fn conditional_move(&mut self, a: RegisterId, b: RegisterId, c: RegisterId) {
        if self.register(c) != 0 {
            self.set_register(a, self.register(b));
        }
    }

    pub(super) fn add(&mut self, a: RegisterId, b: RegisterId, c: RegisterId) {
        self.set_register(a, self.register(b).wrapping_add(self.register(c)));
    }

    pub(super) fn multiply(&mut self, a: RegisterId, b: RegisterId, c: RegisterId) {
        self.set_register(a, self.register(b).wrapping_mul(self.register(c)));
    }

    pub(super) fn divide(&mut self, a: RegisterId, b: RegisterId, c: RegisterId) -> Result<(), Fault> {
        let divisor = self.register(c);
        if divisor == 0 {
            return Err(Fault::DivideByZero);
        }
        self.set_register(a, self.register(b) / divisor);
        Ok(())
    }

    pub(super) fn nand(&mut self, a: RegisterId, b: RegisterId, c: RegisterId) {
        self.set_register(a, !(self.register(b) & self.register(c)));
    }

    pub(super) fn load_immediate(&mut self, a: RegisterId, imm: u32) {
        self.set_register(a, imm);
    }
}
