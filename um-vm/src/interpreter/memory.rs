//! Segmented load/store and the segment-table-manipulating opcodes.

use std::io::{Read, Write};

use um_asm::RegisterId;

use super::{Flow, Machine};
use crate::error::Fault;

impl<R, W> Machine<R, W>
where
    R: Read,
    W: Write,
{
    pub(super) fn segmented_load(&mut self, a: RegisterId, b: RegisterId, c: RegisterId) -> Result<(), Fault> {
        let word = self.segments.get(self.register(b), self.register(c))?;
        self.set_register(a, word);
        Ok(())
    }

    pub(super) fn segmented_store(&mut self, a: RegisterId, b: RegisterId, c: RegisterId) -> Result<(), Fault> {
        self.segments
            .set(self.register(a), self.register(b), self.register(c))?;
        Ok(())
    }

    pub(super) fn map(&mut self, b: RegisterId, c: RegisterId) {
        let id = self.segments.map(self.register(c));
        self.set_register(b, id);
    }

    pub(super) fn unmap(&mut self, c: RegisterId) -> Result<(), Fault> {
        self.segments.unmap(self.register(c))?;
        Ok(())
    }

    /// Replaces segment 0 with a copy of segment `$r[B]` (no-op if `$r[B] ==
    /// 0`), then always redirects `pc` to `$r[C]` — the redirect happens
    /// regardless of whether the copy itself was a no-op.
    pub(super) fn load_program(&mut self, b: RegisterId, c: RegisterId) -> Result<Flow, Fault> {
        self.segments.replace_zero(self.register(b))?;
        Ok(Flow::Jump(self.register(c)))
    }
}
