//! The `output`/`input` opcodes: the machine's only contact with the host's
//! byte streams.

use std::io::{Read, Write};

use um_asm::RegisterId;

use super::Machine;
use crate::consts::{INPUT_EOF_SENTINEL, OUTPUT_MAX_BYTE};
use crate::error::Fault;

impl<R, W> Machine<R, W>
where
    R: Read,
    W: Write,
{
    pub(super) fn output(&mut self, c: RegisterId) -> Result<(), Fault> {
        let value = self.register(c);
        if value > OUTPUT_MAX_BYTE {
            return Err(Fault::OutputRange { value });
        }

        self.output
            .write_all(&[value as u8])
            .and_then(|_| self.output.flush())
            .expect("writes to the standard byte sink do not fail in a well-formed run");
        Ok(())
    }

    pub(super) fn input(&mut self, c: RegisterId) {
        let mut byte = [0u8; 1];
        match self.input.read(&mut byte) {
            Ok(0) => self.set_register(c, INPUT_EOF_SENTINEL),
            Ok(_) => self.set_register(c, byte[0] as u32),
            Err(_) => self.set_register(c, INPUT_EOF_SENTINEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn output_at_the_boundary_byte_succeeds() {
        let mut m = Machine::new(vec![0], Cursor::new(Vec::new()), Vec::new());
        m.set_register(0, 255);
        m.output(0).unwrap();
        assert_eq!(m.output, vec![255]);
    }

    #[test]
    fn output_past_the_boundary_byte_faults() {
        let mut m = Machine::new(vec![0], Cursor::new(Vec::new()), Vec::new());
        m.set_register(0, 256);
        assert_eq!(m.output(0), Err(Fault::OutputRange { value: 256 }));
    }

    #[test]
    fn input_reads_one_byte_at_a_time() {
        let mut m = Machine::new(vec![0], Cursor::new(b"hi".to_vec()), Vec::new());
        m.input(0);
        assert_eq!(m.register(0), b'h' as u32);
        m.input(0);
        assert_eq!(m.register(0), b'i' as u32);
    }

    #[test]
    fn input_at_end_of_stream_stores_all_ones() {
        let mut m = Machine::new(vec![0], Cursor::new(Vec::new()), Vec::new());
        m.input(0);
        assert_eq!(m.register(0), 0xffff_ffff);
    }
}
