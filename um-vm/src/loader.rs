//! Turns a raw byte stream into segment zero.

use std::io::{self, Read};

use um_asm::read_word_be;

/// Reads every big-endian 32-bit word from `source` until end-of-stream,
/// returning them in order. This becomes segment zero's initial contents.
pub fn load_words<R: Read>(mut source: R) -> io::Result<Vec<u32>> {
    let mut words = Vec::new();

    while let Some(word) = read_word_be(&mut source)? {
        words.push(word);
    }

    tracing::debug!(word_count = words.len(), "loaded program into segment 0");
    Ok(words)
}
