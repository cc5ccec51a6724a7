//! How an executed instruction wants the program counter to change.

/// The dispatch loop's representation of the next program counter.
///
/// Centralizing this in one type (rather than letting each instruction
/// handler mutate `pc` directly, as the original C source does from outside
/// the instruction itself) means `load program`'s "redirect `pc` even when
/// the segment copy is a no-op" rule and `halt`'s "stop advancing" rule are
/// both just variants the loop matches on, not special-cased side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Advance the program counter by one word, the default for every
    /// opcode except `halt` and `load program`.
    Next,
    /// Set the program counter to this exact value (`load program`).
    Jump(u32),
    /// Stop the dispatch loop; execution completed successfully.
    Halt,
}
