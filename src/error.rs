//! Recoverable error kinds raised at the façade boundary (§7).
//!
//! Contract violations (invalid index to the unchecked indexer, scanning
//! an empty set, shifting by `n >= N` at the packed-array layer, iterator
//! misuse) are not modeled here - they are asserted/panicked at the point
//! of violation, per §7.

use thiserror::Error;

/// Errors raised by the indexed-boolean façade ([`crate::bitset::BitSet`])
/// and its string constructor.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitSetError {
    /// `set`/`reset`/`flip`/`test`, or the string constructor, were
    /// given a position past the set's capacity.
    #[error("position {pos} is out of range for a bit set of size {size}")]
    OutOfRange { pos: usize, size: usize },

    /// The string constructor encountered a character that was neither
    /// the configured zero nor one character.
    #[error("invalid character {ch:?} in bit string: expected {zero:?} or {one:?}")]
    InvalidCharacter { ch: char, zero: char, one: char },
}
