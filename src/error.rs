//! Construction-time errors.
//!
//! Sampling never fails; the only way to misuse the engine is to ask for a
//! lattice that cannot be indexed with a mask.

use thiserror::Error;

/// Errors raised while building a lattice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LatticeError {
    /// The requested side length is zero or not a power of two.
    #[error("lattice side must be a positive power of two, got {0}")]
    NotPowerOfTwo(usize),

    /// The requested shift would produce an unreasonably large lattice.
    #[error("lattice shift {shift} exceeds the maximum of {max}")]
    ShiftTooLarge {
        /// Requested shift.
        shift: u32,
        /// Largest accepted shift.
        max: u32,
    },

    /// A caller-provided cell buffer does not match the lattice size.
    #[error("expected {expected} lattice cells, got {got}")]
    CellCountMismatch {
        /// Cells required by the lattice size.
        expected: usize,
        /// Cells actually supplied.
        got: usize,
    },
}
