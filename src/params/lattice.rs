//! Lattice and sampler configuration.

use crate::error::LatticeError;
use crate::lattice::LatticeSize;
use crate::sampler::Interpolation;

/// Reference lattice shift: 2^9 = 512 cells per side.
///
/// Anything from 1 to 9 performs the same, since the whole 512x512 `f64`
/// lattice (2 MiB) fits in L2. Larger lattices start missing cache.
pub const DEFAULT_SHIFT: u32 = 9;

/// Largest accepted shift (32768 cells per side, 8 GiB of `f64`).
pub const MAX_SHIFT: u32 = 15;

/// How the noise lattice is built and sampled
#[derive(Debug, Clone)]
pub struct LatticeConfig {
    /// Base-2 logarithm of the lattice side (cells)
    pub shift: u32,

    /// Seed for the lattice fill; `None` draws one from entropy
    pub seed: Option<u64>,

    /// Interpolation kernel used by every octave
    pub interpolation: Interpolation,

    /// Store cells as 16.16 fixed-point instead of `f64`
    pub fixed_point: bool,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            shift: DEFAULT_SHIFT,
            seed: None,
            interpolation: Interpolation::Cubic, // final quality pass
            fixed_point: false,
        }
    }
}

impl LatticeConfig {
    /// Validated lattice size
    pub fn size(&self) -> Result<LatticeSize, LatticeError> {
        LatticeSize::from_shift(self.shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LatticeConfig::default();
        assert_eq!(config.size().unwrap().side(), 512);
    }

    #[test]
    fn test_oversized_shift_is_rejected() {
        let config = LatticeConfig {
            shift: MAX_SHIFT + 1,
            ..LatticeConfig::default()
        };
        assert!(config.size().is_err());
    }
}
