//! Periodic lattice of independent random samples.
//!
//! The lattice is square with a power-of-two side, stored flat in row-major
//! order so that reducing an index modulo the side is a single mask. Every
//! read wraps on both axes, which makes the sampled plane a torus.
//!
//! A lattice only exists once it has been filled: [`LatticeBuilder::fill`]
//! consumes the builder and hands back an immutable [`Lattice`], so nothing
//! can observe a partially populated grid.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::LatticeError;
use crate::fixed_point::F16;
use crate::params::{DEFAULT_SHIFT, MAX_SHIFT};
use crate::sampler::linear;

/// Side length of a lattice, stored as its base-2 logarithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LatticeSize {
    shift: u32,
}

impl LatticeSize {
    /// Lattice with `2^shift` cells per side.
    pub fn from_shift(shift: u32) -> Result<Self, LatticeError> {
        if shift > MAX_SHIFT {
            return Err(LatticeError::ShiftTooLarge {
                shift,
                max: MAX_SHIFT,
            });
        }
        Ok(Self { shift })
    }

    /// Lattice with `side` cells per side. `side` must be a power of two.
    pub fn from_side(side: usize) -> Result<Self, LatticeError> {
        if !side.is_power_of_two() {
            return Err(LatticeError::NotPowerOfTwo(side));
        }
        Self::from_shift(side.trailing_zeros())
    }

    pub const fn shift(self) -> u32 {
        self.shift
    }

    /// Cells per side; also the period of the sampled field.
    pub const fn side(self) -> usize {
        1 << self.shift
    }

    pub const fn mask(self) -> usize {
        self.side() - 1
    }

    /// Total number of cells.
    pub const fn cells(self) -> usize {
        1 << (2 * self.shift)
    }

    /// Period of the sampled field in plane units.
    pub fn period(self) -> f64 {
        self.side() as f64
    }

    /// Reduces a signed cell coordinate modulo the side.
    ///
    /// Two's complement masking keeps negative coordinates continuous across
    /// zero: -1 wraps to `side - 1`.
    #[inline]
    pub const fn wrap(self, i: i64) -> usize {
        (i as usize) & self.mask()
    }

    /// Flat index of an already wrapped coordinate pair.
    #[inline]
    pub const fn index(self, x: usize, y: usize) -> usize {
        (y << self.shift) | x
    }
}

impl Default for LatticeSize {
    fn default() -> Self {
        Self {
            shift: DEFAULT_SHIFT,
        }
    }
}

impl fmt::Display for LatticeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.side())
    }
}

/// Number representation of lattice cells.
///
/// Implemented for `f64` (the reference path) and [`F16`] (the fixed-point
/// path). Both sample through the same interface.
pub trait Scalar: Copy + Send + Sync + fmt::Debug + 'static {
    /// Draws one independent cell value in [0, 1).
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;

    fn to_f64(self) -> f64;

    /// Bilinear interpolation carried out in this representation.
    fn linear(lattice: &Lattice<Self>, x: f64, y: f64) -> f64;
}

impl Scalar for f64 {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.gen::<f64>()
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn linear(lattice: &Lattice<f64>, x: f64, y: f64) -> f64 {
        linear::interpolate(lattice, x, y)
    }
}

impl Scalar for F16 {
    /// Fractional remainder of a raw random integer.
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        F16::from_bits(rng.gen::<u64>()).remainder()
    }

    #[inline]
    fn to_f64(self) -> f64 {
        F16::to_f64(self)
    }

    #[inline]
    fn linear(lattice: &Lattice<F16>, x: f64, y: f64) -> f64 {
        linear::interpolate_fixed_at(lattice, x, y)
    }
}

/// An unfilled lattice. The only thing to do with it is fill it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatticeBuilder {
    size: LatticeSize,
}

impl LatticeBuilder {
    pub fn new(size: LatticeSize) -> Self {
        Self { size }
    }

    /// Populates every cell from `rng`, in flat index order.
    pub fn fill<C: Scalar, R: Rng + ?Sized>(self, rng: &mut R) -> Lattice<C> {
        let mut cells = Vec::with_capacity(self.size.cells());
        for _ in 0..self.size.cells() {
            cells.push(C::random(rng));
        }

        log::debug!("filled {} lattice", self.size);

        Lattice {
            size: self.size,
            cells: cells.into_boxed_slice(),
        }
    }

    /// Populates every cell from a [`StdRng`] seeded with `seed`.
    pub fn fill_seeded<C: Scalar>(self, seed: u64) -> Lattice<C> {
        self.fill(&mut StdRng::seed_from_u64(seed))
    }
}

/// A filled, immutable, periodic lattice.
#[derive(Clone)]
pub struct Lattice<C = f64> {
    size: LatticeSize,
    cells: Box<[C]>,
}

impl<C: Scalar> Lattice<C> {
    /// Adopts a row-major cell buffer (`index = (y << shift) | x`).
    pub fn from_cells(size: LatticeSize, cells: Vec<C>) -> Result<Self, LatticeError> {
        if cells.len() != size.cells() {
            return Err(LatticeError::CellCountMismatch {
                expected: size.cells(),
                got: cells.len(),
            });
        }
        Ok(Self {
            size,
            cells: cells.into_boxed_slice(),
        })
    }

    pub fn size(&self) -> LatticeSize {
        self.size
    }

    /// Row-major cells.
    pub fn cells(&self) -> &[C] {
        &self.cells
    }

    /// Cell at integer coordinates, wrapping on both axes.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> C {
        self.at(self.size.wrap(x), self.size.wrap(y))
    }

    #[inline]
    pub(crate) fn at(&self, x: usize, y: usize) -> C {
        self.cells[self.size.index(x, y)]
    }
}

impl Lattice<F16> {
    /// Same cells, widened to `f64`.
    pub fn to_float(&self) -> Lattice<f64> {
        Lattice {
            size: self.size,
            cells: self.cells.iter().map(|c| c.to_f64()).collect(),
        }
    }
}

impl<C> fmt::Debug for Lattice<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lattice")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Splits a real coordinate into its floor and a remainder in [0, 1).
///
/// Floors toward negative infinity. When rounding pushes the remainder of a
/// tiny negative value up to 1.0, the cell advances instead.
#[inline]
pub(crate) fn split(v: f64) -> (i64, f64) {
    let floor = v.floor();
    let frac = v - floor;
    if frac < 1.0 {
        (floor as i64, frac)
    } else {
        ((floor as i64).wrapping_add(1), 0.0)
    }
}
