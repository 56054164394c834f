//! Bilinear interpolation.

use crate::fixed_point::F16;
use crate::lattice::{split, Lattice, Scalar};

impl<C: Scalar> Lattice<C> {
    /// Bilinear-interpolated value at `(x, y)`.
    ///
    /// Monotonic between adjacent grid nodes along either axis while the
    /// other coordinate is integral. `linear(x, y)` equals
    /// `linear(x + side, y)` whenever the addition keeps the fractional part.
    #[inline]
    pub fn linear(&self, x: f64, y: f64) -> f64 {
        C::linear(self, x, y)
    }
}

impl Lattice<F16> {
    /// All-integer bilinear interpolation.
    ///
    /// The four weights are exact `F32` products summing to exactly one, so
    /// the result is a truncated convex combination of the corners:
    /// bit-for-bit periodic, and exactly a cell value on grid nodes.
    pub fn linear_fixed(&self, x: F16, y: F16) -> F16 {
        let size = self.size();
        let mask = size.mask();

        let x0 = (x.int() as usize) & mask;
        let y0 = (y.int() as usize) & mask;
        let x1 = (x0 + 1) & mask;
        let y1 = (y0 + 1) & mask;

        let xr = x.remainder();
        let yr = y.remainder();
        let xc = F16::ONE - xr;
        let yc = F16::ONE - yr;

        // Widened so arbitrary cells cannot overflow the contraction.
        let weighted = xc.times(yc).to_bits() as u128 * self.at(x0, y0).to_bits() as u128
            + xr.times(yc).to_bits() as u128 * self.at(x1, y0).to_bits() as u128
            + xc.times(yr).to_bits() as u128 * self.at(x0, y1).to_bits() as u128
            + xr.times(yr).to_bits() as u128 * self.at(x1, y1).to_bits() as u128;

        F16::from_bits((weighted >> 32) as u64)
    }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Float kernel: two lerps along x, one along y.
#[inline]
pub(crate) fn interpolate(lattice: &Lattice<f64>, x: f64, y: f64) -> f64 {
    let size = lattice.size();
    let mask = size.mask();

    let (xi, xr) = split(x);
    let (yi, yr) = split(y);

    // (x0, y0) is the bottom left of the cell containing (x, y).
    let x0 = size.wrap(xi);
    let y0 = size.wrap(yi);
    let x1 = (x0 + 1) & mask;
    let y1 = (y0 + 1) & mask;

    let bottom = lerp(lattice.at(x0, y0), lattice.at(x1, y0), xr);
    let top = lerp(lattice.at(x0, y1), lattice.at(x1, y1), xr);
    lerp(bottom, top, yr)
}

/// Fixed-point kernel behind the real-coordinate interface.
///
/// Coordinates are reduced into `[0, side)` first, since `F16` cannot hold
/// negative values, then truncated to 16 fractional bits.
#[inline]
pub(crate) fn interpolate_fixed_at(lattice: &Lattice<F16>, x: f64, y: f64) -> f64 {
    let period = lattice.size().period();
    let x = F16::from_f64(x.rem_euclid(period));
    let y = F16::from_f64(y.rem_euclid(period));
    lattice.linear_fixed(x, y).to_f64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::{LatticeBuilder, LatticeSize};

    fn ramp() -> Lattice {
        // f(x, y) = x + 4y over a 4x4 lattice
        let size = LatticeSize::from_side(4).unwrap();
        let cells = (0..16).map(|i| (i % 4) as f64 + 4.0 * (i / 4) as f64).collect();
        Lattice::from_cells(size, cells).unwrap()
    }

    #[test]
    fn test_linear_hits_nodes_exactly() {
        let lattice: Lattice = LatticeBuilder::new(LatticeSize::default()).fill_seeded(42);
        assert_eq!(lattice.linear(0.0, 0.0), lattice.cells()[0]);
        assert_eq!(lattice.linear(3.0, 5.0), lattice.get(3, 5));
        assert_eq!(lattice.linear(-1.0, -1.0), lattice.get(511, 511));
    }

    #[test]
    fn test_linear_interpolates_inside_cell() {
        let lattice = ramp();
        assert_eq!(lattice.linear(0.5, 0.0), 0.5);
        assert_eq!(lattice.linear(1.0, 1.5), 7.0);
        assert_eq!(lattice.linear(1.25, 2.5), 11.25);
    }

    #[test]
    fn test_linear_wraps_last_cell_to_first() {
        let lattice = ramp();
        // Between column 3 (value 3) and column 0 (value 0) of row 0.
        assert_eq!(lattice.linear(3.5, 0.0), 1.5);
        assert_eq!(lattice.linear(-0.5, 0.0), 1.5);
    }

    #[test]
    fn test_linear_fixed_matches_float_within_precision() {
        let fixed: Lattice<F16> = LatticeBuilder::new(LatticeSize::from_side(64).unwrap()).fill_seeded(8);
        let float = fixed.to_float();
        for (x, y) in [(0.5, 0.5), (12.75, 3.125), (63.9, 0.01), (-7.3, 100.6)] {
            let a = fixed.linear(x, y);
            let b = float.linear(x, y);
            assert!((a - b).abs() < 1e-4, "({x}, {y}): fixed {a} vs float {b}");
        }
    }

    #[test]
    fn test_linear_fixed_is_bit_periodic() {
        let fixed: Lattice<F16> = LatticeBuilder::new(LatticeSize::from_side(8).unwrap()).fill_seeded(21);
        let period = F16::from_int(8);
        let x = F16::from_f64(2.71);
        let y = F16::from_f64(5.5);
        let v = fixed.linear_fixed(x, y);
        assert_eq!(fixed.linear_fixed(x + period, y), v);
        assert_eq!(fixed.linear_fixed(x, y + period), v);
        assert_eq!(fixed.linear_fixed(x + period + period, y + period), v);
    }

    #[test]
    fn test_linear_fixed_nodes_are_exact() {
        let fixed: Lattice<F16> = LatticeBuilder::new(LatticeSize::from_side(8).unwrap()).fill_seeded(4);
        assert_eq!(fixed.linear_fixed(F16::ZERO, F16::ZERO), fixed.get(0, 0));
        assert_eq!(
            fixed.linear_fixed(F16::from_int(6), F16::from_int(9)),
            fixed.get(6, 1)
        );
    }
}
