//! Bicubic interpolation over a 4x4 neighborhood.

use super::hermite::Patch;
use crate::fixed_point::F16;
use crate::lattice::{split, Lattice, Scalar};

impl<C: Scalar> Lattice<C> {
    /// Bicubic-interpolated value at `(x, y)`.
    ///
    /// Derivatives at the cell corners are estimated by central differences
    /// over the surrounding 4x4 samples. Neighboring cells estimate the same
    /// derivatives at shared corners, so the surface is C1 everywhere.
    #[inline]
    pub fn cubic(&self, x: f64, y: f64) -> f64 {
        let (xi, xr) = split(x);
        let (yi, yr) = split(y);
        let size = self.size();
        self.cubic_cell(size.wrap(xi), size.wrap(yi), xr, yr)
    }

    /// Evaluates the patch of cell `(x1, y1)` at local `(xr, yr)`.
    pub(crate) fn cubic_cell(&self, x1: usize, y1: usize, xr: f64, yr: f64) -> f64 {
        let mask = self.size().mask();

        // One ring outward on each side, every index wrapped independently.
        // No clamping near zero: small lattices (even N = 1) wrap onto
        // themselves.
        let xs = [
            x1.wrapping_sub(1) & mask,
            x1,
            (x1 + 1) & mask,
            (x1 + 2) & mask,
        ];
        let ys = [
            y1.wrapping_sub(1) & mask,
            y1,
            (y1 + 1) & mask,
            (y1 + 2) & mask,
        ];

        let mut f = [[0.0; 4]; 4];
        for (i, &x) in xs.iter().enumerate() {
            for (j, &y) in ys.iter().enumerate() {
                f[i][j] = self.at(x, y).to_f64();
            }
        }

        let fy = |i: usize, j: usize| (f[i][j + 1] - f[i][j - 1]) / 2.0;
        let fx = |i: usize, j: usize| (f[i + 1][j] - f[i - 1][j]) / 2.0;
        let fxy = |i: usize, j: usize| (fy(i + 1, j) - fy(i - 1, j)) / 2.0;

        Patch::new([
            [f[1][1], f[1][2], fy(1, 1), fy(1, 2)],
            [f[2][1], f[2][2], fy(2, 1), fy(2, 2)],
            [fx(1, 1), fx(1, 2), fxy(1, 1), fxy(1, 2)],
            [fx(2, 1), fx(2, 2), fxy(2, 1), fxy(2, 2)],
        ])
        .eval(xr, yr)
    }
}

impl Lattice<F16> {
    /// Bicubic value at fixed-point coordinates.
    ///
    /// The cell index is a shift and a mask of the coordinate; the patch is
    /// evaluated over the exact cell values.
    pub fn cubic_fixed(&self, x: F16, y: F16) -> f64 {
        let mask = self.size().mask();
        self.cubic_cell(
            (x.int() as usize) & mask,
            (y.int() as usize) & mask,
            x.remainder().to_f64(),
            y.remainder().to_f64(),
        )
    }
}
