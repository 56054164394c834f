//! Bicubic Hermite patches.
//!
//! A patch is described by the values, x-derivatives, y-derivatives and
//! mixed derivatives at the four corners of a unit cell. See
//! <https://en.wikipedia.org/wiki/Bicubic_interpolation>.

use glam::{DMat4, DVec4};

/// Maps `[1, t, t^2, t^3]` to the Hermite weights of
/// `(p0, p1, m0, m1)`: `1 - 3t^2 + 2t^3`, `3t^2 - 2t^3`, `t - 2t^2 + t^3`
/// and `t^3 - t^2`. Column-major.
const BASIS: DMat4 = DMat4::from_cols_array(&[
    1.0, 0.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    -3.0, 3.0, -2.0, -1.0, //
    2.0, -2.0, 1.0, 1.0,
]);

/// Hermite weights at `t`.
#[inline]
pub(crate) fn weights(t: f64) -> DVec4 {
    let t2 = t * t;
    BASIS * DVec4::new(1.0, t, t2, t2 * t)
}

/// 4x4 patch descriptor.
///
/// Rows, in order: values at x = 0, values at x = 1, x-derivatives at
/// x = 0, x-derivatives at x = 1. Within a row: the quantity at y = 0, at
/// y = 1, then its y-derivative at y = 0 and at y = 1.
pub(crate) struct Patch(DMat4);

impl Patch {
    #[inline]
    pub(crate) fn new(rows: [[f64; 4]; 4]) -> Self {
        // Storing rows as columns makes `self.0 * w` the row-vector product
        // `w^T * F`.
        Self(DMat4::from_cols_array_2d(&rows))
    }

    /// `h(t)^T * F * h(u)` at cell-local coordinates.
    #[inline]
    pub(crate) fn eval(&self, t: f64, u: f64) -> f64 {
        (self.0 * weights(t)).dot(weights(u))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_at_endpoints() {
        assert_eq!(weights(0.0), DVec4::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(weights(1.0), DVec4::new(0.0, 1.0, 0.0, 0.0));
    }

    #[test]
    fn test_value_weights_partition_unity() {
        for t in [0.1, 0.25, 0.5, 0.8] {
            let w = weights(t);
            assert!((w.x + w.y - 1.0).abs() < 1e-15);
        }
    }

    #[test]
    fn test_constant_patch() {
        let patch = Patch::new([
            [0.3, 0.3, 0.0, 0.0],
            [0.3, 0.3, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
        ]);
        for (t, u) in [(0.0, 0.0), (0.5, 0.5), (0.9, 0.2)] {
            assert!((patch.eval(t, u) - 0.3).abs() < 1e-15);
        }
    }

    #[test]
    fn test_plane_is_reproduced() {
        // f(t, u) = t + 2u
        let patch = Patch::new([
            [0.0, 2.0, 2.0, 2.0],
            [1.0, 3.0, 2.0, 2.0],
            [1.0, 1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0, 0.0],
        ]);
        for (t, u) in [(0.0, 0.0), (0.25, 0.75), (0.6, 0.1), (1.0, 1.0)] {
            assert!((patch.eval(t, u) - (t + 2.0 * u)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_corners_return_values() {
        let patch = Patch::new([
            [0.1, 0.2, 0.5, -0.5],
            [0.3, 0.4, 0.25, 0.0],
            [0.7, -0.1, 0.05, 0.0],
            [0.2, 0.6, 0.0, 0.3],
        ]);
        assert!((patch.eval(0.0, 0.0) - 0.1).abs() < 1e-15);
        assert!((patch.eval(0.0, 1.0) - 0.2).abs() < 1e-15);
        assert!((patch.eval(1.0, 0.0) - 0.3).abs() < 1e-15);
        assert!((patch.eval(1.0, 1.0) - 0.4).abs() < 1e-15);
    }
}
