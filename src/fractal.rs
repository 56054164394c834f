//! Multi-octave composition of a base noise field.
//!
//! Each octave samples the same base field at a rotated, offset and scaled
//! copy of the previous octave's coordinate, weighted by a geometrically
//! shrinking amplitude. The rotation keeps octave grids from lining up along
//! the axes; the irrational scale keeps them from lining up at all.

use glam::{DMat2, DVec2};
use noise::NoiseFn;

use crate::lattice::{LatticeSize, Scalar};
use crate::params::{COS_ANGLE, GOLDEN_RATIO, OCTAVES, SIN_ANGLE};
use crate::sampler::{NoiseField, Sampler};

/// Coordinate transform applied between consecutive octaves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OctaveTransform {
    rotation: DMat2,
    offset: DVec2,
    scale: f64,
}

impl OctaveTransform {
    /// The transform tuned for a lattice of `size`.
    ///
    /// The offset is a fixed fraction of the lattice period, so octaves land
    /// on unrelated parts of the lattice regardless of its size.
    pub fn for_size(size: LatticeSize) -> Self {
        let period = size.period();
        Self {
            rotation: DMat2::from_cols(
                DVec2::new(COS_ANGLE, SIN_ANGLE),
                DVec2::new(-SIN_ANGLE, COS_ANGLE),
            ),
            offset: DVec2::new(
                GOLDEN_RATIO * period,
                (GOLDEN_RATIO - 1.0) * (GOLDEN_RATIO - 1.0) * period,
            ),
            scale: GOLDEN_RATIO,
        }
    }

    /// Rotate, then offset, then scale.
    #[inline]
    pub fn apply(&self, p: DVec2) -> DVec2 {
        (self.rotation * p + self.offset) * self.scale
    }

    pub fn offset(&self) -> DVec2 {
        self.offset
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Amplitude of octave `i + 1` relative to octave `i`.
    pub fn amplitude_ratio(&self) -> f64 {
        self.scale.recip()
    }
}

/// Sum of [`OCTAVES`] transformed copies of a base field.
#[derive(Debug, Clone)]
pub struct Fractal<N> {
    base: N,
    transform: OctaveTransform,
}

impl<N: NoiseField> Fractal<N> {
    /// Composes `base`, whose period is that of a lattice of `size`.
    pub fn new(base: N, size: LatticeSize) -> Self {
        Self {
            base,
            transform: OctaveTransform::for_size(size),
        }
    }

    pub fn base(&self) -> &N {
        &self.base
    }

    pub fn transform(&self) -> &OctaveTransform {
        &self.transform
    }

    /// Unnormalized multi-octave value at `(x, y)`.
    ///
    /// Bounded in practice by the base field's range times
    /// `1 / (1 - 1/phi)`; stretching to a display range is up to the caller.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let ratio = self.transform.amplitude_ratio();

        let mut p = DVec2::new(x, y);
        let mut amplitude = 1.0;
        let mut sum = 0.0;
        for _ in 0..OCTAVES {
            sum += self.base.sample(p.x, p.y) * amplitude;
            p = self.transform.apply(p);
            amplitude *= ratio;
        }
        sum
    }
}

impl<C: Scalar> Fractal<Sampler<C>> {
    /// Composes a sampler over its own lattice.
    pub fn from_sampler(sampler: Sampler<C>) -> Self {
        let size = sampler.lattice().size();
        Self::new(sampler, size)
    }
}

impl<N: NoiseField> NoiseField for Fractal<N> {
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        Fractal::sample(self, x, y)
    }
}

impl<N: NoiseField> NoiseFn<f64, 2> for Fractal<N> {
    fn get(&self, point: [f64; 2]) -> f64 {
        Fractal::sample(self, point[0], point[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::{Lattice, LatticeBuilder};

    /// Constant field, to isolate the amplitude schedule.
    struct Flat(f64);

    impl NoiseField for Flat {
        fn sample(&self, _x: f64, _y: f64) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_rotation_is_orthonormal() {
        assert!((COS_ANGLE * COS_ANGLE + SIN_ANGLE * SIN_ANGLE - 1.0).abs() < 1e-15);
        let transform = OctaveTransform::for_size(LatticeSize::default());
        assert!((transform.rotation.determinant() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_transform_order() {
        let transform = OctaveTransform::for_size(LatticeSize::from_side(1).unwrap());
        // Origin is only offset, then scaled.
        let p = transform.apply(DVec2::ZERO);
        assert!((p.x - GOLDEN_RATIO * GOLDEN_RATIO).abs() < 1e-12);
        let expected_y = (GOLDEN_RATIO - 1.0).powi(2) * GOLDEN_RATIO;
        assert!((p.y - expected_y).abs() < 1e-12);
    }

    #[test]
    fn test_offset_scales_with_lattice() {
        let small = OctaveTransform::for_size(LatticeSize::from_side(8).unwrap());
        let large = OctaveTransform::for_size(LatticeSize::from_side(512).unwrap());
        assert_eq!(large.offset(), small.offset() * 64.0);
        assert_eq!(small.scale(), large.scale());
    }

    #[test]
    fn test_amplitudes_form_geometric_series() {
        let fractal = Fractal::new(Flat(1.0), LatticeSize::default());
        let r = 1.0 / GOLDEN_RATIO;
        let expected = (1.0 - r.powi(OCTAVES as i32)) / (1.0 - r);
        assert!((fractal.sample(3.0, -2.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_first_octave_is_untransformed() {
        let lattice: Lattice = LatticeBuilder::new(LatticeSize::from_side(64).unwrap()).fill_seeded(9);
        let fractal = Fractal::from_sampler(Sampler::linear(lattice));
        let sampler = fractal.base();
        // Lattice values are non-negative, so octaves past the second can
        // only add to the sum.
        let (x, y) = (10.25, 20.5);
        let rest = fractal.sample(x, y) - sampler.sample(x, y);
        let p = fractal.transform().apply(DVec2::new(x, y));
        let second = sampler.sample(p.x, p.y) / GOLDEN_RATIO;
        assert!(rest >= second - 1e-12);
    }

    #[test]
    fn test_noise_fn_matches_sample() {
        let lattice: Lattice = LatticeBuilder::new(LatticeSize::from_side(32).unwrap()).fill_seeded(1);
        let fractal = Fractal::from_sampler(Sampler::cubic(lattice));
        assert_eq!(fractal.get([1.5, 2.5]), fractal.sample(1.5, 2.5));
    }
}
