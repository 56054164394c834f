//! Rasterizing a noise field over a pixel grid.

use std::time::Instant;

use glam::DVec2;
use rayon::prelude::*;

use crate::sampler::NoiseField;

/// Placement of a pixel grid on the noise plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    /// Noise-plane units per pixel
    pub scale: f64,
    /// Noise-plane coordinate of pixel `(0, 0)`
    pub origin: DVec2,
}

impl Viewport {
    /// Noise-plane coordinate of pixel `(px, py)`.
    #[inline]
    pub fn point(&self, px: u32, py: u32) -> DVec2 {
        DVec2::new(px as f64, py as f64) * self.scale + self.origin
    }

    pub fn pixels(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Row-major raw field values over a [`Viewport`], with their range.
#[derive(Debug, Clone, PartialEq)]
pub struct Heightmap {
    width: u32,
    height: u32,
    values: Vec<f64>,
    min: f64,
    max: f64,
}

impl Heightmap {
    /// Samples `field` at every pixel of `viewport`, rows in parallel.
    pub fn sample<N: NoiseField + ?Sized>(field: &N, viewport: &Viewport) -> Self {
        let started = Instant::now();
        let width = viewport.width as usize;
        let mut values = vec![0.0; viewport.pixels()];

        if width > 0 {
            values
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(py, row)| {
                    for (px, value) in row.iter_mut().enumerate() {
                        let p = viewport.point(px as u32, py as u32);
                        *value = field.sample(p.x, p.y);
                    }
                });
        }

        let (min, max) = values
            .par_iter()
            .fold(
                || (f64::INFINITY, f64::NEG_INFINITY),
                |(lo, hi), &v| (lo.min(v), hi.max(v)),
            )
            .reduce(
                || (f64::INFINITY, f64::NEG_INFINITY),
                |a, b| (a.0.min(b.0), a.1.max(b.1)),
            );

        log::debug!(
            "sampled {}x{} heightmap in {:.2?}, range [{min:.4}, {max:.4}]",
            viewport.width,
            viewport.height,
            started.elapsed()
        );

        Self {
            width: viewport.width,
            height: viewport.height,
            values,
            min,
            max,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Smallest sampled value; `+inf` for an empty map.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest sampled value; `-inf` for an empty map.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Raw value at pixel `(px, py)`, if inside the map.
    pub fn get(&self, px: u32, py: u32) -> Option<f64> {
        if px >= self.width || py >= self.height {
            return None;
        }
        self.values
            .get(py as usize * self.width as usize + px as usize)
            .copied()
    }

    /// Maps a raw value into `[0, 1]` relative to this map's range.
    ///
    /// A flat map has no range; every value maps to 0.
    #[inline]
    pub fn normalize(&self, v: f64) -> f64 {
        let range = self.max - self.min;
        if range > 0.0 {
            (v - self.min) / range
        } else {
            0.0
        }
    }

    /// All values normalized, row-major.
    pub fn normalized(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().map(|&v| self.normalize(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ramp;

    impl NoiseField for Ramp {
        fn sample(&self, x: f64, y: f64) -> f64 {
            x + 10.0 * y
        }
    }

    fn viewport(width: u32, height: u32) -> Viewport {
        Viewport {
            width,
            height,
            scale: 0.5,
            origin: DVec2::new(-1.0, 2.0),
        }
    }

    #[test]
    fn test_viewport_maps_pixels() {
        let vp = viewport(4, 3);
        assert_eq!(vp.point(0, 0), DVec2::new(-1.0, 2.0));
        assert_eq!(vp.point(2, 1), DVec2::new(0.0, 2.5));
        assert_eq!(vp.pixels(), 12);
    }

    #[test]
    fn test_sample_is_row_major() {
        let map = Heightmap::sample(&Ramp, &viewport(4, 3));
        assert_eq!(map.values().len(), 12);
        assert_eq!(map.get(0, 0), Some(-1.0 + 20.0));
        assert_eq!(map.get(3, 0), Some(0.5 + 20.0));
        assert_eq!(map.get(0, 2), Some(-1.0 + 30.0));
        assert_eq!(map.get(4, 0), None);
        assert_eq!(map.get(0, 3), None);
    }

    #[test]
    fn test_range_is_true_extrema() {
        let map = Heightmap::sample(&Ramp, &viewport(4, 3));
        assert_eq!(map.min(), 19.0);
        assert_eq!(map.max(), 30.5);
        let normalized: Vec<f64> = map.normalized().collect();
        assert_eq!(normalized[0], 0.0);
        assert_eq!(normalized[11], 1.0);
        assert!(normalized.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_flat_map_normalizes_to_zero() {
        struct Constant;
        impl NoiseField for Constant {
            fn sample(&self, _x: f64, _y: f64) -> f64 {
                0.7
            }
        }
        let map = Heightmap::sample(&Constant, &viewport(3, 3));
        assert!(map.normalized().all(|v| v == 0.0));
    }

    #[test]
    fn test_empty_viewport() {
        let map = Heightmap::sample(&Ramp, &viewport(0, 5));
        assert!(map.values().is_empty());
        assert_eq!(map.get(0, 0), None);
    }
}
