//! Shading normalized heights into a 16-bit grayscale image.

use image::{ImageBuffer, Luma};

use crate::heightmap::Heightmap;

/// Evenly spaced contour lines over normalized height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contours {
    /// Normalized height between lines
    pub interval: f64,
    /// Normalized thickness of each line
    pub width: f64,
}

/// Post-processing from normalized height to gray level.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Shading {
    /// Heights below this render black
    pub water_level: Option<f64>,
    pub contours: Option<Contours>,
}

impl Shading {
    /// Plain grayscale, no water or contours.
    pub const FLAT: Self = Self {
        water_level: None,
        contours: None,
    };

    /// Gray level in `[0, 1]` for normalized height `h`.
    #[inline]
    pub fn shade(&self, h: f64) -> f64 {
        if let Some(level) = self.water_level {
            if h < level {
                return 0.0;
            }
        }
        if let Some(Contours { interval, width }) = self.contours {
            if interval > 0.0 && h.rem_euclid(interval) < width {
                return 0.0;
            }
        }
        h
    }
}

/// Renders `map` as a 16-bit grayscale image.
pub fn grayscale(map: &Heightmap, shading: &Shading) -> ImageBuffer<Luma<u16>, Vec<u16>> {
    let width = map.width() as usize;
    let values = map.values();
    ImageBuffer::from_fn(map.width(), map.height(), |px, py| {
        let h = map.normalize(values[py as usize * width + px as usize]);
        Luma([level(shading.shade(h))])
    })
}

#[inline]
fn level(gray: f64) -> u16 {
    (gray.clamp(0.0, 1.0) * u16::MAX as f64).round() as u16
}
