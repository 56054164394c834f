//! Raster and shading configuration.

use std::path::PathBuf;

use glam::DVec2;

use crate::heightmap::Viewport;
use crate::render::{Contours, Shading};

/// Reference image width (pixels)
pub const IMAGE_WIDTH: u32 = 2560;

/// Reference image height (pixels)
pub const IMAGE_HEIGHT: u32 = 1440;

/// Pixels per lattice unit at the first octave.
/// 305.1 puts roughly 8 lattice cells across the reference width.
pub const PIXELS_PER_UNIT: f64 = 305.1;

/// Noise-plane coordinate of the top-left pixel (both axes)
pub const ORIGIN: f64 = -5.0;

/// Normalized height below which terrain renders as water (black)
pub const WATER_LEVEL: f64 = 0.4;

/// Normalized height between contour lines
pub const CONTOUR_INTERVAL: f64 = 0.1;

/// Normalized thickness of each contour line
pub const CONTOUR_WIDTH: f64 = 0.001;

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Pixel grid and its placement on the noise plane
    pub viewport: Viewport,

    /// Post-processing applied to normalized heights
    pub shading: Shading,

    /// Output PNG path
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport {
                width: IMAGE_WIDTH,
                height: IMAGE_HEIGHT,
                scale: 1.0 / PIXELS_PER_UNIT,
                origin: DVec2::splat(ORIGIN),
            },
            shading: Shading {
                water_level: Some(WATER_LEVEL),
                contours: Some(Contours {
                    interval: CONTOUR_INTERVAL,
                    width: CONTOUR_WIDTH,
                }),
            },
            output: PathBuf::from("out.png"),
        }
    }
}
