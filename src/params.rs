//! Parameter definitions with units and documented semantics.
//!
//! All magic numbers are extracted here with:
//! - Units (lattice cells, pixels, normalized height)
//! - Documented ranges and meanings
//! - The reference values the terrain was tuned with

mod fractal;
mod lattice;
mod render;

// Re-export all types
pub use fractal::{COS_ANGLE, GOLDEN_RATIO, OCTAVES, SIN_ANGLE};
pub use lattice::{LatticeConfig, DEFAULT_SHIFT, MAX_SHIFT};
pub use render::{
    RenderConfig, CONTOUR_INTERVAL, CONTOUR_WIDTH, IMAGE_HEIGHT, IMAGE_WIDTH, ORIGIN,
    PIXELS_PER_UNIT, WATER_LEVEL,
};
