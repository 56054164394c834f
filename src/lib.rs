//! Hyperterrain library - periodic value-noise terrain
//!
//! A power-of-two lattice of random samples, read through a bilinear or
//! bicubic sampler that wraps toroidally, summed over golden-ratio octaves.

pub mod error;
pub mod fixed_point;
pub mod fractal;
pub mod heightmap;
pub mod lattice;
pub mod params;
pub mod render;
pub mod sampler;

pub use error::LatticeError;
pub use fixed_point::{F16, F32};
pub use fractal::{Fractal, OctaveTransform};
pub use heightmap::{Heightmap, Viewport};
pub use lattice::{Lattice, LatticeBuilder, LatticeSize, Scalar};
pub use render::{Contours, Shading};
pub use sampler::{Interpolation, NoiseField, Sampler};
