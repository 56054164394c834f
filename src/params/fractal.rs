//! Fractal compositor constants.
//!
//! These are chosen once to decorrelate successive octaves, not tuned per
//! call. The offset that goes with them depends on the lattice period and is
//! derived in [`crate::fractal::OctaveTransform::for_size`].

/// Octaves summed per fractal sample.
pub const OCTAVES: usize = 15;

/// Per-octave coordinate scale (the golden ratio).
///
/// Irrational, so no octave ever lines up with the lattice of another.
/// Amplitude shrinks by its reciprocal each octave.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Cosine of the per-octave rotation (about 111.2 degrees).
pub const COS_ANGLE: f64 = -0.362_374_890_080_480_1;

/// Sine of the per-octave rotation.
pub const SIN_ANGLE: f64 = 0.932_032_423_813_227_6;
