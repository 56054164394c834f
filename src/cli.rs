//! Command-line argument parsing.

use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::Parser;
use glam::DVec2;

use hyperterrain::params::{
    LatticeConfig, RenderConfig, CONTOUR_INTERVAL, CONTOUR_WIDTH, DEFAULT_SHIFT, IMAGE_HEIGHT,
    IMAGE_WIDTH, ORIGIN, PIXELS_PER_UNIT, WATER_LEVEL,
};
use hyperterrain::{Contours, Interpolation, Shading, Viewport};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "hyperterrain")]
#[command(about = "Render periodic value-noise terrain to a 16-bit PNG", long_about = None)]
pub struct Args {
    /// Image width (pixels)
    #[arg(long, value_name = "PIXELS", default_value_t = IMAGE_WIDTH)]
    pub width: u32,

    /// Image height (pixels)
    #[arg(long, value_name = "PIXELS", default_value_t = IMAGE_HEIGHT)]
    pub height: u32,

    /// Lattice side as a power of two
    #[arg(long, value_name = "SHIFT", default_value_t = DEFAULT_SHIFT)]
    pub shift: u32,

    /// Lattice seed (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Interpolation kernel
    #[arg(long, value_enum, default_value_t = Interpolation::Cubic)]
    pub interpolation: Interpolation,

    /// Store lattice cells as 16.16 fixed-point
    #[arg(long)]
    pub fixed_point: bool,

    /// Noise-plane units per pixel [default: 1/305.1]
    #[arg(long, value_name = "UNITS")]
    pub scale: Option<f64>,

    /// Noise-plane coordinate of the top-left pixel
    #[arg(
        long,
        value_name = "X,Y",
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = [ORIGIN, ORIGIN]
    )]
    pub origin: Vec<f64>,

    /// Normalized height below which terrain is water
    #[arg(long, value_name = "HEIGHT", default_value_t = WATER_LEVEL)]
    pub water_level: f64,

    /// Normalized height between contour lines
    #[arg(long, value_name = "HEIGHT", default_value_t = CONTOUR_INTERVAL)]
    pub contour_interval: f64,

    /// Normalized thickness of contour lines
    #[arg(long, value_name = "HEIGHT", default_value_t = CONTOUR_WIDTH)]
    pub contour_width: f64,

    /// Plain grayscale: no water, no contours
    #[arg(long)]
    pub flat: bool,

    /// Output PNG path
    #[arg(short, long, default_value = "out.png")]
    pub output: PathBuf,
}

impl Args {
    pub fn lattice_config(&self) -> LatticeConfig {
        LatticeConfig {
            shift: self.shift,
            seed: self.seed,
            interpolation: self.interpolation,
            fixed_point: self.fixed_point,
        }
    }

    pub fn render_config(&self) -> Result<RenderConfig> {
        let scale = self.scale.unwrap_or(1.0 / PIXELS_PER_UNIT);
        ensure!(
            scale.is_finite() && scale > 0.0,
            "--scale must be positive, got {scale}"
        );
        ensure!(
            self.origin.len() == 2,
            "--origin takes exactly two values, got {}",
            self.origin.len()
        );

        let shading = if self.flat {
            Shading::FLAT
        } else {
            Shading {
                water_level: Some(self.water_level),
                contours: Some(Contours {
                    interval: self.contour_interval,
                    width: self.contour_width,
                }),
            }
        };

        Ok(RenderConfig {
            viewport: Viewport {
                width: self.width,
                height: self.height,
                scale,
                origin: DVec2::new(self.origin[0], self.origin[1]),
            },
            shading,
            output: self.output.clone(),
        })
    }
}
