//! Hyperterrain - renders periodic value-noise terrain to a 16-bit PNG.

mod cli;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Args;
use hyperterrain::params::LatticeConfig;
use hyperterrain::{
    render, Fractal, Heightmap, LatticeBuilder, Sampler, Scalar, Viewport, F16,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let lattice_config = args.lattice_config();
    let render_config = args.render_config()?;

    let seed = lattice_config.seed.unwrap_or_else(rand::random);
    log::info!(
        "lattice 2^{} ({:?}{}), seed {seed}",
        lattice_config.shift,
        lattice_config.interpolation,
        if lattice_config.fixed_point { ", fixed-point" } else { "" }
    );

    let started = Instant::now();
    let map = if lattice_config.fixed_point {
        generate::<F16>(&lattice_config, seed, &render_config.viewport)?
    } else {
        generate::<f64>(&lattice_config, seed, &render_config.viewport)?
    };
    log::info!(
        "rendered {}x{} in {:.2?}",
        map.width(),
        map.height(),
        started.elapsed()
    );

    let image = render::grayscale(&map, &render_config.shading);
    image
        .save(&render_config.output)
        .with_context(|| format!("writing {}", render_config.output.display()))?;
    log::info!("wrote {}", render_config.output.display());

    Ok(())
}

/// Fills a lattice of cell type `C` and samples its fractal over `viewport`.
fn generate<C: Scalar>(config: &LatticeConfig, seed: u64, viewport: &Viewport) -> Result<Heightmap> {
    let size = config.size().context("invalid lattice size")?;
    let lattice = LatticeBuilder::new(size).fill_seeded::<C>(seed);
    let fractal = Fractal::from_sampler(Sampler::new(lattice, config.interpolation));
    Ok(Heightmap::sample(&fractal, viewport))
}
