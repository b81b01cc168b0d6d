//! Render command: headless simulation captured to a PNG

use anyhow::{Context, Result};
use snowfall_core::Viewport;
use snowfall_particles::{ParticleRng, SnowfallSystem};
use snowfall_player::AppConfig;
use snowfall_render::{CircleBatch, HeadlessContext};
use snowfall_runtime::RuntimeSystem;

pub struct RenderArgs {
    pub config: AppConfig,
    pub output: String,
    pub ticks: u32,
}

pub fn run(args: RenderArgs) -> Result<()> {
    let AppConfig {
        seed,
        window,
        snowfall,
    } = args.config;
    let viewport = Viewport::new(window.width, window.height);

    let rng = seed.map(ParticleRng::new).unwrap_or_else(ParticleRng::from_entropy);
    let mut system = SnowfallSystem::new(snowfall, rng);
    system
        .initialize(viewport)
        .context("Failed to populate snowfall")?;
    for _ in 0..args.ticks {
        system.tick(viewport).context("Update step failed")?;
    }

    let mut ctx = pollster::block_on(HeadlessContext::new(viewport))
        .context("Failed to create headless render context")?;
    let mut batch = CircleBatch::new();
    let drawn = system.draw(&mut batch);
    let img = ctx
        .capture(&mut batch, window.background)
        .context("Failed to capture frame")?;
    img.save(&args.output)
        .with_context(|| format!("Failed to save image to {}", args.output))?;

    tracing::info!(
        output = %args.output,
        ticks = args.ticks,
        snowflakes = drawn,
        descriptors = system.cache().len(),
        "frame written"
    );
    Ok(())
}
