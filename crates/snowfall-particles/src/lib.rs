//! Snowfall Particles - flyweight snowflake simulation
//!
//! Provides the whole animation model:
//! - `FlyweightCache` interning immutable `Descriptor`s by shape, color and size
//! - `ParticleStore` of mutable particles sharing those descriptors
//! - `advance` moving particles down with wrap-to-top
//! - `render` projecting particles onto any `DrawSurface`

pub mod cache;
pub mod config;
pub mod descriptor;
pub mod particle;
pub mod rand;
pub mod render;
pub mod update;

use snowfall_core::{Result, SnowfallError, Viewport};
use snowfall_runtime::RuntimeSystem;

pub use cache::FlyweightCache;
pub use config::{SnowfallConfig, MAX_PARTICLES};
pub use descriptor::{Descriptor, DescriptorKey, Shape};
pub use particle::{Particle, ParticleStore};
pub use rand::ParticleRng;
pub use render::{render, DrawSurface};
pub use update::{advance, advance_with_reset, RESET_Y};

/// The snowfall system, ticked by the animation loop through `RuntimeSystem`.
pub struct SnowfallSystem {
    config: SnowfallConfig,
    cache: FlyweightCache,
    store: ParticleStore,
    rng: ParticleRng,
    viewport: Viewport,
    initialized: bool,
}

impl SnowfallSystem {
    pub fn new(config: SnowfallConfig, rng: ParticleRng) -> Self {
        Self {
            config,
            cache: FlyweightCache::new(),
            store: ParticleStore::default(),
            rng,
            viewport: Viewport::default(),
            initialized: false,
        }
    }

    pub fn config(&self) -> &SnowfallConfig {
        &self.config
    }

    pub fn cache(&self) -> &FlyweightCache {
        &self.cache
    }

    pub fn particles(&self) -> &ParticleStore {
        &self.store
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Draw the current frame
    pub fn draw(&self, surface: &mut dyn DrawSurface) -> usize {
        render(self.store.as_slice(), surface)
    }
}

impl Default for SnowfallSystem {
    fn default() -> Self {
        Self::new(SnowfallConfig::default(), ParticleRng::from_entropy())
    }
}

impl RuntimeSystem for SnowfallSystem {
    fn initialize(&mut self, viewport: Viewport) -> Result<()> {
        self.store =
            ParticleStore::populate(&self.config, viewport, &mut self.cache, &mut self.rng)?;
        self.viewport = viewport;
        self.initialized = true;
        Ok(())
    }

    fn tick(&mut self, viewport: Viewport) -> Result<()> {
        if !self.initialized {
            return Err(SnowfallError::ConfigError(
                "snowfall ticked before initialization".to_string(),
            ));
        }
        self.viewport = viewport;
        let wrapped = advance_with_reset(
            self.store.as_mut_slice(),
            viewport.height_f32(),
            self.config.reset_y,
        );
        if wrapped > 0 {
            tracing::trace!(wrapped, "particles re-entered at top");
        }
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> Result<()> {
        // Existing particles keep their x; only the wrap height follows the window
        self.viewport = viewport;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        tracing::info!(
            particles = self.store.len(),
            descriptors = self.cache.len(),
            "snowfall shut down"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "snowfall"
    }
}
