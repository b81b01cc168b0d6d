//! Per-snowflake state and the fixed-size store that owns it

use crate::cache::FlyweightCache;
use crate::config::SnowfallConfig;
use crate::descriptor::{Descriptor, Shape};
use crate::rand::ParticleRng;
use snowfall_core::{Result, Rgba, SnowfallError, Viewport};
use std::sync::Arc;

/// One falling snowflake. Position and speed are its own; looks are shared.
#[derive(Debug, Clone)]
pub struct Particle {
    x: f32,
    pub(crate) y: f32,
    speed: f32,
    descriptor: Arc<Descriptor>,
}

impl Particle {
    pub fn new(x: f32, y: f32, speed: f32, descriptor: Arc<Descriptor>) -> Self {
        Self {
            x,
            y,
            speed,
            descriptor,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Vertical distance travelled per tick
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn descriptor(&self) -> &Arc<Descriptor> {
        &self.descriptor
    }
}

/// Fixed collection of particles; its length never changes after construction.
#[derive(Debug, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Create `config.count` particles scattered above the viewport.
    ///
    /// Each particle draws a diameter and alpha, gets its descriptor from
    /// `cache`, then draws x across the viewport width, a start y above the
    /// top edge, and a speed.
    pub fn populate(
        config: &SnowfallConfig,
        viewport: Viewport,
        cache: &mut FlyweightCache,
        rng: &mut ParticleRng,
    ) -> Result<Self> {
        config.validate()?;
        if viewport.is_empty() {
            return Err(SnowfallError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let mut particles = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            let diameter = rng.range_i32(config.diameter_min as i32, config.diameter_max as i32);
            let alpha = rng.range_i32(config.alpha_min as i32, config.alpha_max as i32);
            let color = Rgba::from_argb(alpha as u8, 255, 255, 255);
            let descriptor = cache.get_or_create(Shape::Circle, color, diameter as u32)?;

            let x = rng.range_i32(0, viewport.width as i32) as f32;
            let y = rng.range_i32(config.spawn_y_min, config.spawn_y_max) as f32;
            let speed = rng.range(config.speed_min, config.speed_max);

            particles.push(Particle::new(x, y, speed, descriptor));
        }

        tracing::info!(
            particles = particles.len(),
            descriptors = cache.len(),
            "populated snowfall"
        );
        Ok(Self { particles })
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable view for the update step; the slice cannot grow or shrink
    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

impl<'a> IntoIterator for &'a ParticleStore {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
