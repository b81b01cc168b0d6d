//! Projection of particles onto a drawing surface

use crate::particle::Particle;
use snowfall_core::Rgba;

/// Anything that can fill a circle. The GPU batch is the main implementor.
pub trait DrawSurface {
    /// Fill a circle of `diameter` pixels centered at `center`
    fn fill_circle(&mut self, center: [f32; 2], diameter: f32, color: Rgba);
}

/// Draw every particle once through its shared descriptor.
///
/// Returns the number of draw calls issued.
pub fn render(particles: &[Particle], surface: &mut dyn DrawSurface) -> usize {
    for particle in particles {
        particle
            .descriptor()
            .draw(surface, particle.x(), particle.y());
    }
    particles.len()
}


#[cfg(test)]
mod tests {
    use super::recording::RecordingSurface;
    use super::*;
    use crate::cache::FlyweightCache;
    use crate::descriptor::Shape;

    #[test]
    fn one_call_per_particle_with_descriptor_looks() {
        let mut cache = FlyweightCache::new();
        let small = cache
            .get_or_create(Shape::Circle, Rgba::WHITE.with_alpha(150), 5)
            .unwrap();
        let large = cache
            .get_or_create(Shape::Circle, Rgba::WHITE.with_alpha(250), 14)
            .unwrap();
        let particles = vec![
            Particle::new(10.0, 20.0, 1.0, small.clone()),
            Particle::new(30.0, -40.0, 2.0, large.clone()),
            Particle::new(50.0, 60.0, 3.0, small.clone()),
        ];

        let mut surface = RecordingSurface::new();
        let issued = render(&particles, &mut surface);

        assert_eq!(issued, 3);
        assert_eq!(surface.calls.len(), 3);
        for (call, p) in surface.calls.iter().zip(&particles) {
            assert_eq!(call.center, [p.x(), p.y()]);
            assert_eq!(call.diameter, p.descriptor().diameter() as f32);
            assert_eq!(call.color, p.descriptor().color());
        }
    }

    #[test]
    fn render_does_not_mutate() {
        let mut cache = FlyweightCache::new();
        let d = cache
            .get_or_create(Shape::Circle, Rgba::WHITE, 6)
            .unwrap();
        let particles = vec![Particle::new(1.0, 2.0, 3.0, d)];
        let mut surface = RecordingSurface::new();
        render(&particles, &mut surface);
        render(&particles, &mut surface);
        assert_eq!(particles[0].y(), 2.0);
        assert_eq!(surface.calls[0], surface.calls[1]);
    }

    #[test]
    fn empty_store_draws_nothing() {
        let mut surface = RecordingSurface::new();
        assert_eq!(render(&[], &mut surface), 0);
        assert!(surface.calls.is_empty());
    }
}
