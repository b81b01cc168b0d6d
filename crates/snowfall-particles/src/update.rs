//! Per-tick position update with wrap-to-top

use crate::particle::Particle;

/// Y a particle re-enters at after falling past the bottom edge
pub const RESET_Y: f32 = -10.0;

/// Move every particle down by its speed. A particle whose new y is strictly
/// greater than `viewport_height` jumps back to `RESET_Y`.
///
/// Returns how many particles wrapped this tick.
pub fn advance(particles: &mut [Particle], viewport_height: f32) -> usize {
    advance_with_reset(particles, viewport_height, RESET_Y)
}

/// `advance` with a custom re-entry height
pub fn advance_with_reset(particles: &mut [Particle], viewport_height: f32, reset_y: f32) -> usize {
    let mut wrapped = 0;
    for particle in particles.iter_mut() {
        particle.y += particle.speed();
        if particle.y > viewport_height {
            particle.y = reset_y;
            wrapped += 1;
        }
    }
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::FlyweightCache;
    use crate::descriptor::Shape;
    use snowfall_core::Rgba;

    fn particles(pairs: &[(f32, f32)]) -> Vec<Particle> {
        let mut cache = FlyweightCache::new();
        let d = cache
            .get_or_create(Shape::Circle, Rgba::WHITE, 8)
            .unwrap();
        pairs
            .iter()
            .enumerate()
            .map(|(i, &(y, speed))| Particle::new(i as f32 * 10.0, y, speed, d.clone()))
            .collect()
    }

    fn ys(particles: &[Particle]) -> Vec<f32> {
        particles.iter().map(|p| p.y()).collect()
    }

    #[test]
    fn three_tick_scenario_with_strict_boundary() {
        let mut ps = particles(&[(190.0, 5.0), (50.0, 3.0), (199.0, 2.0)]);

        // 199 + 2 == 201 is past the edge on the first tick
        let wrapped = advance(&mut ps, 200.0);
        assert_eq!(ys(&ps), vec![195.0, 53.0, RESET_Y]);
        assert_eq!(wrapped, 1);

        // 195 + 5 == 200 is not past the edge
        let wrapped = advance(&mut ps, 200.0);
        assert_eq!(ys(&ps), vec![200.0, 56.0, -8.0]);
        assert_eq!(wrapped, 0);

        let wrapped = advance(&mut ps, 200.0);
        assert_eq!(ys(&ps), vec![RESET_Y, 59.0, -6.0]);
        assert_eq!(wrapped, 1);
    }

    #[test]
    fn x_and_speed_untouched() {
        let mut ps = particles(&[(0.0, 1.5), (300.0, 2.5)]);
        let before: Vec<(f32, f32)> = ps.iter().map(|p| (p.x(), p.speed())).collect();
        advance(&mut ps, 100.0);
        let after: Vec<(f32, f32)> = ps.iter().map(|p| (p.x(), p.speed())).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn custom_reset_height() {
        let mut ps = particles(&[(99.0, 2.0)]);
        advance_with_reset(&mut ps, 100.0, -42.0);
        assert_eq!(ps[0].y(), -42.0);
    }

    #[test]
    fn empty_slice_is_noop() {
        let mut ps: Vec<Particle> = Vec::new();
        assert_eq!(advance(&mut ps, 100.0), 0);
    }
}
