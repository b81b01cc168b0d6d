//! Property tests for descriptor sharing and the update step.

use proptest::prelude::*;
use snowfall_core::{Rgba, Viewport};
use snowfall_particles::*;
use std::collections::HashSet;
use std::sync::Arc;

/// Records every circle instead of drawing it
#[derive(Default)]
struct Recorder {
    calls: Vec<([f32; 2], f32, Rgba)>,
}

impl DrawSurface for Recorder {
    fn fill_circle(&mut self, center: [f32; 2], diameter: f32, color: Rgba) {
        self.calls.push((center, diameter, color));
    }
}

fn descriptor(cache: &mut FlyweightCache, diameter: u32) -> Arc<Descriptor> {
    cache
        .get_or_create(Shape::Circle, Rgba::WHITE, diameter)
        .unwrap()
}

proptest! {
    #[test]
    fn equal_requests_share_and_unequal_do_not(
        a1 in 0u8..=255, d1 in 1u32..64,
        a2 in 0u8..=255, d2 in 1u32..64,
    ) {
        let mut cache = FlyweightCache::new();
        let first = cache.get_or_create(Shape::Circle, Rgba::WHITE.with_alpha(a1), d1).unwrap();
        let again = cache.get_or_create(Shape::Circle, Rgba::WHITE.with_alpha(a1), d1).unwrap();
        let second = cache.get_or_create(Shape::Circle, Rgba::WHITE.with_alpha(a2), d2).unwrap();

        prop_assert!(Arc::ptr_eq(&first, &again));
        prop_assert_eq!(Arc::ptr_eq(&first, &second), (a1, d1) == (a2, d2));
    }

    #[test]
    fn cache_growth_is_bounded(
        seed in any::<u32>(),
        count in 1usize..400,
        sizes in 1u32..6,
        alphas in 1u32..6,
    ) {
        let config = SnowfallConfig {
            count,
            diameter_min: 5,
            diameter_max: 5 + sizes,
            alpha_min: 150,
            alpha_max: 150 + alphas,
            ..SnowfallConfig::default()
        };
        let mut cache = FlyweightCache::new();
        let mut rng = ParticleRng::new(seed);
        let store = ParticleStore::populate(&config, Viewport::new(200, 200), &mut cache, &mut rng).unwrap();

        prop_assert_eq!(store.len(), count);
        prop_assert!(cache.len() <= count.min((sizes * alphas) as usize));

        let distinct: HashSet<DescriptorKey> = store.iter().map(|p| p.descriptor().key()).collect();
        prop_assert_eq!(distinct.len(), cache.len());
    }

    #[test]
    fn wrap_invariant_holds(
        rows in prop::collection::vec((-600.0f32..700.0, 1.0f32..4.0), 0..64),
        height in 1u32..600,
    ) {
        let mut cache = FlyweightCache::new();
        let d = descriptor(&mut cache, 8);
        let mut particles: Vec<Particle> = rows
            .iter()
            .enumerate()
            .map(|(i, &(y, speed))| Particle::new(i as f32, y, speed, d.clone()))
            .collect();
        let before = particles.clone();

        let wrapped = advance(&mut particles, height as f32);

        let mut expected_wraps = 0;
        for (pre, post) in before.iter().zip(&particles) {
            let moved = pre.y() + pre.speed();
            if moved > height as f32 {
                prop_assert_eq!(post.y(), RESET_Y);
                expected_wraps += 1;
            } else {
                prop_assert_eq!(post.y(), moved);
            }
            prop_assert_eq!(post.x(), pre.x());
            prop_assert_eq!(post.speed(), pre.speed());
            prop_assert!(Arc::ptr_eq(post.descriptor(), pre.descriptor()));
        }
        prop_assert_eq!(wrapped, expected_wraps);
        prop_assert_eq!(particles.len(), before.len());
    }

    #[test]
    fn render_visits_each_particle_once(seed in any::<u32>(), count in 1usize..300) {
        let config = SnowfallConfig { count, ..SnowfallConfig::default() };
        let mut cache = FlyweightCache::new();
        let mut rng = ParticleRng::new(seed);
        let store = ParticleStore::populate(&config, Viewport::new(640, 480), &mut cache, &mut rng).unwrap();

        let mut surface = Recorder::default();
        prop_assert_eq!(render(store.as_slice(), &mut surface), count);
        prop_assert_eq!(surface.calls.len(), count);
        for (&(center, diameter, color), p) in surface.calls.iter().zip(store.iter()) {
            prop_assert_eq!(center, [p.x(), p.y()]);
            prop_assert_eq!(diameter, p.descriptor().diameter() as f32);
            prop_assert_eq!(color, p.descriptor().color());
        }
    }
}

#[test]
fn scenario_three_particles_in_100_by_200() {
    let mut cache = FlyweightCache::new();
    let d = descriptor(&mut cache, 10);
    let mut store = ParticleStore::from_particles(vec![
        Particle::new(10.0, 190.0, 5.0, d.clone()),
        Particle::new(50.0, 50.0, 3.0, d.clone()),
        Particle::new(90.0, 199.0, 2.0, d),
    ]);
    let viewport = Viewport::new(100, 200);

    advance(store.as_mut_slice(), viewport.height_f32());
    let ys: Vec<f32> = store.iter().map(|p| p.y()).collect();
    // 201 is strictly greater than the height
    assert_eq!(ys, vec![195.0, 53.0, RESET_Y]);

    advance(store.as_mut_slice(), viewport.height_f32());
    let ys: Vec<f32> = store.iter().map(|p| p.y()).collect();
    // 200 is not
    assert_eq!(ys, vec![200.0, 56.0, -8.0]);

    advance(store.as_mut_slice(), viewport.height_f32());
    let ys: Vec<f32> = store.iter().map(|p| p.y()).collect();
    assert_eq!(ys, vec![RESET_Y, 59.0, -6.0]);
}
