//! Lightweight xorshift32 PRNG

pub struct ParticleRng {
    state: u32,
}

impl ParticleRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Seed from the wall clock
    pub fn from_entropy() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
            .unwrap_or(0xDEAD_BEEF);
        Self::new(nanos)
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Returns a float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        // 24 bits fit the f32 mantissa exactly, so 1.0 is unreachable
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Returns a float in [min, max)
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Returns an integer in [min, max). Returns `min` when the range is empty.
    pub fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = (max as i64 - min as i64) as u64;
        let offset = (self.next_u32() as u64 * span) >> 32;
        (min as i64 + offset as i64) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_range_bounds() {
        let mut rng = ParticleRng::new(42);
        for _ in 0..1000 {
            let v = rng.range(0.0, 10.0);
            assert!((0.0..10.0).contains(&v));
        }
    }

    #[test]
    fn next_f32_never_reaches_one() {
        let mut rng = ParticleRng::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn integer_range_is_half_open() {
        let mut rng = ParticleRng::new(123);
        let mut seen_min = false;
        for _ in 0..5000 {
            let v = rng.range_i32(5, 15);
            assert!((5..15).contains(&v));
            seen_min |= v == 5;
        }
        assert!(seen_min);
    }

    #[test]
    fn integer_range_negative_span() {
        let mut rng = ParticleRng::new(99);
        for _ in 0..1000 {
            let v = rng.range_i32(-500, 0);
            assert!((-500..0).contains(&v));
        }
    }

    #[test]
    fn empty_integer_range_returns_min() {
        let mut rng = ParticleRng::new(1);
        assert_eq!(rng.range_i32(3, 3), 3);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ParticleRng::new(0xDEAD_BEEF);
        let mut b = ParticleRng::new(0xDEAD_BEEF);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn zero_seed_is_not_stuck() {
        let mut rng = ParticleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }
}
