/// xorshift64 generator. Owned per starfield so generation is reproducible
/// when seeded explicitly.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng { state: if seed == 0 { 1 } else { seed } }
    }

    /// Seed once from `Math.random` (avoids JS interop on every draw)
    pub fn from_js() -> Self {
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        Rng::new(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in [0, max)
    pub fn below(&mut self, max: f64) -> f64 {
        self.next_f64() * max
    }

    /// Uniform integer in [lo, hi]
    pub fn int_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        let span = (hi - lo + 1) as f64;
        (lo + (self.next_f64() * span).floor() as i32).min(hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seed_does_not_stick() {
        let mut rng = Rng::new(0);
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn unit_range() {
        let mut rng = Rng::new(42);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "{v}");
        }
    }

    #[test]
    fn int_range_hits_both_ends() {
        let mut rng = Rng::new(7);
        let mut seen_lo = false;
        let mut seen_hi = false;
        for _ in 0..20_000 {
            let v = rng.int_inclusive(-25, 25);
            assert!((-25..=25).contains(&v));
            seen_lo |= v == -25;
            seen_hi |= v == 25;
        }
        assert!(seen_lo && seen_hi);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Rng::new(99);
        let mut b = Rng::new(99);
        for _ in 0..100 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }
}
