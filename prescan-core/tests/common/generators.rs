//! Seeded markup generators for test variations
//!
//! Uses seeded RNG for reproducibility. Print seed on failure for replay.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator for reproducible stochastic tests
pub struct Gen {
    pub rng: StdRng,
    pub seed: u64,
}

impl Gen {
    /// Create with specific seed (for reproduction)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create from environment or random seed
    pub fn from_env_or_random() -> Self {
        let seed = std::env::var("PRESCAN_TEST_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(rand::random);
        Self::new(seed)
    }

    /// Geometric distribution: count until rand > alpha
    pub fn geometric(&mut self, alpha: f64) -> usize {
        let mut n = 0;
        while self.rng.gen::<f64>() < alpha {
            n += 1;
        }
        n
    }

    /// Random boolean with probability p
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    /// Random tag or attribute name, never starting with "meta"
    pub fn name(&mut self) -> Vec<u8> {
        loop {
            let len = 1 + self.geometric(0.7);
            let mut name = Vec::with_capacity(len);
            name.push(self.rng.gen_range(b'a'..=b'z'));
            let chars = b"abcdefghijklmnopqrstuvwxyz0123456789-";
            for _ in 1..len {
                name.push(chars[self.rng.gen_range(0..chars.len())]);
            }
            if !name.starts_with(b"meta") {
                return name;
            }
        }
    }

    /// Random bare attribute value (no spaces, quotes, or brackets)
    pub fn bare_value(&mut self) -> Vec<u8> {
        let len = 1 + self.geometric(0.8);
        let chars = b"abcdefghijklmnopqrstuvwxyz0123456789-_.;=";
        (0..len)
            .map(|_| chars[self.rng.gen_range(0..chars.len())])
            .collect()
    }

    /// Random text with no markup characters
    pub fn text(&mut self) -> Vec<u8> {
        let len = self.geometric(0.95);
        let chars = b"abcdefghijklmnopqrstuvwxyz ,.!?\n\t";
        (0..len)
            .map(|_| chars[self.rng.gen_range(0..chars.len())])
            .collect()
    }

    /// One complete, non-meta markup construct
    pub fn construct(&mut self) -> Vec<u8> {
        let mut out = Vec::new();
        match self.rng.gen_range(0..6) {
            0 => out.extend(self.text()),
            1 => {
                out.push(b'<');
                out.extend(self.name());
                for _ in 0..self.geometric(0.5) {
                    out.push(b' ');
                    out.extend(self.name());
                    if self.chance(0.7) {
                        out.push(b'=');
                        let value = self.bare_value();
                        match self.rng.gen_range(0..3) {
                            0 => out.extend(value),
                            1 => {
                                out.push(b'"');
                                out.extend(value);
                                out.extend(b" <x>");
                                out.push(b'"');
                            }
                            _ => {
                                out.push(b'\'');
                                out.extend(value);
                                out.push(b'\'');
                            }
                        }
                    }
                }
                out.push(b'>');
            }
            2 => {
                out.extend(b"</");
                out.extend(self.name());
                out.push(b'>');
            }
            3 => {
                out.extend(b"<!--");
                out.extend(self.text());
                out.extend(b"-->");
            }
            4 => out.extend(b"<!DOCTYPE html>"),
            _ => {
                out.extend(b"<?");
                out.extend(self.name());
                out.extend(b"?>");
            }
        }
        out
    }

    /// Several constructs in a row
    pub fn markup(&mut self) -> Vec<u8> {
        let count = self.geometric(0.8);
        let mut out = Vec::new();
        for _ in 0..count {
            out.extend(self.construct());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducibility() {
        let mut g1 = Gen::new(42);
        let mut g2 = Gen::new(42);

        for _ in 0..10 {
            assert_eq!(g1.markup(), g2.markup());
        }
    }

    #[test]
    fn test_names_avoid_meta() {
        let mut gen = Gen::new(7);
        for _ in 0..1000 {
            assert!(!gen.name().starts_with(b"meta"));
        }
    }
}
