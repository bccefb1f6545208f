// src/random.rs
//
// Random source for thermal noise and Monte Carlo trial spins.
//
// The generator is an explicit handle rather than process-wide state: seed it
// once per run (or per test) and pass it to whatever needs randomness. Seeding
// and reseeding policy belong to the driver.

use std::f64::consts::PI;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 generator with the three primitives the kernels need.
#[derive(Debug, Clone)]
pub struct SpinRng {
    rng: ChaCha8Rng,
}

impl SpinRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform scalar in [0, 1).
    #[inline]
    pub fn single_random(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Fill `out` with independent standard normal samples (Box–Muller, both
    /// outputs of each pair used).
    pub fn gauss_random_vec(&mut self, out: &mut [f64]) {
        let mut pairs = out.chunks_exact_mut(2);
        for pair in &mut pairs {
            let (a, b) = self.box_muller();
            pair[0] = a;
            pair[1] = b;
        }
        if let [last] = pairs.into_remainder() {
            *last = self.box_muller().0;
        }
    }

    /// Fill `spin` (3N) with directions uniform on the unit sphere.
    pub fn random_spin_uniform(&mut self, spin: &mut [f64]) {
        debug_assert_eq!(spin.len() % 3, 0);
        self.gauss_random_vec(spin);
        for s in spin.chunks_exact_mut(3) {
            let inv = 1.0 / (s[0] * s[0] + s[1] * s[1] + s[2] * s[2]).sqrt();
            s[0] *= inv;
            s[1] *= inv;
            s[2] *= inv;
        }
    }

    fn box_muller(&mut self) -> (f64, f64) {
        let u1: f64 = self.rng.random::<f64>().max(1e-300); // ln(0)
        let u2: f64 = self.rng.random();
        let r = (-2.0 * u1.ln()).sqrt();
        let phi = 2.0 * PI * u2;
        (r * phi.cos(), r * phi.sin())
    }
}
