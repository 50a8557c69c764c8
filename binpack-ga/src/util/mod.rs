use rand::SeedableRng;
use rand::prelude::SmallRng;

/// Deterministic PRNG if `seed` is defined, seeded from OS entropy otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}
