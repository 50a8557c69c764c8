use std::time::Instant;

use binpack::entities::{Packer, PickStrategy, Space};
use binpack::{PackError, Result};
use log::{debug, info};
use rand::Rng;
use thousands::Separable;

/// Monte-Carlo search over pick orders: packs `attempts` copies of `packer` with [`PickStrategy::Shuffle`]
/// and returns the one with the highest fill ratio. Ties keep the earliest attempt.
///
/// `packer` itself is left unpacked.
pub fn shuffle_pack<S: Space, P>(
    packer: &Packer<S, P>,
    attempts: usize,
    rng: &mut impl Rng,
) -> Result<Packer<S, P>> {
    if attempts < 1 {
        return Err(PackError::InvalidAttempts);
    }
    let start = Instant::now();

    let mut best = packer.copy()?;
    best.pack(PickStrategy::Shuffle, rng)?;
    let mut best_ratio = best.fill_ratio();
    for attempt in 1..attempts {
        let mut candidate = packer.copy()?;
        candidate.pack(PickStrategy::Shuffle, rng)?;
        let ratio = candidate.fill_ratio();
        if ratio > best_ratio {
            debug!("[SHUFFLE] attempt {attempt} improved fill ratio to {ratio:.4}");
            best_ratio = ratio;
            best = candidate;
        }
    }

    info!(
        "[SHUFFLE] best fill ratio {:.4} after {} attempts in {:.3}ms",
        best_ratio,
        attempts.separate_with_commas(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(best)
}
