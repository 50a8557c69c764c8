use binpack::{PackError, Result};
use log::debug;
use rand::Rng;
use rand_distr::Distribution;
use rand_distr::weighted::WeightedIndex;

/// Fitness-proportionate sampler over the genes of one generation.
///
/// Each gene is drawn with probability `weight / total weight`.
/// If the weights do not define a distribution (all zero, negative or NaN), all genes are equally likely.
pub struct WheelOfFortune<'a, T> {
    genes: &'a [T],
    sectors: Sectors,
}

enum Sectors {
    Weighted(WeightedIndex<f64>),
    Uniform,
}

impl<'a, T> WheelOfFortune<'a, T> {
    pub fn new(genes: &'a [T], weights: impl IntoIterator<Item = f64>) -> Result<Self> {
        if genes.is_empty() {
            return Err(PackError::EmptyPopulation);
        }
        let weights = weights.into_iter().collect::<Vec<_>>();
        debug_assert!(weights.len() == genes.len());
        let sectors = match WeightedIndex::new(&weights) {
            Ok(index) => Sectors::Weighted(index),
            Err(err) => {
                debug!("[GA] falling back to uniform selection: {err}");
                Sectors::Uniform
            }
        };
        Ok(WheelOfFortune { genes, sectors })
    }

    /// Draws a single gene, with replacement
    pub fn spin(&self, rng: &mut impl Rng) -> &'a T {
        let index = match &self.sectors {
            Sectors::Weighted(index) => index.sample(rng),
            Sectors::Uniform => rng.random_range(0..self.genes.len()),
        };
        &self.genes[index]
    }

    /// Draws two genes, with replacement
    pub fn spin_pair(&self, rng: &mut impl Rng) -> (&'a T, &'a T) {
        (self.spin(rng), self.spin(rng))
    }
}
