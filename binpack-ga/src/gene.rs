use std::fmt::{Display, Formatter};

use binpack::{PackError, Result};
use itertools::Itertools;
use rand::Rng;

/// Chromosome of the genetic solver: one pick value in `[0, 1]` per item, see [`binpack::schematic`].
///
/// The fitness is the fill ratio reached by packing with the gene as item schema.
/// It is cached until the data changes.
#[derive(Clone, Debug, Default)]
pub struct Gene {
    data: Vec<f64>,
    fitness: Option<f64>,
}

impl Gene {
    /// Gene of `len` identical values
    pub fn new(len: usize, value: f64) -> Result<Self> {
        check_value(value)?;
        Ok(Gene {
            data: vec![value; len],
            fitness: None,
        })
    }

    /// Gene of `len` uniformly distributed values
    pub fn random(len: usize, rng: &mut impl Rng) -> Self {
        Gene {
            data: (0..len).map(|_| rng.random::<f64>()).collect(),
            fitness: None,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// `None` if the gene was not evaluated since its last change
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    pub(crate) fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    /// Invalidates the cached fitness
    pub fn taint(&mut self) {
        self.fitness = None;
    }

    /// Replaces all values, the length of the gene cannot change.
    pub fn reset(&mut self, values: impl IntoIterator<Item = f64>) -> Result<()> {
        let values = values.into_iter().collect_vec();
        if values.len() != self.len() {
            return Err(PackError::GeneLengthMismatch {
                expected: self.len(),
                found: values.len(),
            });
        }
        values.iter().try_for_each(|&v| check_value(v))?;
        self.data = values;
        self.taint();
        Ok(())
    }

    /// Reflects every value with probability `rate`.
    pub fn mutate(&mut self, rate: f64, rng: &mut impl Rng) {
        for index in 0..self.len() {
            if rng.random::<f64>() < rate {
                self.mutate_at(index);
            }
        }
    }

    /// Reflects the value at `index` to `1 - value`.
    ///
    /// # Panics
    /// If `index` is out of bounds.
    pub fn mutate_at(&mut self, index: usize) {
        self.data[index] = 1.0 - self.data[index];
        self.taint();
    }

    /// Overwrites the first `part.len()` values.
    pub fn replace_front(&mut self, part: &[f64]) -> Result<()> {
        let n = self.check_part(part)?;
        self.data[..n].copy_from_slice(part);
        self.taint();
        Ok(())
    }

    /// Overwrites the last `part.len()` values.
    pub fn replace_back(&mut self, part: &[f64]) -> Result<()> {
        let n = self.check_part(part)?;
        let start = self.len() - n;
        self.data[start..].copy_from_slice(part);
        self.taint();
        Ok(())
    }

    fn check_part(&self, part: &[f64]) -> Result<usize> {
        if part.len() > self.len() {
            return Err(PackError::GeneLengthMismatch {
                expected: self.len(),
                found: part.len(),
            });
        }
        part.iter().try_for_each(|&v| check_value(v))?;
        Ok(part.len())
    }
}

fn check_value(value: f64) -> Result<()> {
    match (0.0..=1.0).contains(&value) {
        true => Ok(()),
        false => Err(PackError::GeneValueOutOfRange(value)),
    }
}

/// Only the data is compared, not the fitness
impl PartialEq for Gene {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Display for Gene {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let values = self.data.iter().map(|v| format!("{v:.4}")).join(", ");
        match self.fitness {
            Some(fitness) => write!(f, "[{values}], fitness: {fitness:.4}"),
            None => write!(f, "[{values}], fitness: None"),
        }
    }
}

/// Single-point crossover: the genes exchange all values from `index` onwards.
///
/// Index 0 swaps the entire contents, any index at or past the length leaves both genes untouched.
pub fn recombine_genes(a: &mut Gene, b: &mut Gene, index: usize) -> Result<()> {
    if a.len() != b.len() {
        return Err(PackError::GeneLengthMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    if index < a.len() {
        a.data[index..].swap_with_slice(&mut b.data[index..]);
        a.taint();
        b.taint();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutation_reflects() {
        let mut gene = Gene::new(3, 0.25).unwrap();
        gene.set_fitness(0.5);
        gene.mutate_at(1);
        assert_eq!(gene.values(), &[0.25, 0.75, 0.25]);
        assert_eq!(gene.fitness(), None);
    }

    #[test]
    fn partial_replacement() {
        let mut gene = Gene::new(4, 0.0).unwrap();
        gene.replace_front(&[1.0]).unwrap();
        gene.replace_back(&[0.5, 0.5]).unwrap();
        assert_eq!(gene.values(), &[1.0, 0.0, 0.5, 0.5]);
        assert!(gene.replace_back(&[0.0; 5]).is_err());
        assert!(gene.replace_front(&[2.0]).is_err());
    }

    #[test]
    fn display() {
        let mut gene = Gene::new(2, 0.5).unwrap();
        assert_eq!(gene.to_string(), "[0.5000, 0.5000], fitness: None");
        gene.set_fitness(0.25);
        assert_eq!(gene.to_string(), "[0.5000, 0.5000], fitness: 0.2500");
    }
}
