use std::time::{Duration, Instant};

use binpack::entities::{Packer, Space};
use binpack::{PackError, Result};
use itertools::Itertools;
use log::{debug, info, warn};
use ordered_float::OrderedFloat;
use rand::Rng;
use rand::prelude::SmallRng;
use thousands::Separable;

use crate::config::GaConfig;
use crate::gene::{Gene, recombine_genes};
use crate::wheel::WheelOfFortune;

/// Lifecycle of a [`GeneticSolver`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolverState {
    /// Genes can be added
    Initialized,
    Running,
    /// The target fitness was reached
    Converged,
    /// The maximum number of generations was evaluated
    Exhausted,
    /// The time limit was exceeded
    TimedOut,
}

impl SolverState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SolverState::Converged | SolverState::Exhausted | SolverState::TimedOut
        )
    }
}

/// Snapshot of a running solver, handed to the progress callback
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaProgress {
    /// Number of generations evaluated so far
    pub generation: usize,
    /// Best fitness found so far
    pub best_fitness: f64,
    /// Average fitness of the current generation
    pub avg_fitness: f64,
    pub elapsed: Duration,
}

struct Best<S: Space, P> {
    fitness: f64,
    gene: Gene,
    packer: Packer<S, P>,
}

/// Evolves item schemas for [`Packer::schematic_pack`] to maximize the fill ratio.
///
/// The population is seeded by the caller, with [`GeneticSolver::add_gene`] and [`GeneticSolver::add_random_genes`].
/// [`GeneticSolver::execute`] then runs the generation loop exactly once:
/// evaluate all genes with unknown fitness, stop if a terminal state is reached,
/// otherwise breed the next generation by fitness-proportionate selection, single-point crossover and mutation.
///
/// The best gene ever evaluated, together with its fitness and packed packer, is retained across generations.
pub struct GeneticSolver<S: Space, P> {
    /// Unpacked template, copied for every evaluation
    packer: Packer<S, P>,
    config: GaConfig,
    rng: SmallRng,
    genes: Vec<Gene>,
    gene_len: usize,
    state: SolverState,
    generation: usize,
    n_evaluations: usize,
    best: Option<Best<S, P>>,
}

impl<S: Space, P> GeneticSolver<S, P> {
    pub fn new(packer: Packer<S, P>, config: GaConfig, rng: SmallRng) -> Result<Self> {
        if packer.is_packed() {
            return Err(PackError::AlreadyPacked);
        }
        config.validate()?;
        let gene_len = packer.unfitted_items().len();
        Ok(GeneticSolver {
            packer,
            config,
            rng,
            genes: vec![],
            gene_len,
            state: SolverState::Initialized,
            generation: 0,
            n_evaluations: 0,
            best: None,
        })
    }

    /// Adds a gene to the initial population, its length must equal the number of items.
    pub fn add_gene(&mut self, gene: Gene) -> Result<()> {
        if self.is_executed() {
            return Err(PackError::AlreadyExecuted);
        }
        if gene.len() != self.gene_len {
            return Err(PackError::GeneLengthMismatch {
                expected: self.gene_len,
                found: gene.len(),
            });
        }
        self.genes.push(gene);
        Ok(())
    }

    /// Adds `count` genes with uniformly random values to the initial population.
    pub fn add_random_genes(&mut self, count: usize) -> Result<()> {
        for _ in 0..count {
            let gene = Gene::random(self.gene_len, &mut self.rng);
            self.add_gene(gene)?;
        }
        Ok(())
    }

    /// Runs the solver to completion and returns the terminal state it ended in.
    pub fn execute(&mut self) -> Result<SolverState> {
        self.run(None)
    }

    /// Like [`GeneticSolver::execute`], but reports progress to `feedback` between generations,
    /// at most once per [`GaConfig::feedback_interval_s`].
    /// Errors returned by `feedback` are logged and do not affect the search.
    pub fn execute_with_feedback(
        &mut self,
        feedback: &mut dyn FnMut(&GaProgress) -> anyhow::Result<()>,
    ) -> Result<SolverState> {
        self.run(Some(feedback))
    }

    fn run(
        &mut self,
        mut feedback: Option<&mut dyn FnMut(&GaProgress) -> anyhow::Result<()>>,
    ) -> Result<SolverState> {
        if self.is_executed() {
            return Err(PackError::AlreadyExecuted);
        }
        if self.genes.is_empty() {
            return Err(PackError::EmptyPopulation);
        }
        self.state = SolverState::Running;
        info!(
            "[GA] evolving {} genes of {} items for at most {} generations",
            self.genes.len(),
            self.gene_len,
            self.config.max_generations.separate_with_commas()
        );

        let start = Instant::now();
        let mut last_feedback = start;
        loop {
            self.evaluate()?;
            self.generation += 1;

            let best_fitness = self.best.as_ref().map_or(0.0, |b| b.fitness);
            let elapsed = start.elapsed();
            debug!(
                "[GA] generation {}: best fitness {:.4}, generation max {:.4}, avg {:.4}",
                self.generation,
                best_fitness,
                self.genes
                    .iter()
                    .filter_map(|g| g.fitness())
                    .map(OrderedFloat)
                    .max()
                    .map_or(0.0, |f| f.0),
                self.avg_fitness()
            );

            if best_fitness >= self.config.target_fitness {
                self.state = SolverState::Converged;
            } else if self
                .config
                .time_limit_s
                .is_some_and(|limit| elapsed.as_secs_f64() > limit)
            {
                self.state = SolverState::TimedOut;
            } else if self.generation >= self.config.max_generations {
                self.state = SolverState::Exhausted;
            }
            if self.state.is_terminal() {
                break;
            }

            if let Some(feedback) = feedback.as_deref_mut() {
                if last_feedback.elapsed().as_secs_f64() >= self.config.feedback_interval_s {
                    let progress = GaProgress {
                        generation: self.generation,
                        best_fitness,
                        avg_fitness: self.avg_fitness(),
                        elapsed,
                    };
                    if let Err(err) = feedback(&progress) {
                        warn!("[GA] progress callback failed: {err}");
                    }
                    last_feedback = Instant::now();
                }
            }

            self.select()?;
        }

        info!(
            "[GA] {:?} after {} generations in {:.3}ms ({} evaluations), best fitness: {:.4}",
            self.state,
            self.generation.separate_with_commas(),
            start.elapsed().as_secs_f64() * 1000.0,
            self.n_evaluations.separate_with_commas(),
            self.best.as_ref().map_or(0.0, |b| b.fitness)
        );
        Ok(self.state)
    }

    /// Packs a copy of the template for every gene without a cached fitness.
    fn evaluate(&mut self) -> Result<()> {
        for gene in self.genes.iter_mut().filter(|g| g.fitness().is_none()) {
            let mut packer = self.packer.copy()?;
            packer.schematic_pack(gene.values().iter().copied())?;
            let fitness = packer.fill_ratio();
            gene.set_fitness(fitness);
            self.n_evaluations += 1;

            let improved = match &self.best {
                None => true,
                Some(best) => fitness > best.fitness,
            };
            if improved {
                self.best = Some(Best {
                    fitness,
                    gene: gene.clone(),
                    packer,
                });
            }
        }
        Ok(())
    }

    /// Replaces the population by a new generation of the same size.
    fn select(&mut self) -> Result<()> {
        let n_genes = self.genes.len();
        let weights = self.genes.iter().map(|g| g.fitness().unwrap_or(0.0));
        let wheel = WheelOfFortune::new(&self.genes, weights)?;

        let mut next_generation = Vec::with_capacity(n_genes + 1);
        while next_generation.len() < n_genes {
            let (parent_a, parent_b) = wheel.spin_pair(&mut self.rng);
            let (mut a, mut b) = (parent_a.clone(), parent_b.clone());
            if self.gene_len > 0 && self.rng.random::<f64>() < self.config.crossover_rate {
                let index = self.rng.random_range(0..self.gene_len);
                recombine_genes(&mut a, &mut b, index)?;
            }
            a.mutate(self.config.mutation_rate, &mut self.rng);
            b.mutate(self.config.mutation_rate, &mut self.rng);
            next_generation.extend([a, b]);
        }
        // odd populations produce one surplus child
        next_generation.truncate(n_genes);
        self.genes = next_generation;
        Ok(())
    }

    fn avg_fitness(&self) -> f64 {
        let fitnesses = self.genes.iter().filter_map(|g| g.fitness()).collect_vec();
        match fitnesses.is_empty() {
            true => 0.0,
            false => fitnesses.iter().sum::<f64>() / fitnesses.len() as f64,
        }
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    pub fn state(&self) -> SolverState {
        self.state
    }

    /// Number of generations evaluated
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn is_executed(&self) -> bool {
        self.state != SolverState::Initialized
    }

    /// The current population
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// The number of items every gene encodes
    pub fn gene_len(&self) -> usize {
        self.gene_len
    }

    /// Highest fill ratio found, `None` before execution
    pub fn best_fitness(&self) -> Option<f64> {
        self.best.as_ref().map(|b| b.fitness)
    }

    pub fn best_gene(&self) -> Option<&Gene> {
        self.best.as_ref().map(|b| &b.gene)
    }

    /// The packer packed with [`GeneticSolver::best_gene`]
    pub fn best_packer(&self) -> Option<&Packer<S, P>> {
        self.best.as_ref().map(|b| &b.packer)
    }

    pub fn into_best_packer(self) -> Option<Packer<S, P>> {
        self.best.map(|b| b.packer)
    }
}
