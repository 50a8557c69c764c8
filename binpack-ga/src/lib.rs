//! Pick-order optimizers for [`binpack`].
//!
//! The greedy packer is deterministic given the order in which it visits items.
//! The optimizers in this crate search over that order: [`GeneticSolver`] evolves pick schemas,
//! [`shuffle_pack`] samples random permutations.

use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod io;
pub mod util;

mod gene;
mod shuffle;
mod solver;
mod wheel;

#[doc(inline)]
pub use config::GaConfig;

#[doc(inline)]
pub use gene::{Gene, recombine_genes};

#[doc(inline)]
pub use shuffle::shuffle_pack;

#[doc(inline)]
pub use solver::{GaProgress, GeneticSolver, SolverState};

#[doc(inline)]
pub use wheel::WheelOfFortune;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
