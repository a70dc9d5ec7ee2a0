//! Genetic algorithm for route ordering.
//!
//! - [`GaConfig`] — Population size, generation count, mutation rate, seed
//! - [`genetic`] — Roulette selection, order crossover (OX), swap mutation
//!
//! There is no elitism. The best individual ever evaluated is kept outside
//! the population and returned even if it was bred out.
//!
//! # Reference
//!
//! Goldberg, D.E. & Lingle, R. (1985). "Alleles, loci, and the traveling
//! salesman problem", *Proc. 1st Int. Conf. on Genetic Algorithms*, 154-159.

mod config;
mod operators;
mod runner;

pub use config::GaConfig;
pub use runner::genetic;
