//! Generational loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::distance::DistanceMatrix;
use crate::tour::tour_distance;

use super::config::GaConfig;
use super::operators::{fitness, order_crossover, roulette, swap_mutation};

/// Evolves visiting orders with roulette selection, order crossover, and
/// swap mutation.
///
/// Each generation is fully replaced by children; no individual survives
/// unchanged by rule. The best order seen in any generation, the initial
/// one included, is tracked on the side and returned with its open-path
/// distance.
///
/// With fewer than two targets the identity order is returned at distance
/// zero without touching the RNG.
///
/// # Examples
///
/// ```
/// use u_wayfind::distance::DistanceMatrix;
/// use u_wayfind::ga::{genetic, GaConfig};
///
/// let pos = [0.0_f64, 3.0, 1.0, 2.0];
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (pos[i] - pos[j]).abs());
///     }
/// }
///
/// let config = GaConfig::default().with_seed(42);
/// let (order, dist) = genetic(&dm, &config);
/// assert_eq!(order.len(), 4);
/// assert!((dist - 3.0).abs() < 1e-10);
/// ```
pub fn genetic(distances: &DistanceMatrix, config: &GaConfig) -> (Vec<usize>, f64) {
    let n = distances.size();
    if n < 2 {
        return ((0..n).collect(), 0.0);
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let size = config.population_size.max(1);

    let mut population: Vec<Vec<usize>> = (0..size).map(|_| shuffled(n, &mut rng)).collect();
    let mut scores: Vec<f64> = population.iter().map(|o| tour_distance(o, distances)).collect();

    let mut best_order = population[0].clone();
    let mut best = scores[0];
    track_best(&population, &scores, &mut best_order, &mut best);

    for generation in 0..config.generations {
        let weights: Vec<f64> = scores.iter().map(|&d| fitness(d)).collect();
        let total = weights.iter().sum::<f64>();

        let mut next = Vec::with_capacity(size);
        while next.len() < size {
            let p1 = roulette(&weights, total, &mut rng);
            let p2 = roulette(&weights, total, &mut rng);
            let mut child = order_crossover(&population[p1], &population[p2], &mut rng);
            swap_mutation(&mut child, config.mutation_rate, &mut rng);
            next.push(child);
        }

        population = next;
        scores = population.iter().map(|o| tour_distance(o, distances)).collect();
        if track_best(&population, &scores, &mut best_order, &mut best) {
            log::trace!("ga generation {generation}: best {best}");
        }
    }

    log::debug!(
        "ga finished {} generations of {size} over {n} targets, best {best}",
        config.generations
    );
    (best_order, best)
}

fn shuffled<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    // Fisher-Yates
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        order.swap(i, j);
    }
    order
}

/// Replaces the incumbent with the first strictly better individual.
fn track_best(population: &[Vec<usize>], scores: &[f64], best_order: &mut Vec<usize>, best: &mut f64) -> bool {
    let mut improved = false;
    for (order, &score) in population.iter().zip(scores) {
        if score < *best {
            *best = score;
            best_order.clone_from(order);
            improved = true;
        }
    }
    improved
}
