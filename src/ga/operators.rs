//! Selection, crossover, and mutation on visiting orders.
//!
//! Individuals are permutations of `0..n`. Every operator here maps
//! permutations to permutations.

use rand::Rng;

/// Fitness of a tour: the reciprocal of its distance.
///
/// Unreachable tours score zero so roulette selection never picks them
/// while any finite tour remains. A zero-length tour scores
/// `f64::MAX`.
pub(crate) fn fitness(distance: f64) -> f64 {
    if !distance.is_finite() {
        0.0
    } else if distance <= 0.0 {
        f64::MAX
    } else {
        1.0 / distance
    }
}

/// Picks an index with probability proportional to its fitness.
///
/// Falls back to a uniform pick when the total is zero or overflows.
pub(crate) fn roulette<R: Rng>(fitness: &[f64], total: f64, rng: &mut R) -> usize {
    debug_assert!(!fitness.is_empty());
    if !(total > 0.0 && total.is_finite()) {
        return rng.random_range(0..fitness.len());
    }

    let r = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    for (i, &f) in fitness.iter().enumerate() {
        cumulative += f;
        if cumulative > r {
            return i;
        }
    }
    // Rounding left r past the last bucket.
    fitness.iter().rposition(|&f| f > 0.0).unwrap_or(fitness.len() - 1)
}

/// Order crossover (OX).
///
/// Copies `parent1[start..end]` into the child at the same positions, then
/// fills the remaining positions left to right with the genes of `parent2`
/// in their relative order, skipping genes already placed. The slice may be
/// empty, in which case the child is a copy of `parent2`.
pub(crate) fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    if n == 0 {
        return Vec::new();
    }
    let start = rng.random_range(0..n);
    let end = start + rng.random_range(0..n - start);
    order_crossover_slice(parent1, parent2, start, end)
}

fn order_crossover_slice(parent1: &[usize], parent2: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = parent1.len();
    let mut child: Vec<Option<usize>> = vec![None; n];
    let mut placed = vec![false; n];

    for i in start..end {
        child[i] = Some(parent1[i]);
        placed[parent1[i]] = true;
    }

    let mut slots = child.iter_mut().filter(|slot| slot.is_none());
    for &gene in parent2 {
        if placed[gene] {
            continue;
        }
        match slots.next() {
            Some(slot) => *slot = Some(gene),
            None => break,
        }
    }

    child.into_iter().flatten().collect()
}

/// With probability `rate`, swaps two uniformly chosen positions.
///
/// Both positions are drawn independently, so a mutation may pick the same
/// position twice and leave the order unchanged.
pub(crate) fn swap_mutation<R: Rng>(order: &mut [usize], rate: f64, rng: &mut R) {
    let n = order.len();
    if n < 2 || rng.random::<f64>() >= rate {
        return;
    }
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    order.swap(a, b);
}
