//! Route-order strategy selection.

use serde::{Deserialize, Serialize};

use crate::exact::MAX_HELD_KARP_TARGETS;

/// Target count below which [`RouteStrategy::Auto`] solves exactly.
pub const DEFAULT_EXACT_THRESHOLD: usize = 15;

/// Algorithm used to order the targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStrategy {
    /// Greedy nearest neighbor from the first target.
    NearestNeighbor,
    /// 2-opt applied to the input order.
    TwoOpt,
    /// Nearest neighbor followed by 2-opt.
    NearestNeighborTwoOpt,
    /// Cheapest insertion seeded with the first two targets.
    GreedyInsertion,
    /// Exact open-path dynamic program.
    HeldKarp,
    /// Exact closed tour from the first target.
    BranchAndBound,
    /// Nearest neighbor improved by 2-opt and restricted 3-opt.
    LinKernighan,
    /// Genetic algorithm.
    Genetic,
    /// Held-Karp below the exact threshold, Lin-Kernighan otherwise.
    #[default]
    Auto,
}

impl RouteStrategy {
    /// All concrete strategies, [`Auto`](RouteStrategy::Auto) excluded.
    pub const CONCRETE: [RouteStrategy; 8] = [
        RouteStrategy::NearestNeighbor,
        RouteStrategy::TwoOpt,
        RouteStrategy::NearestNeighborTwoOpt,
        RouteStrategy::GreedyInsertion,
        RouteStrategy::HeldKarp,
        RouteStrategy::BranchAndBound,
        RouteStrategy::LinKernighan,
        RouteStrategy::Genetic,
    ];

    /// Replaces [`Auto`](RouteStrategy::Auto) with the strategy it stands
    /// for at `targets` targets; concrete strategies pass through.
    ///
    /// `Auto` never picks Held-Karp above [`MAX_HELD_KARP_TARGETS`], even if
    /// `exact_threshold` would allow it.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_wayfind::optimize::RouteStrategy;
    ///
    /// assert_eq!(RouteStrategy::Auto.resolve(14, 15), RouteStrategy::HeldKarp);
    /// assert_eq!(RouteStrategy::Auto.resolve(15, 15), RouteStrategy::LinKernighan);
    /// assert_eq!(RouteStrategy::TwoOpt.resolve(3, 15), RouteStrategy::TwoOpt);
    /// ```
    pub fn resolve(self, targets: usize, exact_threshold: usize) -> RouteStrategy {
        match self {
            RouteStrategy::Auto if targets < exact_threshold && targets <= MAX_HELD_KARP_TARGETS => {
                RouteStrategy::HeldKarp
            }
            RouteStrategy::Auto => RouteStrategy::LinKernighan,
            concrete => concrete,
        }
    }

    /// Returns `true` if the strategy always finds an optimal order for its
    /// tour model.
    pub fn is_exact(self) -> bool {
        matches!(self, RouteStrategy::HeldKarp | RouteStrategy::BranchAndBound)
    }
}
