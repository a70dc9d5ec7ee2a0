//! Options for a route computation.

use serde::{Deserialize, Serialize};

use crate::ga::GaConfig;
use crate::search::SearchStrategy;

use super::strategy::{RouteStrategy, DEFAULT_EXACT_THRESHOLD};

/// Everything [`optimize`](super::optimize) needs besides the graph and
/// the targets.
///
/// # Examples
///
/// ```
/// use u_wayfind::optimize::{RouteOptions, RouteStrategy};
/// use u_wayfind::search::SearchStrategy;
///
/// let options = RouteOptions::default()
///     .with_search(SearchStrategy::Dijkstra)
///     .with_strategy(RouteStrategy::BranchAndBound);
/// assert_eq!(options.exact_threshold, 15);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteOptions {
    /// Point-to-point search used to build the metric closure.
    pub search: SearchStrategy,
    /// Route-order strategy.
    pub strategy: RouteStrategy,
    /// [`RouteStrategy::Auto`] solves exactly below this many targets.
    pub exact_threshold: usize,
    /// Parameters for [`RouteStrategy::Genetic`].
    pub ga: GaConfig,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            search: SearchStrategy::default(),
            strategy: RouteStrategy::default(),
            exact_threshold: DEFAULT_EXACT_THRESHOLD,
            ga: GaConfig::default(),
        }
    }
}

impl RouteOptions {
    /// Sets the point-to-point search strategy.
    pub fn with_search(mut self, search: SearchStrategy) -> Self {
        self.search = search;
        self
    }

    /// Sets the route-order strategy.
    pub fn with_strategy(mut self, strategy: RouteStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the exact-solver threshold used by [`RouteStrategy::Auto`].
    pub fn with_exact_threshold(mut self, exact_threshold: usize) -> Self {
        self.exact_threshold = exact_threshold;
        self
    }

    /// Sets the genetic algorithm parameters.
    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }
}
