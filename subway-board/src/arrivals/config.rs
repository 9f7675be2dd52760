//! Ranking configuration.

/// Configuration parameters for arrival ranking.
#[derive(Debug, Clone)]
pub struct RankConfig {
    /// Maximum arrivals shown per (route, direction) pair.
    pub per_route_limit: usize,
}

impl RankConfig {
    pub fn new(per_route_limit: usize) -> Self {
        Self { per_route_limit }
    }
}

impl Default for RankConfig {
    fn default() -> Self {
        Self { per_route_limit: 2 }
    }
}
