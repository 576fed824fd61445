//! Configuration management for the collaboration network analyzer

/// Default configuration for the analysis pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Number of clusters requested from k-means
    pub cluster_count: usize,

    /// Iteration cap for the k-means loop
    pub max_iterations: usize,

    /// Length of the top-researchers list in the stats
    pub top_researchers: usize,

    /// Seed for centroid initialization (None = OS entropy)
    pub seed: Option<u64>,

    /// Node count above which filter predicates run on the rayon pool
    pub parallel_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cluster_count: 5,
            max_iterations: 100,
            top_researchers: 5,
            seed: None,
            parallel_threshold: 1000,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(
        cluster_count: usize,
        max_iterations: usize,
        top_researchers: usize,
        seed: Option<u64>,
    ) -> Self {
        Self {
            cluster_count,
            max_iterations,
            top_researchers,
            seed,
            ..Self::default()
        }
    }

    /// Same configuration with a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_values_keep_default_threshold() {
        let config = Config::new(3, 50, 10, None).with_seed(99);
        assert_eq!(config.cluster_count, 3);
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.top_researchers, 10);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.parallel_threshold, Config::default().parallel_threshold);
    }
}
