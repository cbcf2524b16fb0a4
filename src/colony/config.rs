//! Solver configuration parameters.

use crate::error::ConfigError;

/// Tunable parameters for one colony run.
///
/// Defaults match the conventional ant-system settings; every field can be
/// overridden through the builder methods. [`validate`](AcoConfig::validate)
/// is called by [`Colony::new`](super::Colony::new), so a misconfigured
/// run fails before any construction starts.
///
/// # Examples
///
/// ```
/// use aco_routing::colony::AcoConfig;
///
/// let config = AcoConfig::new(5, 200)
///     .with_iterations(50)
///     .with_ants_count(20)
///     .with_stagnation_fuse(true);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.truck_count, 5);
/// ```
#[derive(Debug, Clone)]
pub struct AcoConfig {
    /// Fleet size.
    pub truck_count: usize,
    /// Per-truck load capacity.
    pub truck_capacity: i32,
    /// Pheromone importance (alpha): exploitation weight.
    pub pheromone_importance: f64,
    /// Heuristic importance (beta): greediness weight.
    pub heuristic_importance: f64,
    /// Evaporation rate (rho) in `[0, 1]`: trail decay per iteration.
    pub evaporation_rate: f64,
    /// Initial value for every pheromone entry.
    pub pheromone_init: f64,
    /// Outer loop count.
    pub iterations: usize,
    /// Construction agents per iteration.
    pub ants_count: usize,
    /// Enables pheromone fusion when the global best stagnates.
    pub stagnation_fuse: bool,
    /// Share of the old matrix kept by a fusion step, in `[0, 1]`.
    pub fusion_weight: f64,
    /// Base seed for the per-agent random sources.
    pub seed: u64,
}

impl AcoConfig {
    /// Creates a configuration for the given fleet with default algorithm
    /// parameters.
    pub fn new(truck_count: usize, truck_capacity: i32) -> Self {
        Self {
            truck_count,
            truck_capacity,
            pheromone_importance: 1.0,
            heuristic_importance: 2.0,
            evaporation_rate: 0.1,
            pheromone_init: 1.0,
            iterations: 100,
            ants_count: 10,
            stagnation_fuse: false,
            fusion_weight: 0.8,
            seed: 42,
        }
    }

    /// Sets the pheromone importance (alpha).
    pub fn with_pheromone_importance(mut self, alpha: f64) -> Self {
        self.pheromone_importance = alpha;
        self
    }

    /// Sets the heuristic importance (beta).
    pub fn with_heuristic_importance(mut self, beta: f64) -> Self {
        self.heuristic_importance = beta;
        self
    }

    /// Sets the evaporation rate (rho).
    pub fn with_evaporation_rate(mut self, rho: f64) -> Self {
        self.evaporation_rate = rho;
        self
    }

    /// Sets the initial pheromone value.
    pub fn with_pheromone_init(mut self, init: f64) -> Self {
        self.pheromone_init = init;
        self
    }

    /// Sets the iteration count.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the number of agents per iteration.
    pub fn with_ants_count(mut self, ants_count: usize) -> Self {
        self.ants_count = ants_count;
        self
    }

    /// Enables or disables stagnation-triggered pheromone fusion.
    pub fn with_stagnation_fuse(mut self, enabled: bool) -> Self {
        self.stagnation_fuse = enabled;
        self
    }

    /// Sets the fusion weight (share of the old matrix kept).
    pub fn with_fusion_weight(mut self, weight: f64) -> Self {
        self.fusion_weight = weight;
        self
    }

    /// Sets the base random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks every constructor constraint; returns the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.truck_count == 0 {
            return Err(ConfigError::NoTrucks);
        }
        if self.truck_capacity <= 0 {
            return Err(ConfigError::NonPositiveCapacity(self.truck_capacity));
        }
        if !self.pheromone_importance.is_finite() || self.pheromone_importance < 0.0 {
            return Err(ConfigError::InvalidPheromoneImportance(
                self.pheromone_importance,
            ));
        }
        if !self.heuristic_importance.is_finite() || self.heuristic_importance < 0.0 {
            return Err(ConfigError::InvalidHeuristicImportance(
                self.heuristic_importance,
            ));
        }
        if !self.evaporation_rate.is_finite()
            || !(0.0..=1.0).contains(&self.evaporation_rate)
        {
            return Err(ConfigError::InvalidEvaporationRate(self.evaporation_rate));
        }
        if !self.pheromone_init.is_finite() || self.pheromone_init <= 0.0 {
            return Err(ConfigError::NonPositivePheromoneInit(self.pheromone_init));
        }
        if self.iterations == 0 {
            return Err(ConfigError::NoIterations);
        }
        if self.ants_count == 0 {
            return Err(ConfigError::NoAnts);
        }
        if !self.fusion_weight.is_finite() || !(0.0..=1.0).contains(&self.fusion_weight) {
            return Err(ConfigError::InvalidFusionWeight(self.fusion_weight));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(AcoConfig::new(3, 100).validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = AcoConfig::new(2, 50)
            .with_pheromone_importance(1.5)
            .with_heuristic_importance(3.0)
            .with_evaporation_rate(0.2)
            .with_pheromone_init(0.5)
            .with_iterations(10)
            .with_ants_count(4)
            .with_stagnation_fuse(true)
            .with_fusion_weight(0.7)
            .with_seed(7);
        assert_eq!(config.pheromone_importance, 1.5);
        assert_eq!(config.heuristic_importance, 3.0);
        assert_eq!(config.evaporation_rate, 0.2);
        assert_eq!(config.pheromone_init, 0.5);
        assert_eq!(config.iterations, 10);
        assert_eq!(config.ants_count, 4);
        assert!(config.stagnation_fuse);
        assert_eq!(config.fusion_weight, 0.7);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_rejects_empty_fleet() {
        assert_eq!(
            AcoConfig::new(0, 100).validate(),
            Err(ConfigError::NoTrucks)
        );
        assert_eq!(
            AcoConfig::new(1, 0).validate(),
            Err(ConfigError::NonPositiveCapacity(0))
        );
    }

    #[test]
    fn test_rejects_bad_exponents() {
        let config = AcoConfig::new(1, 100).with_pheromone_importance(-0.5);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPheromoneImportance(_))
        ));
        let config = AcoConfig::new(1, 100).with_heuristic_importance(f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidHeuristicImportance(_))
        ));
    }

    #[test]
    fn test_rejects_bad_evaporation_rate() {
        for rho in [-0.1, 1.1, f64::NAN] {
            let config = AcoConfig::new(1, 100).with_evaporation_rate(rho);
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidEvaporationRate(_))
            ));
        }
    }

    #[test]
    fn test_rejects_bad_counts() {
        assert_eq!(
            AcoConfig::new(1, 100).with_iterations(0).validate(),
            Err(ConfigError::NoIterations)
        );
        assert_eq!(
            AcoConfig::new(1, 100).with_ants_count(0).validate(),
            Err(ConfigError::NoAnts)
        );
    }

    #[test]
    fn test_rejects_bad_pheromone_init() {
        let config = AcoConfig::new(1, 100).with_pheromone_init(0.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositivePheromoneInit(_))
        ));
    }

    #[test]
    fn test_rejects_bad_fusion_weight() {
        let config = AcoConfig::new(1, 100).with_fusion_weight(1.5);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFusionWeight(_))
        ));
    }
}
