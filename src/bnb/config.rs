//! Route optimizer configuration.

/// Configuration for the branch & bound route optimizer.
///
/// Ceilings default to "unbounded"; the route is open-ended (no
/// return to origin) unless requested.
///
/// # Examples
///
/// ```
/// use transopt::bnb::RouteConfig;
///
/// let config = RouteConfig::default()
///     .with_max_cost(500.0)
///     .with_return_to_origin(true)
///     .with_max_nodes(100_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct RouteConfig {
    /// Budget ceiling: nodes whose accumulated cost exceeds this are
    /// pruned without expansion.
    pub max_cost: f64,

    /// Distance ceiling, pruned the same way.
    pub max_distance: f64,

    /// Whether the route must return to stop 0 after visiting all
    /// stops (closed tour).
    pub return_to_origin: bool,

    /// Maximum number of frontier pops before the search gives up
    /// with the incumbent found so far. 0 = no limit.
    pub max_nodes: usize,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            max_cost: f64::INFINITY,
            max_distance: f64::INFINITY,
            return_to_origin: false,
            max_nodes: 0,
        }
    }
}

impl RouteConfig {
    pub fn with_max_cost(mut self, ceiling: f64) -> Self {
        self.max_cost = ceiling;
        self
    }

    pub fn with_max_distance(mut self, ceiling: f64) -> Self {
        self.max_distance = ceiling;
        self
    }

    pub fn with_return_to_origin(mut self, closed: bool) -> Self {
        self.return_to_origin = closed;
        self
    }

    pub fn with_max_nodes(mut self, n: usize) -> Self {
        self.max_nodes = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_cost.is_nan() || self.max_cost < 0.0 {
            return Err(format!("max_cost must be non-negative, got {}", self.max_cost));
        }
        if self.max_distance.is_nan() || self.max_distance < 0.0 {
            return Err(format!(
                "max_distance must be non-negative, got {}",
                self.max_distance
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RouteConfig::default();
        assert!(config.max_cost.is_infinite());
        assert!(!config.return_to_origin);
        assert_eq!(config.max_nodes, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_ceiling() {
        assert!(RouteConfig::default().with_max_cost(-1.0).validate().is_err());
        assert!(RouteConfig::default()
            .with_max_distance(f64::NAN)
            .validate()
            .is_err());
    }
}
