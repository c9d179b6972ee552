//! Sequence planner configuration.

/// Configuration for the backtracking sequence planner.
///
/// Both ceilings default to "unbounded".
///
/// # Examples
///
/// ```
/// use transopt::backtrack::SequenceConfig;
///
/// let config = SequenceConfig::default()
///     .with_max_cost(500.0)
///     .with_max_distance(800.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SequenceConfig {
    /// Budget ceiling: sequences whose running cost exceeds this are
    /// pruned immediately.
    pub max_cost: f64,

    /// Distance ceiling, pruned the same way.
    pub max_distance: f64,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            max_cost: f64::INFINITY,
            max_distance: f64::INFINITY,
        }
    }
}

impl SequenceConfig {
    pub fn with_max_cost(mut self, ceiling: f64) -> Self {
        self.max_cost = ceiling;
        self
    }

    pub fn with_max_distance(mut self, ceiling: f64) -> Self {
        self.max_distance = ceiling;
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
    fn test_default_is_unbounded() {
        let config = SequenceConfig::default();
        assert!(config.max_cost.is_infinite());
        assert!(config.max_distance.is_infinite());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_negative_ceiling() {
        assert!(SequenceConfig::default().with_max_cost(-1.0).validate().is_err());
        assert!(SequenceConfig::default()
            .with_max_distance(f64::NAN)
            .validate()
            .is_err());
    }
}
