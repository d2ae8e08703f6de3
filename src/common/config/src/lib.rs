//! Configuration management for Floe.
//!
//! Provides per-session planning options and planner-wide tuning knobs.

use serde::{Deserialize, Serialize};

/// Per-session configuration consulted during plan rewriting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// When true, an alternative subfield-aware pushdown path owns filter
    /// rewriting and the range-based pushdown rewrite becomes a no-op.
    pub pushdown_filter_enabled: bool,
    /// Planner tuning options.
    pub planner: PlannerConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pushdown_filter_enabled: false,
            planner: PlannerConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Create a session config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the alternative pushdown path.
    pub fn with_pushdown_filter_enabled(mut self, enabled: bool) -> Self {
        self.pushdown_filter_enabled = enabled;
        self
    }

    /// Set planner options.
    pub fn with_planner(mut self, planner: PlannerConfig) -> Self {
        self.planner = planner;
        self
    }
}

/// Planner-wide tuning options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Maximum number of discrete values a pushed-down domain may carry
    /// before it is widened to a range. Storage layers reject oversized
    /// IN-lists, so long value lists are collapsed at plan time.
    pub max_domain_values: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_domain_values: 32,
        }
    }
}

impl PlannerConfig {
    /// Set the discrete-value bound for pushed-down domains.
    pub fn with_max_domain_values(mut self, max: usize) -> Self {
        self.max_domain_values = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let session = SessionConfig::default();
        assert!(!session.pushdown_filter_enabled);
        assert_eq!(session.planner.max_domain_values, 32);
    }

    #[test]
    fn test_builders() {
        let session = SessionConfig::new()
            .with_pushdown_filter_enabled(true)
            .with_planner(PlannerConfig::default().with_max_domain_values(8));

        assert!(session.pushdown_filter_enabled);
        assert_eq!(session.planner.max_domain_values, 8);
    }

    #[test]
    fn test_serde_roundtrip() {
        let session = SessionConfig::new().with_pushdown_filter_enabled(true);
        let json = serde_json::to_string(&session).unwrap();
        let back: SessionConfig = serde_json::from_str(&json).unwrap();
        assert!(back.pushdown_filter_enabled);
    }
}
