//! Batch system configuration

use serde::{Deserialize, Serialize};

/// Tuning knobs for the text batch system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSystemConfig {
    /// Run the per-object passes on the rayon pool
    pub parallel: bool,
    /// Minimum object count before the pool is used; smaller batches run
    /// serially to avoid dispatch overhead
    pub parallel_threshold: usize,
}

impl Default for TextSystemConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TextSystemConfig::default();
        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 32);
    }
}
