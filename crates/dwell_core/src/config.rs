//! Dwell timing configuration presets.

use serde::{Deserialize, Serialize};

/// Default minimum stillness before a press may commit (ms).
pub const STILL_TIME_MS: u64 = 2000;

/// Default squared pixel distance under which the pointer counts as still.
pub const STILL_DIST2: f32 = 300.0;

/// Configuration for dwell detection.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DwellConfig {
    /// Milliseconds the pointer must stay close to its frozen point before
    /// the widget commits.
    pub still_time_ms: u64,
    /// Squared pixel distance from the frozen point that still counts as
    /// "not moved". Compared with `<=`.
    pub still_dist2: f32,
}

impl Default for DwellConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl DwellConfig {
    /// Standard configuration: two seconds of stillness, ~17px radius.
    pub fn standard() -> Self {
        Self {
            still_time_ms: STILL_TIME_MS,
            still_dist2: STILL_DIST2,
        }
    }

    /// Shorter dwell for practiced users or mouse-driven demos.
    pub fn responsive() -> Self {
        Self {
            still_time_ms: 800,
            still_dist2: STILL_DIST2,
        }
    }

    /// Tight, quick settings for deterministic tests.
    pub fn testing() -> Self {
        Self {
            still_time_ms: 100,
            still_dist2: 4.0,
        }
    }

    /// Set the dwell duration.
    pub fn with_still_time_ms(mut self, millis: u64) -> Self {
        self.still_time_ms = millis;
        self
    }

    /// Set the squared stillness radius.
    pub fn with_still_dist2(mut self, dist2: f32) -> Self {
        self.still_dist2 = dist2;
        self
    }

    /// Set the stillness radius in pixels (squared internally).
    pub fn with_still_radius(mut self, radius: f32) -> Self {
        self.still_dist2 = radius * radius;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = DwellConfig::default();
        assert_eq!(config.still_time_ms, 2000);
        assert_eq!(config.still_dist2, 300.0);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: DwellConfig = serde_json::from_str(r#"{ "still_time_ms": 1500 }"#).unwrap();
        assert_eq!(config.still_time_ms, 1500);
        assert_eq!(config.still_dist2, STILL_DIST2);
    }

    #[test]
    fn test_radius_builder_squares() {
        let config = DwellConfig::standard().with_still_radius(10.0);
        assert_eq!(config.still_dist2, 100.0);
    }
}
