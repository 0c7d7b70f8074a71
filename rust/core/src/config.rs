// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configuration values for grid construction and space detection
//!
//! These are plain value structs; loading them from a config file is the
//! embedding application's job.

use serde::{Deserialize, Serialize};

/// Configuration for axis clustering and labeling
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Coordinate bucket width used to merge nearly-collinear segments
    /// into one axis (drawing units, typically mm). Must be > 0.
    pub tolerance: f64,
    /// Axes spanning less than this are dropped as non-structural marks
    pub min_axis_length: f64,
    /// Maximum distance from an axis endpoint to a candidate label text
    pub search_radius: f64,
    /// Optional layer-name keywords (case-insensitive substring match);
    /// when set, only lines on matching layers are axis candidates
    pub layer_keywords: Option<Vec<String>>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            tolerance: 100.0,
            min_axis_length: 2000.0,
            search_radius: 5000.0,
            layer_keywords: None,
        }
    }
}

/// Configuration for closed-space detection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceConfig {
    /// Minimum number of lines (and distinct nodes) for a component to
    /// qualify as a closed space
    pub min_lines: usize,
    /// Endpoints closer than this snap to the same graph node. Must be > 0.
    pub point_tolerance: f64,
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            min_lines: 4,
            point_tolerance: 1e-3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original() {
        let grid = GridConfig::default();
        assert_eq!(grid.tolerance, 100.0);
        assert_eq!(grid.min_axis_length, 2000.0);
        assert_eq!(grid.search_radius, 5000.0);
        assert!(grid.layer_keywords.is_none());

        let space = SpaceConfig::default();
        assert_eq!(space.min_lines, 4);
        assert_eq!(space.point_tolerance, 1e-3);
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let cfg: GridConfig = serde_json::from_str(r#"{"tolerance": 50.0}"#).unwrap();
        assert_eq!(cfg.tolerance, 50.0);
        assert_eq!(cfg.min_axis_length, 2000.0);
    }
}
