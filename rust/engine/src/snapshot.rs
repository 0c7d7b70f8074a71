// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serialized grid form exchanged with the persistence collaborator
//!
//! The wire shape is fixed: `{"x_axes": [...], "y_axes": [...]}` with
//! endpoints as two-element arrays. Rebuilding from a snapshot re-sorts
//! both sides, so a grid survives a round trip with identical query
//! behavior even if the stored file was edited out of order.

use crate::grid::AxisGrid;
use axisgrid_core::{GridAxis, Point2};
use serde::{Deserialize, Serialize};

/// One axis in snapshot form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AxisSnapshot {
    pub label: String,
    pub start_point: [f64; 2],
    pub end_point: [f64; 2],
    pub is_vertical: bool,
    pub coordinate: f64,
}

impl From<&GridAxis> for AxisSnapshot {
    fn from(axis: &GridAxis) -> Self {
        Self {
            label: axis.label.clone(),
            start_point: [axis.start.x, axis.start.y],
            end_point: [axis.end.x, axis.end.y],
            is_vertical: axis.is_vertical,
            coordinate: axis.coordinate,
        }
    }
}

impl From<AxisSnapshot> for GridAxis {
    fn from(snapshot: AxisSnapshot) -> Self {
        Self {
            label: snapshot.label,
            start: Point2::new(snapshot.start_point[0], snapshot.start_point[1]),
            end: Point2::new(snapshot.end_point[0], snapshot.end_point[1]),
            is_vertical: snapshot.is_vertical,
            coordinate: snapshot.coordinate,
        }
    }
}

/// A complete grid in snapshot form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GridSnapshot {
    pub x_axes: Vec<AxisSnapshot>,
    pub y_axes: Vec<AxisSnapshot>,
}

impl GridSnapshot {
    pub fn from_grid(grid: &AxisGrid) -> Self {
        Self {
            x_axes: grid.x_axes().iter().map(AxisSnapshot::from).collect(),
            y_axes: grid.y_axes().iter().map(AxisSnapshot::from).collect(),
        }
    }

    /// Rebuild a queryable grid; axes are re-sorted by coordinate
    pub fn into_grid(self) -> AxisGrid {
        let axes = self
            .x_axes
            .into_iter()
            .chain(self.y_axes)
            .map(GridAxis::from)
            .collect();
        AxisGrid::new(axes)
    }
}

impl AxisGrid {
    pub fn to_snapshot(&self) -> GridSnapshot {
        GridSnapshot::from_grid(self)
    }

    pub fn from_snapshot(snapshot: GridSnapshot) -> Self {
        snapshot.into_grid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical(label: &str, x: f64) -> GridAxis {
        GridAxis {
            label: label.to_string(),
            start: Point2::new(x, 0.0),
            end: Point2::new(x, 9000.0),
            is_vertical: true,
            coordinate: x,
        }
    }

    #[test]
    fn test_wire_shape() {
        let grid = AxisGrid::new(vec![vertical("A", 100.0)]);
        let json = serde_json::to_value(grid.to_snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "x_axes": [{
                    "label": "A",
                    "start_point": [100.0, 0.0],
                    "end_point": [100.0, 9000.0],
                    "is_vertical": true,
                    "coordinate": 100.0,
                }],
                "y_axes": [],
            })
        );
    }

    #[test]
    fn test_round_trip_preserves_queries() {
        let grid = AxisGrid::new(vec![
            vertical("A", 0.0),
            vertical("B", 3600.0),
            vertical("C", 7200.0),
        ]);

        let json = serde_json::to_string(&grid.to_snapshot()).unwrap();
        let rebuilt = AxisGrid::from_snapshot(serde_json::from_str(&json).unwrap());

        for probe in [-100.0, 0.0, 1800.0, 3600.0, 5000.0, 7200.0, 9999.0] {
            assert_eq!(
                grid.locate_point(probe, 0.0),
                rebuilt.locate_point(probe, 0.0),
                "probe {probe}"
            );
        }
    }

    #[test]
    fn test_unsorted_snapshot_is_sorted_on_load() {
        let snapshot = GridSnapshot {
            x_axes: vec![
                AxisSnapshot::from(&vertical("B", 3600.0)),
                AxisSnapshot::from(&vertical("A", 0.0)),
            ],
            y_axes: Vec::new(),
        };
        let grid = snapshot.into_grid();
        assert_eq!(grid.x_axes()[0].label, "A");
    }
}
