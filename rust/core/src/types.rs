// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for axis-grid reconstruction

use serde::{Deserialize, Serialize};

/// A 2D point in drawing units
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point2) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A validated line segment from the CAD extractor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawLine {
    pub start: Point2,
    pub end: Point2,
    /// CAD layer the segment was drawn on (empty when the source omitted it)
    pub layer: String,
}

impl RawLine {
    pub fn new(start: Point2, end: Point2, layer: impl Into<String>) -> Self {
        Self {
            start,
            end,
            layer: layer.into(),
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn midpoint(&self) -> Point2 {
        Point2::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }
}

/// A validated text annotation from the CAD extractor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawText {
    pub content: String,
    pub position: Point2,
}

impl RawText {
    pub fn new(content: impl Into<String>, position: Point2) -> Self {
        Self {
            content: content.into(),
            position,
        }
    }
}

/// Label given to axes that matched no annotation text
pub const UNLABELED: &str = "?";

/// A logical structural reference line reconstructed from possibly-multiple
/// collinear segments
///
/// Vertical axes define an X ordinate, horizontal axes a Y ordinate; that
/// defining ordinate is stored in `coordinate` and drives all grid queries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridAxis {
    /// Axis number or letter (e.g. "1", "A", "1-1"); [`UNLABELED`] when unmatched
    pub label: String,
    pub start: Point2,
    pub end: Point2,
    /// True for column axes (defining X), false for row axes (defining Y)
    pub is_vertical: bool,
    /// The defining ordinate, averaged over the merged segments
    pub coordinate: f64,
}

impl GridAxis {
    /// Overall span of the axis, start to end
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_line_midpoint() {
        let line = RawLine::new(Point2::new(0.0, 0.0), Point2::new(10.0, 4.0), "WALL");
        let mid = line.midpoint();
        assert_eq!(mid, Point2::new(5.0, 2.0));
    }

    #[test]
    fn test_axis_length() {
        let axis = GridAxis {
            label: UNLABELED.to_string(),
            start: Point2::new(100.0, 0.0),
            end: Point2::new(100.0, 2500.0),
            is_vertical: true,
            coordinate: 100.0,
        };
        assert!((axis.length() - 2500.0).abs() < 1e-9);
    }
}
