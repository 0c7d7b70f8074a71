// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The queryable axis grid: nearest-axis and bracketing-span lookups

use axisgrid_core::{Error, GridAxis, RawText, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

/// Immutable, queryable model of the finalized, labeled axes
///
/// Column axes (`x_axes`) and row axes (`y_axes`) are each kept in
/// ascending `coordinate` order. Once built the grid is read-only and can
/// be shared freely across threads.
#[derive(Debug, Clone)]
pub struct AxisGrid {
    x_axes: Vec<GridAxis>,
    y_axes: Vec<GridAxis>,
}

/// Axis-relative location of a point: the nearest axis on each side plus
/// the pair of axes bracketing each coordinate
///
/// Fields hold axis labels; `None` where the grid has no axis on that side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PointLocation {
    pub nearest_x_axis: Option<String>,
    pub nearest_y_axis: Option<String>,
    pub x_span_start: Option<String>,
    pub x_span_end: Option<String>,
    pub y_span_start: Option<String>,
    pub y_span_end: Option<String>,
}

/// A located annotation text, as produced by [`AxisGrid::locate_texts`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextLocation {
    pub content: String,
    pub x: String,
    pub y: String,
    #[serde(flatten)]
    pub location: PointLocation,
}

impl AxisGrid {
    /// Build a grid from finalized axes, partitioning by orientation and
    /// sorting each side ascending by coordinate
    pub fn new(axes: Vec<GridAxis>) -> Self {
        let (mut x_axes, mut y_axes): (Vec<_>, Vec<_>) =
            axes.into_iter().partition(|a| a.is_vertical);
        x_axes.sort_by(|a, b| a.coordinate.total_cmp(&b.coordinate));
        y_axes.sort_by(|a, b| a.coordinate.total_cmp(&b.coordinate));

        if x_axes.is_empty() && y_axes.is_empty() {
            warn!("building a degenerate grid with no axes; all queries will return None");
        } else {
            info!(
                x_axes = x_axes.len(),
                y_axes = y_axes.len(),
                "axis grid ready"
            );
        }
        Self { x_axes, y_axes }
    }

    /// Vertical (column) axes, ascending by X coordinate
    pub fn x_axes(&self) -> &[GridAxis] {
        &self.x_axes
    }

    /// Horizontal (row) axes, ascending by Y coordinate
    pub fn y_axes(&self) -> &[GridAxis] {
        &self.y_axes
    }

    /// The axis minimizing `|coordinate - value|`; ties resolve to the
    /// lowest coordinate
    pub fn nearest_axis<'a>(axes: &'a [GridAxis], value: f64) -> Option<&'a GridAxis> {
        let mut best: Option<&GridAxis> = None;
        for axis in axes {
            match best {
                Some(current) if (axis.coordinate - value).abs() >= (current.coordinate - value).abs() => {}
                _ => best = Some(axis),
            }
        }
        best
    }

    /// The pair of axes bracketing `value`: `next` is the first axis with
    /// `coordinate > value`, `prev` the greatest axis with
    /// `coordinate <= value`
    pub fn span<'a>(axes: &'a [GridAxis], value: f64) -> (Option<&'a GridAxis>, Option<&'a GridAxis>) {
        let mut prev = None;
        for axis in axes {
            if value < axis.coordinate {
                return (prev, Some(axis));
            }
            prev = Some(axis);
        }
        (prev, None)
    }

    /// Locate an arbitrary point against the grid
    pub fn locate_point(&self, x: f64, y: f64) -> PointLocation {
        let label = |axis: Option<&GridAxis>| axis.map(|a| a.label.clone());

        let (x_prev, x_next) = Self::span(&self.x_axes, x);
        let (y_prev, y_next) = Self::span(&self.y_axes, y);

        PointLocation {
            nearest_x_axis: label(Self::nearest_axis(&self.x_axes, x)),
            nearest_y_axis: label(Self::nearest_axis(&self.y_axes, y)),
            x_span_start: label(x_prev),
            x_span_end: label(x_next),
            y_span_start: label(y_prev),
            y_span_end: label(y_next),
        }
    }

    /// Locate a dictionary-shaped entity record against the grid
    ///
    /// Currently supports any record carrying numeric (or numeric-string)
    /// `x` and `y` members; this is the extension point for rectangle and
    /// circle records later.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntityShape` when no usable coordinates are present.
    pub fn locate_entity(&self, entity: &Value) -> Result<PointLocation> {
        match (coordinate_member(entity, "x"), coordinate_member(entity, "y")) {
            (Some(x), Some(y)) => Ok(self.locate_point(x, y)),
            _ => Err(Error::EntityShape(
                "expected numeric x/y members; other shapes are not implemented".to_string(),
            )),
        }
    }

    /// Locate a batch of annotation texts, formatting coordinates to four
    /// decimal places as the persistence collaborator expects
    pub fn locate_texts(&self, texts: &[RawText]) -> Vec<TextLocation> {
        let results: Vec<TextLocation> = texts
            .iter()
            .map(|text| TextLocation {
                content: text.content.trim().to_string(),
                x: format!("{:.4}", text.position.x),
                y: format!("{:.4}", text.position.y),
                location: self.locate_point(text.position.x, text.position.y),
            })
            .collect();
        if results.is_empty() {
            warn!("no texts to locate");
        } else {
            info!(texts = results.len(), "located texts on grid");
        }
        results
    }
}

fn coordinate_member(entity: &Value, key: &str) -> Option<f64> {
    match entity.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
