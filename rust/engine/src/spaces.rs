// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Closed-space detection over the line-endpoint graph
//!
//! Line endpoints snap to a tolerance grid so floating-point-imprecise
//! coincident points become one node. Connected components of the
//! resulting graph are classified: a component where every node has
//! exactly two incident lines is a simple cycle and reported as a closed
//! space (a room); anything else is reported line by line as open work.

use crate::grid::{AxisGrid, PointLocation};
use axisgrid_core::{Error, Point2, RawLine, Result, SpaceConfig};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{info, warn};

/// An endpoint snapped to the tolerance grid
type NodeKey = (i64, i64);

/// A detected enclosed area (simple cycle of line segments)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClosedSpace {
    pub line_count: usize,
    pub node_count: usize,
    /// Centroid of the component's nodes, four decimal places
    pub center_x: String,
    pub center_y: String,
    #[serde(flatten)]
    pub location: PointLocation,
}

/// A line belonging to a component that is not a simple cycle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenLine {
    /// Position of the line in the input batch
    pub line_index: usize,
    pub layer: String,
    /// Line midpoint, four decimal places
    pub mid_x: String,
    pub mid_y: String,
    #[serde(flatten)]
    pub location: PointLocation,
}

/// Result of one detection pass
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SpaceDetection {
    pub closed_spaces: Vec<ClosedSpace>,
    pub open_lines: Vec<OpenLine>,
}

/// Detect closed spaces and open line work in a batch of segments
///
/// `line_index` in the output refers to positions in `lines`. Runs in
/// O(V + E): every line and node is visited once across all components.
///
/// # Errors
///
/// Returns `Error::InvalidConfig` if `config.point_tolerance` is not
/// positive.
pub fn detect_spaces(
    lines: &[RawLine],
    grid: &AxisGrid,
    config: &SpaceConfig,
) -> Result<SpaceDetection> {
    detect_spaces_indexed(lines.iter().enumerate(), grid, config)
}

/// Like [`detect_spaces`], but with caller-supplied line indices, so a
/// batch filtered at the ingestion boundary keeps its original numbering
pub fn detect_spaces_indexed<'a>(
    lines: impl IntoIterator<Item = (usize, &'a RawLine)>,
    grid: &AxisGrid,
    config: &SpaceConfig,
) -> Result<SpaceDetection> {
    if config.point_tolerance <= 0.0 {
        return Err(Error::InvalidConfig(format!(
            "point_tolerance must be > 0, got {}",
            config.point_tolerance
        )));
    }
    let snap = 1.0 / config.point_tolerance;

    struct LineGeom {
        nodes: (NodeKey, NodeKey),
        midpoint: Point2,
        layer: String,
        raw_index: usize,
    }

    let mut geoms: Vec<LineGeom> = Vec::new();
    let mut node_lines: FxHashMap<NodeKey, Vec<usize>> = FxHashMap::default();
    // First raw coordinate seen per node; centroids use these, not the
    // snapped keys.
    let mut node_coords: FxHashMap<NodeKey, Point2> = FxHashMap::default();

    for (raw_index, line) in lines {
        let a = snap_point(line.start, snap);
        let b = snap_point(line.end, snap);

        let geom_index = geoms.len();
        node_lines.entry(a).or_default().push(geom_index);
        node_lines.entry(b).or_default().push(geom_index);
        node_coords.entry(a).or_insert(line.start);
        node_coords.entry(b).or_insert(line.end);

        geoms.push(LineGeom {
            nodes: (a, b),
            midpoint: line.midpoint(),
            layer: line.layer.clone(),
            raw_index,
        });
    }

    if geoms.is_empty() {
        warn!("no line segments to analyze");
        return Ok(SpaceDetection::default());
    }

    let mut result = SpaceDetection::default();
    let mut visited: FxHashSet<usize> = FxHashSet::default();

    for start in 0..geoms.len() {
        if visited.contains(&start) {
            continue;
        }

        // Grow the component: lines are neighbors when they share a node.
        let mut component: FxHashSet<usize> = FxHashSet::default();
        let mut queue: VecDeque<usize> = VecDeque::from([start]);
        while let Some(index) = queue.pop_front() {
            if !component.insert(index) {
                continue;
            }
            let (a, b) = geoms[index].nodes;
            for node in [a, b] {
                for &neighbor in &node_lines[&node] {
                    if !component.contains(&neighbor) {
                        queue.push_back(neighbor);
                    }
                }
            }
        }
        visited.extend(component.iter().copied());

        let mut members: Vec<usize> = component.into_iter().collect();
        members.sort_unstable();

        let mut degree: FxHashMap<NodeKey, usize> = FxHashMap::default();
        for &index in &members {
            let (a, b) = geoms[index].nodes;
            *degree.entry(a).or_default() += 1;
            *degree.entry(b).or_default() += 1;
        }

        let is_closed = members.len() >= config.min_lines
            && degree.len() >= config.min_lines
            && degree.values().all(|&d| d == 2);

        if is_closed {
            let n = degree.len() as f64;
            let (sum_x, sum_y) = degree.keys().fold((0.0, 0.0), |(sx, sy), node| {
                let p = node_coords[node];
                (sx + p.x, sy + p.y)
            });
            let centroid = Point2::new(sum_x / n, sum_y / n);
            result.closed_spaces.push(ClosedSpace {
                line_count: members.len(),
                node_count: degree.len(),
                center_x: format!("{:.4}", centroid.x),
                center_y: format!("{:.4}", centroid.y),
                location: grid.locate_point(centroid.x, centroid.y),
            });
        } else {
            for &index in &members {
                let geom = &geoms[index];
                result.open_lines.push(OpenLine {
                    line_index: geom.raw_index,
                    layer: geom.layer.clone(),
                    mid_x: format!("{:.4}", geom.midpoint.x),
                    mid_y: format!("{:.4}", geom.midpoint.y),
                    location: grid.locate_point(geom.midpoint.x, geom.midpoint.y),
                });
            }
        }
    }

    info!(
        closed_spaces = result.closed_spaces.len(),
        open_lines = result.open_lines.len(),
        "space detection finished"
    );
    Ok(result)
}

fn snap_point(p: Point2, snap: f64) -> NodeKey {
    ((p.x * snap).round() as i64, (p.y * snap).round() as i64)
}
