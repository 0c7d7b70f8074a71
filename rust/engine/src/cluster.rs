// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis clustering: grouping raw segments into logical grid axes
//!
//! Architects draw one logical axis as several dashes or segments. This
//! module buckets near-collinear, axis-aligned segments by their defining
//! ordinate and reduces each bucket to a single [`GridAxis`].

use axisgrid_core::{Error, GridAxis, GridConfig, Point2, RawLine, Result};
use axisgrid_core::types::UNLABELED;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

/// A segment treated as vertical (or horizontal) when its endpoints differ
/// by less than this in X (or Y). Diagonals are not axis candidates.
const AXIS_ALIGN_TOLERANCE: f64 = 1.0;

/// Cluster raw segments into unlabeled grid axes
///
/// Bucketing uses `round(avg / tolerance)`, so two physically adjacent
/// axes closer than `tolerance` may merge, and one axis whose segments
/// straddle a bucket edge may split. That boundary instability is part of
/// the contract; callers tune `tolerance` to the drawing's module size.
///
/// # Errors
///
/// Returns `Error::InvalidConfig` if `config.tolerance` is not positive.
pub fn cluster_axes(lines: &[RawLine], config: &GridConfig) -> Result<Vec<GridAxis>> {
    if config.tolerance <= 0.0 {
        return Err(Error::InvalidConfig(format!(
            "tolerance must be > 0, got {}",
            config.tolerance
        )));
    }

    let candidates = filter_by_layer(lines, config.layer_keywords.as_deref());
    debug!(
        candidates = candidates.len(),
        total = lines.len(),
        "selected candidate axis segments"
    );

    let mut vertical: FxHashMap<i64, Vec<&RawLine>> = FxHashMap::default();
    let mut horizontal: FxHashMap<i64, Vec<&RawLine>> = FxHashMap::default();

    for line in candidates {
        if (line.start.x - line.end.x).abs() < AXIS_ALIGN_TOLERANCE {
            let key = bucket_key((line.start.x + line.end.x) / 2.0, config.tolerance);
            vertical.entry(key).or_default().push(line);
        } else if (line.start.y - line.end.y).abs() < AXIS_ALIGN_TOLERANCE {
            let key = bucket_key((line.start.y + line.end.y) / 2.0, config.tolerance);
            horizontal.entry(key).or_default().push(line);
        }
        // Diagonal segments are discarded: only axis-aligned grids are supported.
    }

    let mut axes = Vec::new();
    for group in vertical.values() {
        if let Some(axis) = reduce_group(group, true, config.min_axis_length) {
            axes.push(axis);
        }
    }
    for group in horizontal.values() {
        if let Some(axis) = reduce_group(group, false, config.min_axis_length) {
            axes.push(axis);
        }
    }

    // Bucket maps iterate in arbitrary order; sort for reproducible output.
    axes.sort_by(|a, b| {
        b.is_vertical
            .cmp(&a.is_vertical)
            .then(a.coordinate.total_cmp(&b.coordinate))
    });

    info!(axes = axes.len(), "merged segments into logical axes");
    Ok(axes)
}

fn filter_by_layer<'a>(lines: &'a [RawLine], keywords: Option<&[String]>) -> Vec<&'a RawLine> {
    match keywords {
        Some(keywords) if !keywords.is_empty() => {
            let keywords: Vec<String> = keywords.iter().map(|k| k.to_uppercase()).collect();
            lines
                .iter()
                .filter(|line| {
                    let layer = line.layer.to_uppercase();
                    keywords.iter().any(|k| layer.contains(k))
                })
                .collect()
        }
        // Without keywords every line is a candidate (noisier, but workable).
        _ => lines.iter().collect(),
    }
}

fn bucket_key(coordinate: f64, tolerance: f64) -> i64 {
    (coordinate / tolerance).round() as i64
}

/// Reduce one bucket of segments to a single axis, or drop it when the
/// combined span stays under `min_axis_length`
fn reduce_group(group: &[&RawLine], is_vertical: bool, min_axis_length: f64) -> Option<GridAxis> {
    let mut cross_min = f64::INFINITY;
    let mut cross_max = f64::NEG_INFINITY;
    let mut ordinate_sum = 0.0;

    for line in group {
        if is_vertical {
            cross_min = cross_min.min(line.start.y).min(line.end.y);
            cross_max = cross_max.max(line.start.y).max(line.end.y);
            ordinate_sum += line.start.x + line.end.x;
        } else {
            cross_min = cross_min.min(line.start.x).min(line.end.x);
            cross_max = cross_max.max(line.start.x).max(line.end.x);
            ordinate_sum += line.start.y + line.end.y;
        }
    }

    if (cross_max - cross_min).abs() < min_axis_length {
        return None;
    }

    let coordinate = ordinate_sum / (2.0 * group.len() as f64);
    let (start, end) = if is_vertical {
        (
            Point2::new(coordinate, cross_min),
            Point2::new(coordinate, cross_max),
        )
    } else {
        (
            Point2::new(cross_min, coordinate),
            Point2::new(cross_max, coordinate),
        )
    };

    Some(GridAxis {
        label: UNLABELED.to_string(),
        start,
        end,
        is_vertical,
        coordinate,
    })
}
