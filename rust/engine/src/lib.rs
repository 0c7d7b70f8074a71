// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-grid reconstruction and spatial location for CAD line work
//!
//! This crate turns flat line/text records extracted from an architectural
//! drawing into a queryable structural reference grid:
//! 1. Clustering raw segments into logical axes ([`cluster_axes`])
//! 2. Matching annotation texts to axes ([`label_axes`])
//! 3. Building an immutable grid with nearest/span queries ([`AxisGrid`])
//! 4. Detecting closed polygonal spaces in the line graph ([`detect_spaces`])
//!
//! # Usage
//!
//! ```rust,ignore
//! use axisgrid_engine::{build_grid, detect_spaces_in_records};
//! use axisgrid_core::{GridConfig, SpaceConfig};
//!
//! // Records come from the CAD extractor collaborator.
//! let grid = build_grid(&line_records, &text_records, &GridConfig::default())?;
//!
//! let location = grid.locate_point(15320.0, 8100.0);
//! let spaces = detect_spaces_in_records(&line_records, &grid, &SpaceConfig::default())?;
//! ```
//!
//! All inputs are pre-loaded in-memory collections and all outputs are
//! plain structures; file and device I/O belong to the caller.

pub mod cluster;
pub mod grid;
pub mod labeler;
pub mod snapshot;
pub mod spaces;

// Re-export commonly used types and functions
pub use cluster::cluster_axes;
pub use grid::{AxisGrid, PointLocation, TextLocation};
pub use labeler::label_axes;
pub use snapshot::{AxisSnapshot, GridSnapshot};
pub use spaces::{detect_spaces, detect_spaces_indexed, ClosedSpace, OpenLine, SpaceDetection};

use axisgrid_core::{boundary, GridConfig, LineRecord, Result, SpaceConfig, TextRecord};
use tracing::{info, warn};

/// Build a labeled axis grid from extractor records
///
/// Runs the full construction pipeline: boundary validation, segment
/// clustering, label matching, grid assembly. Empty input is not an
/// error; it yields a degenerate grid whose queries all return `None`.
///
/// # Errors
///
/// Returns `Error::InvalidConfig` if `config.tolerance` is not positive.
pub fn build_grid(
    lines: &[LineRecord],
    texts: &[TextRecord],
    config: &GridConfig,
) -> Result<AxisGrid> {
    let raw_lines = boundary::sanitize_lines(lines);
    let raw_texts = boundary::sanitize_texts(texts);
    info!(
        lines = raw_lines.len(),
        texts = raw_texts.len(),
        "raw geometry validated"
    );
    if raw_lines.is_empty() {
        warn!("no usable line records; the grid will be empty");
    }

    let mut axes = cluster_axes(&raw_lines, config)?;
    label_axes(&mut axes, &raw_texts, config.search_radius);
    Ok(AxisGrid::new(axes))
}

/// Detect closed spaces directly from extractor records
///
/// Malformed records are skipped with a warning; surviving lines keep
/// their original indices in the `open_lines` output.
///
/// # Errors
///
/// Returns `Error::InvalidConfig` if `config.point_tolerance` is not
/// positive.
pub fn detect_spaces_in_records(
    lines: &[LineRecord],
    grid: &AxisGrid,
    config: &SpaceConfig,
) -> Result<SpaceDetection> {
    let mut indexed = Vec::with_capacity(lines.len());
    for (index, record) in lines.iter().enumerate() {
        match record.to_raw() {
            Ok(line) => indexed.push((index, line)),
            Err(err) => warn!(index, %err, "skipping malformed line record"),
        }
    }
    detect_spaces_indexed(indexed.iter().map(|(i, l)| (*i, l)), grid, config)
}
