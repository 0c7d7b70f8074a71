// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # AxisGrid Core
//!
//! Typed geometry records, configuration and boundary validation for the
//! axis-grid reconstruction engine.
//!
//! CAD extractors hand over loosely shaped records whose coordinate fields
//! may be numbers or numeric strings. This crate converts them exactly once
//! into typed [`RawLine`]/[`RawText`] values at the ingestion boundary, so
//! the algorithms in `axisgrid-engine` never see untyped data.
//!
//! ## Quick Start
//!
//! ```rust
//! use axisgrid_core::{boundary, LineRecord, Scalar};
//!
//! let records = vec![LineRecord {
//!     start_x: Scalar::Number(0.0),
//!     start_y: Scalar::Number(0.0),
//!     end_x: Scalar::Text("1200.5".into()),
//!     end_y: Scalar::Number(0.0),
//!     layer: Some("AXIS".into()),
//! }];
//!
//! let lines = boundary::sanitize_lines(&records);
//! assert_eq!(lines.len(), 1);
//! assert_eq!(lines[0].end.x, 1200.5);
//! ```

pub mod boundary;
pub mod config;
pub mod error;
pub mod types;

pub use boundary::{LineRecord, Scalar, TextRecord};
pub use config::{GridConfig, SpaceConfig};
pub use error::{Error, Result};
pub use types::{GridAxis, Point2, RawLine, RawText};
