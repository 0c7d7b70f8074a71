// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ingestion-boundary records and one-shot validation
//!
//! CAD extractors serialize coordinates inconsistently: some emit numbers,
//! some emit numeric strings. [`Scalar`] absorbs both forms, and the
//! `sanitize_*` functions convert whole batches into typed records,
//! skipping malformed rows with a warning instead of aborting the batch.

use crate::error::{Error, Result};
use crate::types::{Point2, RawLine, RawText};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A coordinate value that may arrive as a number or a numeric string
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Numeric value of this scalar, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(v) => Some(*v),
            Scalar::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Number(v)
    }
}

/// A line record as produced by the extractor collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineRecord {
    pub start_x: Scalar,
    pub start_y: Scalar,
    pub end_x: Scalar,
    pub end_y: Scalar,
    #[serde(default)]
    pub layer: Option<String>,
}

impl LineRecord {
    /// Validate and convert into a typed [`RawLine`]
    pub fn to_raw(&self) -> Result<RawLine> {
        let coord = |scalar: &Scalar, field: &str| {
            scalar.as_f64().ok_or_else(|| {
                Error::MalformedRecord(format!("line field {field} is not numeric: {scalar:?}"))
            })
        };
        Ok(RawLine {
            start: Point2::new(coord(&self.start_x, "start_x")?, coord(&self.start_y, "start_y")?),
            end: Point2::new(coord(&self.end_x, "end_x")?, coord(&self.end_y, "end_y")?),
            layer: self.layer.clone().unwrap_or_default(),
        })
    }
}

/// A text record as produced by the extractor collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRecord {
    pub content: String,
    pub x: Scalar,
    pub y: Scalar,
}

impl TextRecord {
    /// Validate and convert into a typed [`RawText`]
    pub fn to_raw(&self) -> Result<RawText> {
        let (x, y) = match (self.x.as_f64(), self.y.as_f64()) {
            (Some(x), Some(y)) => (x, y),
            _ => {
                return Err(Error::MalformedRecord(format!(
                    "text {:?} has non-numeric coordinates",
                    self.content
                )))
            }
        };
        Ok(RawText {
            content: self.content.clone(),
            position: Point2::new(x, y),
        })
    }
}

/// Convert a batch of line records, skipping malformed rows with a warning
pub fn sanitize_lines(records: &[LineRecord]) -> Vec<RawLine> {
    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| match record.to_raw() {
            Ok(line) => Some(line),
            Err(err) => {
                warn!(index, %err, "skipping malformed line record");
                None
            }
        })
        .collect()
}

/// Convert a batch of text records, skipping malformed rows with a warning
pub fn sanitize_texts(records: &[TextRecord]) -> Vec<RawText> {
    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| match record.to_raw() {
            Ok(text) => Some(text),
            Err(err) => {
                warn!(index, %err, "skipping malformed text record");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(sx: Scalar, sy: Scalar, ex: Scalar, ey: Scalar) -> LineRecord {
        LineRecord {
            start_x: sx,
            start_y: sy,
            end_x: ex,
            end_y: ey,
            layer: Some("AXIS".to_string()),
        }
    }

    #[test]
    fn test_scalar_accepts_numeric_strings() {
        assert_eq!(Scalar::Text(" 12.5 ".into()).as_f64(), Some(12.5));
        assert_eq!(Scalar::Number(-3.0).as_f64(), Some(-3.0));
        assert_eq!(Scalar::Text("axis".into()).as_f64(), None);
    }

    #[test]
    fn test_scalar_deserializes_both_forms() {
        let record: LineRecord = serde_json::from_str(
            r#"{"start_x": "0.0", "start_y": 1, "end_x": 2.5, "end_y": "3", "layer": "A-GRID"}"#,
        )
        .unwrap();
        let raw = record.to_raw().unwrap();
        assert_eq!(raw.start, Point2::new(0.0, 1.0));
        assert_eq!(raw.end, Point2::new(2.5, 3.0));
        assert_eq!(raw.layer, "A-GRID");
    }

    #[test]
    fn test_sanitize_skips_malformed_lines() {
        let records = vec![
            line(0.0.into(), 0.0.into(), 10.0.into(), 0.0.into()),
            line(Scalar::Text("oops".into()), 0.0.into(), 10.0.into(), 0.0.into()),
            line(5.0.into(), 5.0.into(), 5.0.into(), 9.0.into()),
        ];
        let lines = sanitize_lines(&records);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].end, Point2::new(5.0, 9.0));
    }

    #[test]
    fn test_missing_layer_becomes_empty() {
        let record: LineRecord =
            serde_json::from_str(r#"{"start_x": 0, "start_y": 0, "end_x": 1, "end_y": 1}"#)
                .unwrap();
        assert_eq!(record.to_raw().unwrap().layer, "");
    }

    #[test]
    fn test_sanitize_texts() {
        let records = vec![
            TextRecord {
                content: "A".into(),
                x: Scalar::Text("1.0".into()),
                y: 2.0.into(),
            },
            TextRecord {
                content: "B".into(),
                x: Scalar::Text("".into()),
                y: 2.0.into(),
            },
        ];
        let texts = sanitize_texts(&records);
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].content, "A");
        assert_eq!(texts[0].position, Point2::new(1.0, 2.0));
    }
}
