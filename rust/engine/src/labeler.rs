// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis labeling: matching annotation texts to axes

use axisgrid_core::{GridAxis, RawText};
use tracing::info;

/// Axis numbers are short ("1", "A", "1-1"); longer text is assumed to be
/// unrelated annotation and never considered as a label.
const MAX_LABEL_CHARS: usize = 8;

/// Assign labels to axes from nearby annotation texts
///
/// Each axis takes the candidate text closest to either of its endpoints,
/// provided that distance is strictly below `search_radius`. Axes without
/// a qualifying text keep the `"?"` placeholder. Returns how many axes
/// were matched.
///
/// When two candidates are exactly equidistant the one earlier in `texts`
/// wins; this tie-break is implementation-defined and not to be relied on.
pub fn label_axes(axes: &mut [GridAxis], texts: &[RawText], search_radius: f64) -> usize {
    let mut matched = 0;

    for axis in axes.iter_mut() {
        let mut best: Option<&str> = None;
        let mut min_dist = f64::INFINITY;

        for text in texts {
            let content = text.content.trim();
            if content.is_empty() || content.chars().count() > MAX_LABEL_CHARS {
                continue;
            }

            let dist = text
                .position
                .distance_to(&axis.start)
                .min(text.position.distance_to(&axis.end));

            if dist < search_radius && dist < min_dist {
                min_dist = dist;
                best = Some(content);
            }
        }

        if let Some(label) = best {
            axis.label = label.to_string();
            matched += 1;
        }
    }

    info!(axes = axes.len(), matched, "matched axis labels");
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use axisgrid_core::Point2;

    fn vertical_axis(x: f64) -> GridAxis {
        GridAxis {
            label: "?".to_string(),
            start: Point2::new(x, 0.0),
            end: Point2::new(x, 10000.0),
            is_vertical: true,
            coordinate: x,
        }
    }

    #[test]
    fn test_nearest_short_text_wins() {
        let mut axes = vec![vertical_axis(0.0)];
        let texts = vec![
            RawText::new("3", Point2::new(0.0, -100.0)),
            RawText::new("12", Point2::new(0.0, -400.0)),
        ];
        let matched = label_axes(&mut axes, &texts, 5000.0);
        assert_eq!(matched, 1);
        assert_eq!(axes[0].label, "3");
    }

    #[test]
    fn test_long_text_excluded_regardless_of_proximity() {
        let mut axes = vec![vertical_axis(0.0)];
        let texts = vec![
            RawText::new("2234567890", Point2::new(0.0, -10.0)),
            RawText::new("3", Point2::new(0.0, -100.0)),
        ];
        label_axes(&mut axes, &texts, 5000.0);
        assert_eq!(axes[0].label, "3");
    }

    #[test]
    fn test_out_of_radius_keeps_placeholder() {
        let mut axes = vec![vertical_axis(0.0)];
        let texts = vec![RawText::new("A", Point2::new(0.0, -6000.0))];
        let matched = label_axes(&mut axes, &texts, 5000.0);
        assert_eq!(matched, 0);
        assert_eq!(axes[0].label, "?");
    }

    #[test]
    fn test_label_content_is_trimmed() {
        let mut axes = vec![vertical_axis(0.0)];
        let texts = vec![RawText::new("  B1 ", Point2::new(100.0, 10100.0))];
        label_axes(&mut axes, &texts, 5000.0);
        assert_eq!(axes[0].label, "B1");
    }

    #[test]
    fn test_endpoint_distance_uses_closer_end() {
        // Text near the far end of the axis still qualifies.
        let mut axes = vec![vertical_axis(0.0)];
        let texts = vec![RawText::new("7", Point2::new(0.0, 10400.0))];
        label_axes(&mut axes, &texts, 500.0);
        assert_eq!(axes[0].label, "7");
    }
}
