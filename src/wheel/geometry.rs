//! Wheel segment geometry
//!
//! Converts an ordered roster into renderable angular data. Angles are in
//! degrees, measured clockwise from 12 o'clock (the pointer position).
//! Segment i spans [i * 360/N, (i+1) * 360/N).
//!
//! This module performs no randomness: identical roster in, identical
//! geometry out.

use glam::Vec2;

use super::roster::Item;
use crate::consts::LABEL_RADIUS;
use crate::wheel_angle_to_screen;

/// Renderable data for one wheel segment
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentLayout {
    /// Roster index of the item occupying this segment
    pub index: usize,
    /// Segment start angle (also the dividing-line angle for this boundary)
    pub start_deg: f32,
    /// Segment end angle
    pub end_deg: f32,
    /// Angular midpoint, where the label is anchored
    pub mid_deg: f32,
    /// Label anchor relative to the wheel center, in screen coordinates
    pub label_pos: Vec2,
    /// Rotation applied to the label so text lies along the radius
    pub label_rotation_deg: f32,
}

/// Full wheel layout for the current roster
#[derive(Debug, Clone, PartialEq)]
pub struct WheelLayout {
    pub segments: Vec<SegmentLayout>,
    /// Angular span of each segment (360 / N)
    pub degrees_per_segment: f32,
}

impl WheelLayout {
    /// Compute the layout for N >= 1 items. An empty roster has no layout.
    pub fn for_items(items: &[Item]) -> Option<Self> {
        if items.is_empty() {
            return None;
        }

        let n = items.len();
        let span = 360.0 / n as f32;
        let segments = (0..n)
            .map(|i| {
                let start_deg = i as f32 * span;
                let mid_deg = start_deg + span / 2.0;
                SegmentLayout {
                    index: i,
                    start_deg,
                    // (i+1)*span rather than start+span keeps neighboring
                    // boundaries bit-identical in f32
                    end_deg: (i + 1) as f32 * span,
                    mid_deg,
                    label_pos: wheel_angle_to_screen(mid_deg, LABEL_RADIUS),
                    // +90 turns the label from tangential to radial
                    label_rotation_deg: mid_deg + 90.0,
                }
            })
            .collect();

        Some(Self {
            segments,
            degrees_per_segment: span,
        })
    }

    /// CSS conic-gradient stop list for the wheel background,
    /// e.g. `#ff6384 0% 33.33%, #36a2eb 33.33% 66.67%, ...`
    ///
    /// An empty roster yields a single neutral stop; an empty stop list
    /// would make the whole `conic-gradient()` declaration invalid CSS.
    pub fn conic_gradient_stops(items: &[Item]) -> String {
        if items.is_empty() {
            return "#e5e7eb 0% 100%".to_string();
        }
        let pct = 100.0 / items.len() as f32;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                format!(
                    "{} {:.4}% {:.4}%",
                    item.color.to_hex(),
                    i as f32 * pct,
                    (i + 1) as f32 * pct
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::color::Color;
    use proptest::prelude::*;

    fn items(n: usize) -> Vec<Item> {
        (0..n)
            .map(|i| Item {
                name: format!("Item {}", i + 1),
                color: Color::new(i as u8 * 20, 100, 200),
            })
            .collect()
    }

    #[test]
    fn test_empty_roster_has_no_layout() {
        assert!(WheelLayout::for_items(&[]).is_none());
    }

    #[test]
    fn test_three_segments() {
        let layout = WheelLayout::for_items(&items(3)).unwrap();
        assert_eq!(layout.segments.len(), 3);
        assert_eq!(layout.degrees_per_segment, 120.0);
        assert_eq!(layout.segments[1].start_deg, 120.0);
        assert_eq!(layout.segments[1].end_deg, 240.0);
        assert_eq!(layout.segments[1].mid_deg, 180.0);
        assert_eq!(layout.segments[1].label_rotation_deg, 270.0);
    }

    #[test]
    fn test_label_anchor_at_segment_midpoint() {
        // Single item: midpoint at 180 degrees, anchor straight below center
        let layout = WheelLayout::for_items(&items(1)).unwrap();
        let pos = layout.segments[0].label_pos;
        assert!(pos.x.abs() < 1e-3);
        assert!((pos.y - LABEL_RADIUS).abs() < 1e-3);
    }

    #[test]
    fn test_gradient_stops() {
        let stops = WheelLayout::conic_gradient_stops(&items(2));
        assert!(stops.starts_with("#0064c8 0.0000% 50.0000%"));
        assert!(stops.contains(", #1464c8 50.0000% 100.0000%"));
    }

    #[test]
    fn test_gradient_stops_empty_roster_stay_valid_css() {
        assert_eq!(WheelLayout::conic_gradient_stops(&[]), "#e5e7eb 0% 100%");
    }

    proptest! {
        /// Segments tile the full circle: contiguous, gapless, summing to 360
        #[test]
        fn prop_segments_cover_circle(n in 1usize..=12) {
            let layout = WheelLayout::for_items(&items(n)).unwrap();
            prop_assert_eq!(layout.segments.len(), n);
            prop_assert_eq!(layout.segments[0].start_deg, 0.0);

            let mut total = 0.0f32;
            for (i, seg) in layout.segments.iter().enumerate() {
                prop_assert_eq!(seg.index, i);
                if i > 0 {
                    prop_assert_eq!(seg.start_deg, layout.segments[i - 1].end_deg);
                }
                total += seg.end_deg - seg.start_deg;
            }
            prop_assert!((total - 360.0).abs() < 1e-3);
            let last = layout.segments.last().unwrap();
            prop_assert!((last.end_deg - 360.0).abs() < 1e-3);
        }
    }
}
