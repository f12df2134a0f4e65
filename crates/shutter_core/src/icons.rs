//! Icons drawn inside the main circle
//!
//! Icons sit on a horizontal strip. A fractional position between two icons
//! slides the left one out and the right one in, squeezing and fading them.

use shutter_paint::{IconId, Point, Rect};
use smallvec::SmallVec;

use crate::error::IconError;

/// Progress at which an icon stops sliding and starts shrinking
const TRANSLATION_SCALE_THRESHOLD: f32 = 0.4;

/// Icons of a button and the current strip position
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IconStrip {
    icons: Vec<IconId>,
    /// `None` until a position has been set
    position: Option<f32>,
}

/// Placement of one icon in a frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconPlacement {
    pub icon: IconId,
    pub dest: Rect,
    pub alpha: f32,
}

impl IconStrip {
    pub fn icons(&self) -> &[IconId] {
        &self.icons
    }

    pub fn position(&self) -> Option<f32> {
        self.position
    }

    /// Replace the icons. An empty list clears icons and position.
    pub fn set_icons(&mut self, icons: Vec<IconId>) {
        if icons.is_empty() {
            self.icons.clear();
            self.position = None;
            return;
        }
        self.icons = icons;
        let max = self.max_position();
        if let Some(position) = self.position.as_mut() {
            *position = position.min(max);
        }
    }

    fn max_position(&self) -> f32 {
        self.icons.len().saturating_sub(1) as f32
    }

    /// Check that `position` addresses the current icons
    pub fn check_position(&self, position: f32) -> Result<(), IconError> {
        if self.icons.is_empty() {
            return Err(IconError::NoIcons);
        }
        let max = self.max_position();
        if !(0.0..=max).contains(&position) {
            return Err(IconError::PositionOutOfRange { position, max });
        }
        Ok(())
    }

    pub fn set_position(&mut self, position: f32) -> Result<(), IconError> {
        self.check_position(position)?;
        self.position = Some(position);
        Ok(())
    }

    /// Position updates from a running scroll; clamped rather than checked
    pub(crate) fn scroll_to(&mut self, position: f32) {
        self.position = Some(position.clamp(0.0, self.max_position()));
    }

    /// Icons to draw around `center` for a main circle of `main_radius`
    pub fn layout(
        &self,
        center: Point,
        main_radius: f32,
        icon_size: f32,
    ) -> SmallVec<[IconPlacement; 2]> {
        let mut placements = SmallVec::new();
        let Some(position) = self.position else {
            return placements;
        };
        if self.icons.is_empty() {
            return placements;
        }

        let left_index = (position.floor() as usize).min(self.icons.len() - 1);
        let left_progress = position - position.floor();
        let metrics = IconMetrics {
            center,
            main_radius,
            icon_size,
        };

        placements.extend(metrics.place(self.icons[left_index], left_progress, true));
        if let Some(&right) = self.icons.get(left_index + 1) {
            placements.extend(metrics.place(right, 1.0 - left_progress, false));
        }
        placements
    }
}

struct IconMetrics {
    center: Point,
    main_radius: f32,
    icon_size: f32,
}

impl IconMetrics {
    fn translation(&self, progress: f32) -> f32 {
        let interpolated = if progress <= TRANSLATION_SCALE_THRESHOLD {
            progress / TRANSLATION_SCALE_THRESHOLD
        } else {
            1.0
        };
        (self.main_radius - self.icon_size / 2.0) * interpolated
    }

    fn width(&self, progress: f32) -> f32 {
        let interpolated = if progress < TRANSLATION_SCALE_THRESHOLD {
            0.0
        } else {
            (progress - TRANSLATION_SCALE_THRESHOLD) / (1.0 - TRANSLATION_SCALE_THRESHOLD)
        };
        self.icon_size - self.icon_size * interpolated
    }

    /// `progress` 0 means fully shown, 1 fully slid out
    fn place(&self, icon: IconId, progress: f32, is_left: bool) -> Option<IconPlacement> {
        let width = self.width(progress);
        if width <= 0.0 {
            return None;
        }
        let half = self.icon_size / 2.0;
        let translation = self.translation(progress);
        let left = if is_left {
            self.center.x - half - translation
        } else {
            self.center.x + half + translation - width
        };

        Some(IconPlacement {
            icon,
            dest: Rect::new(left, self.center.y - half, width, self.icon_size),
            alpha: 1.0 - progress,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(count: u32) -> IconStrip {
        let mut strip = IconStrip::default();
        strip.set_icons((0..count).map(IconId).collect());
        strip
    }

    #[test]
    fn test_position_requires_icons() {
        let mut strip = IconStrip::default();
        assert_eq!(strip.set_position(0.0), Err(IconError::NoIcons));
    }

    #[test]
    fn test_position_range() {
        let mut strip = strip(3);
        assert!(strip.set_position(2.0).is_ok());
        assert_eq!(
            strip.set_position(2.5),
            Err(IconError::PositionOutOfRange {
                position: 2.5,
                max: 2.0
            })
        );
        assert!(strip.set_position(-0.1).is_err());
        assert!(strip.set_position(f32::NAN).is_err());
    }

    #[test]
    fn test_no_layout_before_position() {
        let strip = strip(2);
        assert!(strip.layout(Point::new(50.0, 50.0), 20.0, 16.0).is_empty());
    }

    #[test]
    fn test_whole_position_shows_single_icon() {
        let mut strip = strip(2);
        strip.set_position(0.0).unwrap();
        let placements = strip.layout(Point::new(50.0, 50.0), 20.0, 16.0);

        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].icon, IconId(0));
        assert_eq!(placements[0].dest, Rect::new(42.0, 42.0, 16.0, 16.0));
        assert_eq!(placements[0].alpha, 1.0);
    }

    #[test]
    fn test_halfway_between_icons() {
        let mut strip = strip(2);
        strip.set_position(0.5).unwrap();
        let placements = strip.layout(Point::new(50.0, 50.0), 20.0, 16.0);

        assert_eq!(placements.len(), 2);
        let (left, right) = (placements[0], placements[1]);
        assert_eq!(left.icon, IconId(0));
        assert_eq!(right.icon, IconId(1));
        assert_eq!(left.alpha, 0.5);
        // Both are past the slide threshold: fully translated, partly squeezed
        assert!(left.dest.width() < 16.0);
        assert_eq!(left.dest.origin.x, 50.0 - 8.0 - 12.0);
        let right_edge = right.dest.origin.x + right.dest.width();
        assert!((right_edge - 70.0).abs() < 1e-4);
    }

    #[test]
    fn test_clearing_icons_resets_position() {
        let mut strip = strip(3);
        strip.set_position(2.0).unwrap();
        strip.set_icons(vec![IconId(7), IconId(8)]);
        assert_eq!(strip.position(), Some(1.0));

        strip.set_icons(Vec::new());
        assert_eq!(strip.position(), None);
        assert!(strip.icons().is_empty());
    }
}
