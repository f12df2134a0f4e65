//! Canvas trait and paint types
//!
//! [`Canvas`] is the narrow drawing interface the shutter button needs: filled
//! circles, stroked arcs, rotation about a pivot, and icon bitmaps. Angles are
//! in degrees, measured clockwise from the positive x axis, so `-90` points
//! straight up.

use smallvec::SmallVec;

use crate::{Color, Point, Rect, Size};

/// Handle to an icon bitmap owned by the host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconId(pub u32);

/// How a gradient behaves past its end points
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TileMode {
    #[default]
    Clamp,
    /// Repeat the gradient, flipping every other repetition
    Mirror,
}

/// Line cap style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Stroke parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub cap: LineCap,
}

impl Stroke {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            cap: LineCap::Butt,
        }
    }

    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Paint source for fills and strokes
#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    /// Evenly spaced colors along the line from `start` to `end`
    LinearGradient {
        start: Point,
        end: Point,
        colors: SmallVec<[Color; 4]>,
        tile: TileMode,
    },
}

impl Brush {
    /// Diagonal gradient across a canvas, top-left to bottom-right
    pub fn diagonal(size: Size, colors: &[Color], tile: TileMode) -> Self {
        Brush::LinearGradient {
            start: Point::ZERO,
            end: Point::new(size.width, size.height),
            colors: colors.iter().copied().collect(),
            tile,
        }
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

/// The drawing surface the button renders onto.
///
/// Implementations wrap a host renderer. Transform calls must be balanced:
/// every `save` is matched by a `restore`.
pub trait Canvas {
    /// Size of the drawable area in pixels
    fn size(&self) -> Size;

    /// Push the current transform
    fn save(&mut self);

    /// Pop back to the transform of the matching `save`
    fn restore(&mut self);

    /// Rotate subsequent drawing by `degrees` around `pivot`
    fn rotate(&mut self, degrees: f32, pivot: Point);

    fn fill_circle(&mut self, center: Point, radius: f32, brush: &Brush);

    /// Stroke the arc of the ellipse inscribed in `oval`
    fn stroke_arc(
        &mut self,
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        stroke: &Stroke,
        brush: &Brush,
    );

    /// Draw `icon` scaled into `dest` with the given opacity (0..=1)
    fn draw_icon(&mut self, icon: IconId, dest: Rect, alpha: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_builder() {
        let stroke = Stroke::new(6.0).with_cap(LineCap::Round);
        assert_eq!(stroke.width, 6.0);
        assert_eq!(stroke.cap, LineCap::Round);
        assert_eq!(Stroke::default().cap, LineCap::Butt);
    }

    #[test]
    fn test_diagonal_gradient_spans_canvas() {
        let brush = Brush::diagonal(
            Size::new(100.0, 80.0),
            &[Color::RED, Color::WHITE],
            TileMode::Mirror,
        );
        match brush {
            Brush::LinearGradient {
                start,
                end,
                colors,
                tile,
            } => {
                assert_eq!(start, Point::ZERO);
                assert_eq!(end, Point::new(100.0, 80.0));
                assert_eq!(colors.len(), 2);
                assert_eq!(tile, TileMode::Mirror);
            }
            other => panic!("unexpected brush {other:?}"),
        }
    }
}
