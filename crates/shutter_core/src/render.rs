//! Rendering adapter
//!
//! [`Frame`] derives every drawn quantity from the configuration and the
//! animated factors; [`ShutterPainter`] turns a frame into [`Canvas`] calls.
//! Keeping the two apart lets tests check geometry without a canvas.

use shutter_animation::Interpolate;
use shutter_paint::{Brush, Canvas, Color, LineCap, Point, Rect, Size, Stroke, TileMode};
use smallvec::SmallVec;

use crate::config::ShutterConfig;
use crate::icons::{IconPlacement, IconStrip};
use crate::state::ShutterState;

/// Progress arc starts at 12 o'clock
pub const START_ANGLE: f32 = -90.0;
pub const SWEEP_ANGLE: f32 = 360.0;

/// Expanding factor below which the progress arc is hidden
const ARC_WIDTH_THRESHOLD: f32 = 0.4;

/// Share of the configured arc width shown at `expanding_factor`
pub fn arc_width_factor(expanding_factor: f32) -> f32 {
    if expanding_factor < ARC_WIDTH_THRESHOLD {
        0.0
    } else {
        (expanding_factor - ARC_WIDTH_THRESHOLD) / (1.0 - ARC_WIDTH_THRESHOLD)
    }
}

/// Animated inputs of a frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Visuals {
    /// 0 at rest, 1 fully expanded
    pub expanding_factor: f32,
    /// Recording progress, 0..=1
    pub progress: f32,
    /// Pointer is over the button; selects the pressed colors
    pub hovered: bool,
}

/// Everything needed to draw one frame
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub state: ShutterState,
    pub size: Size,
    pub center: Point,
    pub expanding_factor: f32,
    pub progress: f32,
    pub stroke_radius: f32,
    pub main_radius: f32,
    pub arc_width: f32,
    /// Canvas rotation in degrees applied while drawing the arc
    pub gradient_rotation: f32,
    pub main_color: Color,
    pub stroke_color: Color,
    pub arc_brush: Brush,
    pub icons: SmallVec<[IconPlacement; 2]>,
}

impl Frame {
    pub fn compute(
        config: &ShutterConfig,
        state: ShutterState,
        visuals: Visuals,
        icons: &IconStrip,
        size: Size,
    ) -> Self {
        let geometry = &config.geometry;
        let appearance = &config.appearance;
        let center = size.center();
        let f = visuals.expanding_factor.clamp(0.0, 1.0);
        let progress = visuals.progress.clamp(0.0, 1.0);

        let collapsed_stroke_radius = geometry.main_circle_radius + geometry.stroke_width;
        let stroke_radius = collapsed_stroke_radius.lerp(&size.inner_radius(), f);
        let main_radius = geometry
            .main_circle_radius
            .lerp(&geometry.main_circle_radius_expanded, f);

        let (main_color, stroke_color) = if visuals.hovered {
            (
                appearance.main_circle_color_pressed,
                appearance.stroke_color_pressed,
            )
        } else {
            (appearance.main_circle_color, appearance.stroke_color)
        };

        Self {
            state,
            size,
            center,
            expanding_factor: f,
            progress,
            stroke_radius,
            main_radius,
            arc_width: geometry.progress_arc_width * arc_width_factor(f),
            gradient_rotation: SWEEP_ANGLE * progress * appearance.gradient_rotation_multiplier,
            main_color,
            stroke_color,
            arc_brush: Brush::diagonal(size, &appearance.progress_arc_colors, TileMode::Mirror),
            icons: icons.layout(center, geometry.main_circle_radius, geometry.icon_size),
        }
    }

    /// Oval the progress arc is stroked on, inset so the stroke stays inside
    /// the outer circle
    pub fn arc_oval(&self) -> Rect {
        Rect::centered_square(self.center, self.stroke_radius - self.arc_width / 2.0)
    }
}

/// Draws frames onto a canvas
#[derive(Clone, Copy, Debug, Default)]
pub struct ShutterPainter;

impl ShutterPainter {
    pub fn paint(&self, frame: &Frame, canvas: &mut dyn Canvas) {
        canvas.fill_circle(
            frame.center,
            frame.stroke_radius,
            &Brush::Solid(frame.stroke_color),
        );

        if frame.arc_width > 0.0 {
            // Rotating the canvas and subtracting the rotation from the start
            // angle spins the gradient while the arc stays anchored.
            canvas.save();
            canvas.rotate(frame.gradient_rotation, frame.center);
            canvas.stroke_arc(
                frame.arc_oval(),
                START_ANGLE - frame.gradient_rotation,
                SWEEP_ANGLE * frame.progress,
                &Stroke::new(frame.arc_width).with_cap(LineCap::Round),
                &frame.arc_brush,
            );
            canvas.restore();
        }

        canvas.fill_circle(
            frame.center,
            frame.main_radius,
            &Brush::Solid(frame.main_color),
        );

        for placement in &frame.icons {
            canvas.draw_icon(placement.icon, placement.dest, placement.alpha);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shutter_paint::{DrawCommand, IconId, RecordingCanvas};

    fn frame(visuals: Visuals) -> Frame {
        Frame::compute(
            &ShutterConfig::default(),
            ShutterState::Expanded,
            visuals,
            &IconStrip::default(),
            Size::new(200.0, 200.0),
        )
    }

    #[test]
    fn test_arc_width_factor() {
        assert_eq!(arc_width_factor(0.0), 0.0);
        assert_eq!(arc_width_factor(0.39), 0.0);
        assert_eq!(arc_width_factor(1.0), 1.0);
        assert!((arc_width_factor(0.7) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_collapsed_frame() {
        let frame = frame(Visuals::default());
        assert_eq!(frame.stroke_radius, 40.0);
        assert_eq!(frame.main_radius, 28.0);
        assert_eq!(frame.arc_width, 0.0);
        assert_eq!(frame.main_color, Color::WHITE);
    }

    #[test]
    fn test_expanded_frame() {
        let frame = frame(Visuals {
            expanding_factor: 1.0,
            progress: 0.5,
            hovered: true,
        });
        assert_eq!(frame.stroke_radius, 100.0);
        assert_eq!(frame.main_radius, 20.0);
        assert_eq!(frame.arc_width, 6.0);
        assert_eq!(frame.gradient_rotation, 315.0);
        assert_eq!(
            frame.main_color,
            ShutterConfig::default().appearance.main_circle_color_pressed
        );
        assert_eq!(frame.arc_oval(), Rect::centered_square(frame.center, 97.0));
    }

    #[test]
    fn test_paint_collapsed_draws_two_circles() {
        let mut canvas = RecordingCanvas::new(200.0, 200.0);
        ShutterPainter.paint(&frame(Visuals::default()), &mut canvas);

        let radii: Vec<f32> = canvas.circles().map(|(_, r, _)| r).collect();
        assert_eq!(radii, vec![40.0, 28.0]);
        assert_eq!(canvas.arcs().count(), 0);
    }

    #[test]
    fn test_paint_expanded_draws_rotated_arc() {
        let mut canvas = RecordingCanvas::new(200.0, 200.0);
        ShutterPainter.paint(
            &frame(Visuals {
                expanding_factor: 1.0,
                progress: 0.5,
                hovered: false,
            }),
            &mut canvas,
        );

        let commands = canvas.commands();
        assert_eq!(commands.len(), 6);
        assert_eq!(commands[1], DrawCommand::Save);
        assert!(matches!(
            commands[2],
            DrawCommand::Rotate { degrees, .. } if degrees == 315.0
        ));
        match &commands[3] {
            DrawCommand::StrokeArc {
                start_angle,
                sweep_angle,
                stroke,
                ..
            } => {
                assert_eq!(*start_angle, -405.0);
                assert_eq!(*sweep_angle, 180.0);
                assert_eq!(stroke.cap, LineCap::Round);
            }
            other => panic!("expected arc, got {other:?}"),
        }
        assert_eq!(commands[4], DrawCommand::Restore);
        assert!(canvas.is_balanced());
    }

    #[test]
    fn test_paint_icons_last() {
        let mut icons = IconStrip::default();
        icons.set_icons(vec![IconId(1)]);
        icons.set_position(0.0).unwrap();
        let frame = Frame::compute(
            &ShutterConfig::default(),
            ShutterState::Default,
            Visuals::default(),
            &icons,
            Size::new(200.0, 200.0),
        );

        let mut canvas = RecordingCanvas::new(200.0, 200.0);
        ShutterPainter.paint(&frame, &mut canvas);
        assert!(matches!(
            canvas.commands().last(),
            Some(DrawCommand::DrawIcon { icon: IconId(1), .. })
        ));
    }
}
