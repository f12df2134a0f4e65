//! Recording canvas
//!
//! Captures [`Canvas`] calls as [`DrawCommand`]s so that a frame can be
//! inspected in tests or replayed onto a real renderer later.

use tracing::warn;

use crate::{Brush, Canvas, IconId, Point, Rect, Size, Stroke};

/// A single recorded canvas call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Rotate {
        degrees: f32,
        pivot: Point,
    },
    FillCircle {
        center: Point,
        radius: f32,
        brush: Brush,
    },
    StrokeArc {
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        stroke: Stroke,
        brush: Brush,
    },
    DrawIcon {
        icon: IconId,
        dest: Rect,
        alpha: f32,
    },
}

/// A canvas that records commands for later execution
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    /// Accumulated rotation per save level
    rotation_stack: Vec<f32>,
    size: Size,
}

impl RecordingCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            commands: Vec::new(),
            rotation_stack: vec![0.0],
            size: Size::new(width, height),
        }
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Clear all recorded commands and transform state
    pub fn clear(&mut self) {
        self.commands.clear();
        self.rotation_stack = vec![0.0];
    }

    /// Current accumulated rotation in degrees
    pub fn current_rotation(&self) -> f32 {
        self.rotation_stack.last().copied().unwrap_or_default()
    }

    /// Whether every `save` has been matched by a `restore`
    pub fn is_balanced(&self) -> bool {
        self.rotation_stack.len() <= 1
    }

    pub fn circles(&self) -> impl Iterator<Item = (Point, f32, &Brush)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::FillCircle {
                center,
                radius,
                brush,
            } => Some((*center, *radius, brush)),
            _ => None,
        })
    }

    pub fn arcs(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::StrokeArc { .. }))
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> Size {
        self.size
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
        let current = self.current_rotation();
        self.rotation_stack.push(current);
    }

    fn restore(&mut self) {
        if self.rotation_stack.len() > 1 {
            self.rotation_stack.pop();
            self.commands.push(DrawCommand::Restore);
        } else {
            warn!("RecordingCanvas::restore without matching save");
        }
    }

    fn rotate(&mut self, degrees: f32, pivot: Point) {
        self.commands.push(DrawCommand::Rotate { degrees, pivot });
        if let Some(current) = self.rotation_stack.last_mut() {
            *current += degrees;
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f32, brush: &Brush) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            brush: brush.clone(),
        });
    }

    fn stroke_arc(
        &mut self,
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        stroke: &Stroke,
        brush: &Brush,
    ) {
        self.commands.push(DrawCommand::StrokeArc {
            oval,
            start_angle,
            sweep_angle,
            stroke: *stroke,
            brush: brush.clone(),
        });
    }

    fn draw_icon(&mut self, icon: IconId, dest: Rect, alpha: f32) {
        self.commands.push(DrawCommand::DrawIcon { icon, dest, alpha });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn test_recording_canvas_creation() {
        let canvas = RecordingCanvas::new(200.0, 100.0);
        assert_eq!(canvas.size(), Size::new(200.0, 100.0));
        assert!(canvas.commands().is_empty());
        assert!(canvas.is_balanced());
    }

    #[test]
    fn test_rotation_is_scoped_by_save_restore() {
        let mut canvas = RecordingCanvas::new(100.0, 100.0);
        canvas.save();
        canvas.rotate(90.0, Point::new(50.0, 50.0));
        assert_eq!(canvas.current_rotation(), 90.0);
        assert!(!canvas.is_balanced());
        canvas.restore();
        assert_eq!(canvas.current_rotation(), 0.0);
        assert!(canvas.is_balanced());
        assert_eq!(canvas.commands().len(), 3);
    }

    #[test]
    fn test_unmatched_restore_is_ignored() {
        let mut canvas = RecordingCanvas::new(100.0, 100.0);
        canvas.restore();
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn test_take_commands() {
        let mut canvas = RecordingCanvas::new(100.0, 100.0);
        canvas.fill_circle(Point::new(50.0, 50.0), 10.0, &Color::WHITE.into());
        canvas.stroke_arc(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            -90.0,
            180.0,
            &Stroke::new(4.0),
            &Color::RED.into(),
        );
        assert_eq!(canvas.circles().count(), 1);
        assert_eq!(canvas.arcs().count(), 1);

        let commands = canvas.take_commands();
        assert_eq!(commands.len(), 2);
        assert!(canvas.commands().is_empty());
    }
}
