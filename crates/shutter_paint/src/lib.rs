//! Shutter Paint API
//!
//! The 2D drawing surface the shutter button renders onto. The canvas itself
//! is an external collaborator: hosts implement [`Canvas`] on top of their
//! rendering engine, while [`RecordingCanvas`] captures the calls as
//! [`DrawCommand`]s for tests and headless tools.
//!
//! # Example
//!
//! ```ignore
//! use shutter_paint::{Brush, Canvas, Color, Point, RecordingCanvas};
//!
//! let mut canvas = RecordingCanvas::new(200.0, 200.0);
//! canvas.fill_circle(Point::new(100.0, 100.0), 28.0, &Brush::Solid(Color::WHITE));
//!
//! let commands = canvas.take_commands();
//! ```

pub mod canvas;
pub mod color;
pub mod primitives;
pub mod recording;

pub use canvas::{Brush, Canvas, IconId, LineCap, Stroke, TileMode};
pub use color::{Color, ParseColorError};
pub use primitives::{Circle, Point, Rect, Size};
pub use recording::{DrawCommand, RecordingCanvas};
