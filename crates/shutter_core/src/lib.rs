//! Shutter Core
//!
//! A camera shutter button: tap to take a photo, hold to record a video.
//!
//! # Features
//!
//! - **State machine**: `Default -> Pressed -> StartExpanding -> Expanded ->
//!   StartCollapsing -> Default`, driven by press, release, click and time
//! - **Modes**: tap and hold, tap only (photo), or hold only (video)
//! - **Collapse actions**: collapse when released, or stay expanded until clicked
//! - **Gesture recognition**: single-pointer tracking with hit testing
//! - **Consistency validation**: geometry checked against the canvas before drawing
//! - **Rendering**: expanding ring, gradient progress arc and sliding icons
//!
//! # Example
//!
//! ```ignore
//! use shutter_core::{ShutterButton, ShutterConfig, VideoEvent};
//!
//! let mut button = ShutterButton::attached(ShutterConfig::default())?;
//! button.listeners_mut().on_photo(|| println!("photo"));
//! button.listeners_mut().on_video(|event| println!("video {event:?}"));
//!
//! button.on_press()?;
//! button.tick(16.0)?;
//! button.on_release()?;
//! ```

pub mod button;
pub mod config;
pub mod error;
pub mod gesture;
pub mod icons;
pub mod listener;
pub mod render;
pub mod state;
pub mod validate;


pub use button::ShutterButton;
pub use config::{Appearance, Geometry, ShutterConfig, Timing};
pub use error::{
    ConfigError, GeometryParam, IconError, ProtocolError, Result, ShutterError, ValidationError,
};
pub use gesture::{Gesture, GestureRecognizer, HitArea, PointerEvent};
pub use icons::{IconPlacement, IconStrip};
pub use listener::{HoldEvent, Listeners, VideoEvent};
pub use render::{Frame, ShutterPainter, Visuals};
pub use state::{CollapseAction, Mode, ShutterState};
pub use validate::validate_geometry;

pub use shutter_paint::IconId;
