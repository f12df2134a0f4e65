//! Gesture recognition
//!
//! Turns raw pointer input into the press/release/click vocabulary of the
//! state machine. Only one pointer is tracked at a time.

use shutter_paint::{Point, Rect, Size};
use tracing::{trace, warn};

use crate::config::Geometry;
use crate::error::ProtocolError;

/// Raw pointer input from the host
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down { id: u32, position: Point },
    Move { id: u32, position: Point },
    Up { id: u32, position: Point },
    /// The host took the pointer away (scroll parent, focus loss)
    Cancel { id: u32 },
    /// Platform click (accessibility action, keyboard activation)
    Click,
}

/// Recognized gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Press,
    /// `inside_expanded` tells whether the pointer was lifted over the
    /// expanded button area
    Release { inside_expanded: bool },
    Hover { inside: bool },
    Click,
    Cancel,
}

/// Touch areas of the button on a canvas. Both are squares around the
/// center, which makes the button a little easier to hit than its circles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitArea {
    pub collapsed: Rect,
    pub expanded: Rect,
}

impl HitArea {
    pub fn new(geometry: &Geometry, canvas: Size) -> Self {
        let center = canvas.center();
        Self {
            collapsed: Rect::centered_square(center, geometry.touch_radius()),
            expanded: Rect::centered_square(center, geometry.expanded_touch_radius()),
        }
    }
}

/// Single-pointer gesture recognizer
#[derive(Debug, Default, Clone)]
pub struct GestureRecognizer {
    tracked: Option<u32>,
    /// Pointer that went down outside the button; its events are dropped
    ignored: Option<u32>,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer currently tracked, if any
    pub fn tracked_pointer(&self) -> Option<u32> {
        self.tracked
    }

    /// Forget any tracked pointer
    pub fn reset(&mut self) {
        self.tracked = None;
        self.ignored = None;
    }

    pub fn handle(
        &mut self,
        event: PointerEvent,
        area: &HitArea,
    ) -> Result<Option<Gesture>, ProtocolError> {
        trace!("pointer {:?}", event);
        match event {
            PointerEvent::Down { id, position } => {
                if let Some(tracked) = self.tracked {
                    warn!("pointer {} down while tracking {}", id, tracked);
                    return Err(ProtocolError::ConcurrentPointer {
                        tracked,
                        incoming: id,
                    });
                }
                if !area.collapsed.contains(position) {
                    self.ignored = Some(id);
                    return Ok(None);
                }
                self.ignored = None;
                self.tracked = Some(id);
                Ok(Some(Gesture::Press))
            }
            PointerEvent::Move { id, position } => {
                if self.tracked != Some(id) {
                    return Ok(None);
                }
                Ok(Some(Gesture::Hover {
                    inside: area.expanded.contains(position),
                }))
            }
            PointerEvent::Up { id, position } => match self.tracked {
                Some(tracked) if tracked == id => {
                    self.tracked = None;
                    Ok(Some(Gesture::Release {
                        inside_expanded: area.expanded.contains(position),
                    }))
                }
                Some(_) => Ok(None),
                None if self.ignored == Some(id) => {
                    self.ignored = None;
                    Ok(None)
                }
                None => Err(ProtocolError::ReleaseWithoutPress),
            },
            PointerEvent::Cancel { id } => {
                if self.tracked == Some(id) {
                    self.tracked = None;
                    Ok(Some(Gesture::Cancel))
                } else {
                    if self.ignored == Some(id) {
                        self.ignored = None;
                    }
                    Ok(None)
                }
            }
            PointerEvent::Click => Ok(Some(Gesture::Click)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> HitArea {
        // 200x200 canvas, touch radius 40, expanded touch radius 48
        HitArea::new(&Geometry::default(), Size::new(200.0, 200.0))
    }

    fn down(id: u32, x: f32, y: f32) -> PointerEvent {
        PointerEvent::Down {
            id,
            position: Point::new(x, y),
        }
    }

    fn up(id: u32, x: f32, y: f32) -> PointerEvent {
        PointerEvent::Up {
            id,
            position: Point::new(x, y),
        }
    }

    #[test]
    fn test_press_and_release() {
        let mut recognizer = GestureRecognizer::new();
        let area = area();

        assert_eq!(
            recognizer.handle(down(1, 100.0, 100.0), &area),
            Ok(Some(Gesture::Press))
        );
        assert_eq!(recognizer.tracked_pointer(), Some(1));
        assert_eq!(
            recognizer.handle(up(1, 145.0, 100.0), &area),
            Ok(Some(Gesture::Release {
                inside_expanded: true
            }))
        );
        assert_eq!(recognizer.tracked_pointer(), None);
    }

    #[test]
    fn test_release_outside_expanded_area() {
        let mut recognizer = GestureRecognizer::new();
        let area = area();
        recognizer.handle(down(1, 100.0, 100.0), &area).unwrap();
        assert_eq!(
            recognizer.handle(up(1, 190.0, 100.0), &area),
            Ok(Some(Gesture::Release {
                inside_expanded: false
            }))
        );
    }

    #[test]
    fn test_down_outside_button_is_ignored() {
        let mut recognizer = GestureRecognizer::new();
        let area = area();
        assert_eq!(recognizer.handle(down(3, 10.0, 10.0), &area), Ok(None));
        assert_eq!(recognizer.handle(up(3, 10.0, 10.0), &area), Ok(None));
    }

    #[test]
    fn test_second_pointer_is_rejected() {
        let mut recognizer = GestureRecognizer::new();
        let area = area();
        recognizer.handle(down(1, 100.0, 100.0), &area).unwrap();

        assert_eq!(
            recognizer.handle(down(2, 100.0, 100.0), &area),
            Err(ProtocolError::ConcurrentPointer {
                tracked: 1,
                incoming: 2
            })
        );
        // The rejected pointer's release does not end the tracked press
        assert_eq!(recognizer.handle(up(2, 100.0, 100.0), &area), Ok(None));
        assert_eq!(recognizer.tracked_pointer(), Some(1));
    }

    #[test]
    fn test_release_without_press() {
        let mut recognizer = GestureRecognizer::new();
        assert_eq!(
            recognizer.handle(up(1, 100.0, 100.0), &area()),
            Err(ProtocolError::ReleaseWithoutPress)
        );
    }

    #[test]
    fn test_move_reports_hover() {
        let mut recognizer = GestureRecognizer::new();
        let area = area();
        recognizer.handle(down(1, 100.0, 100.0), &area).unwrap();

        let moved = PointerEvent::Move {
            id: 1,
            position: Point::new(100.0, 160.0),
        };
        assert_eq!(
            recognizer.handle(moved, &area),
            Ok(Some(Gesture::Hover { inside: false }))
        );
    }

    #[test]
    fn test_cancel_and_click() {
        let mut recognizer = GestureRecognizer::new();
        let area = area();
        recognizer.handle(down(1, 100.0, 100.0), &area).unwrap();
        assert_eq!(
            recognizer.handle(PointerEvent::Cancel { id: 1 }, &area),
            Ok(Some(Gesture::Cancel))
        );
        assert_eq!(recognizer.tracked_pointer(), None);
        assert_eq!(
            recognizer.handle(PointerEvent::Click, &area),
            Ok(Some(Gesture::Click))
        );
    }
}
