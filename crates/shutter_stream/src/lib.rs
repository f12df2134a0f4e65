//! Shutter Stream
//!
//! Async event streams over the listeners of a [`ShutterButton`].
//!
//! Each function installs a listener that forwards into an unbounded channel
//! and returns the receiving end. The button stays single-threaded; only the
//! stream side may move to another task. A stream ends once the button (or the
//! listener it installed) is dropped, and dropping a stream turns its listener
//! into a no-op.
//!
//! ```ignore
//! let mut button = ShutterButton::attached(ShutterConfig::default())?;
//! let mut videos = shutter_stream::video_events(&mut button);
//!
//! tokio::spawn(async move {
//!     while let Some(event) = videos.recv().await {
//!         println!("video {event:?}");
//!     }
//! });
//! ```

use shutter_core::{HoldEvent, ShutterButton, ShutterState, VideoEvent};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::trace;

/// Receiving end of a listener stream
#[derive(Debug)]
pub struct EventStream<T> {
    receiver: UnboundedReceiver<T>,
}

impl<T> EventStream<T> {
    /// Wait for the next event. `None` once the listener is gone and every
    /// buffered event has been received.
    pub async fn recv(&mut self) -> Option<T> {
        self.receiver.recv().await
    }

    /// Next buffered event without waiting
    pub fn try_next(&mut self) -> Option<T> {
        self.receiver.try_recv().ok()
    }

    /// All buffered events
    pub fn drain(&mut self) -> Vec<T> {
        std::iter::from_fn(|| self.try_next()).collect()
    }
}

fn channel<T>() -> (Forwarder<T>, EventStream<T>) {
    let (sender, receiver) = unbounded_channel();
    (Forwarder { sender }, EventStream { receiver })
}

struct Forwarder<T> {
    sender: UnboundedSender<T>,
}

impl<T> Forwarder<T> {
    fn send(&self, value: T) {
        if self.sender.send(value).is_err() {
            trace!("event stream dropped, discarding event");
        }
    }
}

/// Every committed state change
pub fn state_changes(button: &mut ShutterButton) -> EventStream<ShutterState> {
    let (tx, stream) = channel();
    button.listeners_mut().on_state_change(move |state| tx.send(state));
    stream
}

/// Recording progress while expanded, 0..=1
pub fn progress_changes(button: &mut ShutterButton) -> EventStream<f32> {
    let (tx, stream) = channel();
    button.listeners_mut().on_progress(move |progress| tx.send(progress));
    stream
}

/// One unit per photo taken
pub fn photo_events(button: &mut ShutterButton) -> EventStream<()> {
    let (tx, stream) = channel();
    button.listeners_mut().on_photo(move || tx.send(()));
    stream
}

/// One unit per tap; fires alongside [`photo_events`]
pub fn tap_events(button: &mut ShutterButton) -> EventStream<()> {
    let (tx, stream) = channel();
    button.listeners_mut().on_tap(move || tx.send(()));
    stream
}

pub fn video_events(button: &mut ShutterButton) -> EventStream<VideoEvent> {
    let (tx, stream) = channel();
    button.listeners_mut().on_video(move |event| tx.send(event));
    stream
}

pub fn hold_events(button: &mut ShutterButton) -> EventStream<HoldEvent> {
    let (tx, stream) = channel();
    button.listeners_mut().on_hold(move |event| tx.send(event));
    stream
}

#[cfg(test)]
mod tests {
    use super::*;
    use shutter_core::ShutterConfig;

    fn button() -> ShutterButton {
        let config = ShutterConfig::default().durations(200.0, 400.0, 400.0);
        ShutterButton::attached(config).unwrap()
    }

    #[tokio::test]
    async fn test_state_stream_receives_tap() {
        let mut button = button();
        let mut states = state_changes(&mut button);
        let mut photos = photo_events(&mut button);

        button.on_press().unwrap();
        button.on_release().unwrap();

        assert_eq!(states.recv().await, Some(ShutterState::Pressed));
        assert_eq!(states.recv().await, Some(ShutterState::Default));
        assert_eq!(photos.drain(), vec![()]);
        assert_eq!(states.try_next(), None);
    }

    #[tokio::test]
    async fn test_stream_ends_with_button() {
        let mut button = button();
        let mut videos = video_events(&mut button);
        let mut holds = hold_events(&mut button);

        button.on_press().unwrap();
        button.tick(600.0).unwrap();
        button.on_release().unwrap();
        button.tick(400.0).unwrap();
        drop(button);

        assert_eq!(videos.recv().await, Some(VideoEvent::Start));
        assert_eq!(videos.recv().await, Some(VideoEvent::Finish));
        assert_eq!(videos.recv().await, None);
        assert_eq!(holds.drain(), vec![HoldEvent::Start, HoldEvent::Finish]);
    }

    #[tokio::test]
    async fn test_progress_stream() {
        let config = ShutterConfig::default()
            .durations(200.0, 400.0, 400.0)
            .video_duration(500.0);
        let mut button = ShutterButton::attached(config).unwrap();
        let mut progress = progress_changes(&mut button);

        button.on_press().unwrap();
        button.tick(600.0).unwrap();
        button.tick(250.0).unwrap();

        assert_eq!(progress.recv().await, Some(0.5));
    }

    #[test]
    fn test_dropped_stream_is_ignored() {
        let mut button = button();
        drop(tap_events(&mut button));

        button.on_press().unwrap();
        assert!(button.on_release().is_ok());
    }

    #[test]
    fn test_replaced_listener_ends_stream() {
        let mut button = button();
        let mut first = state_changes(&mut button);
        let mut second = state_changes(&mut button);

        button.on_press().unwrap();
        assert_eq!(first.try_next(), None);
        assert_eq!(second.try_next(), Some(ShutterState::Pressed));
    }
}
