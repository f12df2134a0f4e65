//! Listener façade
//!
//! One optional callback per kind of event. Callbacks run synchronously on
//! the thread that drives the button, after the state change they report has
//! been committed. They receive plain values, never the button itself.
//!
//! A host that shares the button through `Rc<RefCell<_>>` and wants to drive
//! it from a callback must use `try_borrow_mut` and skip the call when the
//! button is already borrowed; a plain `borrow_mut` panics there.

use crate::state::ShutterState;

/// Hold lifecycle of an expanding press
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HoldEvent {
    Start,
    Finish,
    Cancel,
}

/// Video recording lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VideoEvent {
    Start,
    Finish,
    Cancel,
}

pub type StateListener = Box<dyn FnMut(ShutterState)>;
pub type HoldListener = Box<dyn FnMut(HoldEvent)>;
pub type VideoListener = Box<dyn FnMut(VideoEvent)>;
pub type ProgressListener = Box<dyn FnMut(f32)>;
pub type ActionListener = Box<dyn FnMut()>;

/// Registered callbacks of a button
#[derive(Default)]
pub struct Listeners {
    state: Option<StateListener>,
    hold: Option<HoldListener>,
    tap: Option<ActionListener>,
    photo: Option<ActionListener>,
    video: Option<VideoListener>,
    progress: Option<ProgressListener>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Registration; `None` clears, a new listener replaces the old one
    // =========================================================================

    pub fn set_state_listener(&mut self, listener: Option<StateListener>) {
        self.state = listener;
    }

    pub fn set_hold_listener(&mut self, listener: Option<HoldListener>) {
        self.hold = listener;
    }

    pub fn set_tap_listener(&mut self, listener: Option<ActionListener>) {
        self.tap = listener;
    }

    pub fn set_photo_listener(&mut self, listener: Option<ActionListener>) {
        self.photo = listener;
    }

    pub fn set_video_listener(&mut self, listener: Option<VideoListener>) {
        self.video = listener;
    }

    pub fn set_progress_listener(&mut self, listener: Option<ProgressListener>) {
        self.progress = listener;
    }

    pub fn on_state_change<F: FnMut(ShutterState) + 'static>(&mut self, f: F) {
        self.state = Some(Box::new(f));
    }

    pub fn on_hold<F: FnMut(HoldEvent) + 'static>(&mut self, f: F) {
        self.hold = Some(Box::new(f));
    }

    pub fn on_tap<F: FnMut() + 'static>(&mut self, f: F) {
        self.tap = Some(Box::new(f));
    }

    pub fn on_photo<F: FnMut() + 'static>(&mut self, f: F) {
        self.photo = Some(Box::new(f));
    }

    pub fn on_video<F: FnMut(VideoEvent) + 'static>(&mut self, f: F) {
        self.video = Some(Box::new(f));
    }

    pub fn on_progress<F: FnMut(f32) + 'static>(&mut self, f: F) {
        self.progress = Some(Box::new(f));
    }

    /// Drop every registered callback
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    pub(crate) fn state_changed(&mut self, state: ShutterState) {
        if let Some(listener) = self.state.as_mut() {
            listener(state);
        }
    }

    pub(crate) fn hold(&mut self, event: HoldEvent) {
        if let Some(listener) = self.hold.as_mut() {
            listener(event);
        }
    }

    /// A quick press: photo click, then tap
    pub(crate) fn quick_action(&mut self) {
        if let Some(listener) = self.photo.as_mut() {
            listener();
        }
        if let Some(listener) = self.tap.as_mut() {
            listener();
        }
    }

    pub(crate) fn video(&mut self, event: VideoEvent) {
        if let Some(listener) = self.video.as_mut() {
            listener(event);
        }
    }

    pub(crate) fn progress(&mut self, progress: f32) {
        if let Some(listener) = self.progress.as_mut() {
            listener(progress);
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("state", &self.state.is_some())
            .field("hold", &self.hold.is_some())
            .field("tap", &self.tap.is_some())
            .field("photo", &self.photo.is_some())
            .field("video", &self.video.is_some())
            .field("progress", &self.progress.is_some())
            .finish()
    }
}
