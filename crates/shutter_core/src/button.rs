//! Shutter button state machine
//!
//! The button reacts to press, release and click input, runs its expand,
//! progress and collapse animations on an [`AnimationScheduler`], and reports
//! the gesture outcome through [`Listeners`].
//!
//! All input and time flows through `&mut self` on one thread. The host calls
//! [`ShutterButton::tick`] once per frame with the elapsed milliseconds, and
//! [`ShutterButton::draw`] to render.

use shutter_animation::{AnimationScheduler, Easing, SchedulerEvent, TimerId, Tween, TweenId};
use shutter_paint::{Canvas, Color, IconId, Size};
use tracing::{debug, warn};

use crate::config::{check_dimension, check_duration, check_multiplier, ShutterConfig};
use crate::error::{ConfigError, IconError, ProtocolError, Result, ShutterError, ValidationError};
use crate::gesture::{Gesture, GestureRecognizer, HitArea, PointerEvent};
use crate::icons::IconStrip;
use crate::listener::{HoldEvent, Listeners, VideoEvent};
use crate::render::{Frame, ShutterPainter, Visuals};
use crate::state::{CollapseAction, Mode, ShutterState};
use crate::validate::validate_geometry;

/// Bookkeeping of the gesture in flight; reset when the button rests
#[derive(Clone, Copy, Debug, Default)]
struct GestureFlags {
    /// Virtual time of the press
    pressed_at: f64,
    /// Photo/tap is due for this gesture
    quick: bool,
    /// Click collapse: the finger left after expansion began
    released: bool,
    /// Click collapse: the next click or release collapses
    awaiting_click: bool,
    hold_started: bool,
    hold_finished: bool,
    video_started: bool,
    video_finished: bool,
    canceling: bool,
}

/// Handles of everything running on the scheduler
#[derive(Clone, Copy, Debug, Default)]
struct Running {
    expand_timer: Option<TimerId>,
    expand: Option<TweenId>,
    progress: Option<TweenId>,
    collapse: Option<TweenId>,
    icon_scroll: Option<TweenId>,
}

/// Camera shutter button
pub struct ShutterButton {
    config: ShutterConfig,
    pending_mode: Option<Mode>,
    pending_action: Option<CollapseAction>,
    state: ShutterState,
    listeners: Listeners,
    scheduler: Option<AnimationScheduler>,
    recognizer: GestureRecognizer,
    painter: ShutterPainter,
    /// Size of the last drawn canvas, used for hit testing
    size: Size,
    clock_ms: f64,
    finger_down: bool,
    /// The active press was rejected; its release is swallowed
    ignored_press: bool,
    gesture: GestureFlags,
    running: Running,
    visuals: Visuals,
    icons: IconStrip,
}

impl ShutterButton {
    /// Create a detached button; call [`attach`](Self::attach) before input
    pub fn new(config: ShutterConfig) -> Self {
        Self {
            config,
            pending_mode: None,
            pending_action: None,
            state: ShutterState::Default,
            listeners: Listeners::new(),
            scheduler: None,
            recognizer: GestureRecognizer::new(),
            painter: ShutterPainter,
            size: Size::ZERO,
            clock_ms: 0.0,
            finger_down: false,
            ignored_press: false,
            gesture: GestureFlags::default(),
            running: Running::default(),
            visuals: Visuals::default(),
            icons: IconStrip::default(),
        }
    }

    /// Validate `config` and create an attached button
    pub fn attached(config: ShutterConfig) -> std::result::Result<Self, ConfigError> {
        let mut button = Self::new(config.validated()?);
        button.attach();
        Ok(button)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Start the animation scheduler. Idempotent.
    pub fn attach(&mut self) {
        if self.scheduler.is_none() {
            debug!("shutter button attached");
            self.scheduler = Some(AnimationScheduler::new());
        }
    }

    /// Cancel every timer and animation and drop the scheduler. The button
    /// returns to rest without notifying listeners.
    pub fn detach(&mut self) {
        if let Some(mut scheduler) = self.scheduler.take() {
            scheduler.cancel_all();
            debug!("shutter button detached in {:?}", self.state);
        }
        self.running = Running::default();
        self.recognizer.reset();
        self.finger_down = false;
        self.ignored_press = false;
        self.state = ShutterState::Default;
        self.visuals = Visuals::default();
        self.rest();
    }

    pub fn is_attached(&self) -> bool {
        self.scheduler.is_some()
    }

    fn scheduler(&mut self) -> Result<&mut AnimationScheduler> {
        self.scheduler.as_mut().ok_or(ShutterError::NotAttached)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn state(&self) -> ShutterState {
        self.state
    }

    pub fn config(&self) -> &ShutterConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn collapse_action(&self) -> CollapseAction {
        self.config.collapse_action
    }

    pub fn listeners_mut(&mut self) -> &mut Listeners {
        &mut self.listeners
    }

    pub fn expanding_factor(&self) -> f32 {
        self.visuals.expanding_factor
    }

    pub fn progress(&self) -> f32 {
        self.visuals.progress
    }

    /// Whether the button is expanded and waits for a collapsing click
    pub fn is_awaiting_click(&self) -> bool {
        self.gesture.awaiting_click
    }

    /// Virtual time elapsed through `tick`
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    pub fn icons(&self) -> &IconStrip {
        &self.icons
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// A finger touched the button
    pub fn on_press(&mut self) -> Result<()> {
        self.scheduler()?;
        if self.finger_down {
            warn!("press while a press is already active");
            return Err(ProtocolError::ConcurrentPress.into());
        }
        self.finger_down = true;

        match self.state {
            ShutterState::Default => {
                self.gesture = GestureFlags {
                    pressed_at: self.clock_ms,
                    ..GestureFlags::default()
                };
                self.visuals.hovered = true;
                self.dispatch(ShutterState::Pressed);
                self.schedule_expand()?;
            }
            ShutterState::StartExpanding | ShutterState::Expanded
                if self.gesture.awaiting_click =>
            {
                self.visuals.hovered = true;
            }
            state => {
                warn!("press ignored in {:?}", state);
                self.ignored_press = true;
            }
        }
        Ok(())
    }

    /// The finger left the button over the expanded area
    pub fn on_release(&mut self) -> Result<()> {
        self.release(true)
    }

    fn release(&mut self, inside_expanded: bool) -> Result<()> {
        self.scheduler()?;
        if !self.finger_down {
            warn!("release without press");
            return Err(ProtocolError::ReleaseWithoutPress.into());
        }
        self.finger_down = false;
        self.visuals.hovered = false;
        if std::mem::take(&mut self.ignored_press) {
            return Ok(());
        }

        let action = self.config.collapse_action;
        match self.state {
            ShutterState::Pressed => {
                self.cancel_expand_timer();
                self.gesture.quick = match self.config.mode {
                    Mode::All => true,
                    Mode::Tap => {
                        self.clock_ms - self.gesture.pressed_at
                            <= f64::from(self.config.timing.hold_duration)
                    }
                    Mode::Hold => false,
                };
                self.dispatch(ShutterState::Default);
            }
            ShutterState::StartExpanding | ShutterState::Expanded
                if action == CollapseAction::Click =>
            {
                if !self.gesture.released {
                    self.gesture.released = true;
                    self.gesture.awaiting_click = true;
                    if self.state == ShutterState::Expanded {
                        self.finish_hold();
                    }
                } else if inside_expanded {
                    self.start_collapse()?;
                }
            }
            ShutterState::StartExpanding => {
                self.gesture.quick = self.config.mode.is_pressable();
                self.start_collapse()?;
            }
            ShutterState::Expanded => self.start_collapse()?,
            ShutterState::StartCollapsing | ShutterState::Default => {}
        }
        Ok(())
    }

    /// Platform click. Collapses an expanded button in click-collapse mode.
    pub fn on_click(&mut self) -> Result<()> {
        self.scheduler()?;
        if self.config.collapse_action == CollapseAction::Click
            && matches!(
                self.state,
                ShutterState::StartExpanding | ShutterState::Expanded
            )
        {
            self.start_collapse()?;
        }
        Ok(())
    }

    /// Raw pointer input, hit-tested against the last drawn canvas size
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<()> {
        self.scheduler()?;
        let area = HitArea::new(&self.config.geometry, self.size);
        let Some(gesture) = self.recognizer.handle(event, &area)? else {
            return Ok(());
        };

        match gesture {
            Gesture::Press => {
                // A rejected press must not leave its pointer tracked
                let pressed = self.on_press();
                if pressed.is_err() {
                    self.recognizer.reset();
                }
                pressed
            }
            Gesture::Release { inside_expanded } => self.release(inside_expanded),
            Gesture::Hover { inside } => {
                if self.gesture.awaiting_click && self.finger_down {
                    self.visuals.hovered = inside;
                }
                Ok(())
            }
            Gesture::Click => self.on_click(),
            Gesture::Cancel => {
                self.finger_down = false;
                self.ignored_press = false;
                self.visuals.hovered = false;
                self.cancel(true)
            }
        }
    }

    /// Abort the current gesture.
    ///
    /// A press or expansion in flight returns to rest immediately. A recording
    /// is cancelled, collapsing with animation when `animated` is set.
    /// Does nothing when resting or already collapsing.
    pub fn cancel(&mut self, animated: bool) -> Result<()> {
        self.scheduler()?;
        match self.state {
            ShutterState::Pressed | ShutterState::StartExpanding => {
                self.gesture.canceling = true;
                self.stop_gesture_animations();
                self.visuals.expanding_factor = 0.0;
                self.visuals.progress = 0.0;
                self.dispatch(ShutterState::Default);
            }
            ShutterState::Expanded => {
                self.gesture.canceling = true;
                if animated {
                    self.start_collapse()?;
                } else {
                    self.stop_gesture_animations();
                    self.visuals.expanding_factor = 0.0;
                    self.visuals.progress = 0.0;
                    self.dispatch(ShutterState::Default);
                }
            }
            ShutterState::Default | ShutterState::StartCollapsing => {}
        }
        Ok(())
    }

    // =========================================================================
    // Time
    // =========================================================================

    /// Advance animations and timers by `elapsed_ms`.
    ///
    /// Deadlines inside the interval are handled at their exact time, so the
    /// outcome does not depend on how the host slices time into frames.
    pub fn tick(&mut self, elapsed_ms: f32) -> Result<()> {
        let mut remaining = elapsed_ms.max(0.0);
        let mut first = true;
        loop {
            let scheduler = self.scheduler()?;
            let next = scheduler.time_to_next_event();
            let due = next.filter(|n| *n <= remaining);
            if due.is_none() && !first && remaining <= 0.0 {
                break;
            }
            first = false;

            let step = due.unwrap_or(remaining);
            let events = scheduler.advance(step);
            self.clock_ms += f64::from(step);
            remaining -= step;

            for event in events {
                self.on_scheduler_event(event)?;
            }
            if due.is_none() {
                break;
            }
        }
        Ok(())
    }

    fn on_scheduler_event(&mut self, event: SchedulerEvent) -> Result<()> {
        let running = self.running;
        match event {
            SchedulerEvent::TimerFired(id) if running.expand_timer == Some(id) => {
                self.running.expand_timer = None;
                self.start_expand()?;
            }
            SchedulerEvent::TweenUpdated { id, value } => {
                if running.expand == Some(id) || running.collapse == Some(id) {
                    self.visuals.expanding_factor = value;
                } else if running.progress == Some(id) {
                    self.visuals.progress = value;
                    if self.state == ShutterState::Expanded {
                        self.listeners.progress(value);
                    }
                } else if running.icon_scroll == Some(id) {
                    self.icons.scroll_to(value);
                }
            }
            SchedulerEvent::TweenCompleted { id, .. } => {
                if running.expand == Some(id) {
                    self.running.expand = None;
                    self.on_expanded()?;
                } else if running.progress == Some(id) {
                    self.running.progress = None;
                    debug!("recording limit reached");
                    self.start_collapse()?;
                } else if running.collapse == Some(id) {
                    self.running.collapse = None;
                    self.visuals.expanding_factor = 0.0;
                    self.visuals.progress = 0.0;
                    self.dispatch(ShutterState::Default);
                } else if running.icon_scroll == Some(id) {
                    self.running.icon_scroll = None;
                }
            }
            SchedulerEvent::TimerFired(_) => {}
        }
        Ok(())
    }

    // =========================================================================
    // Animations
    // =========================================================================

    fn schedule_expand(&mut self) -> Result<()> {
        let mode = self.config.mode;
        if !mode.is_expandable() {
            return Ok(());
        }
        // Hold-only buttons start expanding on the next tick
        let delay = if mode.is_pressable() {
            self.config.timing.expand_delay
        } else {
            0.0
        };
        let timer = self.scheduler()?.schedule(delay);
        self.running.expand_timer = Some(timer);
        Ok(())
    }

    fn cancel_expand_timer(&mut self) {
        if let (Some(timer), Some(scheduler)) =
            (self.running.expand_timer.take(), self.scheduler.as_mut())
        {
            scheduler.cancel_timer(timer);
        }
    }

    fn start_expand(&mut self) -> Result<()> {
        let duration = self.config.timing.expand_duration;
        let stale_collapse = self.running.collapse.take();
        let scheduler = self.scheduler()?;
        if let Some(collapse) = stale_collapse {
            scheduler.cancel(collapse);
        }
        let tween = scheduler.start(Tween::new(0.0, 1.0, duration));
        self.running.expand = Some(tween);
        self.visuals.progress = 0.0;
        self.dispatch(ShutterState::StartExpanding);
        Ok(())
    }

    fn on_expanded(&mut self) -> Result<()> {
        self.visuals.expanding_factor = 1.0;
        let timing = &self.config.timing;
        if timing.is_video_bounded() {
            let duration = timing.video_duration;
            let tween = self.scheduler()?.start(Tween::new(0.0, 1.0, duration));
            self.running.progress = Some(tween);
        }
        self.dispatch(ShutterState::Expanded);
        Ok(())
    }

    /// Collapse from the current expansion; an expansion in flight is
    /// reversed from where it is
    fn start_collapse(&mut self) -> Result<()> {
        let factor = self.visuals.expanding_factor;
        let duration = self.config.timing.collapse_duration * factor;
        let running = self.running;
        let scheduler = self.scheduler()?;

        if let Some(progress) = running.progress {
            scheduler.cancel(progress);
        }
        if let Some(timer) = running.expand_timer {
            scheduler.cancel_timer(timer);
        }
        if let Some(collapse) = running.collapse {
            scheduler.cancel(collapse);
        }
        let collapse = match running.expand.and_then(|id| scheduler.reverse(id, duration)) {
            Some(reversed) => reversed,
            None => scheduler.start(Tween::new(factor, 0.0, duration)),
        };

        self.running = Running {
            collapse: Some(collapse),
            icon_scroll: running.icon_scroll,
            ..Running::default()
        };
        self.gesture.awaiting_click = false;
        self.visuals.hovered = false;
        self.dispatch(ShutterState::StartCollapsing);
        Ok(())
    }

    /// Cancel the gesture's timer and tweens, leaving icon scrolling alone
    fn stop_gesture_animations(&mut self) {
        let running = self.running;
        if let Some(scheduler) = self.scheduler.as_mut() {
            if let Some(timer) = running.expand_timer {
                scheduler.cancel_timer(timer);
            }
            for tween in [running.expand, running.progress, running.collapse]
                .into_iter()
                .flatten()
            {
                scheduler.cancel(tween);
            }
        }
        self.running = Running {
            icon_scroll: running.icon_scroll,
            ..Running::default()
        };
    }

    // =========================================================================
    // State dispatch
    // =========================================================================

    /// Commit `next` and notify listeners of what the transition means
    fn dispatch(&mut self, next: ShutterState) {
        let prev = self.state;
        self.state = next;
        debug!("{:?} -> {:?}", prev, next);
        self.listeners.state_changed(next);

        match (prev, next) {
            (_, ShutterState::Expanded) => {
                self.gesture.hold_started = true;
                self.listeners.hold(HoldEvent::Start);
                self.gesture.video_started = true;
                self.listeners.video(VideoEvent::Start);
                if self.gesture.released {
                    self.finish_hold();
                }
            }
            (ShutterState::StartExpanding, ShutterState::StartCollapsing) => {
                if self.gesture.quick {
                    self.gesture.quick = false;
                    self.listeners.quick_action();
                }
            }
            (ShutterState::Expanded, ShutterState::StartCollapsing) => {
                self.end_video();
                if self.gesture.canceling {
                    self.end_hold();
                }
            }
            (_, ShutterState::Default) => {
                if prev == ShutterState::Pressed && self.gesture.quick && !self.gesture.canceling {
                    self.listeners.quick_action();
                }
                self.end_video();
                self.end_hold();
                self.rest();
            }
            _ => {}
        }
    }

    fn finish_hold(&mut self) {
        if !self.gesture.hold_finished {
            self.gesture.hold_finished = true;
            self.listeners.hold(HoldEvent::Finish);
        }
    }

    /// Finish or cancel the hold; cancellation is reported even if the hold
    /// never reached expansion
    fn end_hold(&mut self) {
        if self.gesture.hold_finished {
            return;
        }
        if self.gesture.canceling {
            self.gesture.hold_finished = true;
            self.listeners.hold(HoldEvent::Cancel);
        } else if self.gesture.hold_started {
            self.finish_hold();
        }
    }

    fn end_video(&mut self) {
        if self.gesture.video_started && !self.gesture.video_finished {
            self.gesture.video_finished = true;
            let event = if self.gesture.canceling {
                VideoEvent::Cancel
            } else {
                VideoEvent::Finish
            };
            self.listeners.video(event);
        }
    }

    /// Back at rest: forget the gesture and apply deferred configuration
    fn rest(&mut self) {
        self.gesture = GestureFlags::default();
        self.visuals.hovered = false;
        if let Some(mode) = self.pending_mode.take() {
            debug!("applying deferred mode {}", mode);
            self.config.mode = mode;
        }
        if let Some(action) = self.pending_action.take() {
            debug!("applying deferred collapse action {}", action);
            self.config.collapse_action = action;
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    fn is_busy(&self) -> bool {
        self.state != ShutterState::Default
    }

    /// Change the mode. During a gesture the change waits for the next one.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.is_busy() {
            warn!("mode change to {} deferred until the gesture ends", mode);
            self.pending_mode = Some(mode);
        } else {
            self.config.mode = mode;
            self.pending_mode = None;
        }
    }

    /// Change the collapse action. During a gesture the change waits for the
    /// next one.
    pub fn set_collapse_action(&mut self, action: CollapseAction) {
        if self.is_busy() {
            warn!(
                "collapse action change to {} deferred until the gesture ends",
                action
            );
            self.pending_action = Some(action);
        } else {
            self.config.collapse_action = action;
            self.pending_action = None;
        }
    }

    fn warn_if_busy(&self, what: &str) {
        if self.is_busy() {
            warn!("{} changed during a gesture; applies to the next timer", what);
        }
    }

    pub fn set_expand_delay(&mut self, ms: f32) -> std::result::Result<(), ConfigError> {
        self.config.timing.expand_delay = check_duration("expand_delay", ms)?;
        self.warn_if_busy("expand_delay");
        Ok(())
    }

    pub fn set_expand_duration(&mut self, ms: f32) -> std::result::Result<(), ConfigError> {
        self.config.timing.expand_duration = check_duration("expand_duration", ms)?;
        self.warn_if_busy("expand_duration");
        Ok(())
    }

    pub fn set_collapse_duration(&mut self, ms: f32) -> std::result::Result<(), ConfigError> {
        self.config.timing.collapse_duration = check_duration("collapse_duration", ms)?;
        self.warn_if_busy("collapse_duration");
        Ok(())
    }

    pub fn set_hold_duration(&mut self, ms: f32) -> std::result::Result<(), ConfigError> {
        self.config.timing.hold_duration = check_duration("hold_duration", ms)?;
        self.warn_if_busy("hold_duration");
        Ok(())
    }

    /// 0 records until released
    pub fn set_video_duration(&mut self, ms: f32) -> std::result::Result<(), ConfigError> {
        if ms != 0.0 {
            check_duration("video_duration", ms)?;
        }
        self.config.timing.video_duration = ms;
        self.warn_if_busy("video_duration");
        Ok(())
    }

    pub fn set_main_circle_radius(&mut self, px: f32) -> std::result::Result<(), ConfigError> {
        self.config.geometry.main_circle_radius = check_dimension("main_circle_radius", px)?;
        Ok(())
    }

    pub fn set_main_circle_radius_expanded(
        &mut self,
        px: f32,
    ) -> std::result::Result<(), ConfigError> {
        self.config.geometry.main_circle_radius_expanded =
            check_dimension("main_circle_radius_expanded", px)?;
        Ok(())
    }

    pub fn set_stroke_width(&mut self, px: f32) -> std::result::Result<(), ConfigError> {
        self.config.geometry.stroke_width = check_dimension("stroke_width", px)?;
        Ok(())
    }

    pub fn set_progress_arc_width(&mut self, px: f32) -> std::result::Result<(), ConfigError> {
        self.config.geometry.progress_arc_width = check_dimension("progress_arc_width", px)?;
        Ok(())
    }

    pub fn set_icon_size(&mut self, px: f32) -> std::result::Result<(), ConfigError> {
        self.config.geometry.icon_size = check_dimension("icon_size", px)?;
        Ok(())
    }

    pub fn set_gradient_rotation_multiplier(
        &mut self,
        multiplier: f32,
    ) -> std::result::Result<(), ConfigError> {
        self.config.appearance.gradient_rotation_multiplier = check_multiplier(multiplier)?;
        Ok(())
    }

    pub fn set_progress_arc_colors(
        &mut self,
        colors: Vec<Color>,
    ) -> std::result::Result<(), ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyArcColors);
        }
        self.config.appearance.progress_arc_colors = colors;
        Ok(())
    }

    pub fn set_check_consistency(&mut self, check: bool) {
        self.config.check_consistency = check;
    }

    // =========================================================================
    // Icons
    // =========================================================================

    /// Replace the icons; an empty list clears them
    pub fn set_icons(&mut self, icons: Vec<IconId>) {
        self.cancel_icon_scroll();
        self.icons.set_icons(icons);
    }

    /// Jump to an icon position, stopping any scroll in progress
    pub fn set_icons_position(&mut self, position: f32) -> std::result::Result<(), IconError> {
        self.icons.check_position(position)?;
        self.cancel_icon_scroll();
        self.icons.set_position(position)
    }

    /// Scroll to an icon position with a decelerating animation
    pub fn scroll_icons_to_position(&mut self, position: f32) -> Result<()> {
        self.icons.check_position(position)?;
        self.cancel_icon_scroll();

        let from = self.icons.position().unwrap_or(0.0);
        let duration = (from - position).abs() * self.config.timing.icon_scroll_duration;
        let tween = Tween::new(from, position, duration).easing(Easing::Decelerate);
        let id = self.scheduler()?.start(tween);
        self.running.icon_scroll = Some(id);
        Ok(())
    }

    fn cancel_icon_scroll(&mut self) {
        if let (Some(id), Some(scheduler)) =
            (self.running.icon_scroll.take(), self.scheduler.as_mut())
        {
            scheduler.cancel(id);
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Set the canvas size used for hit testing before the first draw
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Draw parameters for a canvas of `size`
    pub fn frame(&self, size: Size) -> Frame {
        Frame::compute(&self.config, self.state, self.visuals, &self.icons, size)
    }

    /// Validate geometry against the canvas (when enabled) and draw.
    /// Nothing is drawn if validation fails.
    pub fn draw(&mut self, canvas: &mut dyn Canvas) -> std::result::Result<(), ValidationError> {
        let size = canvas.size();
        if self.config.check_consistency {
            validate_geometry(&self.config.geometry, size)?;
        }
        self.size = size;
        let frame = self.frame(size);
        self.painter.paint(&frame, canvas);
        Ok(())
    }
}

impl Default for ShutterButton {
    fn default() -> Self {
        Self::new(ShutterConfig::default())
    }
}

impl std::fmt::Debug for ShutterButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShutterButton")
            .field("state", &self.state)
            .field("mode", &self.config.mode)
            .field("collapse_action", &self.config.collapse_action)
            .field("attached", &self.is_attached())
            .field("visuals", &self.visuals)
            .finish_non_exhaustive()
    }
}
