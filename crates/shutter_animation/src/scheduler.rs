//! Animation scheduler
//!
//! Owns every running tween and pending timer of one button. Time only moves
//! when the owner calls [`AnimationScheduler::advance`]; there is no
//! background thread and no locking.
//!
//! Owners that need timer deadlines and tween completions to land exactly on a
//! step boundary ask [`AnimationScheduler::time_to_next_event`] first and
//! split their frame delta accordingly:
//!
//! ```ignore
//! let mut remaining = dt_ms;
//! loop {
//!     let step = scheduler
//!         .time_to_next_event()
//!         .map_or(remaining, |next| next.min(remaining));
//!     for event in scheduler.advance(step) {
//!         handle(event);
//!     }
//!     remaining -= step;
//!     if remaining <= 0.0 {
//!         break;
//!     }
//! }
//! ```

use std::fmt;

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::easing::Easing;
use crate::values::Interpolate;

/// Deadlines closer than this are considered reached
const EPSILON_MS: f32 = 1e-3;

new_key_type! {
    /// Handle to a running tween
    pub struct TweenId;
    /// Handle to a pending timer
    pub struct TimerId;
}

/// Callback invoked with the current tween value
pub type ValueCallback = Box<dyn FnMut(f32)>;

/// A value animated from `from` to `to` over `duration_ms`
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: f32,
    easing: Easing,
    elapsed_ms: f32,
    on_update: Option<ValueCallback>,
    on_complete: Option<ValueCallback>,
    seq: u64,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_ms: f32) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            easing: Easing::Linear,
            elapsed_ms: 0.0,
            on_update: None,
            on_complete: None,
            seq: 0,
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Called after every step with the new value
    pub fn on_update<F: FnMut(f32) + 'static>(mut self, f: F) -> Self {
        self.on_update = Some(Box::new(f));
        self
    }

    /// Called once with the final value, unless the tween is cancelled
    pub fn on_complete<F: FnMut(f32) + 'static>(mut self, f: F) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    pub fn start_value(&self) -> f32 {
        self.from
    }

    pub fn end_value(&self) -> f32 {
        self.to
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    /// Linear time progress in 0..=1
    pub fn progress(&self) -> f32 {
        if self.is_finished() {
            1.0
        } else {
            self.elapsed_ms / self.duration_ms
        }
    }

    /// Current interpolated value
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            self.to
        } else {
            self.from.lerp(&self.to, self.easing.apply(self.progress()))
        }
    }

    fn remaining_ms(&self) -> f32 {
        (self.duration_ms - self.elapsed_ms).max(0.0)
    }

    fn is_finished(&self) -> bool {
        self.remaining_ms() <= EPSILON_MS
    }
}

impl fmt::Debug for Tween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("duration_ms", &self.duration_ms)
            .field("elapsed_ms", &self.elapsed_ms)
            .field("easing", &self.easing)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
struct Timer {
    remaining_ms: f32,
    seq: u64,
}

/// Something that happened during [`AnimationScheduler::advance`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SchedulerEvent {
    /// A timer reached its deadline and was removed
    TimerFired(TimerId),
    /// A tween moved to a new value
    TweenUpdated { id: TweenId, value: f32 },
    /// A tween reached its end value and was removed
    TweenCompleted { id: TweenId, value: f32 },
}

#[derive(Clone, Copy)]
enum Entry {
    Timer(TimerId),
    Tween(TweenId),
}

/// Single-threaded tween and timer scheduler driven by virtual time
#[derive(Default)]
pub struct AnimationScheduler {
    tweens: SlotMap<TweenId, Tween>,
    timers: SlotMap<TimerId, Timer>,
    next_seq: u64,
    now_ms: f64,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    // =========================================================================
    // Tweens
    // =========================================================================

    /// Start a tween; its first update is reported on the next `advance`
    pub fn start(&mut self, mut tween: Tween) -> TweenId {
        tween.seq = self.next_seq();
        tween.elapsed_ms = 0.0;
        debug!(
            "tween start {} -> {} over {}ms",
            tween.from, tween.to, tween.duration_ms
        );
        self.tweens.insert(tween)
    }

    /// Stop a tween without completing it. Returns false if it was not running.
    pub fn cancel(&mut self, id: TweenId) -> bool {
        let removed = self.tweens.remove(id).is_some();
        if removed {
            debug!("tween cancelled");
        }
        removed
    }

    /// Replace a running tween by one that goes from its current value back to
    /// its start value over `duration_ms`. Callbacks carry over.
    pub fn reverse(&mut self, id: TweenId, duration_ms: f32) -> Option<TweenId> {
        let old = self.tweens.remove(id)?;
        let reversed = Tween {
            from: old.value(),
            to: old.from,
            duration_ms: duration_ms.max(0.0),
            easing: old.easing,
            elapsed_ms: 0.0,
            on_update: old.on_update,
            on_complete: old.on_complete,
            seq: 0,
        };
        Some(self.start(reversed))
    }

    pub fn value(&self, id: TweenId) -> Option<f32> {
        self.tweens.get(id).map(Tween::value)
    }

    pub fn is_running(&self, id: TweenId) -> bool {
        self.tweens.contains_key(id)
    }

    pub fn tween_count(&self) -> usize {
        self.tweens.len()
    }

    // =========================================================================
    // Timers
    // =========================================================================

    /// Schedule a one-shot timer. A zero delay fires on the next `advance`.
    pub fn schedule(&mut self, delay_ms: f32) -> TimerId {
        let seq = self.next_seq();
        trace!("timer scheduled in {}ms", delay_ms);
        self.timers.insert(Timer {
            remaining_ms: delay_ms.max(0.0),
            seq,
        })
    }

    /// Returns false if the timer already fired or was cancelled
    pub fn cancel_timer(&mut self, id: TimerId) -> bool {
        self.timers.remove(id).is_some()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    // =========================================================================
    // Time
    // =========================================================================

    /// Total virtual time advanced so far
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn has_pending_work(&self) -> bool {
        !self.tweens.is_empty() || !self.timers.is_empty()
    }

    /// Time until the earliest timer deadline or tween completion
    pub fn time_to_next_event(&self) -> Option<f32> {
        let timers = self.timers.values().map(|t| t.remaining_ms.max(0.0));
        let tweens = self.tweens.values().map(Tween::remaining_ms);
        timers.chain(tweens).reduce(f32::min)
    }

    /// Move time forward by `step_ms`.
    ///
    /// Entries are processed in creation order. Completed tweens and fired
    /// timers are removed before this returns.
    pub fn advance(&mut self, step_ms: f32) -> SmallVec<[SchedulerEvent; 4]> {
        let step_ms = step_ms.max(0.0);
        self.now_ms += f64::from(step_ms);

        let mut order: SmallVec<[(u64, Entry); 8]> = self
            .timers
            .iter()
            .map(|(id, timer)| (timer.seq, Entry::Timer(id)))
            .chain(
                self.tweens
                    .iter()
                    .map(|(id, tween)| (tween.seq, Entry::Tween(id))),
            )
            .collect();
        order.sort_unstable_by_key(|(seq, _)| *seq);

        let mut events = SmallVec::new();
        for (_, entry) in order {
            match entry {
                Entry::Timer(id) => {
                    let Some(timer) = self.timers.get_mut(id) else {
                        continue;
                    };
                    timer.remaining_ms -= step_ms;
                    if timer.remaining_ms <= EPSILON_MS {
                        self.timers.remove(id);
                        trace!("timer fired at {}ms", self.now_ms);
                        events.push(SchedulerEvent::TimerFired(id));
                    }
                }
                Entry::Tween(id) => {
                    let Some(tween) = self.tweens.get_mut(id) else {
                        continue;
                    };
                    tween.elapsed_ms = (tween.elapsed_ms + step_ms).min(tween.duration_ms);
                    let value = tween.value();
                    if let Some(on_update) = tween.on_update.as_mut() {
                        on_update(value);
                    }
                    events.push(SchedulerEvent::TweenUpdated { id, value });

                    if tween.is_finished() {
                        if let Some(mut done) = self.tweens.remove(id) {
                            if let Some(on_complete) = done.on_complete.as_mut() {
                                on_complete(value);
                            }
                        }
                        trace!("tween completed at {}ms", self.now_ms);
                        events.push(SchedulerEvent::TweenCompleted { id, value });
                    }
                }
            }
        }
        events
    }

    /// Drop every tween and timer without completing them
    pub fn cancel_all(&mut self) {
        if self.has_pending_work() {
            debug!(
                "cancelling {} tweens and {} timers",
                self.tweens.len(),
                self.timers.len()
            );
        }
        self.tweens.clear();
        self.timers.clear();
    }
}

impl fmt::Debug for AnimationScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationScheduler")
            .field("tweens", &self.tweens.len())
            .field("timers", &self.timers.len())
            .field("now_ms", &self.now_ms)
            .finish()
    }
}
