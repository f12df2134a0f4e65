//! Shutter Animation System
//!
//! Time-based tweens and one-shot timers driven by an explicit clock.
//!
//! # Features
//!
//! - **Tweens**: interpolate an `f32` from one value to another over a duration
//! - **Timers**: delayed one-shot events, cancellable before they fire
//! - **Reversal**: turn a running tween around from its current value
//! - **Virtual time**: the owner advances the scheduler, so tests are exact
//! - **Frame clock**: converts wall-clock instants into frame deltas
//!
//! The scheduler is single-threaded. Completions and timer firings are
//! reported back as [`SchedulerEvent`]s from [`AnimationScheduler::advance`],
//! which lets the owner react without the scheduler holding a reference to it.

pub mod clock;
pub mod easing;
pub mod scheduler;
pub mod values;

pub use clock::FrameClock;
pub use easing::Easing;
pub use scheduler::{AnimationScheduler, SchedulerEvent, TimerId, Tween, TweenId};
pub use values::Interpolate;
