//! Gesture scripts
//!
//! A script is a comma separated list of `action@ms` steps, for example
//! `press@0,release@650`. Steps run in time order; steps sharing a time keep
//! their written order.

use std::fmt;
use std::str::FromStr;

use shutter_core::ShutterButton;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScriptError {
    #[error("script has no steps")]
    Empty,

    #[error("step `{0}` has no time, expected `action@ms`")]
    MissingTime(String),

    #[error("invalid time in step `{0}`, expected milliseconds >= 0")]
    InvalidTime(String),

    #[error("unknown action `{0}`, expected one of: press, release, click, cancel, cancel-now")]
    UnknownAction(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Press,
    Release,
    Click,
    /// Cancel with the collapse animation
    Cancel,
    /// Cancel without animating
    CancelNow,
}

impl Action {
    pub fn apply(self, button: &mut ShutterButton) -> shutter_core::Result<()> {
        match self {
            Action::Press => button.on_press(),
            Action::Release => button.on_release(),
            Action::Click => button.on_click(),
            Action::Cancel => button.cancel(true),
            Action::CancelNow => button.cancel(false),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Press => "press",
            Action::Release => "release",
            Action::Click => "click",
            Action::Cancel => "cancel",
            Action::CancelNow => "cancel-now",
        }
    }
}

impl FromStr for Action {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "press" | "down" => Ok(Action::Press),
            "release" | "up" => Ok(Action::Release),
            "click" => Ok(Action::Click),
            "cancel" => Ok(Action::Cancel),
            "cancel-now" | "cancel_now" => Ok(Action::CancelNow),
            _ => Err(ScriptError::UnknownAction(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub at_ms: f32,
    pub action: Action,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Time of the last step
    pub fn end_ms(&self) -> f32 {
        self.steps.last().map_or(0.0, |step| step.at_ms)
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut steps = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(parse_step)
            .collect::<Result<Vec<_>, _>>()?;
        if steps.is_empty() {
            return Err(ScriptError::Empty);
        }
        // Stable, so equal times keep their order
        steps.sort_by(|a, b| a.at_ms.total_cmp(&b.at_ms));
        Ok(Self { steps })
    }
}

fn parse_step(part: &str) -> Result<Step, ScriptError> {
    let (action, at) = part
        .split_once('@')
        .ok_or_else(|| ScriptError::MissingTime(part.to_string()))?;
    let at_ms: f32 = at
        .trim()
        .parse()
        .map_err(|_| ScriptError::InvalidTime(part.to_string()))?;
    if !at_ms.is_finite() || at_ms < 0.0 {
        return Err(ScriptError::InvalidTime(part.to_string()));
    }
    Ok(Step {
        at_ms,
        action: action.parse()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shutter_core::{ShutterConfig, ShutterState};

    #[test]
    fn test_parse_script() {
        let script: Script = "press@0, release@650".parse().unwrap();
        assert_eq!(
            script.steps(),
            &[
                Step {
                    at_ms: 0.0,
                    action: Action::Press
                },
                Step {
                    at_ms: 650.0,
                    action: Action::Release
                },
            ]
        );
        assert_eq!(script.end_ms(), 650.0);
    }

    #[test]
    fn test_steps_sorted_by_time() {
        let script: Script = "release@100,press@0,cancel-now@100".parse().unwrap();
        let actions: Vec<Action> = script.steps().iter().map(|s| s.action).collect();
        assert_eq!(
            actions,
            vec![Action::Press, Action::Release, Action::CancelNow]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Script>(), Err(ScriptError::Empty));
        assert_eq!(
            "press".parse::<Script>(),
            Err(ScriptError::MissingTime("press".into()))
        );
        assert_eq!(
            "press@soon".parse::<Script>(),
            Err(ScriptError::InvalidTime("press@soon".into()))
        );
        assert!("press@-1".parse::<Script>().is_err());
        assert_eq!(
            "jump@0".parse::<Script>(),
            Err(ScriptError::UnknownAction("jump".into()))
        );
    }

    #[test]
    fn test_apply_actions() {
        let mut button = ShutterButton::attached(ShutterConfig::default()).unwrap();
        Action::Press.apply(&mut button).unwrap();
        assert_eq!(button.state(), ShutterState::Pressed);
        Action::CancelNow.apply(&mut button).unwrap();
        assert_eq!(button.state(), ShutterState::Default);
        assert!(Action::Release.apply(&mut button).is_ok());
        assert!(Action::Release.apply(&mut button).is_err());
    }
}
