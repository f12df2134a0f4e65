//! Button state, mode and collapse action

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Visual and gesture state of the button.
///
/// Typical lifecycles:
///
/// - photo: `Default -> Pressed -> Default`
/// - video: `Default -> Pressed -> StartExpanding -> Expanded -> StartCollapsing -> Default`
/// - cancelled video: `... -> Expanded -> Default`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShutterState {
    #[default]
    Default,
    Pressed,
    StartExpanding,
    Expanded,
    StartCollapsing,
}

impl ShutterState {
    /// Expanding, expanded or collapsing
    pub fn is_expansion(self) -> bool {
        matches!(
            self,
            ShutterState::StartExpanding | ShutterState::Expanded | ShutterState::StartCollapsing
        )
    }
}

/// Which gestures the button reacts to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Mode {
    /// Taps take photos, holds record video
    #[default]
    All,
    /// Taps only; the button never expands
    Tap,
    /// Holds only; taps produce no callback
    Hold,
}

impl Mode {
    pub const PHOTO: Mode = Mode::Tap;
    pub const VIDEO: Mode = Mode::Hold;

    /// Whether a short press counts as a tap
    pub fn is_pressable(self) -> bool {
        matches!(self, Mode::All | Mode::Tap)
    }

    /// Whether holding the button expands it
    pub fn is_expandable(self) -> bool {
        matches!(self, Mode::All | Mode::Hold)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::All => "all",
            Mode::Tap => "tap",
            Mode::Hold => "hold",
        }
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Mode::All),
            "tap" | "photo" => Ok(Mode::Tap),
            "hold" | "video" => Ok(Mode::Hold),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Mode {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.as_str().to_string()
    }
}

/// What ends an expanded hold
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CollapseAction {
    /// Lifting the finger collapses the button
    #[default]
    Release,
    /// The button stays expanded after release until it is clicked
    Click,
}

impl CollapseAction {
    pub fn as_str(self) -> &'static str {
        match self {
            CollapseAction::Release => "release",
            CollapseAction::Click => "click",
        }
    }
}

impl FromStr for CollapseAction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "release" => Ok(CollapseAction::Release),
            "click" => Ok(CollapseAction::Click),
            _ => Err(ConfigError::InvalidCollapseAction(s.to_string())),
        }
    }
}

impl fmt::Display for CollapseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for CollapseAction {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CollapseAction> for String {
    fn from(action: CollapseAction) -> Self {
        action.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_aliases() {
        assert_eq!("photo".parse::<Mode>().unwrap(), Mode::PHOTO);
        assert_eq!("VIDEO".parse::<Mode>().unwrap(), Mode::Hold);
        assert_eq!(" all ".parse::<Mode>().unwrap(), Mode::All);
    }

    #[test]
    fn test_invalid_mode() {
        let err = "burst".parse::<Mode>().unwrap_err();
        assert_eq!(err, ConfigError::InvalidMode("burst".into()));
    }

    #[test]
    fn test_mode_capabilities() {
        assert!(Mode::All.is_pressable() && Mode::All.is_expandable());
        assert!(Mode::Tap.is_pressable() && !Mode::Tap.is_expandable());
        assert!(!Mode::Hold.is_pressable() && Mode::Hold.is_expandable());
    }

    #[test]
    fn test_collapse_action_parse() {
        assert_eq!(
            "click".parse::<CollapseAction>().unwrap(),
            CollapseAction::Click
        );
        assert!(matches!(
            "tap".parse::<CollapseAction>(),
            Err(ConfigError::InvalidCollapseAction(_))
        ));
    }

    #[test]
    fn test_expansion_states() {
        assert!(!ShutterState::Default.is_expansion());
        assert!(!ShutterState::Pressed.is_expansion());
        assert!(ShutterState::Expanded.is_expansion());
    }
}
