//! Shutter error types

use std::fmt;

use thiserror::Error;

/// Geometry parameter checked against the canvas
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryParam {
    MainCircleRadius,
    MainCircleRadiusExpanded,
    StrokeWidth,
    ProgressArcWidth,
    IconSize,
}

impl GeometryParam {
    pub fn name(self) -> &'static str {
        match self {
            GeometryParam::MainCircleRadius => "main_circle_radius",
            GeometryParam::MainCircleRadiusExpanded => "main_circle_radius_expanded",
            GeometryParam::StrokeWidth => "stroke_width",
            GeometryParam::ProgressArcWidth => "progress_arc_width",
            GeometryParam::IconSize => "icon_size",
        }
    }
}

impl fmt::Display for GeometryParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A geometry parameter does not fit the canvas it is drawn on
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{parameter} is {value}px but must not exceed {limit}px")]
pub struct ValidationError {
    pub parameter: GeometryParam,
    pub value: f32,
    pub limit: f32,
}

/// Invalid configuration value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown mode `{0}`, expected one of: all, tap, photo, hold, video")]
    InvalidMode(String),

    #[error("unknown collapse action `{0}`, expected one of: release, click")]
    InvalidCollapseAction(String),

    #[error("{name} must be greater than 0, got {value}ms")]
    NonPositiveDuration { name: &'static str, value: f32 },

    #[error("{name} must be greater than 0, got {value}px")]
    NonPositiveDimension { name: &'static str, value: f32 },

    #[error("gradient rotation multiplier must be greater than 0, got {0}")]
    NonPositiveMultiplier(f32),

    #[error("icon scroll duration must not be negative, got {0}ms")]
    NegativeScrollDuration(f32),

    #[error("progress arc needs at least one color")]
    EmptyArcColors,
}

/// Input that breaks the single-pointer gesture contract
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("press received while a press is already active")]
    ConcurrentPress,

    #[error("pointer {incoming} went down while pointer {tracked} is tracked")]
    ConcurrentPointer { tracked: u32, incoming: u32 },

    #[error("release received without a matching press")]
    ReleaseWithoutPress,
}

/// Invalid icon operation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IconError {
    #[error("icons must be set before their position can change")]
    NoIcons,

    #[error("icon position {position} is outside 0..={max}")]
    PositionOutOfRange { position: f32, max: f32 },
}

/// Errors surfaced by [`crate::ShutterButton`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShutterError {
    #[error("button is not attached")]
    NotAttached,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Icon(#[from] IconError),
}

/// Result type for shutter operations
pub type Result<T> = std::result::Result<T, ShutterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_names_parameter() {
        let err = ValidationError {
            parameter: GeometryParam::StrokeWidth,
            value: 60.0,
            limit: 50.0,
        };
        assert_eq!(
            err.to_string(),
            "stroke_width is 60px but must not exceed 50px"
        );
    }

    #[test]
    fn test_config_error_lists_valid_values() {
        let msg = ConfigError::InvalidMode("burst".into()).to_string();
        assert!(msg.contains("burst"));
        assert!(msg.contains("all, tap, photo, hold, video"));
    }

    #[test]
    fn test_shutter_error_conversions() {
        let err: ShutterError = ProtocolError::ReleaseWithoutPress.into();
        assert!(matches!(err, ShutterError::Protocol(_)));
        assert_eq!(err.to_string(), "release received without a matching press");

        let err: ShutterError = IconError::NoIcons.into();
        assert!(matches!(err, ShutterError::Icon(IconError::NoIcons)));
    }
}
