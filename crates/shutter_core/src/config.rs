//! Button configuration
//!
//! A [`ShutterConfig`] is fully resolved before a button is built. Every
//! section deserializes with defaults for missing fields, so a config file
//! only needs to name what it changes:
//!
//! ```toml
//! mode = "video"
//! collapse_action = "click"
//!
//! [timing]
//! video_duration = 15000
//!
//! [appearance]
//! progress_arc_colors = ["#FF5252", "#FFD740"]
//! ```

use serde::{Deserialize, Serialize};
use shutter_paint::Color;

use crate::error::ConfigError;
use crate::state::{CollapseAction, Mode};

pub const DEFAULT_GRADIENT_ROTATION_MULTIPLIER: f32 = 1.75;

// =============================================================================
// Timing
// =============================================================================

/// Durations in milliseconds
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Timing {
    /// Press length after which a hold starts expanding
    #[serde(default = "default_expand_delay")]
    pub expand_delay: f32,
    #[serde(default = "default_expand_duration")]
    pub expand_duration: f32,
    #[serde(default = "default_collapse_duration")]
    pub collapse_duration: f32,
    /// Longest press that still counts as a tap in tap-only mode
    #[serde(default = "default_hold_duration")]
    pub hold_duration: f32,
    /// Recording limit once expanded; 0 records until released
    #[serde(default = "default_video_duration")]
    pub video_duration: f32,
    /// Scroll time per icon step
    #[serde(default = "default_icon_scroll_duration")]
    pub icon_scroll_duration: f32,
}

fn default_expand_delay() -> f32 {
    200.0
}

fn default_expand_duration() -> f32 {
    300.0
}

fn default_collapse_duration() -> f32 {
    300.0
}

fn default_hold_duration() -> f32 {
    200.0
}

fn default_video_duration() -> f32 {
    10_000.0
}

fn default_icon_scroll_duration() -> f32 {
    150.0
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            expand_delay: default_expand_delay(),
            expand_duration: default_expand_duration(),
            collapse_duration: default_collapse_duration(),
            hold_duration: default_hold_duration(),
            video_duration: default_video_duration(),
            icon_scroll_duration: default_icon_scroll_duration(),
        }
    }
}

impl Timing {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_duration("expand_delay", self.expand_delay)?;
        check_duration("expand_duration", self.expand_duration)?;
        check_duration("collapse_duration", self.collapse_duration)?;
        check_duration("hold_duration", self.hold_duration)?;
        if self.video_duration != 0.0 {
            check_duration("video_duration", self.video_duration)?;
        }
        if self.icon_scroll_duration < 0.0 || self.icon_scroll_duration.is_nan() {
            return Err(ConfigError::NegativeScrollDuration(
                self.icon_scroll_duration,
            ));
        }
        Ok(())
    }

    /// Whether recording stops on its own
    pub fn is_video_bounded(&self) -> bool {
        self.video_duration > 0.0
    }
}

pub(crate) fn check_duration(name: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonPositiveDuration { name, value })
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Sizes in pixels
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Geometry {
    /// Inner circle radius at rest
    #[serde(default = "default_main_circle_radius")]
    pub main_circle_radius: f32,
    /// Inner circle radius when fully expanded
    #[serde(default = "default_main_circle_radius_expanded")]
    pub main_circle_radius_expanded: f32,
    /// Ring drawn around the inner circle at rest
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
    #[serde(default = "default_progress_arc_width")]
    pub progress_arc_width: f32,
    #[serde(default = "default_icon_size")]
    pub icon_size: f32,
}

fn default_main_circle_radius() -> f32 {
    28.0
}

fn default_main_circle_radius_expanded() -> f32 {
    20.0
}

fn default_stroke_width() -> f32 {
    12.0
}

fn default_progress_arc_width() -> f32 {
    6.0
}

fn default_icon_size() -> f32 {
    24.0
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            main_circle_radius: default_main_circle_radius(),
            main_circle_radius_expanded: default_main_circle_radius_expanded(),
            stroke_width: default_stroke_width(),
            progress_arc_width: default_progress_arc_width(),
            icon_size: default_icon_size(),
        }
    }
}

impl Geometry {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimension("main_circle_radius", self.main_circle_radius)?;
        check_dimension(
            "main_circle_radius_expanded",
            self.main_circle_radius_expanded,
        )?;
        check_dimension("stroke_width", self.stroke_width)?;
        check_dimension("progress_arc_width", self.progress_arc_width)?;
        check_dimension("icon_size", self.icon_size)?;
        Ok(())
    }

    /// Half extent of the square that accepts presses at rest
    pub fn touch_radius(&self) -> f32 {
        self.main_circle_radius + self.stroke_width
    }

    /// Half extent of the square that accepts the collapsing click
    pub fn expanded_touch_radius(&self) -> f32 {
        self.main_circle_radius + self.main_circle_radius_expanded
    }
}

pub(crate) fn check_dimension(name: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonPositiveDimension { name, value })
    }
}

// =============================================================================
// Appearance
// =============================================================================

/// Colors and gradient behavior
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Appearance {
    #[serde(default = "default_main_circle_color")]
    pub main_circle_color: Color,
    #[serde(default = "default_main_circle_color_pressed")]
    pub main_circle_color_pressed: Color,
    #[serde(default = "default_stroke_color")]
    pub stroke_color: Color,
    #[serde(default = "default_stroke_color_pressed")]
    pub stroke_color_pressed: Color,
    /// Colors of the progress arc gradient, spread evenly
    #[serde(default = "default_progress_arc_colors")]
    pub progress_arc_colors: Vec<Color>,
    /// Gradient turns per progress sweep
    #[serde(default = "default_gradient_rotation_multiplier")]
    pub gradient_rotation_multiplier: f32,
}

fn default_main_circle_color() -> Color {
    Color::WHITE
}

fn default_main_circle_color_pressed() -> Color {
    Color::from_hex(0xE0E0E0)
}

fn default_stroke_color() -> Color {
    Color::WHITE.with_alpha(0.4)
}

fn default_stroke_color_pressed() -> Color {
    Color::WHITE.with_alpha(0.6)
}

fn default_progress_arc_colors() -> Vec<Color> {
    vec![Color::from_hex(0xFF5252), Color::from_hex(0xFFD740)]
}

fn default_gradient_rotation_multiplier() -> f32 {
    DEFAULT_GRADIENT_ROTATION_MULTIPLIER
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            main_circle_color: default_main_circle_color(),
            main_circle_color_pressed: default_main_circle_color_pressed(),
            stroke_color: default_stroke_color(),
            stroke_color_pressed: default_stroke_color_pressed(),
            progress_arc_colors: default_progress_arc_colors(),
            gradient_rotation_multiplier: default_gradient_rotation_multiplier(),
        }
    }
}

impl Appearance {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_multiplier(self.gradient_rotation_multiplier)?;
        if self.progress_arc_colors.is_empty() {
            return Err(ConfigError::EmptyArcColors);
        }
        Ok(())
    }
}

pub(crate) fn check_multiplier(value: f32) -> Result<f32, ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonPositiveMultiplier(value))
    }
}

// =============================================================================
// ShutterConfig
// =============================================================================

/// Complete configuration of one button
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ShutterConfig {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub collapse_action: CollapseAction,
    /// Check geometry against the canvas before each draw
    #[serde(default = "default_check_consistency")]
    pub check_consistency: bool,
    #[serde(default)]
    pub timing: Timing,
    #[serde(default)]
    pub geometry: Geometry,
    #[serde(default)]
    pub appearance: Appearance,
}

fn default_check_consistency() -> bool {
    true
}

impl Default for ShutterConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            collapse_action: CollapseAction::default(),
            check_consistency: default_check_consistency(),
            timing: Timing::default(),
            geometry: Geometry::default(),
            appearance: Appearance::default(),
        }
    }
}

impl ShutterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn collapse_action(mut self, action: CollapseAction) -> Self {
        self.collapse_action = action;
        self
    }

    pub fn check_consistency(mut self, check: bool) -> Self {
        self.check_consistency = check;
        self
    }

    pub fn timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    pub fn geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// Set expand delay, expand duration and collapse duration at once
    pub fn durations(mut self, expand_delay: f32, expand: f32, collapse: f32) -> Self {
        self.timing.expand_delay = expand_delay;
        self.timing.expand_duration = expand;
        self.timing.collapse_duration = collapse;
        self
    }

    pub fn video_duration(mut self, duration: f32) -> Self {
        self.timing.video_duration = duration;
        self
    }

    /// Check every section, returning the config unchanged if it is valid
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.timing.validate()?;
        self.geometry.validate()?;
        self.appearance.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ShutterConfig::default().validated().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ShutterConfig = toml::from_str(
            r#"
            mode = "video"
            collapse_action = "click"

            [timing]
            video_duration = 500
            "#,
        )
        .unwrap();

        assert_eq!(config.mode, Mode::VIDEO);
        assert_eq!(config.collapse_action, CollapseAction::Click);
        assert_eq!(config.timing.video_duration, 500.0);
        assert_eq!(config.timing.expand_delay, 200.0);
        assert_eq!(config.geometry, Geometry::default());
        assert!(config.check_consistency);
    }

    #[test]
    fn test_invalid_mode_in_toml_reports_valid_set() {
        let err = toml::from_str::<ShutterConfig>(r#"mode = "burst""#).unwrap_err();
        assert!(err.to_string().contains("expected one of: all, tap, photo, hold, video"));
    }

    #[test]
    fn test_non_positive_duration() {
        let config = ShutterConfig::new().durations(0.0, 300.0, 300.0);
        assert_eq!(
            config.validated(),
            Err(ConfigError::NonPositiveDuration {
                name: "expand_delay",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_zero_video_duration_is_unbounded() {
        let config = ShutterConfig::new().video_duration(0.0).validated().unwrap();
        assert!(!config.timing.is_video_bounded());

        let err = ShutterConfig::new().video_duration(-1.0).validated();
        assert!(matches!(
            err,
            Err(ConfigError::NonPositiveDuration {
                name: "video_duration",
                ..
            })
        ));
    }

    #[test]
    fn test_non_positive_dimension_and_multiplier() {
        let mut config = ShutterConfig::default();
        config.geometry.stroke_width = -2.0;
        assert!(matches!(
            config.clone().validated(),
            Err(ConfigError::NonPositiveDimension {
                name: "stroke_width",
                ..
            })
        ));

        config.geometry.stroke_width = 4.0;
        config.appearance.gradient_rotation_multiplier = 0.0;
        assert_eq!(
            config.validated(),
            Err(ConfigError::NonPositiveMultiplier(0.0))
        );
    }

    #[test]
    fn test_touch_radii() {
        let geometry = Geometry::default();
        assert_eq!(geometry.touch_radius(), 40.0);
        assert_eq!(geometry.expanded_touch_radius(), 48.0);
    }
}
