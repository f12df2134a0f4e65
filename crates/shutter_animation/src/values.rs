//! Animatable value types
//!
//! Linear interpolation for the values the button derives from its animation
//! factors: radii, positions and colors.

use shutter_paint::{Color, Point};

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

// ============================================================================
// f32 Implementation
// ============================================================================

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

// ============================================================================
// Point Implementation
// ============================================================================

impl Interpolate for Point {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Point::new(self.x.lerp(&other.x, t), self.y.lerp(&other.y, t))
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.approx_eq(&other.x, epsilon) && self.y.approx_eq(&other.y, epsilon)
    }
}

// ============================================================================
// Color Implementation
// ============================================================================

impl Interpolate for Color {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Color::lerp(self, other, t)
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_lerp() {
        assert_eq!(10.0f32.lerp(&20.0, 0.25), 12.5);
        assert_eq!(36.0f32.lerp(&22.0, 1.0), 22.0);
    }

    #[test]
    fn test_point_lerp() {
        let p = Point::ZERO.lerp(&Point::new(10.0, -10.0), 0.5);
        assert!(p.approx_eq(&Point::new(5.0, -5.0), 1e-6));
    }

    #[test]
    fn test_color_approx_eq() {
        let c = Color::BLACK.lerp(&Color::WHITE, 1.0);
        assert!(c.approx_eq(&Color::WHITE, 1e-6));
        assert!(!c.approx_eq(&Color::BLACK, 0.5));
    }
}
