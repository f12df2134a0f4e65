//! Consistency validation of geometry against the canvas

use std::f32::consts::SQRT_2;

use shutter_paint::Size;

use crate::config::Geometry;
use crate::error::{GeometryParam, ValidationError};

/// Check that every radius and width fits a canvas of `size`, and that an
/// icon can be inscribed in the main circle.
///
/// Pure: the same inputs always give the same answer.
pub fn validate_geometry(geometry: &Geometry, size: Size) -> Result<(), ValidationError> {
    let bound = size.inner_radius();

    let checks = [
        (GeometryParam::MainCircleRadius, geometry.main_circle_radius),
        (GeometryParam::StrokeWidth, geometry.stroke_width),
        (
            GeometryParam::MainCircleRadiusExpanded,
            geometry.main_circle_radius_expanded,
        ),
        (GeometryParam::ProgressArcWidth, geometry.progress_arc_width),
    ];
    for (parameter, value) in checks {
        if value > bound {
            return Err(ValidationError {
                parameter,
                value,
                limit: bound,
            });
        }
    }

    // Diagonal of the icon square must fit inside the main circle
    let inscribed = geometry.icon_size / SQRT_2;
    if inscribed > geometry.main_circle_radius {
        return Err(ValidationError {
            parameter: GeometryParam::IconSize,
            value: geometry.icon_size,
            limit: geometry.main_circle_radius * SQRT_2,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(main: f32, expanded: f32, stroke: f32, arc: f32) -> Geometry {
        Geometry {
            main_circle_radius: main,
            main_circle_radius_expanded: expanded,
            stroke_width: stroke,
            progress_arc_width: arc,
            icon_size: 10.0,
        }
    }

    #[test]
    fn test_fitting_geometry_passes() {
        let g = geometry(50.0, 40.0, 10.0, 8.0);
        assert!(validate_geometry(&g, Size::new(100.0, 100.0)).is_ok());
    }

    #[test]
    fn test_main_radius_bound_uses_smaller_dimension() {
        let g = geometry(50.0, 40.0, 10.0, 8.0);
        let err = validate_geometry(&g, Size::new(200.0, 80.0)).unwrap_err();
        assert_eq!(err.parameter, GeometryParam::MainCircleRadius);
        assert_eq!(err.value, 50.0);
        assert_eq!(err.limit, 40.0);
    }

    #[test]
    fn test_each_parameter_is_named() {
        let size = Size::new(60.0, 60.0);
        let cases = [
            (geometry(20.0, 20.0, 31.0, 5.0), GeometryParam::StrokeWidth),
            (
                geometry(20.0, 31.0, 5.0, 5.0),
                GeometryParam::MainCircleRadiusExpanded,
            ),
            (geometry(20.0, 20.0, 5.0, 31.0), GeometryParam::ProgressArcWidth),
        ];
        for (g, expected) in cases {
            assert_eq!(validate_geometry(&g, size).unwrap_err().parameter, expected);
        }
    }

    #[test]
    fn test_icon_must_be_inscribed() {
        let mut g = geometry(10.0, 8.0, 4.0, 4.0);
        g.icon_size = 14.0;
        assert!(validate_geometry(&g, Size::new(100.0, 100.0)).is_ok());

        g.icon_size = 15.0;
        let err = validate_geometry(&g, Size::new(100.0, 100.0)).unwrap_err();
        assert_eq!(err.parameter, GeometryParam::IconSize);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let g = geometry(50.0, 40.0, 10.0, 8.0);
        let size = Size::new(90.0, 90.0);
        assert_eq!(validate_geometry(&g, size), validate_geometry(&g, size));
    }
}
