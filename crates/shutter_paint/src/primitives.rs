//! Geometry primitives

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center of a canvas of this size
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Half of the smaller dimension: the largest radius that fits
    pub fn inner_radius(&self) -> f32 {
        self.width.min(self.height) / 2.0
    }
}

/// Axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Square of side `2 * half_extent` centered on `center`
    pub fn centered_square(center: Point, half_extent: f32) -> Self {
        Self::new(
            center.x - half_extent,
            center.y - half_extent,
            half_extent * 2.0,
            half_extent * 2.0,
        )
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Edges are inclusive
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.size.width
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.size.height
    }
}

/// A circle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn contains(&self, point: Point) -> bool {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    /// Bounding box of the circle
    pub fn bounds(&self) -> Rect {
        Rect::centered_square(self.center, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_center_and_inner_radius() {
        let size = Size::new(200.0, 120.0);
        assert_eq!(size.center(), Point::new(100.0, 60.0));
        assert_eq!(size.inner_radius(), 60.0);
    }

    #[test]
    fn test_centered_square_contains_edges() {
        let rect = Rect::centered_square(Point::new(50.0, 50.0), 10.0);
        assert_eq!(rect, Rect::new(40.0, 40.0, 20.0, 20.0));
        assert!(rect.contains(Point::new(60.0, 40.0)));
        assert!(!rect.contains(Point::new(60.1, 50.0)));
        assert_eq!(rect.center(), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_circle_contains() {
        let circle = Circle::new(Point::new(0.0, 0.0), 5.0);
        assert!(circle.contains(Point::new(3.0, 4.0)));
        assert!(!circle.contains(Point::new(4.0, 4.0)));
        assert_eq!(circle.bounds().width(), 10.0);
    }
}
