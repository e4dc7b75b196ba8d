//! Bounded line segment collider.

use super::{Angle, HasCollision, Rectangle, Shape, Vector2};

/// Determinants below this value are treated as parallel or coincident lines. Points closer than
/// this to a segment are considered to lie on it.
pub const LINE_EPSILON: f64 = 1e-4;

/// Slack for rounding errors when checking that a computed intersection lies within the
/// coordinate ranges of a segment.
const RANGE_TOLERANCE: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LineSegment {
    start: Vector2,
    end: Vector2,
}

impl LineSegment {
    pub const fn new(start: Vector2, end: Vector2) -> Self {
        Self { start, end }
    }

    pub fn from_direction(start: Vector2, direction: Vector2, length: f64) -> Self {
        Self::new(start, start + direction * length)
    }

    pub fn start(&self) -> Vector2 {
        self.start
    }

    pub fn end(&self) -> Vector2 {
        self.end
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).length()
    }

    /// Moves the end point along the current direction. Has no effect on a zero-length segment.
    pub fn set_length(&mut self, length: f64) {
        if let Some(direction) = (self.end - self.start).normalize() {
            self.end = self.start + direction * length;
        }
    }

    /// Unit vector from start to end, or the zero vector if both coincide.
    pub fn direction(&self) -> Vector2 {
        Self::direction_between(self.start, self.end)
    }

    pub fn direction_between(from: Vector2, to: Vector2) -> Vector2 {
        (to - from).normalize().unwrap_or_default()
    }

    /// Counterclockwise angle from the up vector to `direction`.
    pub fn angle_of(direction: Vector2) -> Angle {
        Angle::new(f64::atan2(-direction.x(), direction.y()))
    }

    pub fn angle(&self) -> Angle {
        Self::angle_of(self.direction())
    }

    pub fn translate(&mut self, offset: Vector2) {
        self.start += offset;
        self.end += offset;
    }

    /// Coefficients `(a, b, c)` of the infinite line `a * x + b * y = c` through both endpoints.
    pub fn standard_form(&self) -> (f64, f64, f64) {
        let a = self.end.y() - self.start.y();
        let b = -(self.end.x() - self.start.x());
        let c = a * self.start.x() + b * self.start.y();
        (a, b, c)
    }

    /// Intersection point of two segments. `None` if the lines are parallel or coincident, or if
    /// the lines cross outside of either segment.
    pub fn line_intersection(&self, other: &LineSegment) -> Option<Vector2> {
        let (a1, b1, c1) = self.standard_form();
        let (a2, b2, c2) = other.standard_form();

        let determinant = a1 * b2 - a2 * b1;

        if determinant.abs() < LINE_EPSILON {
            return None;
        }

        let intersection = Vector2::new(
            (b2 * c1 - b1 * c2) / determinant,
            (a1 * c2 - a2 * c1) / determinant,
        );

        if self.spans(intersection) && other.spans(intersection) {
            Some(intersection)
        } else {
            None
        }
    }

    /// Point of the segment closest to `point`.
    pub fn nearest_point(&self, point: Vector2) -> Vector2 {
        let segment = self.end - self.start;
        let length_squared = segment.length_squared();

        if length_squared <= 0.0 {
            return self.start;
        }

        let projection_factor =
            ((point - self.start).dot(segment) / length_squared).clamp(0.0, 1.0);

        self.start + segment * projection_factor
    }

    pub fn contains(&self, point: Vector2) -> bool {
        self.nearest_point(point).distance(point) < LINE_EPSILON
    }

    pub fn bounding_box(&self) -> Rectangle {
        Rectangle::from_bounds(self.start.min(self.end), self.start.max(self.end))
    }

    fn spans(&self, point: Vector2) -> bool {
        let min = self.start.min(self.end);
        let max = self.start.max(self.end);
        point.x() + RANGE_TOLERANCE >= min.x()
            && point.x() - RANGE_TOLERANCE <= max.x()
            && point.y() + RANGE_TOLERANCE >= min.y()
            && point.y() - RANGE_TOLERANCE <= max.y()
    }
}

impl HasCollision for LineSegment {
    fn shape(&self) -> Shape {
        Shape::LineSegment(*self)
    }
}
