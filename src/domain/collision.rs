//! Collision detection based on basic shapes.
//!
//! Every unordered pair of shape kinds is handled by exactly one arm of [`Shape::intersects`].
//! Arms for mixed pairs match both argument orders with an or-pattern, so the result never
//! depends on which shape initiates the test.

use thiserror::Error;

use super::{Circle, LineSegment, Rectangle, RotatedRectangle, Vector2};

pub trait HasCollision {
    fn has_collision(&self, other: &dyn HasCollision) -> bool {
        self.shape().intersects(&other.shape())
    }

    fn shape(&self) -> Shape;
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum Shape {
    Circle(Circle),
    LineSegment(LineSegment),
    Rectangle(Rectangle),
    RotatedRectangle(RotatedRectangle),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ShapeKind {
    Circle,
    LineSegment,
    Rectangle,
    RotatedRectangle,
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::LineSegment(_) => ShapeKind::LineSegment,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::RotatedRectangle(_) => ShapeKind::RotatedRectangle,
        }
    }

    /// Center of the shape. For line segments this is the midpoint.
    pub fn center(&self) -> Vector2 {
        match self {
            Shape::Circle(circle) => circle.center(),
            Shape::LineSegment(segment) => (segment.start() + segment.end()) * 0.5,
            Shape::Rectangle(rectangle) => rectangle.center(),
            Shape::RotatedRectangle(rectangle) => rectangle.center(),
        }
    }

    pub fn set_center(&mut self, center: Vector2) {
        let offset = center - self.center();
        self.translate(offset);
    }

    pub fn translate(&mut self, offset: Vector2) {
        match self {
            Shape::Circle(circle) => circle.translate(offset),
            Shape::LineSegment(segment) => segment.translate(offset),
            Shape::Rectangle(rectangle) => rectangle.translate(offset),
            Shape::RotatedRectangle(rectangle) => rectangle.translate(offset),
        }
    }

    pub fn contains(&self, point: Vector2) -> bool {
        match self {
            Shape::Circle(circle) => circle.contains(point),
            Shape::LineSegment(segment) => segment.contains(point),
            Shape::Rectangle(rectangle) => rectangle.contains(point),
            Shape::RotatedRectangle(rectangle) => rectangle.contains(point),
        }
    }

    pub fn bounding_box(&self) -> Rectangle {
        match self {
            Shape::Circle(circle) => circle.bounding_box(),
            Shape::LineSegment(segment) => segment.bounding_box(),
            Shape::Rectangle(rectangle) => rectangle.bounding_box(),
            Shape::RotatedRectangle(rectangle) => rectangle.bounding_box(),
        }
    }

    pub fn intersects(&self, other: &Shape) -> bool {
        match (self, other) {
            (Shape::Circle(circle), Shape::Circle(other_circle)) => {
                circle_intersects_circle(circle, other_circle)
            }
            (Shape::Circle(circle), Shape::LineSegment(segment))
            | (Shape::LineSegment(segment), Shape::Circle(circle)) => {
                circle_intersects_line_segment(circle, segment)
            }
            (Shape::Circle(circle), Shape::Rectangle(rectangle))
            | (Shape::Rectangle(rectangle), Shape::Circle(circle)) => {
                circle_intersects_rotated_rectangle(circle, &RotatedRectangle::from(*rectangle))
            }
            (Shape::Circle(circle), Shape::RotatedRectangle(rectangle))
            | (Shape::RotatedRectangle(rectangle), Shape::Circle(circle)) => {
                circle_intersects_rotated_rectangle(circle, rectangle)
            }
            (Shape::LineSegment(segment), Shape::LineSegment(other_segment)) => {
                segment.line_intersection(other_segment).is_some()
            }
            (Shape::LineSegment(segment), Shape::Rectangle(rectangle))
            | (Shape::Rectangle(rectangle), Shape::LineSegment(segment)) => {
                line_segment_crosses_edges(segment, &rectangle.edges())
            }
            (Shape::LineSegment(segment), Shape::RotatedRectangle(rectangle))
            | (Shape::RotatedRectangle(rectangle), Shape::LineSegment(segment)) => {
                line_segment_crosses_edges(segment, &rectangle.edges())
            }
            (Shape::Rectangle(rectangle), Shape::Rectangle(other_rectangle)) => {
                rectangle.overlaps(other_rectangle)
            }
            // Pairs with a rotated rectangle compare axis-aligned bounding boxes. This may report
            // contact near a rotated corner where the exact shapes are still apart.
            (Shape::Rectangle(rectangle), Shape::RotatedRectangle(rotated))
            | (Shape::RotatedRectangle(rotated), Shape::Rectangle(rectangle)) => {
                rectangle.overlaps(&rotated.bounding_box())
            }
            (Shape::RotatedRectangle(rotated), Shape::RotatedRectangle(other_rotated)) => rotated
                .bounding_box()
                .overlaps(&other_rotated.bounding_box()),
        }
    }
}

fn circle_intersects_circle(circle: &Circle, other: &Circle) -> bool {
    let radius_sum = circle.radius() + other.radius();
    circle.center().distance_squared(other.center()) < radius_sum * radius_sum
}

fn circle_intersects_line_segment(circle: &Circle, segment: &LineSegment) -> bool {
    let closest_point = segment.nearest_point(circle.center());
    circle.center().distance_squared(closest_point) < circle.radius().powi(2)
}

fn circle_intersects_rotated_rectangle(circle: &Circle, rectangle: &RotatedRectangle) -> bool {
    let closest_point = rectangle.closest_point(circle.center());
    circle.center().distance_squared(closest_point) < circle.radius().powi(2)
}

/// A segment lying completely inside the rectangle crosses no edge and is not reported.
fn line_segment_crosses_edges(segment: &LineSegment, edges: &[LineSegment; 4]) -> bool {
    edges
        .iter()
        .any(|edge| segment.line_intersection(edge).is_some())
}

impl HasCollision for Shape {
    fn shape(&self) -> Shape {
        *self
    }
}

impl From<Circle> for Shape {
    fn from(value: Circle) -> Self {
        Shape::Circle(value)
    }
}

impl From<LineSegment> for Shape {
    fn from(value: LineSegment) -> Self {
        Shape::LineSegment(value)
    }
}

impl From<Rectangle> for Shape {
    fn from(value: Rectangle) -> Self {
        Shape::Rectangle(value)
    }
}

impl From<RotatedRectangle> for Shape {
    fn from(value: RotatedRectangle) -> Self {
        Shape::RotatedRectangle(value)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("non-finite coordinate in {0}")]
    NonFiniteCoordinate(&'static str),
    #[error("{name} must be positive and finite, got {value}")]
    NonPositiveExtent { name: &'static str, value: f64 },
}

pub(super) fn finite_point(name: &'static str, point: Vector2) -> Result<Vector2, ShapeError> {
    if point.is_finite() {
        Ok(point)
    } else {
        Err(ShapeError::NonFiniteCoordinate(name))
    }
}

pub(super) fn positive_extent(name: &'static str, value: f64) -> Result<f64, ShapeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::NonPositiveExtent { name, value })
    }
}
