//! Axis-aligned and rotated rectangle colliders.

use super::{
    collision::{finite_point, positive_extent},
    Angle, HasCollision, LineSegment, Shape, ShapeError, Vector2,
};

/// Axis-aligned rectangle. Also used as bounding box, in which case width or height may be zero.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Rectangle {
    center: Vector2,
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(center: Vector2, width: f64, height: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            center: finite_point("rectangle center", center)?,
            width: positive_extent("width", width)?,
            height: positive_extent("height", height)?,
        })
    }

    pub(super) fn from_bounds(min: Vector2, max: Vector2) -> Self {
        Self {
            center: (min + max) * 0.5,
            width: max.x() - min.x(),
            height: max.y() - min.y(),
        }
    }

    pub fn center(&self) -> Vector2 {
        self.center
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn min(&self) -> Vector2 {
        self.center - self.half_extents()
    }

    pub fn max(&self) -> Vector2 {
        self.center + self.half_extents()
    }

    fn half_extents(&self) -> Vector2 {
        Vector2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn translate(&mut self, offset: Vector2) {
        self.center += offset;
    }

    /// Top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Vector2; 4] {
        let min = self.min();
        let max = self.max();
        [
            Vector2::new(min.x(), max.y()),
            max,
            Vector2::new(max.x(), min.y()),
            min,
        ]
    }

    pub fn edges(&self) -> [LineSegment; 4] {
        edges(self.corners())
    }

    /// Points on the border are not contained.
    pub fn contains(&self, point: Vector2) -> bool {
        (point.x() - self.center.x()).abs() < self.width / 2.0
            && (point.y() - self.center.y()).abs() < self.height / 2.0
    }

    /// Strict interval overlap on both axes. Touching borders do not overlap.
    pub fn overlaps(&self, other: &Rectangle) -> bool {
        let (min, max) = (self.min(), self.max());
        let (other_min, other_max) = (other.min(), other.max());
        min.x() < other_max.x()
            && other_min.x() < max.x()
            && min.y() < other_max.y()
            && other_min.y() < max.y()
    }

    pub fn bounding_box(&self) -> Rectangle {
        *self
    }
}

impl HasCollision for Rectangle {
    fn shape(&self) -> Shape {
        Shape::Rectangle(*self)
    }
}

/// Rectangle rotated counterclockwise around its center. Width is measured along the rotated
/// x-axis, height along the rotated y-axis.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct RotatedRectangle {
    center: Vector2,
    width: f64,
    height: f64,
    rotation: Angle,
}

impl RotatedRectangle {
    pub fn new(
        center: Vector2,
        width: f64,
        height: f64,
        rotation: Angle,
    ) -> Result<Self, ShapeError> {
        if !f64::from(rotation).is_finite() {
            return Err(ShapeError::NonFiniteCoordinate("rotation"));
        }
        Ok(Self {
            center: finite_point("rectangle center", center)?,
            width: positive_extent("width", width)?,
            height: positive_extent("height", height)?,
            rotation,
        })
    }

    pub fn center(&self) -> Vector2 {
        self.center
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn rotation(&self) -> Angle {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Angle) {
        self.rotation = rotation;
    }

    pub fn translate(&mut self, offset: Vector2) {
        self.center += offset;
    }

    /// Top-left, top-right, bottom-right, bottom-left before rotation.
    pub fn corners(&self) -> [Vector2; 4] {
        let half_width = self.width / 2.0;
        let half_height = self.height / 2.0;
        [
            Vector2::new(-half_width, half_height),
            Vector2::new(half_width, half_height),
            Vector2::new(half_width, -half_height),
            Vector2::new(-half_width, -half_height),
        ]
        .map(|corner| self.to_world(corner))
    }

    pub fn edges(&self) -> [LineSegment; 4] {
        edges(self.corners())
    }

    pub fn bounding_box(&self) -> Rectangle {
        let corners = self.corners();
        let (min, max) = corners[1..]
            .iter()
            .fold((corners[0], corners[0]), |(min, max), corner| {
                (min.min(*corner), max.max(*corner))
            });
        Rectangle::from_bounds(min, max)
    }

    /// Points on the border are not contained.
    pub fn contains(&self, point: Vector2) -> bool {
        let local = self.to_local(point);
        local.x().abs() < self.width / 2.0 && local.y().abs() < self.height / 2.0
    }

    /// Point of the rectangle (border or interior) closest to `point`.
    pub fn closest_point(&self, point: Vector2) -> Vector2 {
        let half_width = self.width / 2.0;
        let half_height = self.height / 2.0;
        let local = self.to_local(point);
        self.to_world(Vector2::new(
            local.x().clamp(-half_width, half_width),
            local.y().clamp(-half_height, half_height),
        ))
    }

    fn to_local(&self, point: Vector2) -> Vector2 {
        (point - self.center).rotate_vector(-self.rotation)
    }

    fn to_world(&self, local: Vector2) -> Vector2 {
        self.center + local.rotate_vector(self.rotation)
    }
}

impl From<Rectangle> for RotatedRectangle {
    fn from(value: Rectangle) -> Self {
        Self {
            center: value.center,
            width: value.width,
            height: value.height,
            rotation: Angle::default(),
        }
    }
}

impl HasCollision for RotatedRectangle {
    fn shape(&self) -> Shape {
        Shape::RotatedRectangle(*self)
    }
}

fn edges(corners: [Vector2; 4]) -> [LineSegment; 4] {
    std::array::from_fn(|i| LineSegment::new(corners[i], corners[(i + 1) % 4]))
}
