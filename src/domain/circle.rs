//! Circle collider.

use super::{
    collision::{finite_point, positive_extent},
    HasCollision, Rectangle, Shape, ShapeError, Vector2,
};

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Circle {
    center: Vector2,
    radius: f64,
}

impl Circle {
    pub fn new(center: Vector2, radius: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            center: finite_point("circle center", center)?,
            radius: positive_extent("radius", radius)?,
        })
    }

    pub fn center(&self) -> Vector2 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn translate(&mut self, offset: Vector2) {
        self.center += offset;
    }

    /// Points on the circumference are not contained.
    pub fn contains(&self, point: Vector2) -> bool {
        self.center.distance(point) < self.radius
    }

    pub fn bounding_box(&self) -> Rectangle {
        let offset = Vector2::new(self.radius, self.radius);
        Rectangle::from_bounds(self.center - offset, self.center + offset)
    }
}

impl HasCollision for Circle {
    fn shape(&self) -> Shape {
        Shape::Circle(*self)
    }
}
