//! Basic building blocks.

use std::{
    f64::consts::PI,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub},
};

use nalgebra as na;

/// A point or displacement in the plane. The y-axis points up.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Vector2 {
    x: f64,
    y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const UP: Self = Self::new(0.0, 1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn length_squared(&self) -> f64 {
        self.dot(*self)
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn distance_squared(&self, other: Self) -> f64 {
        (*self - other).length_squared()
    }

    pub fn distance(&self, other: Self) -> f64 {
        (*self - other).length()
    }

    /// Unit vector with the same direction, `None` for the zero vector.
    pub fn normalize(&self) -> Option<Self> {
        let length = self.length();
        if length > 0.0 {
            Some(Self::new(self.x / length, self.y / length))
        } else {
            None
        }
    }

    pub fn min(&self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn max(&self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Rotates counterclockwise around the origin.
    pub fn rotate_vector(&self, angle: Angle) -> Vector2 {
        let rotated = na::Rotation2::new(angle.0) * na::Vector2::new(self.x, self.y);
        Vector2::new(rotated.x, rotated.y)
    }

    pub fn rotate_around(&self, angle: Angle, origin: Vector2) -> Vector2 {
        (*self - origin).rotate_vector(angle) + origin
    }
}

impl From<Vector2> for (f32, f32) {
    fn from(value: Vector2) -> Self {
        (value.x as f32, value.y as f32)
    }
}

impl From<Vector2> for (f64, f64) {
    fn from(value: Vector2) -> Self {
        (value.x, value.y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

/// Angle in radians. Values are never normalized.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    pub const fn new(radians: f64) -> Self {
        Self(radians)
    }

    pub fn from_deg(degree: f64) -> Self {
        Self(degree * PI / 180.0)
    }

    pub fn to_deg(self) -> f64 {
        (self.0 * (180.0 / PI) % 360.0 + 360.0) % 360.0
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Angle(-self.0)
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl From<Angle> for f64 {
    fn from(value: Angle) -> Self {
        value.0
    }
}

impl From<Angle> for f32 {
    fn from(value: Angle) -> Self {
        value.0 as f32
    }
}
