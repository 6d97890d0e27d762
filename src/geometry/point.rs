//! Two-dimensional point value type with componentwise arithmetic

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use num_traits::Zero;

use crate::io::error::{GridError, invalid_argument};

/// Immutable 2D coordinate in world space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// The origin
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// Unit step toward negative x
    pub const LEFT: Self = Self::new(-1.0, 0.0);
    /// Unit step toward positive x
    pub const RIGHT: Self = Self::new(1.0, 0.0);
    /// Unit step toward positive y
    pub const UP: Self = Self::new(0.0, 1.0);
    /// Unit step toward negative y
    pub const DOWN: Self = Self::new(0.0, -1.0);

    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate along an axis (0 = x, 1 = y)
    pub const fn get(&self, axis: usize) -> Option<f64> {
        match axis {
            0 => Some(self.x),
            1 => Some(self.y),
            _ => None,
        }
    }

    /// Dot product with another point treated as a vector
    pub fn dot(self, other: Self) -> f64 {
        self.x.mul_add(other.x, self.y * other.y)
    }

    /// Z component of the cross product of two vectors
    pub fn cross(self, other: Self) -> f64 {
        self.x.mul_add(other.y, -(self.y * other.x))
    }

    /// Euclidean length of the vector from the origin
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Whether both coordinates are finite
    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Zero for Point {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = GridError;

    fn try_from(coords: &[f64]) -> Result<Self, Self::Error> {
        match coords {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(invalid_argument(
                "coords",
                &format!("{coords:?}"),
                &"a point needs exactly two coordinates",
            )),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
