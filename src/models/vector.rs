use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Two-dimensional vector with value semantics
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    x: f64,
    y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Euclidean length
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, factor: f64) -> Vector2D {
        Vector2D::new(self.x * factor, self.y * factor)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, other: Vector2D) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl std::fmt::Display for Vector2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector({:.2}, {:.2})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude() {
        assert!((Vector2D::new(3.0, 4.0).magnitude() - 5.0).abs() < 1e-12);
        assert_eq!(Vector2D::default().magnitude(), 0.0);
    }

    #[test]
    fn test_copy_is_independent() {
        let v1 = Vector2D::new(3.0, 4.0);
        let mut v2 = v1;
        v2.set_x(10.0);
        assert_eq!(v1.x(), 3.0);
        assert_eq!(v2.x(), 10.0);
    }

    #[test]
    fn test_arithmetic_operators() {
        let v1 = Vector2D::new(3.0, 4.0);
        let v4 = Vector2D::new(1.0, -2.0);

        assert_eq!(v1 + v4, Vector2D::new(4.0, 2.0));
        assert_eq!(v1 - v4, Vector2D::new(2.0, 6.0));
        assert_eq!(-v4, Vector2D::new(-1.0, 2.0));
        assert_eq!(v4 * 2.0, Vector2D::new(2.0, -4.0));

        let mut acc = Vector2D::default();
        acc += v1;
        acc += v4;
        assert_eq!(acc, v1 + v4);
    }

    #[test]
    fn test_equality() {
        assert_eq!(Vector2D::new(3.0, 4.0), Vector2D::new(3.0, 4.0));
        assert_ne!(Vector2D::new(3.0, 4.0), Vector2D::new(1.0, -2.0));
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Vector2D::new(3.0, 4.0).to_string(), "Vector(3.00, 4.00)");
        assert_eq!(Vector2D::new(1.0, -2.0).to_string(), "Vector(1.00, -2.00)");
    }
}
