use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
};
use std::fmt;
use serde::{Serialize, Deserialize};

/// A vector in 3D space.
/// Doubles as a coordinate: face vertices and sampled positions use it directly.
/// Has basic math support for vector arithmetic, dot/cross products, and magnitude.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl Vector3 {
    /// Create a new vector.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3{x, y, z}
    }

    /// Create a new zero vector.
    pub fn zero() -> Self {
        Vector3{x: 0.0, y: 0.0, z: 0.0}
    }

    /// Normalize and return a new vector.
    /// The vector must have nonzero magnitude.
    pub fn normalize(&self) -> Self {
        let mag = self.norm();
        Vector3{
            x: self.x / mag,
            y: self.y / mag,
            z: self.z / mag,
        }
    }

    /// Get the dot product of two vectors.
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Get the cross product of two vectors (right-handed).
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3{
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Get the magnitude squared of the vector.
    pub fn norm_sq(&self) -> f64 {
        self.x*self.x + self.y*self.y + self.z*self.z
    }

    /// Get the magnitude of the vector.
    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// Get the distance to another vector interpreted as a coordinate.
    pub fn distance(&self, other: &Vector3) -> f64 {
        (*self - *other).norm()
    }

    /// Construct an xhat vector.
    pub fn xhat() -> Self {
        Vector3{x: 1.0, y: 0.0, z: 0.0}
    }

    /// Construct a yhat vector.
    pub fn yhat() -> Self {
        Vector3{x: 0.0, y: 1.0, z: 0.0}
    }

    /// Construct a zhat vector.
    pub fn zhat() -> Self {
        Vector3{x: 0.0, y: 0.0, z: 1.0}
    }

    /// Check if any of the components are NaN.
    pub fn has_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
}
impl Add for Vector3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector3{
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}
impl AddAssign for Vector3 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}
impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Vector3{
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}
impl SubAssign for Vector3 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}
impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, other: Vector3) -> Vector3 {
        Vector3{
            x: self * other.x,
            y: self * other.y,
            z: self * other.z,
        }
    }
}
impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, other: f64) -> Vector3 {
        Vector3{
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}
impl MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, other: f64) {
        self.x *= other;
        self.y *= other;
        self.z *= other;
    }
}
impl Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, other: f64) -> Vector3 {
        Vector3{
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
        }
    }
}
impl DivAssign<f64> for Vector3 {
    fn div_assign(&mut self, other: f64) {
        self.x /= other;
        self.y /= other;
        self.z /= other;
    }
}
impl std::ops::Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3{
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*}, {:.*})", precision, self.x, precision, self.y, precision, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_ops() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, -2.0, 0.5);
        let sum = a + b;
        assert_eq!(sum, Vector3::new(5.0, 0.0, 3.5));
        assert_eq!(sum - b, a);
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, Vector3::new(0.5, 1.0, 1.5));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn assign_ops() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v += Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vector3::new(2.0, 3.0, 4.0));
        v -= Vector3::new(2.0, 3.0, 4.0);
        assert_eq!(v, Vector3::zero());
        let mut v = Vector3::xhat();
        v *= 3.0;
        assert_eq!(v, Vector3::new(3.0, 0.0, 0.0));
        v /= 2.0;
        assert_eq!(v, Vector3::new(1.5, 0.0, 0.0));
    }

    #[test]
    fn dot_and_cross() {
        let x = Vector3::xhat();
        let y = Vector3::yhat();
        assert_eq!(x.dot(&y), 0.0);
        assert_eq!(x.cross(&y), Vector3::zhat());
        assert_eq!(y.cross(&x), -Vector3::zhat());
        let v = Vector3::new(3.0, 4.0, 12.0);
        assert_eq!(v.dot(&v), 169.0);
    }

    #[test]
    fn norm_and_normalize() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        assert_eq!(v.norm_sq(), 25.0);
        assert_eq!(v.norm(), 5.0);
        let unit = v.normalize();
        assert_eq!(unit, Vector3::new(0.6, 0.8, 0.0));
        assert!((unit.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn distance_between_coordinates() {
        let a = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(a.distance(&a), 0.0);
        assert_eq!(a.distance(&Vector3::new(1.0, 5.0, 4.0)), 5.0);
    }

    #[test]
    fn display_honors_precision() {
        let v = Vector3::new(0.5, 1.0, -0.3);
        assert_eq!(format!("{}", v), "(0.500, 1.000, -0.300)");
        assert_eq!(format!("{:.1}", v), "(0.5, 1.0, -0.3)");
    }

    #[test]
    fn nan_detection() {
        assert!(!Vector3::zero().has_nan());
        assert!(Vector3::new(0.0, f64::NAN, 0.0).has_nan());
    }
}
