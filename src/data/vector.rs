use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::Add;
use std::ops::Index;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;

use crate::data::Point;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Vector(pub [f64; 2]);

impl Distribution<Vector> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector {
    Vector([rng.gen(), rng.gen()])
  }
}

impl Vector {
  /// Unit vector pointing at `degrees`, measured like
  /// [`angle_degrees`](crate::data::angle_degrees).
  pub fn from_degrees(degrees: f64) -> Vector {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vector([cos, sin])
  }

  pub fn squared_magnitude(&self) -> f64 {
    self.0[0] * self.0[0] + self.0[1] * self.0[1]
  }

  pub fn magnitude(&self) -> f64 {
    self.0[0].hypot(self.0[1])
  }

  pub fn dot(&self, other: &Vector) -> f64 {
    self.0[0] * other.0[0] + self.0[1] * other.0[1]
  }

  /// z-component of the 3D cross product.
  pub fn cross(&self, other: &Vector) -> f64 {
    self.0[0] * other.0[1] - self.0[1] * other.0[0]
  }

  /// Rescale to unit length. `None` for the zero vector or non-finite input.
  pub fn normalize(&self) -> Option<Vector> {
    let len = self.magnitude();
    if len > 0.0 && len.is_finite() {
      Some(Vector([self.0[0] / len, self.0[1] / len]))
    } else {
      None
    }
  }
}

impl Index<usize> for Vector {
  type Output = f64;
  fn index(&self, index: usize) -> &f64 {
    self.0.index(index)
  }
}

impl From<Point> for Vector {
  fn from(point: Point) -> Vector {
    Vector(point.array)
  }
}

impl Add for Vector {
  type Output = Vector;
  fn add(self, other: Vector) -> Vector {
    Vector([self.0[0] + other.0[0], self.0[1] + other.0[1]])
  }
}

impl Sub for Vector {
  type Output = Vector;
  fn sub(self, other: Vector) -> Vector {
    Vector([self.0[0] - other.0[0], self.0[1] - other.0[1]])
  }
}

impl Mul<f64> for Vector {
  type Output = Vector;
  fn mul(self, scale: f64) -> Vector {
    Vector([self.0[0] * scale, self.0[1] * scale])
  }
}

impl Neg for Vector {
  type Output = Vector;
  fn neg(self) -> Vector {
    Vector([-self.0[0], -self.0[1]])
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_degrees_axes() {
    let east = Vector::from_degrees(0.0);
    let north = Vector::from_degrees(90.0);
    assert!((east.0[0] - 1.0).abs() < 1e-12 && east.0[1].abs() < 1e-12);
    assert!(north.0[0].abs() < 1e-12 && (north.0[1] - 1.0).abs() < 1e-12);
  }

  #[test]
  fn normalize_zero() {
    assert_eq!(Vector([0.0, 0.0]).normalize(), None);
    assert_eq!(Vector([3.0, 4.0]).normalize(), Some(Vector([0.6, 0.8])));
  }

  #[test]
  fn negation_flips_direction() {
    let v = Vector([3.0, -4.0]);
    assert_eq!(-v, Vector([-3.0, 4.0]));
    assert_eq!(v + -v, Vector([0.0, 0.0]));
    assert_eq!(v.dot(&-v), -v.squared_magnitude());
  }

  #[test]
  fn sampled_vectors_in_unit_square() {
    use rand::SeedableRng;
    let mut rng = rand::rngs::SmallRng::seed_from_u64(3);
    for _ in 0..100 {
      let v: Vector = rng.gen();
      assert!(v.0.iter().all(|c| (0.0..1.0).contains(c)));
    }
  }

  #[test]
  fn point_arithmetic() {
    let p = Point::new([1.0, 2.0]);
    let q = Point::new([4.0, 6.0]);
    let v = q - p;
    assert_eq!(v, Vector([3.0, 4.0]));
    assert_eq!(p + v, q);
    assert_eq!(v.magnitude(), 5.0);
    assert_eq!(v.cross(&Vector([1.0, 0.0])), -4.0);
  }
}
