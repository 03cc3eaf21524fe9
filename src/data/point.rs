use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::Deref;
use std::ops::Index;

use super::Vector;
use crate::{Orientation, EPSILON};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Point {
  pub array: [f64; 2],
}

// Random sampling in the unit square.
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point {
      array: [rng.gen(), rng.gen()],
    }
  }
}

impl Point {
  pub const fn new(array: [f64; 2]) -> Point {
    Point { array }
  }

  pub fn x_coord(&self) -> f64 {
    self.array[0]
  }

  pub fn y_coord(&self) -> f64 {
    self.array[1]
  }

  pub fn is_finite(&self) -> bool {
    self.array.iter().all(|c| c.is_finite())
  }

  pub fn as_vec(&self) -> Vector {
    Vector(self.array)
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point) -> f64 {
    distance_squared(self, rhs)
  }

  pub fn euclidean_distance(&self, rhs: &Point) -> f64 {
    distance_squared(self, rhs).sqrt()
  }

  /// Direction from `self` towards `other`, in degrees. See [`angle_degrees`].
  pub fn angle_to(&self, other: &Point) -> f64 {
    angle_degrees(self, other)
  }

  /// Equality within [`EPSILON`] on each coordinate.
  pub fn approx_eq(&self, other: &Point) -> bool {
    points_equal(self, other)
  }

  pub fn orientation(&self, q: &Point, r: &Point) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  pub fn lerp(&self, other: &Point, t: f64) -> Point {
    Point::new([
      self.array[0] + (other.array[0] - self.array[0]) * t,
      self.array[1] + (other.array[1] - self.array[1]) * t,
    ])
  }
}

pub fn distance_squared(a: &Point, b: &Point) -> f64 {
  let dx = a.array[0] - b.array[0];
  let dy = a.array[1] - b.array[1];
  dx * dx + dy * dy
}

/// Angle of the direction from `a` to `b` in degrees, in the range `(-180, 180]`.
///
/// ```rust
/// # use shadowcast::data::{angle_degrees, Point};
/// let origin = Point::new([0.0, 0.0]);
/// assert_eq!(angle_degrees(&origin, &Point::new([1.0, 0.0])), 0.0);
/// assert_eq!(angle_degrees(&origin, &Point::new([0.0, 1.0])), 90.0);
/// assert_eq!(angle_degrees(&origin, &Point::new([-1.0, -0.0])), 180.0);
/// ```
pub fn angle_degrees(a: &Point, b: &Point) -> f64 {
  let angle = (b.array[1] - a.array[1])
    .atan2(b.array[0] - a.array[0])
    .to_degrees();
  if angle <= -180.0 {
    angle + 360.0
  } else {
    angle
  }
}

/// Turn angle at `b` when walking `a -> b -> c`, normalized to `[0, 360)`.
///
/// Walking straight on gives 0 and reversing gives 180. Turns towards
/// decreasing angles (clockwise with y pointing up) land in `(0, 180)`.
pub fn angle_between(a: &Point, b: &Point, c: &Point) -> f64 {
  let turn = angle_degrees(a, b) - angle_degrees(b, c);
  let turn = turn.rem_euclid(360.0);
  if turn >= 360.0 {
    0.0
  } else {
    turn
  }
}

pub fn points_equal(a: &Point, b: &Point) -> bool {
  (a.array[0] - b.array[0]).abs() < EPSILON && (a.array[1] - b.array[1]).abs() < EPSILON
}

impl Index<usize> for Point {
  type Output = f64;
  fn index(&self, key: usize) -> &f64 {
    self.array.index(key)
  }
}

impl From<(f64, f64)> for Point {
  fn from(point: (f64, f64)) -> Point {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl From<[f64; 2]> for Point {
  fn from(array: [f64; 2]) -> Point {
    Point { array }
  }
}

impl From<Vector> for Point {
  fn from(vector: Vector) -> Point {
    Point { array: vector.0 }
  }
}

impl Deref for Point {
  type Target = [f64; 2];
  fn deref(&self) -> &[f64; 2] {
    &self.array
  }
}

mod add;
mod sub;
