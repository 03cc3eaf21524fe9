use super::Point;
use crate::data::Vector;
use std::ops::Add;
use std::ops::AddAssign;

// &point + &vector = point
impl<'a, 'b> Add<&'a Vector> for &'b Point {
  type Output = Point;

  fn add(self: &'b Point, other: &'a Vector) -> Self::Output {
    Point {
      array: [self.array[0] + other.0[0], self.array[1] + other.0[1]],
    }
  }
}

// point + vector = point
impl Add<Vector> for Point {
  type Output = Point;

  fn add(self: Point, other: Vector) -> Self::Output {
    &self + &other
  }
}

// point + &vector = point
impl Add<&Vector> for Point {
  type Output = Point;

  fn add(self: Point, other: &Vector) -> Self::Output {
    &self + other
  }
}

// point += vector
impl AddAssign<Vector> for Point {
  fn add_assign(&mut self, other: Vector) {
    self.array[0] += other.0[0];
    self.array[1] += other.0[1];
  }
}
