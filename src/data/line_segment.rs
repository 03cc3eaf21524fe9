use super::{Point, Vector};
use crate::{Orientation, EPSILON};

///////////////////////////////////////////////////////////////////////////////
// LineSegment

/// A closed segment from `src` to `dst`.
///
/// Segments built from rectangles may be degenerate (`src == dst`). They are
/// harmless: they never block anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
  pub src: Point,
  pub dst: Point,
}

impl LineSegment {
  pub const fn new(src: Point, dst: Point) -> LineSegment {
    LineSegment { src, dst }
  }

  pub fn direction(&self) -> Vector {
    self.dst - self.src
  }

  pub fn length(&self) -> f64 {
    self.src.euclidean_distance(&self.dst)
  }

  pub fn is_degenerate(&self) -> bool {
    self.src.approx_eq(&self.dst)
  }

  #[must_use]
  pub fn reversed(&self) -> LineSegment {
    LineSegment {
      src: self.dst,
      dst: self.src,
    }
  }

  pub fn midpoint(&self) -> Point {
    self.src.lerp(&self.dst, 0.5)
  }

  /// Which side of the supporting line `pt` is on, with [`EPSILON`] slack.
  pub fn side_of(&self, pt: &Point) -> Orientation {
    Orientation::with_tolerance(&self.src, &self.dst, pt, EPSILON)
  }

  /// True if `pt` lies inside the axis-aligned box spanned by the segment.
  pub fn bounds_contain(&self, pt: &Point) -> bool {
    let within = |a: f64, b: f64, v: f64| a.min(b) - EPSILON <= v && v <= a.max(b) + EPSILON;
    within(self.src[0], self.dst[0], pt[0]) && within(self.src[1], self.dst[1], pt[1])
  }

  /// True if `pt` lies on the segment, endpoints included.
  pub fn contains(&self, pt: &Point) -> bool {
    if self.is_degenerate() {
      return self.src.approx_eq(pt);
    }
    self.side_of(pt).is_colinear() && self.bounds_contain(pt)
  }

  /// Parameter of the projection of `pt` onto the supporting line. 0 at `src`, 1 at `dst`.
  pub fn project(&self, pt: &Point) -> f64 {
    let dir = self.direction();
    let len2 = dir.squared_magnitude();
    if len2 == 0.0 {
      0.0
    } else {
      (*pt - self.src).dot(&dir) / len2
    }
  }

  pub fn distance_to(&self, pt: &Point) -> f64 {
    let t = self.project(pt).clamp(0.0, 1.0);
    self.src.lerp(&self.dst, t).euclidean_distance(pt)
  }
}

impl From<(Point, Point)> for LineSegment {
  fn from((src, dst): (Point, Point)) -> LineSegment {
    LineSegment::new(src, dst)
  }
}
