use super::{LineSegment, Point, Vector};
use crate::intersection::line_intersection;
use crate::{Intersects, Orientation, SoS, EPSILON};

///////////////////////////////////////////////////////////////////////////////
// Direction

/// Direction of a ray, either as an angle in degrees (measured like
/// [`angle_degrees`](super::angle_degrees)) or as a vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Direction {
  Angle(f64),
  Vector(Vector),
}

impl Direction {
  /// Unit vector for this direction. `None` for a zero or non-finite input.
  pub fn to_unit_vector(&self) -> Option<Vector> {
    match *self {
      Direction::Angle(degrees) if degrees.is_finite() => Some(Vector::from_degrees(degrees)),
      Direction::Angle(_) => None,
      Direction::Vector(vector) => vector.normalize(),
    }
  }
}

impl From<Vector> for Direction {
  fn from(vector: Vector) -> Direction {
    Direction::Vector(vector)
  }
}

///////////////////////////////////////////////////////////////////////////////
// HalfLine

/// A ray starting at `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfLine {
  pub origin: Point,
  pub direction: Vector,
}

impl HalfLine {
  /// `None` if the direction cannot be resolved to a unit vector.
  pub fn new(origin: Point, direction: Direction) -> Option<HalfLine> {
    let direction = direction.to_unit_vector()?;
    Some(HalfLine { origin, direction })
  }

  pub fn new_through(origin: Point, through: Point) -> Option<HalfLine> {
    HalfLine::new(origin, Direction::Vector(through - origin))
  }

  fn through(&self) -> Point {
    self.origin + self.direction
  }
}

// A ray aimed exactly at an endpoint hits that endpoint. Segments whose
// supporting line passes through the origin are edge-on and never hit.
impl Intersects<&LineSegment> for &HalfLine {
  type Result = Point;
  fn intersect(self, other: &LineSegment) -> Option<Point> {
    if other.side_of(&self.origin).is_colinear() || other.is_degenerate() {
      return None;
    }
    let through = self.through();
    let side = |pt: &Point| Orientation::with_tolerance(&self.origin, &through, pt, EPSILON);
    let hit = match (side(&other.src), side(&other.dst)) {
      (Orientation::CoLinear, Orientation::CoLinear) => None,
      (Orientation::CoLinear, _) => Some(other.src),
      (_, Orientation::CoLinear) => Some(other.dst),
      (l1_to_b1, l1_to_b2) if l1_to_b1 == l1_to_b2.reverse() => {
        line_intersection(&self.origin, &through, &other.src, &other.dst)
      }
      _ => None,
    }?;
    in_front(&self.origin, &self.direction, &hit).then_some(hit)
  }
}

///////////////////////////////////////////////////////////////////////////////
// HalfLineSoS

/// A ray that leans infinitesimally to one side.
///
/// A leaning ray aimed directly at a vertex never hits the vertex itself: it
/// hits the edges that continue on the side it leans towards and slips past
/// the others.
///
/// ```text
///                 a
///   SoS ray --->  |      => blocked on both sides
///                 b
///
///   SoS ray --->  a      => blocked only when leaning clockwise
///                / \
///               b   c
///
///   SoS ray --->  a-b    => never blocked
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfLineSoS {
  pub origin: Point,
  pub through: Point,
  pub lean: SoS,
}

impl HalfLineSoS {
  pub fn new_through(origin: Point, through: Point, lean: SoS) -> HalfLineSoS {
    HalfLineSoS {
      origin,
      through,
      lean,
    }
  }

  pub fn direction(&self) -> Vector {
    self.through - self.origin
  }
}

impl Intersects<&LineSegment> for &HalfLineSoS {
  type Result = Point;
  fn intersect(self, other: &LineSegment) -> Option<Point> {
    if other.side_of(&self.origin).is_colinear() || other.is_degenerate() {
      return None;
    }
    // Colinear endpoints are pushed to the side opposite the lean, so the
    // segment blocks the ray only if it continues on the lean side.
    let side = |pt: &Point| {
      Orientation::with_tolerance(&self.origin, &self.through, pt, EPSILON).sos(self.lean.reverse())
    };
    let l1_to_b1 = side(&other.src);
    let l1_to_b2 = side(&other.dst);
    if l1_to_b1 != l1_to_b2.reverse() {
      return None;
    }
    let exact = |pt: &Point| {
      Orientation::with_tolerance(&self.origin, &self.through, pt, EPSILON).is_colinear()
    };
    let hit = if exact(&other.src) {
      other.src
    } else if exact(&other.dst) {
      other.dst
    } else {
      line_intersection(&self.origin, &self.through, &other.src, &other.dst)?
    };
    in_front(&self.origin, &self.direction(), &hit).then_some(hit)
  }
}

fn in_front(origin: &Point, direction: &Vector, pt: &Point) -> bool {
  (*pt - *origin).dot(direction) > 0.0
}
