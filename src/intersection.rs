use crate::data::{LineSegment, Point};
use crate::{Orientation, EPSILON};

use std::cmp::Ordering;

pub trait Intersects<T = Self> {
  type Result;
  fn intersect(self, other: T) -> Option<Self::Result>;
}

///////////////////////////////////////////////////////////////////////////////
// ILineSegment

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ILineSegment {
  Crossing(Point),      // Segments touch but are not parallel.
  Overlap(LineSegment), // Segments touch and are colinear.
}

impl Intersects for &LineSegment {
  type Result = ILineSegment;
  fn intersect(self, other: &LineSegment) -> Option<ILineSegment> {
    use Orientation::*;
    let (a1, a2) = (&self.src, &self.dst);
    let (b1, b2) = (&other.src, &other.dst);

    if a1 == a2 {
      return on_segment(a1, other).then_some(ILineSegment::Crossing(*a1));
    }
    if b1 == b2 {
      return on_segment(b1, self).then_some(ILineSegment::Crossing(*b1));
    }

    let l1_to_b1 = a1.orientation(a2, b1);
    let l1_to_b2 = a1.orientation(a2, b2);
    let l2_to_a1 = b1.orientation(b2, a1);
    let l2_to_a2 = b1.orientation(b2, a2);

    if l1_to_b1 == CoLinear && l1_to_b2 == CoLinear {
      overlap(self, other)
    } else if l1_to_b1 == CoLinear {
      inner_between(b1, a1, a2).then_some(ILineSegment::Crossing(*b1))
    } else if l1_to_b2 == CoLinear {
      inner_between(b2, a1, a2).then_some(ILineSegment::Crossing(*b2))
    } else if l2_to_a1 == CoLinear {
      inner_between(a1, b1, b2).then_some(ILineSegment::Crossing(*a1))
    } else if l2_to_a2 == CoLinear {
      inner_between(a2, b1, b2).then_some(ILineSegment::Crossing(*a2))
    } else if l1_to_b1 == l1_to_b2.reverse() && l2_to_a1 == l2_to_a2.reverse() {
      // A proper crossing is never parallel so the raw solve always succeeds.
      line_intersection(a1, a2, b1, b2).map(ILineSegment::Crossing)
    } else {
      None
    }
  }
}

// Exact containment test for a point already known to be on the line.
fn inner_between(pt: &Point, a: &Point, b: &Point) -> bool {
  let within = |axis: usize| a[axis].min(b[axis]) <= pt[axis] && pt[axis] <= a[axis].max(b[axis]);
  within(0) && within(1)
}

fn on_segment(pt: &Point, segment: &LineSegment) -> bool {
  segment.src.orientation(&segment.dst, pt).is_colinear()
    && inner_between(pt, &segment.src, &segment.dst)
}

// Both segments lie on the same line. Sort the four endpoints along the line
// and keep the middle two if the spans touch.
fn overlap(a: &LineSegment, b: &LineSegment) -> Option<ILineSegment> {
  let tb1 = a.project(&b.src);
  let tb2 = a.project(&b.dst);
  let lo = tb1.min(tb2).max(0.0);
  let hi = tb1.max(tb2).min(1.0);
  match lo.partial_cmp(&hi)? {
    Ordering::Greater => None,
    Ordering::Equal => {
      let pt = if tb1 == lo {
        b.src
      } else if tb2 == lo {
        b.dst
      } else if lo == 0.0 {
        a.src
      } else {
        a.dst
      };
      Some(ILineSegment::Crossing(pt))
    }
    Ordering::Less => {
      let mut ends = [(0.0, a.src), (1.0, a.dst), (tb1, b.src), (tb2, b.dst)];
      ends.sort_by(|x, y| x.0.total_cmp(&y.0));
      Some(ILineSegment::Overlap(LineSegment::new(ends[1].1, ends[2].1)))
    }
  }
}

/// True if the closed segments share at least one point.
///
/// ```rust
/// # use shadowcast::data::{LineSegment, Point};
/// # use shadowcast::segments_intersect;
/// let a = LineSegment::new(Point::new([0.0, 0.0]), Point::new([4.0, 4.0]));
/// let b = LineSegment::new(Point::new([0.0, 4.0]), Point::new([4.0, 0.0]));
/// let c = LineSegment::new(Point::new([5.0, 0.0]), Point::new([5.0, 4.0]));
/// assert!(segments_intersect(&a, &b));
/// assert!(!segments_intersect(&a, &c));
/// ```
pub fn segments_intersect(s1: &LineSegment, s2: &LineSegment) -> bool {
  s1.intersect(s2).is_some()
}

/// Intersection of the infinite lines through `a1, a2` and `b1, b2`.
///
/// Returns `None` if either line is degenerate or if the lines are parallel,
/// meaning the sine of the angle between them is below [`EPSILON`].
pub fn intersect_lines(a1: &Point, a2: &Point, b1: &Point, b2: &Point) -> Option<Point> {
  let da = *a2 - *a1;
  let db = *b2 - *b1;
  let scale = da.magnitude() * db.magnitude();
  if scale.is_nan() || scale == 0.0 || da.cross(&db).abs() <= EPSILON * scale {
    return None;
  }
  line_intersection(a1, a2, b1, b2)
}

// Solves the 2x2 system without the parallel tolerance. `None` only when the
// determinant is exactly zero or the result is not finite.
pub(crate) fn line_intersection(a1: &Point, a2: &Point, b1: &Point, b2: &Point) -> Option<Point> {
  let da = *a2 - *a1;
  let db = *b2 - *b1;
  let denom = da.cross(&db);
  if denom == 0.0 {
    return None;
  }
  let t = (*b1 - *a1).cross(&db) / denom;
  let pt = *a1 + da * t;
  pt.is_finite().then_some(pt)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;
  use ILineSegment::*;

  use proptest::prelude::*;

  fn seg(a: [f64; 2], b: [f64; 2]) -> LineSegment {
    LineSegment::new(Point::new(a), Point::new(b))
  }

  proptest! {
    #[test]
    fn intersect_is_symmetric(
      a in any_point(),
      b in any_point(),
      c in any_point(),
      d in any_point()
    ) {
      let s1 = LineSegment::new(a, b);
      let s2 = LineSegment::new(c, d);
      prop_assert_eq!(s1.intersect(&s2).is_some(), s2.intersect(&s1).is_some());
    }

    #[test]
    fn segment_touches_itself(a in any_point(), b in any_point()) {
      let s = LineSegment::new(a, b);
      prop_assert!(segments_intersect(&s, &s));
    }

    #[test]
    fn lines_never_produce_nan(
      a in any_point(),
      b in any_point(),
      c in any_point(),
      d in any_point()
    ) {
      if let Some(pt) = intersect_lines(&a, &b, &c, &d) {
        prop_assert!(pt.is_finite());
      }
    }
  }

  #[test]
  fn proper_crossing() {
    let hit = seg([0.0, 0.0], [4.0, 4.0]).intersect(&seg([0.0, 4.0], [4.0, 0.0]));
    assert_eq!(hit, Some(Crossing(Point::new([2.0, 2.0]))));
  }

  #[test]
  fn endpoint_touch() {
    let hit = seg([0.0, 0.0], [4.0, 0.0]).intersect(&seg([2.0, 0.0], [2.0, 5.0]));
    assert_eq!(hit, Some(Crossing(Point::new([2.0, 0.0]))));
    let miss = seg([0.0, 0.0], [4.0, 0.0]).intersect(&seg([5.0, 0.0], [5.0, 5.0]));
    assert_eq!(miss, None);
  }

  #[test]
  fn colinear_overlap() {
    let hit = seg([0.0, 0.0], [4.0, 0.0]).intersect(&seg([6.0, 0.0], [2.0, 0.0]));
    assert_eq!(
      hit,
      Some(Overlap(LineSegment::new(Point::new([2.0, 0.0]), Point::new([4.0, 0.0]))))
    );
    let touch = seg([0.0, 0.0], [4.0, 0.0]).intersect(&seg([4.0, 0.0], [8.0, 0.0]));
    assert_eq!(touch, Some(Crossing(Point::new([4.0, 0.0]))));
    let apart = seg([0.0, 0.0], [4.0, 0.0]).intersect(&seg([5.0, 0.0], [8.0, 0.0]));
    assert_eq!(apart, None);
  }

  #[test]
  fn degenerate_segments() {
    let point = seg([2.0, 0.0], [2.0, 0.0]);
    assert!(segments_intersect(&point, &seg([0.0, 0.0], [4.0, 0.0])));
    assert!(!segments_intersect(&point, &seg([0.0, 1.0], [4.0, 1.0])));
  }

  #[test]
  fn parallel_lines() {
    let a1 = Point::new([0.0, 0.0]);
    let a2 = Point::new([10.0, 0.0]);
    assert_eq!(
      intersect_lines(&a1, &a2, &Point::new([0.0, 1.0]), &Point::new([10.0, 1.0])),
      None
    );
    assert_eq!(intersect_lines(&a1, &a1, &a1, &a2), None);
    assert_eq!(
      intersect_lines(&a1, &a2, &Point::new([5.0, 5.0]), &Point::new([5.0, 10.0])),
      Some(Point::new([5.0, 0.0]))
    );
  }
}
