use std::fmt::Write;

use crate::data::{angle_between, LineSegment, Point, PointLocation};

/// Star-shaped polygon of everything visible from `origin`.
///
/// Vertices are ordered by increasing angle around the origin. The last
/// vertex implicitly connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityPolygon {
  origin: Point,
  points: Vec<Point>,
}

// Turns smaller than this (in degrees) count as straight.
const STRAIGHT_TOLERANCE: f64 = 1e-7;

impl VisibilityPolygon {
  pub(crate) fn new(origin: Point, mut points: Vec<Point>, simplify: bool) -> VisibilityPolygon {
    dedup_cyclic(&mut points);
    if simplify {
      remove_straight(&mut points);
    }
    VisibilityPolygon { origin, points }
  }

  pub fn origin(&self) -> &Point {
    &self.origin
  }

  pub fn points(&self) -> &[Point] {
    &self.points
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point> {
    self.points.iter()
  }

  pub fn into_points(self) -> Vec<Point> {
    self.points
  }

  /// Boundary edges, including the closing edge from the last vertex to the first.
  pub fn edges(&self) -> impl Iterator<Item = LineSegment> + '_ {
    let n = self.points.len();
    (0..n).map(move |i| LineSegment::new(self.points[i], self.points[(i + 1) % n]))
  }

  /// Shoelace area. Positive when the vertices turn counter-clockwise with y
  /// pointing up (clockwise on a y-down screen).
  pub fn signed_area(&self) -> f64 {
    self
      .edges()
      .map(|edge| edge.src[0] * edge.dst[1] - edge.dst[0] * edge.src[1])
      .sum::<f64>()
      / 2.0
  }

  pub fn area(&self) -> f64 {
    self.signed_area().abs()
  }

  /// $O(n)$ Where `pt` lies relative to the polygon. Points within
  /// [`EPSILON`](crate::EPSILON) of an edge are on the boundary.
  pub fn locate(&self, pt: &Point) -> PointLocation {
    if self.edges().any(|edge| edge.contains(pt)) {
      return PointLocation::OnBoundary;
    }
    if self.points.len() < 3 {
      return PointLocation::Outside;
    }
    // Crossing number with half-open edges.
    let mut inside = false;
    for edge in self.edges() {
      let (a, b) = (edge.src, edge.dst);
      if (a[1] > pt[1]) != (b[1] > pt[1]) {
        let x = a[0] + (pt[1] - a[1]) * (b[0] - a[0]) / (b[1] - a[1]);
        if pt[0] < x {
          inside = !inside;
        }
      }
    }
    if inside {
      PointLocation::Inside
    } else {
      PointLocation::Outside
    }
  }

  /// True unless `pt` is outside. Boundary points count as visible.
  pub fn contains(&self, pt: &Point) -> bool {
    self.locate(pt) != PointLocation::Outside
  }

  /// Drawing commands for the outline. Empty for an empty polygon.
  pub fn path(&self) -> impl Iterator<Item = PathCommand> + '_ {
    let mut points = self.points.iter();
    let first = points.next().map(|pt| PathCommand::MoveTo(*pt));
    let close = first.map(|_| PathCommand::ClosePath);
    first
      .into_iter()
      .chain(points.map(|pt| PathCommand::LineTo(*pt)))
      .chain(close)
  }

  /// Replays [`path`](Self::path) into `sink`.
  pub fn trace<S: PathSink + ?Sized>(&self, sink: &mut S) {
    for command in self.path() {
      match command {
        PathCommand::MoveTo(pt) => sink.move_to(pt),
        PathCommand::LineTo(pt) => sink.line_to(pt),
        PathCommand::ClosePath => sink.close_path(),
      }
    }
  }

  /// Outline as SVG path data, e.g. `M0 0 L100 0 L100 100 Z`.
  pub fn to_svg_path(&self) -> String {
    let mut svg = SvgPath(String::new());
    self.trace(&mut svg);
    svg.0
  }
}

impl<'a> IntoIterator for &'a VisibilityPolygon {
  type Item = &'a Point;
  type IntoIter = std::slice::Iter<'a, Point>;
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

// Consecutive duplicates, including the wrap-around pair.
fn dedup_cyclic(points: &mut Vec<Point>) {
  points.dedup_by(|b, a| a.approx_eq(b));
  while points.len() > 1 && points[0].approx_eq(&points[points.len() - 1]) {
    points.pop();
  }
}

fn is_straight(prev: &Point, cur: &Point, next: &Point) -> bool {
  let turn = angle_between(prev, cur, next);
  turn < STRAIGHT_TOLERANCE || turn > 360.0 - STRAIGHT_TOLERANCE
}

fn remove_straight(points: &mut Vec<Point>) {
  let mut out: Vec<Point> = Vec::with_capacity(points.len());
  for &pt in points.iter() {
    while out.len() >= 2 && is_straight(&out[out.len() - 2], &out[out.len() - 1], &pt) {
      out.pop();
    }
    out.push(pt);
  }
  // The seam: the first and last vertices may be straight as well.
  loop {
    let n = out.len();
    if n < 3 {
      break;
    }
    if is_straight(&out[n - 2], &out[n - 1], &out[0]) {
      out.pop();
    } else if is_straight(&out[n - 1], &out[0], &out[1]) {
      out.remove(0);
    } else {
      break;
    }
  }
  *points = out;
}

///////////////////////////////////////////////////////////////////////////////
// Path output

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
  MoveTo(Point),
  LineTo(Point),
  ClosePath,
}

/// Receiver for polygon outlines, e.g. a canvas context.
pub trait PathSink {
  fn move_to(&mut self, pt: Point);
  fn line_to(&mut self, pt: Point);
  fn close_path(&mut self);
}

impl PathSink for Vec<PathCommand> {
  fn move_to(&mut self, pt: Point) {
    self.push(PathCommand::MoveTo(pt))
  }
  fn line_to(&mut self, pt: Point) {
    self.push(PathCommand::LineTo(pt))
  }
  fn close_path(&mut self) {
    self.push(PathCommand::ClosePath)
  }
}

struct SvgPath(String);

impl SvgPath {
  fn command(&mut self, op: char, pt: Option<Point>) {
    if !self.0.is_empty() {
      self.0.push(' ');
    }
    self.0.push(op);
    if let Some(pt) = pt {
      // Writing into a String cannot fail.
      let _ = write!(self.0, "{} {}", pt[0], pt[1]);
    }
  }
}

impl PathSink for SvgPath {
  fn move_to(&mut self, pt: Point) {
    self.command('M', Some(pt))
  }
  fn line_to(&mut self, pt: Point) {
    self.command('L', Some(pt))
  }
  fn close_path(&mut self) {
    self.command('Z', None)
  }
}
