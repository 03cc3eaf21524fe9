use crate::algorithms::segments::{Edge, SegmentSet};
use crate::data::{angle_degrees, HalfLineSoS, Point, VisibilityPolygon};
use crate::{Config, Error, Intersects, Orientation, SoS, EPSILON};

use super::{resolve_origin, sweep_edges};

// Note about SoS rays (aka HalfLineSoS):
//   SoS rays lean either to the left or to the right. This means they always hit the sides
//   of an edge rather than the vertices. For example:
//
//     a <--- ray
//     |
//     b
//
//   Here we have an edge ('a' to 'b') and a ray that points directly to 'a'. If the ray
//   leans towards 'b' then it hits between 'a' and 'b'. If it leans the other way it
//   misses the 'a'-'b' edge altogether.
//
// Visibility polygons are star-shaped: every vertex is visible from the origin. So
// the vertices can be found in any order and then sorted around the origin.
//
// Algorithm overview:
//   1. Sort every occluder endpoint by angle around the origin. Endpoints at the same
//      angle form one direction.
//   2. For each direction, shoot a clockwise-leaning SoS ray and record the nearest hit.
//      This is the outline just before the direction.
//   3. Shoot a counter-clockwise-leaning SoS ray and record the nearest hit. This is
//      the outline just after the direction.
//
// Every occluder is tested against every ray, O(n^2) overall.

/// $O(n^2)$ Visibility polygon computed by brute force.
///
/// Much slower than [`compute_visibility_polygon`](crate::compute_visibility_polygon)
/// but simple enough to serve as a reference for it.
pub fn visibility_polygon(
  origin: &Point,
  segments: &SegmentSet,
) -> Result<VisibilityPolygon, Error> {
  let config = Config::default();
  let origin = resolve_origin(origin, segments.viewport(), config.origin_policy)?;
  let edges: Vec<Edge> = sweep_edges(&origin, segments, &config)
    .into_iter()
    .filter(|edge| {
      !edge.segment.is_degenerate()
        && !Orientation::with_tolerance(&origin, &edge.segment.src, &edge.segment.dst, EPSILON)
          .is_colinear()
    })
    .collect();

  let mut directions: Vec<(f64, Point)> = edges
    .iter()
    .flat_map(|edge| [edge.segment.src, edge.segment.dst])
    .map(|pt| (angle_degrees(&origin, &pt), pt))
    .collect();
  directions.sort_by(|a, b| a.0.total_cmp(&b.0));

  let mut points = Vec::new();
  let mut start = 0;
  while start < directions.len() {
    let (angle, target) = directions[start];
    let mut stop = start + 1;
    while stop < directions.len() && directions[stop].0 - angle <= EPSILON {
      stop += 1;
    }
    for lean in [SoS::ClockWise, SoS::CounterClockWise] {
      let ray = HalfLineSoS::new_through(origin, target, lean);
      let mut nearest = NearestIntersection::new(&origin);
      for edge in &edges {
        if let Some(hit) = ray.intersect(&edge.segment) {
          nearest.push(hit);
        }
      }
      if let Some(hit) = nearest.take() {
        points.push(hit);
      }
    }
    start = stop;
  }
  Ok(VisibilityPolygon::new(origin, points, config.simplify))
}

// Container for intersections that only store the nearest point to some origin.
struct NearestIntersection<'a> {
  origin: &'a Point,
  nearest_intersection: Option<Point>,
}

impl<'a> NearestIntersection<'a> {
  fn new(origin: &'a Point) -> NearestIntersection<'a> {
    NearestIntersection {
      origin,
      nearest_intersection: None,
    }
  }

  fn push(&mut self, mut intersection: Point) {
    match self.nearest_intersection.as_mut() {
      None => self.nearest_intersection = Some(intersection),
      Some(previous) => {
        if self.origin.squared_euclidean_distance(&intersection)
          < self.origin.squared_euclidean_distance(previous)
        {
          std::mem::swap(previous, &mut intersection);
        }
      }
    }
  }

  fn take(self) -> Option<Point> {
    self.nearest_intersection
  }
}
