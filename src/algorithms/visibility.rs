//! Visibility polygons around rectangular obstacles.
//!
//! The sweep walks the occluder endpoints in angular order around the origin
//! while keeping the edges crossed by the current ray sorted by distance. Every
//! time the nearest edge changes, the outline picks up a vertex on the edge
//! that disappears and one on the edge that takes over.
pub mod naive;
mod sweep;

use log::warn;

use crate::algorithms::segments::{Edge, SegmentSet, Source};
use crate::data::{Point, Rect, VisibilityPolygon};
use crate::{Config, Error, OriginPolicy, EPSILON};

/// $O(n^2)$ Visibility polygon of `origin` with the default [`Config`].
///
/// ```rust
/// # use shadowcast::data::{Point, Rect};
/// # use shadowcast::{build_segments, compute_visibility_polygon};
/// let set = build_segments(100.0, 100.0, &[])?;
/// let polygon = compute_visibility_polygon(&Point::new([50.0, 50.0]), &set)?;
/// assert_eq!(polygon.points(), &[
///   Point::new([0.0, 0.0]),
///   Point::new([100.0, 0.0]),
///   Point::new([100.0, 100.0]),
///   Point::new([0.0, 100.0]),
/// ]);
/// # Ok::<(), shadowcast::Error>(())
/// ```
pub fn compute_visibility_polygon(
  origin: &Point,
  segments: &SegmentSet,
) -> Result<VisibilityPolygon, Error> {
  compute_visibility_polygon_with(origin, segments, &Config::default())
}

pub fn compute_visibility_polygon_with(
  origin: &Point,
  segments: &SegmentSet,
  config: &Config,
) -> Result<VisibilityPolygon, Error> {
  config.validate()?;
  let origin = resolve_origin(origin, segments.viewport(), config.origin_policy)?;
  let edges = sweep_edges(&origin, segments, config);
  let swept = sweep::sweep(&origin, &edges, config.far_distance);
  Ok(VisibilityPolygon::new(origin, swept.points, config.simplify))
}

/// How much of an obstacle's outline is lit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleExposure {
  /// Index into the obstacle list.
  pub index: usize,
  /// Length of the boundary visible from the origin.
  pub visible_length: f64,
  pub perimeter: f64,
  /// `visible_length / perimeter`, in `[0, 1]`.
  pub fraction: f64,
}

/// Obstacles with any part of their boundary visible from `origin`, by index.
pub fn obstacle_exposure(
  origin: &Point,
  segments: &SegmentSet,
  config: &Config,
) -> Result<Vec<ObstacleExposure>, Error> {
  config.validate()?;
  let origin = resolve_origin(origin, segments.viewport(), config.origin_policy)?;
  let edges = sweep_edges(&origin, segments, config);
  let swept = sweep::sweep(&origin, &edges, config.far_distance);

  let mut lengths = vec![0.0; segments.obstacles().len()];
  for (edge, length) in edges.iter().zip(swept.exposure) {
    if let Source::Obstacle(index) = edge.source {
      lengths[index] += length;
    }
  }
  Ok(
    lengths
      .into_iter()
      .enumerate()
      .filter(|&(_, length)| length > EPSILON)
      .map(|(index, visible_length)| {
        let perimeter = segments.obstacles()[index].perimeter();
        let fraction = if perimeter > 0.0 {
          (visible_length / perimeter).min(1.0)
        } else {
          1.0
        };
        ObstacleExposure {
          index,
          visible_length,
          perimeter,
          fraction,
        }
      })
      .collect(),
  )
}

/// Check that `origin` may be used with `viewport`, clamping it if the policy
/// allows.
pub(crate) fn resolve_origin(
  origin: &Point,
  viewport: &Rect,
  policy: OriginPolicy,
) -> Result<Point, Error> {
  if !origin.is_finite() {
    return Err(Error::NonFiniteCoordinate);
  }
  if viewport.contains_approx(origin) {
    return Ok(*origin);
  }
  match policy {
    OriginPolicy::Reject => Err(Error::OriginOutsideViewport {
      x: origin[0],
      y: origin[1],
    }),
    OriginPolicy::Clamp => {
      let clamped = viewport.clamp(origin);
      warn!(
        "origin ({}, {}) is outside the viewport, clamped to ({}, {})",
        origin[0], origin[1], clamped[0], clamped[1]
      );
      Ok(clamped)
    }
  }
}

// Occluders plus a box around the origin and every occluder, so that every
// ray is guaranteed to hit something.
pub(crate) fn sweep_edges(origin: &Point, segments: &SegmentSet, config: &Config) -> Vec<Edge> {
  let mut edges = segments.occluders().to_vec();
  let bound = Rect::bounding(segments.endpoints().chain(std::iter::once(origin)))
    .unwrap_or(*segments.viewport())
    .expand(config.bound_margin);
  edges.extend(
    bound
      .edges()
      .into_iter()
      .map(|segment| Edge::new(segment, Source::Bound)),
  );
  edges
}
