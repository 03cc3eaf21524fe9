use log::debug;

use crate::data::{LineSegment, Point, Rect};
use crate::{Config, Error, ILineSegment, Intersects};

/// Where an edge came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Source {
  Viewport,
  /// Index into the obstacle list.
  Obstacle(usize),
  /// The rectangle just outside the viewport that stops escaping rays.
  Margin,
  /// Per-query bounding box around the origin and all occluders.
  Bound,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
  pub segment: LineSegment,
  pub source: Source,
}

impl Edge {
  pub fn new(segment: LineSegment, source: Source) -> Edge {
    Edge { segment, source }
  }
}

/// Edges derived from a viewport and a list of obstacles.
///
/// Built once per obstacle set and shared by every origin query.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSet {
  viewport: Rect,
  obstacles: Vec<Rect>,
  edges: Vec<Edge>,
  occluders: Vec<Edge>,
}

/// $O(n^2)$ Build the segment set for a `width` x `height` viewport.
///
/// ```rust
/// # use shadowcast::data::Rect;
/// # use shadowcast::build_segments;
/// let set = build_segments(100.0, 100.0, &[Rect::new(10.0, 10.0, 5.0, 5.0)])?;
/// // 4 edges per obstacle plus the viewport.
/// assert_eq!(set.edges().len(), 8);
/// # Ok::<(), shadowcast::Error>(())
/// ```
pub fn build_segments(width: f64, height: f64, obstacles: &[Rect]) -> Result<SegmentSet, Error> {
  SegmentSet::new(width, height, obstacles, &Config::default())
}

impl SegmentSet {
  pub fn new(
    width: f64,
    height: f64,
    obstacles: &[Rect],
    config: &Config,
  ) -> Result<SegmentSet, Error> {
    config.validate()?;
    let viewport = Rect::viewport(width, height)?;
    for obstacle in obstacles {
      obstacle.validate()?;
    }

    let mut edges = Vec::with_capacity(4 * (obstacles.len() + 1));
    for (index, obstacle) in obstacles.iter().enumerate() {
      edges.extend(
        obstacle
          .edges()
          .into_iter()
          .map(|segment| Edge::new(segment, Source::Obstacle(index))),
      );
    }
    edges.extend(
      viewport
        .edges()
        .into_iter()
        .map(|segment| Edge::new(segment, Source::Viewport)),
    );

    let clipped: Vec<Edge> = edges
      .iter()
      .filter_map(|edge| {
        let segment = match edge.source {
          Source::Obstacle(_) => viewport.clip(&edge.segment)?,
          _ => edge.segment,
        };
        (!segment.is_degenerate()).then_some(Edge::new(segment, edge.source))
      })
      .collect();

    let mut occluders = split_at_intersections(&clipped);
    occluders.extend(
      viewport
        .expand(config.margin)
        .edges()
        .into_iter()
        .map(|segment| Edge::new(segment, Source::Margin)),
    );

    debug!(
      "built segment set: {} obstacles, {} edges, {} occluders",
      obstacles.len(),
      edges.len(),
      occluders.len()
    );

    Ok(SegmentSet {
      viewport,
      obstacles: obstacles.to_vec(),
      edges,
      occluders,
    })
  }

  pub fn viewport(&self) -> &Rect {
    &self.viewport
  }

  pub fn width(&self) -> f64 {
    self.viewport.width
  }

  pub fn height(&self) -> f64 {
    self.viewport.height
  }

  pub fn obstacles(&self) -> &[Rect] {
    &self.obstacles
  }

  /// Raw rectangle edges: 4 per obstacle followed by the 4 viewport edges.
  pub fn edges(&self) -> &[Edge] {
    &self.edges
  }

  /// Edges ready for sweeping. They only meet at shared endpoints or
  /// along colinear overlaps.
  pub fn occluders(&self) -> &[Edge] {
    &self.occluders
  }

  /// Every occluder endpoint.
  pub fn endpoints(&self) -> impl Iterator<Item = &Point> + '_ {
    self
      .occluders
      .iter()
      .flat_map(|edge| [&edge.segment.src, &edge.segment.dst])
  }
}

// Split every edge at the points where other edges touch its interior. Each
// pair is intersected once so both edges are cut at the very same point.
fn split_at_intersections(edges: &[Edge]) -> Vec<Edge> {
  let mut cuts: Vec<Vec<Point>> = vec![Vec::new(); edges.len()];
  for i in 0..edges.len() {
    for j in i + 1..edges.len() {
      let (a, b) = (&edges[i].segment, &edges[j].segment);
      match a.intersect(b) {
        None => (),
        Some(ILineSegment::Crossing(pt)) => {
          cuts[i].push(pt);
          cuts[j].push(pt);
        }
        Some(ILineSegment::Overlap(overlap)) => {
          for pt in [overlap.src, overlap.dst] {
            cuts[i].push(pt);
            cuts[j].push(pt);
          }
        }
      }
    }
  }

  let mut out = Vec::with_capacity(edges.len());
  for (edge, mut points) in edges.iter().zip(cuts) {
    let segment = &edge.segment;
    points.retain(|pt| !pt.approx_eq(&segment.src) && !pt.approx_eq(&segment.dst));
    points.sort_by(|a, b| segment.project(a).total_cmp(&segment.project(b)));
    points.dedup_by(|b, a| a.approx_eq(b));

    let mut src = segment.src;
    for pt in points.into_iter().chain(std::iter::once(segment.dst)) {
      let piece = LineSegment::new(src, pt);
      if !piece.is_degenerate() {
        out.push(Edge::new(piece, edge.source));
      }
      src = pt;
    }
  }
  out
}
