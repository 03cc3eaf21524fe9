use std::cmp::Ordering;

use log::trace;
use ordered_float::OrderedFloat;

use crate::algorithms::segments::Edge;
use crate::data::{angle_degrees, distance_squared, points_equal, Point};
use crate::{intersect_lines, Orientation, EPSILON};

// Sweep order of events sharing an angle: edges close before new ones open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
  End,
  Begin,
}

#[derive(Debug, Clone, Copy)]
struct Event {
  angle: f64,
  kind: EventKind,
  edge: usize,
  point: Point,
}

// An edge oriented counter-clockwise around the origin.
#[derive(Debug, Clone, Copy)]
struct Segment {
  begin: Point,
  end: Point,
}

pub(crate) struct Swept {
  pub points: Vec<Point>,
  /// Visible length of each input edge. Edge-on edges stay at zero.
  pub exposure: Vec<f64>,
}

/// Angular sweep around `origin`. `edges` must enclose the origin and must not
/// cross each other except at shared endpoints.
pub(crate) fn sweep(origin: &Point, edges: &[Edge], far_distance: f64) -> Swept {
  let mut segments: Vec<Segment> = Vec::with_capacity(edges.len());
  let mut owner: Vec<usize> = Vec::with_capacity(edges.len());
  for (index, edge) in edges.iter().enumerate() {
    let (src, dst) = (edge.segment.src, edge.segment.dst);
    if edge.segment.is_degenerate() {
      continue;
    }
    let segment = match Orientation::with_tolerance(origin, &src, &dst, EPSILON) {
      Orientation::CoLinear => continue,
      Orientation::CounterClockWise => Segment { begin: src, end: dst },
      Orientation::ClockWise => Segment { begin: dst, end: src },
    };
    segments.push(segment);
    owner.push(index);
  }

  let mut events: Vec<Event> = Vec::with_capacity(2 * segments.len());
  for (edge, segment) in segments.iter().enumerate() {
    events.push(Event {
      angle: angle_degrees(origin, &segment.begin),
      kind: EventKind::Begin,
      edge,
      point: segment.begin,
    });
    events.push(Event {
      angle: angle_degrees(origin, &segment.end),
      kind: EventKind::End,
      edge,
      point: segment.end,
    });
  }
  events.sort_by_key(|event| (OrderedFloat(event.angle), event.kind));

  let mut open: Vec<usize> = Vec::new();
  let mut output = Output::new(segments.len());
  for pass in 0..2 {
    let mut start = 0;
    while start < events.len() {
      let group_angle = events[start].angle;
      let mut stop = start + 1;
      while stop < events.len() && events[stop].angle - group_angle <= EPSILON {
        stop += 1;
      }
      let group = &events[start..stop];
      let target = group[0].point;

      let old = open.first().copied();
      for event in group {
        match event.kind {
          EventKind::End => {
            if let Some(at) = open.iter().position(|&edge| edge == event.edge) {
              open.remove(at);
            }
          }
          EventKind::Begin => {
            if !open.contains(&event.edge) {
              let at = open.partition_point(|&edge| {
                cmp_along_ray(&segments[edge], &segments[event.edge], origin, &event.point)
                  != Ordering::Greater
              });
              open.insert(at, event.edge);
            }
          }
        }
      }
      let new = open.first().copied();

      if pass == 1 && old != new {
        let exit = group
          .iter()
          .find(|event| Some(event.edge) == old && event.kind == EventKind::End)
          .map(|event| event.point)
          .unwrap_or_else(|| hit(old.map(|edge| &segments[edge]), origin, &target, far_distance));
        output.leave(old, exit);
        let entry = group
          .iter()
          .find(|event| Some(event.edge) == new && event.kind == EventKind::Begin)
          .map(|event| event.point)
          .unwrap_or_else(|| hit(new.map(|edge| &segments[edge]), origin, &target, far_distance));
        output.enter(new, entry);
      }
      start = stop;
    }
  }
  output.close();

  trace!(
    "swept {} events from ({}, {}): {} vertices",
    events.len(),
    origin[0],
    origin[1],
    output.points.len()
  );

  let mut exposure = vec![0.0; edges.len()];
  for (edge, length) in output.exposure.into_iter().enumerate() {
    exposure[owner[edge]] += length;
  }
  Swept {
    points: output.points,
    exposure,
  }
}

// Point where the ray from `origin` through `target` meets `segment`, or a
// far-away point on the ray if there is no segment.
fn hit(segment: Option<&Segment>, origin: &Point, target: &Point, far_distance: f64) -> Point {
  match segment {
    Some(segment) => {
      intersect_lines(origin, target, &segment.begin, &segment.end).unwrap_or(*target)
    }
    None => match (*target - *origin).normalize() {
      Some(direction) => *origin + direction * far_distance,
      None => *target,
    },
  }
}

/// Order two open segments by their distance from `origin` along the ray
/// through `target`. Ties (shared endpoints) are broken by which segment lies
/// in front of the other's supporting line.
fn cmp_along_ray(a: &Segment, b: &Segment, origin: &Point, target: &Point) -> Ordering {
  let hit_a = intersect_lines(origin, target, &a.begin, &a.end);
  let hit_b = intersect_lines(origin, target, &b.begin, &b.end);
  if let (Some(hit_a), Some(hit_b)) = (hit_a, hit_b) {
    if !points_equal(&hit_a, &hit_b) {
      return distance_squared(origin, &hit_a).total_cmp(&distance_squared(origin, &hit_b));
    }
  }
  cmp_by_orientation(a, b, origin)
}

fn cmp_by_orientation(a: &Segment, b: &Segment, origin: &Point) -> Ordering {
  // Less if `other` is entirely on the far side of `line`, Greater if it is
  // entirely on the origin's side.
  let behind = |line: &Segment, other: &Segment| -> Option<Ordering> {
    let side = |pt: &Point| Orientation::with_tolerance(&line.begin, &line.end, pt, EPSILON);
    let near = side(origin);
    if near.is_colinear() {
      return None;
    }
    let (s1, s2) = (side(&other.begin), side(&other.end));
    if s1.is_colinear() && s2.is_colinear() {
      return None;
    }
    let on = |want: Orientation| {
      (s1 == want || s1.is_colinear()) && (s2 == want || s2.is_colinear())
    };
    if on(near) {
      Some(Ordering::Greater)
    } else if on(near.reverse()) {
      Some(Ordering::Less)
    } else {
      None
    }
  };
  behind(a, b)
    .or_else(|| behind(b, a).map(Ordering::reverse))
    .unwrap_or(Ordering::Equal)
}

// Vertex collector. Tracks which edge is visible between consecutive
// vertices so the visible length of every edge can be reported.
struct Output {
  points: Vec<Point>,
  exposure: Vec<f64>,
  current: Option<(usize, Point)>,
  first_exit: Option<(Option<usize>, Point)>,
}

impl Output {
  fn new(edges: usize) -> Output {
    Output {
      points: Vec::new(),
      exposure: vec![0.0; edges],
      current: None,
      first_exit: None,
    }
  }

  fn push(&mut self, pt: Point) {
    if self.points.last().map_or(true, |last| !points_equal(last, &pt)) {
      self.points.push(pt);
    }
  }

  fn leave(&mut self, edge: Option<usize>, pt: Point) {
    if self.first_exit.is_none() {
      self.first_exit = Some((edge, pt));
    }
    if let Some((visible, from)) = self.current.take() {
      if Some(visible) == edge {
        self.exposure[visible] += from.euclidean_distance(&pt);
      }
    }
    self.push(pt);
  }

  fn enter(&mut self, edge: Option<usize>, pt: Point) {
    self.current = edge.map(|edge| (edge, pt));
    self.push(pt);
  }

  // The last visible run wraps around to the first vertex.
  fn close(&mut self) {
    let last = self.current.take();
    if let (Some((visible, from)), Some((Some(edge), to))) = (last, self.first_exit) {
      if visible == edge {
        self.exposure[visible] += from.euclidean_distance(&to);
      }
    }
  }
}
