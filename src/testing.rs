// This module contains strategies for:
//  * points
//  * scenes (viewport, obstacles and an origin outside every obstacle)
// A Strategy is a way to generate a shrinkable value.
// It also has a few checks shared by the polygon tests.
use crate::data::{Point, Rect};
use crate::{Orientation, EPSILON};

use proptest::collection::vec;
use proptest::prelude::*;

pub fn any_point() -> impl Strategy<Value = Point> {
  (-1_000.0..1_000.0f64, -1_000.0..1_000.0f64).prop_map(|(x, y)| Point::new([x, y]))
}

#[derive(Debug, Clone)]
pub struct Scene {
  pub width: f64,
  pub height: f64,
  pub obstacles: Vec<Rect>,
  pub origin: Point,
}

impl Scene {
  /// Mirror image in the vertical line through the middle of the viewport.
  pub fn mirrored(&self) -> Scene {
    let flip = |x: f64| self.width - x;
    Scene {
      width: self.width,
      height: self.height,
      obstacles: self
        .obstacles
        .iter()
        .map(|rect| Rect::new(flip(rect.x + rect.width), rect.y, rect.width, rect.height))
        .collect(),
      origin: Point::new([flip(self.origin[0]), self.origin[1]]),
    }
  }

  /// Sample points spread over the viewport, off the integer grid.
  pub fn probes(&self) -> Vec<Point> {
    let mut probes = Vec::new();
    for i in 0..16u32 {
      for j in 0..16u32 {
        let x = (f64::from(i) + 0.531) / 16.0 * self.width;
        let y = (f64::from(j) + 0.287) / 16.0 * self.height;
        probes.push(Point::new([x, y]));
      }
    }
    probes
  }
}

fn grid_rect(width: u32, height: u32) -> impl Strategy<Value = Rect> {
  (0..width, 0..height, 0..=12u32, 0..=12u32).prop_map(|(x, y, w, h)| {
    Rect::new(f64::from(x), f64::from(y), f64::from(w), f64::from(h))
  })
}

fn scene_with_origin(
  width: u32,
  height: u32,
  obstacles: Vec<Rect>,
  origin: Point,
) -> Option<Scene> {
  if obstacles.iter().any(|rect| rect.expand(0.05).contains(&origin)) {
    return None;
  }
  Some(Scene {
    width: f64::from(width),
    height: f64::from(height),
    obstacles,
    origin,
  })
}

// Obstacles sit on the integer grid while the origin sits off it, so the
// origin is never colinear with an obstacle edge.
pub fn any_scene() -> impl Strategy<Value = Scene> {
  (20u32..120, 20u32..120)
    .prop_flat_map(|(width, height)| {
      (
        Just(width),
        Just(height),
        vec(grid_rect(width, height), 0..8),
        0..width,
        0..height,
      )
    })
    .prop_filter_map("origin inside an obstacle", |(width, height, obstacles, x, y)| {
      let origin = Point::new([f64::from(x) + 0.37, f64::from(y) + 0.61]);
      scene_with_origin(width, height, obstacles, origin)
    })
}

// Both the obstacles and the origin sit on the half-integer grid. The origin
// is often colinear with obstacle edges and corners, and often lies on the
// viewport boundary.
pub fn any_aligned_scene() -> impl Strategy<Value = Scene> {
  (10u32..60, 10u32..60)
    .prop_flat_map(|(width, height)| {
      let x = prop_oneof![1 => Just(0), 1 => Just(2 * width), 4 => 0..=2 * width];
      let y = prop_oneof![1 => Just(0), 1 => Just(2 * height), 4 => 0..=2 * height];
      (
        Just(width),
        Just(height),
        vec(grid_rect(width, height), 0..8),
        x,
        y,
      )
    })
    .prop_filter_map("origin inside an obstacle", |(width, height, obstacles, x, y)| {
      let origin = Point::new([f64::from(x) / 2.0, f64::from(y) / 2.0]);
      scene_with_origin(width, height, obstacles, origin)
    })
}

/// True if `a` and `b` hold the same closed loop of vertices, possibly
/// starting at different vertices.
pub fn same_cycle(a: &[Point], b: &[Point], tolerance: f64) -> bool {
  if a.len() != b.len() {
    return false;
  }
  let n = a.len();
  let close = |p: &Point, q: &Point| {
    (p[0] - q[0]).abs() <= tolerance && (p[1] - q[1]).abs() <= tolerance
  };
  n == 0 || (0..n).any(|shift| (0..n).all(|i| close(&a[i], &b[(i + shift) % n])))
}

/// First pair of non-adjacent edges of the closed loop `points` that cross
/// each other. Edges that merely touch do not count.
pub fn crossing_edges(points: &[Point]) -> Option<(usize, usize)> {
  let n = points.len();
  let straddles = |p: &Point, q: &Point, r: &Point, s: &Point| {
    let a = Orientation::with_tolerance(p, q, r, EPSILON);
    let b = Orientation::with_tolerance(p, q, s, EPSILON);
    !a.is_colinear() && !b.is_colinear() && a != b
  };
  for i in 0..n {
    for j in i + 2..n {
      if i == 0 && j == n - 1 {
        continue;
      }
      let (a, b) = (&points[i], &points[(i + 1) % n]);
      let (c, d) = (&points[j], &points[(j + 1) % n]);
      if straddles(a, b, c, d) && straddles(c, d, a, b) {
        return Some((i, j));
      }
    }
  }
  None
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pts(coords: &[[f64; 2]]) -> Vec<Point> {
    coords.iter().map(|&c| Point::new(c)).collect()
  }

  #[test]
  fn rotated_cycles_match() {
    let a = pts(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
    let b = pts(&[[1.0, 1.0], [0.0, 0.0], [1.0, 0.0]]);
    assert!(same_cycle(&a, &b, 0.0));
    let reversed: Vec<Point> = a.iter().rev().copied().collect();
    assert!(!same_cycle(&a, &reversed, 0.0));
    assert!(!same_cycle(&a, &a[..2], 0.0));
  }

  #[test]
  fn bow_tie_crosses() {
    let square = pts(&[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]);
    assert_eq!(crossing_edges(&square), None);
    let bow_tie = pts(&[[0.0, 0.0], [2.0, 2.0], [2.0, 0.0], [0.0, 2.0]]);
    assert_eq!(crossing_edges(&bow_tie), Some((0, 2)));
  }
}
