use claims::debug_assert_ok;
use rand::Rng;

use super::{LineSegment, Point};
use crate::{Error, EPSILON};

/// Axis-aligned rectangle with its corner at `(x, y)`.
///
/// With screen coordinates (y pointing down) `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
  pub x: f64,
  pub y: f64,
  pub width: f64,
  pub height: f64,
}

impl Rect {
  /// Negative extents are flipped so that `width` and `height` are never negative.
  pub fn new(x: f64, y: f64, width: f64, height: f64) -> Rect {
    let (x, width) = if width < 0.0 { (x + width, -width) } else { (x, width) };
    let (y, height) = if height < 0.0 { (y + height, -height) } else { (y, height) };
    Rect {
      x,
      y,
      width,
      height,
    }
  }

  /// The viewport `[0, width] x [0, height]`.
  pub fn viewport(width: f64, height: f64) -> Result<Rect, Error> {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
      return Err(Error::InvalidViewport { width, height });
    }
    let rect = Rect::new(0.0, 0.0, width, height);
    debug_assert_ok!(rect.validate());
    Ok(rect)
  }

  /// Smallest rectangle containing every point. `None` for an empty iterator.
  pub fn bounding<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Rect> {
    let mut iter = points.into_iter();
    let first = iter.next()?;
    let (mut min, mut max) = (first.array, first.array);
    for pt in iter {
      min = [min[0].min(pt[0]), min[1].min(pt[1])];
      max = [max[0].max(pt[0]), max[1].max(pt[1])];
    }
    Some(Rect::new(min[0], min[1], max[0] - min[0], max[1] - min[1]))
  }

  pub fn validate(&self) -> Result<(), Error> {
    let finite = [self.x, self.y, self.width, self.height]
      .iter()
      .all(|c| c.is_finite());
    if finite {
      Ok(())
    } else {
      Err(Error::NonFiniteCoordinate)
    }
  }

  pub fn min(&self) -> Point {
    Point::new([self.x, self.y])
  }

  pub fn max(&self) -> Point {
    Point::new([self.x + self.width, self.y + self.height])
  }

  pub fn is_degenerate(&self) -> bool {
    self.width <= 0.0 || self.height <= 0.0
  }

  pub fn area(&self) -> f64 {
    self.width * self.height
  }

  pub fn perimeter(&self) -> f64 {
    2.0 * (self.width + self.height)
  }

  /// Corners in the order `[nw, ne, se, sw]` (screen coordinates).
  pub fn corners(&self) -> [Point; 4] {
    let min = self.min();
    let max = self.max();
    [
      min,
      Point::new([max[0], min[1]]),
      max,
      Point::new([min[0], max[1]]),
    ]
  }

  /// Boundary edges: top, right, bottom, left. Clockwise in screen coordinates.
  pub fn edges(&self) -> [LineSegment; 4] {
    let [nw, ne, se, sw] = self.corners();
    [
      LineSegment::new(nw, ne),
      LineSegment::new(ne, se),
      LineSegment::new(se, sw),
      LineSegment::new(sw, nw),
    ]
  }

  #[must_use]
  pub fn expand(&self, margin: f64) -> Rect {
    Rect::new(
      self.x - margin,
      self.y - margin,
      self.width + 2.0 * margin,
      self.height + 2.0 * margin,
    )
  }

  /// Closed containment.
  pub fn contains(&self, pt: &Point) -> bool {
    let min = self.min();
    let max = self.max();
    min[0] <= pt[0] && pt[0] <= max[0] && min[1] <= pt[1] && pt[1] <= max[1]
  }

  /// Containment with [`EPSILON`] slack on every side.
  pub fn contains_approx(&self, pt: &Point) -> bool {
    self.expand(EPSILON).contains(pt)
  }

  /// Open containment, the boundary excluded.
  pub fn contains_strictly(&self, pt: &Point) -> bool {
    let min = self.min();
    let max = self.max();
    min[0] < pt[0] && pt[0] < max[0] && min[1] < pt[1] && pt[1] < max[1]
  }

  pub fn clamp(&self, pt: &Point) -> Point {
    let min = self.min();
    let max = self.max();
    Point::new([pt[0].clamp(min[0], max[0]), pt[1].clamp(min[1], max[1])])
  }

  /// Part of `segment` inside the rectangle (Liang-Barsky).
  pub fn clip(&self, segment: &LineSegment) -> Option<LineSegment> {
    let min = self.min();
    let max = self.max();
    let [x0, y0] = segment.src.array;
    let [dx, dy] = segment.direction().0;
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;
    for (p, q) in [
      (-dx, x0 - min[0]),
      (dx, max[0] - x0),
      (-dy, y0 - min[1]),
      (dy, max[1] - y0),
    ] {
      if p == 0.0 {
        if q < 0.0 {
          return None;
        }
      } else {
        let r = q / p;
        if p < 0.0 {
          if r > t1 {
            return None;
          }
          t0 = t0.max(r);
        } else {
          if r < t0 {
            return None;
          }
          t1 = t1.min(r);
        }
      }
    }
    Some(LineSegment::new(
      segment.src.lerp(&segment.dst, t0),
      segment.src.lerp(&segment.dst, t1),
    ))
  }

  /// Random obstacle inside `bounds` with sides between `min_side` and `max_side`.
  /// The side limits may be given in either order.
  ///
  /// # Panics
  ///
  /// Panics if `bounds` or the side limits are not finite.
  pub fn random<R>(bounds: &Rect, min_side: f64, max_side: f64, rng: &mut R) -> Rect
  where
    R: Rng + ?Sized,
  {
    let (min_side, max_side) = (min_side.min(max_side), min_side.max(max_side));
    let width = rng.gen_range(min_side..=max_side).min(bounds.width);
    let height = rng.gen_range(min_side..=max_side).min(bounds.height);
    let x = bounds.x + rng.gen_range(0.0..=bounds.width - width);
    let y = bounds.y + rng.gen_range(0.0..=bounds.height - height);
    Rect::new(x, y, width, height)
  }
}
