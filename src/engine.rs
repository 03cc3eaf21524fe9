use crate::algorithms::segments::SegmentSet;
use crate::algorithms::visibility::{
  compute_visibility_polygon_with, obstacle_exposure, resolve_origin, ObstacleExposure,
};
use crate::data::{Direction, HalfLine, Point, PointLocation, Rect, VisibilityPolygon};
use crate::{Config, Error, Intersects};

/// Owns a scene and answers visibility queries against it.
///
/// The segment set is rebuilt whenever the obstacles change and shared by
/// every query in between. The engine can also remember one light source and
/// its polygon.
///
/// ```rust
/// # use shadowcast::data::{Point, Rect};
/// # use shadowcast::VisibilityEngine;
/// let mut engine = VisibilityEngine::new(100.0, 100.0, vec![Rect::new(60.0, 40.0, 10.0, 20.0)])?;
/// let lit = engine.set_origin(&Point::new([50.0, 50.0]))?.len();
/// assert_eq!(lit, 6);
/// assert!(!engine.is_visible(&Point::new([50.0, 50.0]), &Point::new([90.0, 50.0]))?);
/// # Ok::<(), shadowcast::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct VisibilityEngine {
  config: Config,
  segments: SegmentSet,
  light: Option<(Point, VisibilityPolygon)>,
}

impl VisibilityEngine {
  pub fn new(width: f64, height: f64, obstacles: Vec<Rect>) -> Result<VisibilityEngine, Error> {
    VisibilityEngine::with_config(width, height, obstacles, Config::default())
  }

  pub fn with_config(
    width: f64,
    height: f64,
    obstacles: Vec<Rect>,
    config: Config,
  ) -> Result<VisibilityEngine, Error> {
    let segments = SegmentSet::new(width, height, &obstacles, &config)?;
    Ok(VisibilityEngine {
      config,
      segments,
      light: None,
    })
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn viewport(&self) -> &Rect {
    self.segments.viewport()
  }

  pub fn obstacles(&self) -> &[Rect] {
    self.segments.obstacles()
  }

  pub fn segments(&self) -> &SegmentSet {
    &self.segments
  }

  /// Replace every obstacle and rebuild the segment set. On error the engine
  /// is left untouched. Forgets the remembered light.
  pub fn set_obstacles(&mut self, obstacles: Vec<Rect>) -> Result<(), Error> {
    let viewport = self.segments.viewport();
    let segments = SegmentSet::new(viewport.width, viewport.height, &obstacles, &self.config)?;
    self.segments = segments;
    self.light = None;
    Ok(())
  }

  pub fn visibility_polygon(&self, origin: &Point) -> Result<VisibilityPolygon, Error> {
    compute_visibility_polygon_with(origin, &self.segments, &self.config)
  }

  /// Move the remembered light to `origin` and return its polygon.
  pub fn set_origin(&mut self, origin: &Point) -> Result<&VisibilityPolygon, Error> {
    let polygon = self.visibility_polygon(origin)?;
    let (_, polygon) = self.light.insert((*polygon.origin(), polygon));
    Ok(&*polygon)
  }

  /// The remembered light, after any clamping.
  pub fn origin(&self) -> Option<&Point> {
    self.light.as_ref().map(|(origin, _)| origin)
  }

  pub fn polygon(&self) -> Option<&VisibilityPolygon> {
    self.light.as_ref().map(|(_, polygon)| polygon)
  }

  /// True if `target` is lit by a light at `origin`. Points on the edge of
  /// the lit area count as lit.
  pub fn is_visible(&self, origin: &Point, target: &Point) -> Result<bool, Error> {
    if !target.is_finite() {
      return Err(Error::NonFiniteCoordinate);
    }
    let polygon = self.visibility_polygon(origin)?;
    Ok(polygon.locate(target) != PointLocation::Outside)
  }

  /// Obstacles with any visible boundary, in obstacle order.
  pub fn lit_obstacles(&self, origin: &Point) -> Result<Vec<ObstacleExposure>, Error> {
    obstacle_exposure(origin, &self.segments, &self.config)
  }

  /// First occluder hit by a ray from `origin`. `None` if the direction is
  /// zero or not finite.
  pub fn cast_ray(&self, origin: &Point, direction: Direction) -> Result<Option<Point>, Error> {
    let origin = resolve_origin(origin, self.segments.viewport(), self.config.origin_policy)?;
    let Some(ray) = HalfLine::new(origin, direction) else {
      return Ok(None);
    };
    Ok(
      self
        .segments
        .occluders()
        .iter()
        .filter_map(|edge| ray.intersect(&edge.segment))
        .min_by(|a, b| {
          origin
            .squared_euclidean_distance(a)
            .total_cmp(&origin.squared_euclidean_distance(b))
        }),
    )
  }
}
