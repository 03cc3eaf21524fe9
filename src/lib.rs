#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Visibility polygons around rectangular obstacles.
//!
//! Given a rectangular viewport, a set of opaque axis-aligned obstacles and an
//! observer, compute the star-shaped polygon of everything the observer can
//! see. The polygon is produced by an angular sweep over the obstacle edges.
//!
//! ```rust
//! # use shadowcast::data::{Point, Rect};
//! # use shadowcast::VisibilityEngine;
//! let engine = VisibilityEngine::new(100.0, 100.0, vec![Rect::new(60.0, 40.0, 10.0, 20.0)])?;
//! let polygon = engine.visibility_polygon(&Point::new([50.0, 50.0]))?;
//! assert!(polygon.contains(&Point::new([20.0, 50.0])));
//! assert!(!polygon.contains(&Point::new([85.0, 50.0])));
//! # Ok::<(), shadowcast::Error>(())
//! ```

pub mod algorithms;
mod config;
pub mod data;
mod engine;
mod intersection;
mod orientation;

pub use config::{Config, OriginPolicy};
pub use engine::VisibilityEngine;
pub use intersection::{intersect_lines, segments_intersect, ILineSegment, Intersects};
pub use orientation::{Orientation, SoS};

#[doc(inline)]
pub use algorithms::visibility::{
  compute_visibility_polygon, compute_visibility_polygon_with, ObstacleExposure,
};

#[doc(inline)]
pub use algorithms::segments::{build_segments, SegmentSet};

/// Tolerance used for point equality, angle grouping and colinearity.
pub const EPSILON: f64 = 1e-7;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
  #[error("viewport must have a positive, finite size (got {width} x {height})")]
  InvalidViewport { width: f64, height: f64 },
  #[error("coordinates must be finite")]
  NonFiniteCoordinate,
  #[error("origin ({x}, {y}) lies outside the viewport")]
  OriginOutsideViewport { x: f64, y: f64 },
  #[error("invalid configuration: {0}")]
  InvalidConfig(&'static str),
}

#[cfg(test)]
pub mod testing;
