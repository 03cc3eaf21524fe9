mod half_line;
mod line_segment;
pub(crate) mod point;
pub mod polygon;
mod rect;
mod vector;

pub use half_line::*;
pub use line_segment::*;
pub use rect::*;

#[doc(inline)]
pub use crate::data::polygon::{PathCommand, PathSink, VisibilityPolygon};
pub use point::{angle_between, angle_degrees, distance_squared, points_equal, Point};
pub use vector::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
