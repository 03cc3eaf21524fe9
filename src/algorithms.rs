pub mod segments;
pub mod visibility;

#[doc(inline)]
pub use segments::build_segments;

#[doc(inline)]
pub use visibility::compute_visibility_polygon;
