use crate::{Error, EPSILON};

/// What to do with an origin that lies outside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OriginPolicy {
  /// Fail with [`Error::OriginOutsideViewport`].
  #[default]
  Reject,
  /// Move the origin to the nearest point of the viewport.
  Clamp,
}

/// Tuning knobs for segment building and the sweep.
///
/// ```rust
/// # use shadowcast::{Config, OriginPolicy};
/// let config = Config {
///   origin_policy: OriginPolicy::Clamp,
///   ..Config::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(default)
)]
pub struct Config {
  /// Distance between the viewport and the margin rectangle that catches
  /// rays leaving the viewport.
  pub margin: f64,
  /// Padding of the per-query bounding box around the origin and all
  /// occluders.
  pub bound_margin: f64,
  /// Length of rays that hit nothing.
  pub far_distance: f64,
  pub origin_policy: OriginPolicy,
  /// Drop vertices where the outline continues straight on.
  pub simplify: bool,
}

impl Default for Config {
  fn default() -> Config {
    Config {
      margin: 1e-6,
      bound_margin: 1.0,
      far_distance: 10_000.0,
      origin_policy: OriginPolicy::Reject,
      simplify: true,
    }
  }
}

impl Config {
  pub fn validate(&self) -> Result<(), Error> {
    if !self.margin.is_finite() || self.margin <= EPSILON {
      return Err(Error::InvalidConfig("margin must be finite and larger than EPSILON"));
    }
    if !self.bound_margin.is_finite() || self.bound_margin <= 0.0 {
      return Err(Error::InvalidConfig("bound_margin must be finite and positive"));
    }
    if !self.far_distance.is_finite() || self.far_distance <= 0.0 {
      return Err(Error::InvalidConfig("far_distance must be finite and positive"));
    }
    Ok(())
  }
}
