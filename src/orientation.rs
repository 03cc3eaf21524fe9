#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

/// Which way a ray leans when it is aimed directly at a vertex.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum SoS {
  CounterClockWise,
  ClockWise,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The sign is computed exactly with adaptive precision arithmetic, so
  /// the answer is never wrong because of rounding.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use shadowcast::data::Point;
  /// # use shadowcast::Orientation;
  /// let p1 = Point::new([ 0.0, 0.0 ]);
  /// let p2 = Point::new([ 0.0, 1.0 ]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 0.0, 2.0 ])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ -1.0, 2.0 ])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1.0, 2.0 ])).is_cw());
  /// ```
  pub fn new(p1: &[f64; 2], p2: &[f64; 2], p3: &[f64; 2]) -> Orientation {
    Orientation::from_determinant(geometry_predicates::predicates::orient2d(*p1, *p2, *p3))
  }

  /// Like [`Orientation::new`] but `p3` counts as colinear when it lies
  /// within `tolerance` of the line through `p1` and `p2`.
  ///
  /// If `p1` and `p2` coincide there is no line and the result is always
  /// [`Orientation::CoLinear`].
  pub fn with_tolerance(
    p1: &[f64; 2],
    p2: &[f64; 2],
    p3: &[f64; 2],
    tolerance: f64,
  ) -> Orientation {
    let det = geometry_predicates::predicates::orient2d(*p1, *p2, *p3);
    let len = (p2[0] - p1[0]).hypot(p2[1] - p1[1]);
    if det.abs() <= tolerance * len {
      CoLinear
    } else {
      Orientation::from_determinant(det)
    }
  }

  fn from_determinant(det: f64) -> Orientation {
    if det > 0.0 {
      CounterClockWise
    } else if det < 0.0 {
      ClockWise
    } else {
      CoLinear
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn then(self, other: Orientation) -> Orientation {
    match self {
      Orientation::CoLinear => other,
      _ => self,
    }
  }

  pub fn sos(self, other: SoS) -> SoS {
    match self {
      CounterClockWise => SoS::CounterClockWise,
      ClockWise => SoS::ClockWise,
      CoLinear => other,
    }
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}

impl SoS {
  pub fn orient(self) -> Orientation {
    match self {
      SoS::CounterClockWise => Orientation::CounterClockWise,
      SoS::ClockWise => Orientation::ClockWise,
    }
  }

  #[must_use]
  pub fn reverse(self) -> SoS {
    match self {
      SoS::CounterClockWise => SoS::ClockWise,
      SoS::ClockWise => SoS::CounterClockWise,
    }
  }
}
