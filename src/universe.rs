use std::sync::Arc;

use num::Float;

use crate::error::{Error, Result};
use crate::linspace::Linspace;
use crate::math::as_f64;

/// Upper bound on the number of sample points in one universe.
pub const MAX_POINTS: usize = 1 << 24;

/// The discretized range a fuzzy set is sampled on.
///
/// Points are `min, min + step, min + 2 * step, ...` up to and including the
/// first point that is `>= max`, so the last point may overshoot `max` when
/// the range is not a multiple of the step. There are always at least two
/// points and they are strictly increasing.
///
/// Clones share the same point buffer, which is what makes surfaces produced
/// from one variable cheap to compare.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        into = "UniverseBounds<F>",
        try_from = "UniverseBounds<F>",
        bound = "F: Float + serde::Serialize + serde::de::DeserializeOwned"
    )
)]
pub struct Universe<F> {
    min: F,
    max: F,
    step: F,
    points: Arc<[F]>,
}

impl<F: Float> Universe<F> {
    pub fn new(min: F, max: F, step: F) -> Result<Self> {
        let invalid = || Error::InvalidUniverse {
            min: as_f64(min),
            max: as_f64(max),
            step: as_f64(step),
        };

        if !(min.is_finite() && max.is_finite() && step.is_finite()) || step <= F::zero() || min >= max {
            return Err(invalid());
        }

        let point = |k: usize| F::from(k).map(|k| min + step * k);
        let mut intervals = ((max - min) / step).ceil().to_usize().ok_or_else(invalid)?;

        if intervals >= MAX_POINTS {
            return Err(invalid());
        }

        // The division can land one interval off in either direction
        while point(intervals).ok_or_else(invalid)? < max {
            intervals += 1;
        }
        while intervals > 1 && point(intervals - 1).ok_or_else(invalid)? >= max {
            intervals -= 1;
        }

        let points: Arc<[F]> = Linspace::with_step(min, step, intervals + 1).collect();

        // A step below the float resolution of the range yields repeated points
        if points.len() < 2 || points.windows(2).any(|w| w[0] >= w[1]) {
            return Err(invalid());
        }

        Ok(Self { min, max, step, points })
    }

    pub fn points(&self) -> &[F] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        self.points.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a universe holds at least two points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Lower bound the universe was built from, which is also its first point.
    pub fn min(&self) -> F {
        self.min
    }

    /// Upper bound the universe was built from. The last point is `>=` this.
    pub fn max(&self) -> F {
        self.max
    }

    pub fn step(&self) -> F {
        self.step
    }

    /// True if both universes hold the same sample points.
    pub fn same_as(&self, other: &Self) -> bool {
        self == other
    }
}

impl<F: PartialEq> PartialEq for Universe<F> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.points, &other.points) || self.points == other.points
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct UniverseBounds<F> {
    min: F,
    max: F,
    step: F,
}

#[cfg(feature = "serde")]
impl<F: Float> From<Universe<F>> for UniverseBounds<F> {
    fn from(universe: Universe<F>) -> Self {
        Self {
            min: universe.min,
            max: universe.max,
            step: universe.step,
        }
    }
}

#[cfg(feature = "serde")]
impl<F: Float> TryFrom<UniverseBounds<F>> for Universe<F> {
    type Error = Error;

    fn try_from(bounds: UniverseBounds<F>) -> Result<Self> {
        Universe::new(bounds.min, bounds.max, bounds.step)
    }
}
