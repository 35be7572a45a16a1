use num::Float;

use crate::error::{Error, Result};
use crate::math::as_f64;
use crate::membership::MembershipFunction;
use crate::ops::{implication, production_link};
use crate::universe::Universe;

/// A fuzzy set sampled on a universe: `membership[i]` belongs to
/// `universe.points()[i]` and lies in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        into = "RawSurface<F>",
        try_from = "RawSurface<F>",
        bound = "F: Float + serde::Serialize + serde::de::DeserializeOwned"
    )
)]
pub struct FuzzySurface<F> {
    universe: Universe<F>,
    membership: Vec<F>,
}

impl<F: Float> FuzzySurface<F> {
    pub fn new(universe: Universe<F>, membership: Vec<F>) -> Result<Self> {
        if membership.len() != universe.len() {
            return Err(Error::InvalidSurface(format!(
                "{} memberships for {} universe points",
                membership.len(),
                universe.len()
            )));
        }
        if let Some(mu) = membership.iter().find(|mu| !(**mu >= F::zero() && **mu <= F::one())) {
            return Err(Error::InvalidSurface(format!(
                "membership {} is outside [0, 1]",
                as_f64(*mu)
            )));
        }

        Ok(Self { universe, membership })
    }

    /// `function` sampled at every point of `universe`.
    pub fn sample(universe: &Universe<F>, function: &MembershipFunction<F>) -> Self {
        Self {
            membership: function.sample(universe.iter()).collect(),
            universe: universe.clone(),
        }
    }

    /// `function` sampled on `universe` and truncated at `firing_strength`.
    pub fn implied(universe: &Universe<F>, function: &MembershipFunction<F>, firing_strength: F) -> Self {
        // Clamping keeps the invariant if a caller hands in a strength outside [0, 1]
        let firing_strength = firing_strength.max(F::zero()).min(F::one());

        Self {
            membership: implication(firing_strength, function.sample(universe.iter())).collect(),
            universe: universe.clone(),
        }
    }

    pub fn universe(&self) -> &Universe<F> {
        &self.universe
    }

    pub fn membership(&self) -> &[F] {
        &self.membership
    }

    /// `(x, membership)` pairs in universe order.
    pub fn iter(&self) -> impl Iterator<Item = (F, F)> + '_ {
        self.universe.iter().zip(self.membership.iter().copied())
    }

    pub fn height(&self) -> F {
        self.membership.iter().copied().fold(F::zero(), F::max)
    }

    pub fn is_zero(&self) -> bool {
        self.membership.iter().all(|mu| *mu == F::zero())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(bound = "F: Float + serde::Serialize + serde::de::DeserializeOwned")]
struct RawSurface<F> {
    universe: Universe<F>,
    membership: Vec<F>,
}

#[cfg(feature = "serde")]
impl<F: Float> From<FuzzySurface<F>> for RawSurface<F> {
    fn from(surface: FuzzySurface<F>) -> Self {
        Self {
            universe: surface.universe,
            membership: surface.membership,
        }
    }
}

#[cfg(feature = "serde")]
impl<F: Float> TryFrom<RawSurface<F>> for FuzzySurface<F> {
    type Error = Error;

    fn try_from(raw: RawSurface<F>) -> Result<Self> {
        FuzzySurface::new(raw.universe, raw.membership)
    }
}

/// Combines rule outputs into one surface by taking the pointwise maximum.
///
/// Every surface must be sampled on the same universe. The result does not
/// depend on the order of the surfaces, and repeating a surface changes
/// nothing.
pub fn aggregate<'s, F: Float + 's>(surfaces: impl IntoIterator<Item = &'s FuzzySurface<F>>) -> Result<FuzzySurface<F>> {
    let mut surfaces = surfaces.into_iter();
    let mut aggregated = surfaces.next().ok_or(Error::NoRulesFired)?.clone();

    for surface in surfaces {
        if !surface.universe.same_as(&aggregated.universe) {
            return Err(Error::UniverseMismatch);
        }

        aggregated.membership = production_link(
            aggregated.membership.iter().copied(),
            surface.membership.iter().copied(),
        )
        .collect();
    }

    Ok(aggregated)
}
