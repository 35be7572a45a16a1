use num::Float;

use crate::error::{Error, Result};
use crate::math::{as_f64, interp};

/// The parameters of a membership function.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape<F> {
    /// Bell curve centered on `mean`.
    Gaussian { mean: F, sigma: F },
    /// Rises from `a` to a peak at `b`, falls back to zero at `c`.
    Triangular { a: F, b: F, c: F },
    /// Rises from `a` to `b`, holds 1 until `c`, falls to zero at `d`.
    Trapezoidal { a: F, b: F, c: F, d: F },
    /// Piecewise-linear through `(x, membership)` control points.
    Points(Vec<(F, F)>),
}

/// Maps a crisp value to a degree of membership in `[0, 1]`.
///
/// Parameters are validated on construction, so every `MembershipFunction`
/// that exists is total: `evaluate` is defined for every input and never
/// leaves the unit interval.
///
/// ```
/// use fuzzy_mamdani::MembershipFunction;
///
/// let warm = MembershipFunction::<f64>::triangular(0.0, 5.0, 10.0)?;
///
/// assert!((warm.evaluate(3.0) - 0.6).abs() < 1e-9);
/// # Ok::<(), fuzzy_mamdani::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        into = "Shape<F>",
        try_from = "Shape<F>",
        bound = "F: Float + serde::Serialize + serde::de::DeserializeOwned"
    )
)]
pub struct MembershipFunction<F> {
    shape: Shape<F>,
}

impl<F: Float> MembershipFunction<F> {
    pub fn new(shape: Shape<F>) -> Result<Self> {
        validate(&shape)?;

        Ok(Self { shape })
    }

    pub fn gaussian(mean: F, sigma: F) -> Result<Self> {
        Self::new(Shape::Gaussian { mean, sigma })
    }

    pub fn triangular(a: F, b: F, c: F) -> Result<Self> {
        Self::new(Shape::Triangular { a, b, c })
    }

    pub fn trapezoidal(a: F, b: F, c: F, d: F) -> Result<Self> {
        Self::new(Shape::Trapezoidal { a, b, c, d })
    }

    pub fn points(points: impl IntoIterator<Item = (F, F)>) -> Result<Self> {
        Self::new(Shape::Points(points.into_iter().collect()))
    }

    pub fn shape(&self) -> &Shape<F> {
        &self.shape
    }

    pub fn evaluate(&self, x: F) -> F {
        let membership = match self.shape {
            Shape::Gaussian { mean, sigma } => gaussian(x, mean, sigma),
            // A triangle is a trapezoid with a single-point plateau
            Shape::Triangular { a, b, c } => trapezoid(x, a, b, b, c),
            Shape::Trapezoidal { a, b, c, d } => trapezoid(x, a, b, c, d),
            Shape::Points(ref points) => interp(x, points),
        };

        // max() drops a NaN from a NaN input
        membership.max(F::zero()).min(F::one())
    }

    /// Samples the function at every point of `xs`.
    pub fn sample<'x>(&'x self, xs: impl IntoIterator<Item = F> + 'x) -> impl Iterator<Item = F> + 'x {
        xs.into_iter().map(move |x| self.evaluate(x))
    }
}

impl<F: Float> TryFrom<Shape<F>> for MembershipFunction<F> {
    type Error = Error;

    fn try_from(shape: Shape<F>) -> Result<Self> {
        Self::new(shape)
    }
}

impl<F> From<MembershipFunction<F>> for Shape<F> {
    fn from(function: MembershipFunction<F>) -> Self {
        function.shape
    }
}

fn gaussian<F: Float>(x: F, mean: F, sigma: F) -> F {
    let two = F::one() + F::one();
    // Dividing before squaring keeps tiny sigmas from underflowing to 0/0
    let z = (x - mean) / sigma;

    (-(z * z) / two).exp()
}

/// Ranges are disjoint and checked in order, so an earlier branch can never
/// be overwritten by a later one. Each edge branch is only reachable when the
/// edge has non-zero width.
fn trapezoid<F: Float>(x: F, a: F, b: F, c: F, d: F) -> F {
    match x {
        x if x < a => F::zero(),
        x if x < b => (x - a) / (b - a),
        x if x <= c => F::one(),
        x if x < d => (d - x) / (d - c),
        _ => F::zero(),
    }
}

fn validate<F: Float>(shape: &Shape<F>) -> Result<()> {
    let invalid = |reason: String| Err(Error::InvalidMembershipFunctionParameters(reason));

    match *shape {
        Shape::Gaussian { mean, sigma } => {
            if !mean.is_finite() || !sigma.is_finite() {
                return invalid(format!(
                    "gaussian parameters must be finite (mean={}, sigma={})",
                    as_f64(mean),
                    as_f64(sigma)
                ));
            }
            if sigma <= F::zero() {
                return invalid(format!("gaussian sigma must be positive, got {}", as_f64(sigma)));
            }
        },
        Shape::Triangular { a, b, c } => ordered("triangular", &[a, b, c])?,
        Shape::Trapezoidal { a, b, c, d } => ordered("trapezoidal", &[a, b, c, d])?,
        Shape::Points(ref points) => {
            if points.is_empty() {
                return invalid("point list is empty".into());
            }

            let xs: Vec<F> = points.iter().map(|(x, _)| *x).collect();

            ordered("point list", &xs)?;

            if let Some((x, mu)) = points
                .iter()
                .find(|(_, mu)| !(*mu >= F::zero() && *mu <= F::one()))
            {
                return invalid(format!(
                    "membership {} at x={} is outside [0, 1]",
                    as_f64(*mu),
                    as_f64(*x)
                ));
            }
        },
    }

    Ok(())
}

fn ordered<F: Float>(kind: &str, control_points: &[F]) -> Result<()> {
    let describe = || {
        control_points
            .iter()
            .map(|p| as_f64(*p).to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    if control_points.iter().any(|p| !p.is_finite()) {
        return Err(Error::InvalidMembershipFunctionParameters(format!(
            "{kind} control points must be finite: [{}]",
            describe()
        )));
    }

    if control_points.windows(2).any(|w| w[0] > w[1]) {
        return Err(Error::InvalidMembershipFunctionParameters(format!(
            "{kind} control points must be non-decreasing: [{}]",
            describe()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn tri(a: f64, b: f64, c: f64) -> MembershipFunction<f64> {
        MembershipFunction::triangular(a, b, c).unwrap()
    }

    fn trap(a: f64, b: f64, c: f64, d: f64) -> MembershipFunction<f64> {
        MembershipFunction::trapezoidal(a, b, c, d).unwrap()
    }

    #[test]
    fn triangular_values() {
        let f = tri(0., 5., 10.);

        assert!((f.evaluate(3.) - 0.6).abs() < 1e-9);
        assert!((f.evaluate(7.5) - 0.5).abs() < 1e-9);
        assert_eq!(f.evaluate(5.), 1.);
        assert_eq!(f.evaluate(0.), 0.);
        assert_eq!(f.evaluate(10.), 0.);
        assert_eq!(f.evaluate(-4.), 0.);
        assert_eq!(f.evaluate(42.), 0.);
    }

    #[test]
    fn gaussian_values() {
        let f = MembershipFunction::gaussian(0., 1.5).unwrap();

        assert_eq!(f.evaluate(0.), 1.);
        assert!((f.evaluate(3.) - (-2.0f64).exp()).abs() < 1e-12);
        assert_eq!(f.evaluate(f64::INFINITY), 0.);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let f = trap(-2., 0., 1., 3.);
        let json = serde_json::to_string(&f).unwrap();

        assert_eq!(json, r#"{"Trapezoidal":{"a":-2.0,"b":0.0,"c":1.0,"d":3.0}}"#);
        assert_eq!(serde_json::from_str::<MembershipFunction<f64>>(&json).unwrap(), f);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializing_validates_parameters() {
        let unordered = r#"{"Triangular":{"a":0.0,"b":10.0,"c":5.0}}"#;
        let flat = r#"{"Gaussian":{"mean":0.0,"sigma":0.0}}"#;

        assert!(serde_json::from_str::<MembershipFunction<f64>>(unordered).is_err());
        assert!(serde_json::from_str::<MembershipFunction<f64>>(flat).is_err());
    }

    #[test]
    fn narrow_gaussian_still_peaks_at_one() {
        let f = MembershipFunction::gaussian(0., 1e-200).unwrap();

        assert_eq!(f.evaluate(0.), 1.);
        assert_eq!(f.evaluate(1e-150), 0.);

        let g = MembershipFunction::gaussian(0.0f32, 1e-23).unwrap();

        assert_eq!(g.evaluate(0.), 1.);
        assert_eq!(g.evaluate(1.), 0.);
    }

    #[test]
    fn trapezoidal_values() {
        let f = trap(-2., 0., 1., 3.);

        assert_eq!(f.evaluate(0.5), 1.);
        assert_eq!(f.evaluate(0.), 1.);
        assert_eq!(f.evaluate(1.), 1.);
        assert!((f.evaluate(-1.) - 0.5).abs() < 1e-12);
        assert!((f.evaluate(2.) - 0.5).abs() < 1e-12);
        assert_eq!(f.evaluate(3.), 0.);
        assert_eq!(f.evaluate(-2.), 0.);
        assert!((trap(7., 9., 10., 12.).evaluate(8.) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn degenerate_edges_step_without_dividing_by_zero() {
        let left = trap(1., 1., 2., 3.);

        assert_eq!(left.evaluate(0.999), 0.);
        assert_eq!(left.evaluate(1.), 1.);

        let right = trap(0., 1., 2., 2.);

        assert_eq!(right.evaluate(2.), 1.);
        assert_eq!(right.evaluate(2.001), 0.);

        let spike = tri(4., 4., 4.);

        assert_eq!(spike.evaluate(4.), 1.);
        assert_eq!(spike.evaluate(3.9), 0.);
        assert_eq!(spike.evaluate(4.1), 0.);

        assert_eq!(tri(0., 5., 5.).evaluate(5.), 1.);
        assert_eq!(tri(5., 5., 10.).evaluate(5.), 1.);
    }

    #[test]
    fn points_interpolate() {
        let f = MembershipFunction::points([(175.0, 0.0), (180., 0.2), (185., 0.7), (190., 1.)]).unwrap();

        assert_eq!(f.evaluate(100.), 0.);
        assert!((f.evaluate(182.5) - 0.45).abs() < 1e-12);
        assert_eq!(f.evaluate(200.), 1.);
    }

    #[test]
    fn rejects_bad_parameters() {
        let bad = |r: Result<MembershipFunction<f64>>| {
            matches!(r, Err(Error::InvalidMembershipFunctionParameters(_)))
        };

        assert!(bad(MembershipFunction::gaussian(0., 0.)));
        assert!(bad(MembershipFunction::gaussian(0., -1.)));
        assert!(bad(MembershipFunction::gaussian(f64::NAN, 1.)));
        assert!(bad(MembershipFunction::triangular(0., 10., 5.)));
        assert!(bad(MembershipFunction::triangular(5., 0., 10.)));
        assert!(bad(MembershipFunction::trapezoidal(0., 2., 1., 3.)));
        assert!(bad(MembershipFunction::trapezoidal(0., 1., 2., f64::INFINITY)));
        assert!(bad(MembershipFunction::points(Vec::<(f64, f64)>::new())));
        assert!(bad(MembershipFunction::points([(1., 0.), (0., 1.)])));
        assert!(bad(MembershipFunction::points([(0., 0.), (1., 1.5)])));
        assert!(bad(MembershipFunction::new(Shape::Points(vec![(0., f64::NAN)]))));
    }

    #[test]
    fn works_in_single_precision() {
        let f = MembershipFunction::triangular(0.0f32, 5., 10.).unwrap();

        assert!((f.evaluate(3.) - 0.6).abs() < 1e-6);
    }

    fn ordered4() -> impl Strategy<Value = [f64; 4]> {
        prop::array::uniform4(-1e3..1e3f64).prop_map(|mut p| {
            p.sort_by(|a, b| a.partial_cmp(b).unwrap());
            p
        })
    }

    proptest! {
        #[test]
        fn trapezoid_stays_in_unit_interval(p in ordered4(), x in -2e3..2e3f64) {
            let f = trap(p[0], p[1], p[2], p[3]);
            let mu = f.evaluate(x);

            prop_assert!((0.0..=1.0).contains(&mu));
        }

        #[test]
        fn trapezoid_plateau_is_one(p in ordered4(), t in 0.0..=1.0f64) {
            let f = trap(p[0], p[1], p[2], p[3]);
            let x = (p[1] + t * (p[2] - p[1])).clamp(p[1], p[2]);

            prop_assert_eq!(f.evaluate(x), 1.);
        }

        #[test]
        fn triangle_is_one_at_peak_and_zero_outside(p in ordered4(), x in -2e3..2e3f64) {
            let (a, b, c) = (p[0], p[1], p[3]);
            let f = tri(a, b, c);

            prop_assert_eq!(f.evaluate(b), 1.);
            if (x <= a && a < b) || (x >= c && b < c) {
                prop_assert_eq!(f.evaluate(x), 0.);
            }
        }

        #[test]
        fn gaussian_is_symmetric(mean in -100.0..100.0f64, sigma in 0.01..50.0f64, d in 0.0..200.0f64) {
            let f = MembershipFunction::gaussian(mean, sigma).unwrap();
            let (left, right) = (f.evaluate(mean - d), f.evaluate(mean + d));

            prop_assert_eq!(f.evaluate(mean), 1.);
            prop_assert!((left - right).abs() < 1e-9);
            prop_assert!((0.0..=1.0).contains(&left));
        }
    }
}
