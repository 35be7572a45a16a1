use num::Float;

use crate::error::{Error, Result};
use crate::surface::FuzzySurface;

/// Center of gravity of a surface, integrated with the trapezoid rule.
///
/// Fails with [`Error::UndefinedDefuzzification`] when the surface has no
/// area, i.e. every membership is zero.
pub fn centroid<F: Float>(surface: &FuzzySurface<F>) -> Result<F> {
    let two = F::one() + F::one();
    let mut numerator = F::zero();
    let mut denominator = F::zero();
    let xs = surface.universe().points();
    let mu = surface.membership();

    for (x, mu) in xs.windows(2).zip(mu.windows(2)) {
        let base = x[1] - x[0];

        numerator = numerator + (mu[0] * x[0] + mu[1] * x[1]) / two * base;
        denominator = denominator + (mu[0] + mu[1]) / two * base;
    }

    if denominator == F::zero() {
        return Err(Error::UndefinedDefuzzification);
    }

    Ok(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership::MembershipFunction;
    use crate::surface::aggregate;
    use crate::universe::Universe;

    #[test]
    fn symmetric_triangle_centroid_is_its_peak() {
        let u = Universe::new(0., 20., 0.1).unwrap();
        let surface = FuzzySurface::sample(&u, &MembershipFunction::triangular(0., 5., 10.).unwrap());

        assert!((centroid(&surface).unwrap() - 5.).abs() < 1e-9);
    }

    #[test]
    fn off_grid_peak_is_within_a_step() {
        let u = Universe::new(-10.0f32, 10., 0.5).unwrap();
        let surface = FuzzySurface::sample(&u, &MembershipFunction::gaussian(1.3, 2.).unwrap());

        assert!((centroid(&surface).unwrap() - 1.3).abs() < 0.5);
    }

    #[test]
    fn stronger_rule_pulls_the_centroid() {
        let u = Universe::new(0., 20., 0.1).unwrap();
        let cheap = FuzzySurface::implied(&u, &MembershipFunction::triangular(0., 5., 10.).unwrap(), 0.4);
        let average = FuzzySurface::implied(&u, &MembershipFunction::triangular(10., 15., 20.).unwrap(), 0.7);
        let value = centroid(&aggregate([&cheap, &average]).unwrap()).unwrap();

        assert!(value > 10. && value < 15., "centroid {value}");
        assert!((value - 10.870967741935).abs() < 1e-6, "centroid {value}");
    }

    #[test]
    fn zero_surface_is_undefined_not_nan() {
        let u = Universe::new(0., 10., 1.).unwrap();
        let surface = FuzzySurface::implied(&u, &MembershipFunction::triangular(2., 5., 8.).unwrap(), 0.);

        assert_eq!(centroid(&surface), Err(Error::UndefinedDefuzzification));
    }
}
