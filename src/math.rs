use num::Float;

/// Similar to numpy.interp, for a single x. Values left of the first
/// coordinate and right of the last one are held constant.
pub(crate) fn interp<F: Float>(x: F, coords: &[(F, F)]) -> F {
    let (Some(&(x_first, y_first)), Some(&(x_last, y_last))) = (coords.first(), coords.last()) else {
        return F::zero();
    };

    // Base cases
    if x <= x_first {
        return y_first;
    }
    if x >= x_last {
        return y_last;
    }

    for window in coords.windows(2) {
        let (x1, y1) = window[0];
        let (x2, y2) = window[1];

        if x1 <= x && x <= x2 {
            // Vertical segment
            if x2 == x1 {
                return y2;
            }

            return y1 + (x - x1) * (y2 - y1) / (x2 - x1);
        }
    }

    // Only reachable for NaN
    y_last
}

/// Lossy conversion used for error messages and log fields.
pub(crate) fn as_f64<F: Float>(value: F) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

#[test]
fn test_interp() {
    let x = [0., 1., 1.5, 2.72, 3.24];
    let coords = [(1., 3.), (2., 2.), (3., 0.)];
    let expected = [3., 3., 2.5, 0.56, 0.];

    for (x, expected) in x.into_iter().zip(expected) {
        assert!((interp(x, &coords) - expected).abs() < 1e-12);
    }

    let x = [2.5, -1., 7.5];
    let coords = [(0., 0.), (1., 2.), (2., 5.), (3., 3.), (4.5, 2.)];

    assert_eq!(x.map(|x| interp(x, &coords)), [4., 0., 2.]);
}

#[test]
fn test_interp_step() {
    let coords = [(0.0f32, 0.), (1., 0.), (1., 1.), (2., 1.)];

    assert_eq!(interp(0.5, &coords), 0.);
    assert_eq!(interp(1.5, &coords), 1.);
    assert_eq!(interp(0.5, &[]), 0.);
}
