use num::Float;

/// Evenly spaced values `start + step * i` for `i` in `0..len`.
pub struct Linspace<F> {
    start: F,
    step: F,
    index: usize,
    len: usize,
}

impl<F: Float> Linspace<F> {
    pub fn with_step(start: F, step: F, len: usize) -> Self {
        Linspace {
            start,
            step,
            index: 0,
            len,
        }
    }
}

impl<F: Float> Iterator for Linspace<F> {
    type Item = F;

    #[inline]
    fn next(&mut self) -> Option<F> {
        if self.index >= self.len {
            None
        } else {
            // Multiply instead of accumulating so rounding error does not grow with i
            let i = F::from(self.index)?;
            self.index += 1;
            Some(self.start + self.step * i)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl<F: Float> ExactSizeIterator for Linspace<F> {}

#[test]
fn test_linspace() {
    let points: Vec<f64> = Linspace::with_step(-1., 0.5, 5).collect();

    assert_eq!(points, vec![-1., -0.5, 0., 0.5, 1.]);
    assert_eq!(Linspace::with_step(0.0f32, 0.1, 0).count(), 0);
    assert_eq!(Linspace::with_step(0.0f32, 0.1, 301).len(), 301);
}
