/// Engine switches for [`MamdaniInference`](crate::MamdaniInference).
///
/// # Examples
///
/// ```
/// use fuzzy_mamdani::InferenceConfig;
///
/// let config = InferenceConfig::default().with_parallel(true);
///
/// assert!(config.parallel);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InferenceConfig {
    /// Compute rule implications in parallel using rayon.
    ///
    /// Only takes effect when the crate is built with the `parallel`
    /// feature; results are identical either way.
    pub parallel: bool,
}

impl InferenceConfig {
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
