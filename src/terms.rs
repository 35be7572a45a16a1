use crate::membership::MembershipFunction;

/// A named membership function, e.g. `delicious` on the `food` variable.
#[derive(Clone, Debug, PartialEq)]
pub struct LinguisticTerm<F> {
    name: String,
    function: MembershipFunction<F>,
}

impl<F> LinguisticTerm<F> {
    pub fn new(name: impl Into<String>, function: MembershipFunction<F>) -> Self {
        Self {
            name: name.into(),
            function,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn function(&self) -> &MembershipFunction<F> {
        &self.function
    }
}

/// Terms collected before they are bound to a variable.
#[derive(Clone, Debug)]
pub struct Terms<F>(pub(crate) Vec<LinguisticTerm<F>>);

impl<F> Default for Terms<F> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<F> Terms<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, function: MembershipFunction<F>) {
        self.0.push(LinguisticTerm::new(name, function));
    }

    /// Builder form of [`Terms::insert`].
    pub fn with(mut self, name: impl Into<String>, function: MembershipFunction<F>) -> Self {
        self.insert(name, function);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
