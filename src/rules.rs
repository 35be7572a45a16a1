use crate::dsl::{Expr, TermRef};

#[derive(Clone, Debug, Default)]
pub struct Rules(pub(crate) Vec<Rule>);

impl Rules {
    pub fn new() -> Self {
        Rules(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Rules(Vec::with_capacity(capacity))
    }

    pub fn add(&mut self, premise: Expr, consequence: TermRef) {
        self.0.push(Rule { premise, consequence });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// `IF premise THEN consequence`. Immutable once added to [`Rules`].
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    premise: Expr,
    consequence: TermRef,
}

impl Rule {
    pub fn premise(&self) -> &Expr {
        &self.premise
    }

    pub fn consequence(&self) -> &TermRef {
        &self.consequence
    }
}
