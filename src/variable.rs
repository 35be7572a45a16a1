use std::collections::HashMap;
use std::ops::RangeInclusive;

use num::Float;
use slotmap::{new_key_type, SlotMap};

use crate::dsl::TermRef;
use crate::error::{Error, Result};
use crate::math::as_f64;
use crate::terms::{LinguisticTerm, Terms};
use crate::universe::Universe;

/// Universe step used when a variable is added without one.
pub const DEFAULT_STEP: f64 = 0.1;

new_key_type! {
    /// A variable key
    pub struct VariableKey;
}

/// Handle to a variable registered in [`Variables`].
///
/// Handles are slot keys, not tied to the registry that issued them. Passing
/// one to a different registry either fails with
/// [`Error::UnknownVariable`] or, when that registry holds a variable in the
/// same slot, resolves to that unrelated variable.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Variable(pub(crate) VariableKey);

impl Variable {
    pub fn key(self) -> VariableKey {
        self.0
    }
}

/// A named quantity with a universe of discourse and the terms describing it.
#[derive(Clone, Debug)]
pub struct LinguisticVariable<F> {
    name: String,
    universe: Universe<F>,
    terms: Vec<LinguisticTerm<F>>,
    index: HashMap<String, usize>,
}

impl<F: Float> LinguisticVariable<F> {
    /// If the step value is not provided, it defaults to [`DEFAULT_STEP`].
    pub fn new(
        name: impl Into<String>,
        universe_range: RangeInclusive<F>,
        terms: Terms<F>,
        step: Option<F>,
    ) -> Result<Self> {
        let name = name.into();
        let min_u = *universe_range.start();
        let max_u = *universe_range.end();
        let step = match step {
            Some(step) => step,
            None => F::from(DEFAULT_STEP).ok_or(Error::InvalidUniverse {
                min: as_f64(min_u),
                max: as_f64(max_u),
                step: DEFAULT_STEP,
            })?,
        };
        let mut this = Self {
            name,
            universe: Universe::new(min_u, max_u, step)?,
            terms: Vec::with_capacity(terms.len()),
            index: HashMap::with_capacity(terms.len()),
        };

        for term in terms.0 {
            this.push_term(term)?;
        }

        Ok(this)
    }

    fn push_term(&mut self, term: LinguisticTerm<F>) -> Result<()> {
        if self.index.contains_key(term.name()) {
            return Err(Error::DuplicateTerm {
                variable: self.name.clone(),
                term: term.name().to_owned(),
            });
        }

        self.index.insert(term.name().to_owned(), self.terms.len());
        self.terms.push(term);

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn universe(&self) -> &Universe<F> {
        &self.universe
    }

    pub fn universe_min(&self) -> F {
        self.universe.min()
    }

    pub fn universe_max(&self) -> F {
        self.universe.max()
    }

    pub fn terms(&self) -> &[LinguisticTerm<F>] {
        &self.terms
    }

    pub fn term(&self, name: &str) -> Result<&LinguisticTerm<F>> {
        self.index
            .get(name)
            .map(|i| &self.terms[*i])
            .ok_or_else(|| Error::UnknownTermReference {
                variable: self.name.clone(),
                term: name.to_owned(),
            })
    }
}

/// Registry of every variable of a fuzzy system, inputs and outputs alike.
#[derive(Clone, Debug)]
pub struct Variables<F> {
    slots: SlotMap<VariableKey, LinguisticVariable<F>>,
    names: HashMap<String, VariableKey>,
}

impl<F> Default for Variables<F> {
    fn default() -> Self {
        Self {
            slots: SlotMap::with_key(),
            names: HashMap::new(),
        }
    }
}

impl<F: Float> Variables<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// If the step value is not provided, it defaults to [`DEFAULT_STEP`].
    pub fn add(
        &mut self,
        name: impl Into<String>,
        universe_range: RangeInclusive<F>,
        terms: Terms<F>,
        step: Option<F>,
    ) -> Result<Variable> {
        self.insert(LinguisticVariable::new(name, universe_range, terms, step)?)
    }

    pub fn insert(&mut self, variable: LinguisticVariable<F>) -> Result<Variable> {
        if self.names.contains_key(variable.name()) {
            return Err(Error::DuplicateVariable(variable.name().to_owned()));
        }

        let name = variable.name().to_owned();
        let key = self.slots.insert(variable);

        self.names.insert(name, key);

        Ok(Variable(key))
    }

    pub fn get(&self, var: Variable) -> Result<&LinguisticVariable<F>> {
        self.get_by_key(var.0)
    }

    pub(crate) fn get_by_key(&self, key: VariableKey) -> Result<&LinguisticVariable<F>> {
        self.slots
            .get(key)
            .ok_or_else(|| Error::UnknownVariable(format!("{key:?}")))
    }

    pub fn lookup(&self, name: &str) -> Result<Variable> {
        self.names
            .get(name)
            .map(|key| Variable(*key))
            .ok_or_else(|| Error::UnknownVariable(name.to_owned()))
    }

    pub fn term(&self, term_ref: &TermRef) -> Result<&LinguisticTerm<F>> {
        self.get_by_key(term_ref.variable)?.term(&term_ref.term)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Variable, &LinguisticVariable<F>)> {
        self.slots.iter().map(|(key, var)| (Variable(key), var))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
