use std::collections::HashMap;

use num::Float;

use crate::error::Result;
use crate::variable::{Variable, VariableKey, Variables};

/// Crisp values for the input variables of one inference call.
#[derive(Clone, Debug)]
pub struct Inputs<F>(pub(crate) HashMap<VariableKey, F>);

impl<F> Default for Inputs<F> {
    fn default() -> Self {
        Inputs(HashMap::new())
    }
}

impl<F: Float> Inputs<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, var: Variable, val: F) {
        self.0.insert(var.0, val);
    }

    /// Resolves `name` against `vars` and records `val` for it.
    pub fn add_named(&mut self, vars: &Variables<F>, name: &str, val: F) -> Result<()> {
        let var = vars.lookup(name)?;

        self.add(var, val);

        Ok(())
    }

    pub fn get(&self, var: Variable) -> Option<F> {
        self.0.get(&var.0).copied()
    }
}
