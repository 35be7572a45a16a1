use std::collections::HashMap;

use crate::surface::FuzzySurface;
use crate::variable::{Variable, VariableKey};

/// Result of one inference pass.
#[derive(Clone, Debug)]
pub struct Outputs<F> {
    defuzzificated_inferred_memberships: HashMap<VariableKey, F>,
    aggregated_memberships: HashMap<VariableKey, FuzzySurface<F>>,
    firing_strengths: Vec<F>,
}

impl<F: Copy> Outputs<F> {
    pub(crate) fn new(
        defuzzificated_inferred_memberships: HashMap<VariableKey, F>,
        aggregated_memberships: HashMap<VariableKey, FuzzySurface<F>>,
        firing_strengths: Vec<F>,
    ) -> Self {
        Self {
            defuzzificated_inferred_memberships,
            aggregated_memberships,
            firing_strengths,
        }
    }

    /// The crisp value inferred for an output variable.
    pub fn get_inferred_membership(&self, var: Variable) -> Option<F> {
        self.defuzzificated_inferred_memberships.get(&var.0).copied()
    }

    /// The aggregated surface the crisp value was computed from.
    pub fn aggregated_membership(&self, var: Variable) -> Option<&FuzzySurface<F>> {
        self.aggregated_memberships.get(&var.0)
    }

    /// Firing strength of each rule, in the order the rules were added.
    pub fn firing_strengths(&self) -> &[F] {
        &self.firing_strengths
    }
}
