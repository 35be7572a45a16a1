use std::collections::HashMap;

use num::Float;
use tracing::{debug, trace};

use crate::config::InferenceConfig;
use crate::defuzz::centroid;
use crate::dsl::{Expr, TermRef};
use crate::error::{Error, Result};
use crate::inputs::Inputs;
use crate::math::as_f64;
use crate::ops;
use crate::outputs::Outputs;
use crate::rules::{Rule, Rules};
use crate::surface::{aggregate, FuzzySurface};
use crate::variable::{VariableKey, Variables};

/// Mamdani inference: min for AND, max for OR, min implication, max
/// aggregation and centroid defuzzification.
///
/// The engine holds no per-call state. Variables and rules are borrowed
/// immutably, so one configuration can serve any number of calls, from any
/// number of threads.
#[derive(Clone, Debug, Default)]
pub struct MamdaniInference {
    config: InferenceConfig,
}

impl MamdaniInference {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: InferenceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Fuzzificates the inputs: the membership of every term a premise
    /// mentions, each evaluated once.
    pub fn memberships<'r, F: Float>(
        &self,
        vars: &Variables<F>,
        rules: &'r Rules,
        inputs: &Inputs<F>,
    ) -> Result<HashMap<&'r TermRef, F>> {
        let mut memberships: HashMap<&TermRef, F> = HashMap::new();

        for rule in rules.iter() {
            for term_ref in rule.premise().propositions() {
                if memberships.contains_key(term_ref) {
                    continue;
                }

                let var = vars.get_by_key(term_ref.variable)?;
                let term = var.term(term_ref.term())?;
                let value = inputs
                    .0
                    .get(&term_ref.variable)
                    .copied()
                    .ok_or_else(|| Error::MissingInput(var.name().to_owned()))?;

                if !value.is_finite() {
                    return Err(Error::InvalidInput {
                        variable: var.name().to_owned(),
                        value: as_f64(value),
                    });
                }

                let membership = term.function().evaluate(value);

                debug!(
                    variable = var.name(),
                    term = term.name(),
                    input = as_f64(value),
                    membership = as_f64(membership),
                    "fuzzificated input"
                );

                memberships.insert(term_ref, membership);
            }
        }

        Ok(memberships)
    }

    /// Firing strength of each rule, in rule order.
    pub fn firing_strengths<F: Float>(&self, vars: &Variables<F>, rules: &Rules, inputs: &Inputs<F>) -> Result<Vec<F>> {
        let memberships = self.memberships(vars, rules, inputs)?;

        rules
            .iter()
            .enumerate()
            .map(|(i, rule)| {
                let strength = combine(rule.premise(), &memberships, vars)?;

                debug!(rule = i, strength = as_f64(strength), "computed firing strength");

                Ok(strength)
            })
            .collect()
    }

    /// The implied surface of each rule, in rule order.
    ///
    /// `F: Send + Sync` holds with or without the `parallel` feature, so
    /// enabling the feature never narrows the accepted float types.
    pub fn implications<F: Float + Send + Sync>(
        &self,
        vars: &Variables<F>,
        rules: &Rules,
        inputs: &Inputs<F>,
    ) -> Result<Vec<FuzzySurface<F>>> {
        let strengths = self.firing_strengths(vars, rules, inputs)?;

        self.implicate(vars, rules, &strengths)
    }

    fn implicate<F: Float + Send + Sync>(
        &self,
        vars: &Variables<F>,
        rules: &Rules,
        strengths: &[F],
    ) -> Result<Vec<FuzzySurface<F>>> {
        let implicate_one = |(rule, strength): (&Rule, &F)| -> Result<FuzzySurface<F>> {
            let consequence = rule.consequence();
            let var = vars.get_by_key(consequence.variable)?;
            let term = var.term(consequence.term())?;
            let surface = FuzzySurface::implied(var.universe(), term.function(), *strength);

            trace!(
                variable = var.name(),
                term = term.name(),
                height = as_f64(surface.height()),
                "computed fuzzy implication"
            );

            Ok(surface)
        };

        #[cfg(feature = "parallel")]
        if self.config.parallel {
            use rayon::prelude::*;

            return rules.0.par_iter().zip(strengths.par_iter()).map(implicate_one).collect();
        }

        rules.iter().zip(strengths).map(implicate_one).collect()
    }

    /// Runs the whole pipeline and defuzzificates every variable that is the
    /// consequence of at least one rule.
    ///
    /// Carries the same feature-independent `Send + Sync` bound as
    /// [`implications`](Self::implications).
    pub fn eval<F: Float + Send + Sync>(&self, vars: &Variables<F>, rules: &Rules, inputs: &Inputs<F>) -> Result<Outputs<F>> {
        if rules.is_empty() {
            return Err(Error::NoRulesFired);
        }

        let strengths = self.firing_strengths(vars, rules, inputs)?;
        let implications = self.implicate(vars, rules, &strengths)?;

        // Collect Rule Memberships
        let mut collected_rule_memberships: HashMap<VariableKey, Vec<&FuzzySurface<F>>> = HashMap::new();

        for (rule, implication) in rules.iter().zip(&implications) {
            collected_rule_memberships
                .entry(rule.consequence().variable)
                .or_default()
                .push(implication);
        }

        // Aggregate and defuzzificate
        let mut defuzzificated_inferred_memberships = HashMap::with_capacity(collected_rule_memberships.len());
        let mut aggregated_memberships = HashMap::with_capacity(collected_rule_memberships.len());

        for (var_key, memberships) in collected_rule_memberships {
            let var = vars.get_by_key(var_key)?;
            let aggregated = aggregate(memberships)?;
            let defuzzed = centroid(&aggregated)?;

            debug!(
                variable = var.name(),
                height = as_f64(aggregated.height()),
                output = as_f64(defuzzed),
                "defuzzificated output"
            );

            defuzzificated_inferred_memberships.insert(var_key, defuzzed);
            aggregated_memberships.insert(var_key, aggregated);
        }

        Ok(Outputs::new(
            defuzzificated_inferred_memberships,
            aggregated_memberships,
            strengths,
        ))
    }
}

fn combine<F: Float>(expr: &Expr, memberships: &HashMap<&TermRef, F>, vars: &Variables<F>) -> Result<F> {
    match expr {
        Expr::Is(term_ref) => match memberships.get(term_ref) {
            Some(membership) => Ok(*membership),
            None => Err(Error::UnknownTermReference {
                variable: vars.get_by_key(term_ref.variable)?.name().to_owned(),
                term: term_ref.term().to_owned(),
            }),
        },
        Expr::And(exprs) => {
            let operands = exprs
                .iter()
                .map(|expr| combine(expr, memberships, vars))
                .collect::<Result<Vec<_>>>()?;

            ops::and(operands).ok_or(Error::EmptyExpression)
        },
        Expr::Or(exprs) => {
            let operands = exprs
                .iter()
                .map(|expr| combine(expr, memberships, vars))
                .collect::<Result<Vec<_>>>()?;

            ops::or(operands).ok_or(Error::EmptyExpression)
        },
    }
}
