//! Mamdani fuzzy inference.
//!
//! Crisp inputs are fuzzificated through the membership functions of their
//! variables' terms, rules combine those memberships with min (AND) and max
//! (OR), each rule truncates its consequence at its firing strength, the
//! truncated surfaces are aggregated with a pointwise max and the result is
//! defuzzificated to its centroid.
//!
//! ```
//! use fuzzy_mamdani::{Inputs, MamdaniInference, MembershipFunction, Rules, Terms, Variables};
//!
//! let mut vars = Variables::new();
//! let service = vars.add(
//!     "service",
//!     0.0..=10.0,
//!     Terms::new()
//!         .with("poor", MembershipFunction::gaussian(0.0, 1.5)?)
//!         .with("good", MembershipFunction::gaussian(5.0, 1.5)?),
//!     None,
//! )?;
//! let tip = vars.add(
//!     "tip",
//!     0.0..=30.0,
//!     Terms::new()
//!         .with("cheap", MembershipFunction::triangular(0.0, 5.0, 10.0)?)
//!         .with("average", MembershipFunction::triangular(10.0, 15.0, 20.0)?),
//!     None,
//! )?;
//!
//! let mut rules = Rules::new();
//! rules.add(service.is("poor"), tip.term("cheap"));
//! rules.add(service.is("good"), tip.term("average"));
//!
//! let mut inputs = Inputs::new();
//! inputs.add(service, 3.0);
//!
//! let outputs = MamdaniInference::new().eval(&vars, &rules, &inputs)?;
//! let value = outputs.get_inferred_membership(tip).unwrap();
//!
//! assert!(value > 5.0 && value < 15.0);
//! # Ok::<(), fuzzy_mamdani::Error>(())
//! ```

mod config;
mod defuzz;
mod dsl;
mod error;
mod inference;
mod inputs;
mod linspace;
mod math;
mod membership;
mod ops;
mod outputs;
mod rules;
mod surface;
mod terms;
mod universe;
mod variable;

pub use config::InferenceConfig;
pub use defuzz::centroid;
pub use dsl::{Expr, TermRef};
pub use error::{Error, Result};
pub use inference::MamdaniInference;
pub use inputs::Inputs;
pub use membership::{MembershipFunction, Shape};
pub use ops::{and, implication, or, production_link};
pub use outputs::Outputs;
pub use rules::{Rule, Rules};
pub use surface::{aggregate, FuzzySurface};
pub use terms::{LinguisticTerm, Terms};
pub use universe::{Universe, MAX_POINTS};
pub use variable::{LinguisticVariable, Variable, VariableKey, Variables, DEFAULT_STEP};
