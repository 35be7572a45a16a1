use thiserror::Error;

/// Errors raised while building a fuzzy system or running inference on it.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    #[error("invalid membership function parameters: {0}")]
    InvalidMembershipFunctionParameters(String),

    #[error("invalid universe: min={min}, max={max}, step={step}")]
    InvalidUniverse { min: f64, max: f64, step: f64 },

    #[error("invalid fuzzy surface: {0}")]
    InvalidSurface(String),

    #[error("term `{term}` is not registered on variable `{variable}`")]
    UnknownTermReference { variable: String, term: String },

    #[error("unknown variable `{0}`")]
    UnknownVariable(String),

    #[error("term `{term}` is defined twice on variable `{variable}`")]
    DuplicateTerm { variable: String, term: String },

    #[error("variable `{0}` is defined twice")]
    DuplicateVariable(String),

    #[error("no crisp input was given for variable `{0}`")]
    MissingInput(String),

    #[error("input for variable `{variable}` is not finite: {value}")]
    InvalidInput { variable: String, value: f64 },

    #[error("and/or expression without operands")]
    EmptyExpression,

    #[error("surfaces are sampled on different universes")]
    UniverseMismatch,

    #[error("no rules fired")]
    NoRulesFired,

    #[error("aggregated membership is zero everywhere; centroid is undefined")]
    UndefinedDefuzzification,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
