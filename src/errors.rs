use thiserror::Error;

use crate::core::arguments::ArgumentError;
use crate::core::ports::MockError;
use crate::core::type_key::{TypeKey, format_type_list};

#[derive(Debug, Error)]
pub enum AutoMockError {
    #[error(
        "Constructor with supplied types cannot be found for {subject}: {reason}\n\
         This might be a result of a missing (or private) default constructor, or a mismatch in the parameter list given."
    )]
    ConstructorMatch {
        subject: &'static str,
        reason: ConstructorMismatch,
    },

    #[error("Parameter synthesis failed: {0}")]
    ParameterSynthesis(#[from] MockError),

    #[error("Constructor parameter of type {requested} not found: {reason}")]
    ParameterNotFound {
        requested: TypeKey,
        reason: LookupFailure,
    },

    #[error("Argument error: {0}")]
    Argument(#[from] ArgumentError),
}

/// Why no constructor could be selected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructorMismatch {
    #[error("no public constructor is registered")]
    NoPublicConstructor,

    #[error("no public zero-argument constructor is registered")]
    NoDefaultConstructor,

    #[error("no public constructor takes {}", format_type_list(.0))]
    NoMatchingSignature(Vec<TypeKey>),
}

/// Why a typed lookup found no single parameter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupFailure {
    #[error("the selected constructor has no parameter of that type")]
    NoMatch,

    #[error("{candidates} parameters share that type, specify a name")]
    Ambiguous { candidates: usize },

    #[error("name '{name}' does not identify exactly one of {candidates} candidates")]
    NameNotUnique { name: String, candidates: usize },
}
