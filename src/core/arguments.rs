use std::vec;

use thiserror::Error;

use crate::core::{ParamValue, ParameterInfo, ParameterRecord, TypeKey};

#[derive(Debug, Error)]
pub enum ArgumentError {
    #[error("Constructor asked for more than its {declared} declared argument(s)")]
    Exhausted { declared: usize },

    #[error("Argument {parameter} cannot be read as {requested}")]
    TypeMismatch {
        parameter: ParameterInfo,
        requested: TypeKey,
    },

    #[error("Override for {parameter} returned a value of type {actual}")]
    OverrideType {
        parameter: ParameterInfo,
        actual: TypeKey,
    },

    #[error("Argument {parameter} is absent but the constructor requires a value")]
    Missing { parameter: ParameterInfo },
}

/// Resolved argument list handed to a constructor's build closure
///
/// Values are consumed front to back, in declaration order.
pub struct Arguments {
    declared: usize,
    entries: vec::IntoIter<(ParameterInfo, Option<ParamValue>)>,
}

impl Arguments {
    pub(crate) fn new(records: &[ParameterRecord]) -> Self {
        let entries: Vec<_> = records
            .iter()
            .map(|record| (record.info().clone(), record.value().cloned()))
            .collect();

        Self {
            declared: entries.len(),
            entries: entries.into_iter(),
        }
    }

    /// Take the next argument, `None` if it was left absent
    ///
    /// # Errors
    /// * `TypeMismatch` - `P` is not the parameter's declared type
    /// * `Exhausted` - every declared argument has already been taken
    pub fn take<P: Clone + 'static>(&mut self) -> Result<Option<P>, ArgumentError> {
        let (parameter, value) = self.entries.next().ok_or(ArgumentError::Exhausted {
            declared: self.declared,
        })?;

        if !parameter.is::<P>() {
            return Err(ArgumentError::TypeMismatch {
                parameter,
                requested: TypeKey::of::<P>(),
            });
        }

        match value {
            None => Ok(None),
            Some(value) => value.downcast::<P>().map(Some).map_err(|_| ArgumentError::TypeMismatch {
                parameter,
                requested: TypeKey::of::<P>(),
            }),
        }
    }

    /// Take the next argument, failing if it was left absent
    ///
    /// # Errors
    /// Same as [`Arguments::take`], plus `Missing` for an absent value
    pub fn require<P: Clone + 'static>(&mut self) -> Result<P, ArgumentError> {
        let parameter = self.entries.as_slice().first().map(|(info, _)| info.clone());

        match (self.take::<P>()?, parameter) {
            (Some(value), _) => Ok(value),
            (None, Some(parameter)) => Err(ArgumentError::Missing { parameter }),
            (None, None) => Err(ArgumentError::Exhausted {
                declared: self.declared,
            }),
        }
    }

    pub fn remaining(&self) -> usize {
        self.entries.len()
    }
}
