use tracing::{debug, trace};

use crate::core::arguments::ArgumentError;
use crate::core::constructor::{ParameterSpec, Synthesis};
use crate::core::ports::{MockError, MockFactory};
use crate::core::{Constructor, ParamValue, ParameterInfo, ParameterRecord};
use crate::errors::AutoMockError;

/// Caller hook that may replace any synthesized parameter value
pub type ParameterOverride<'a> = dyn FnMut(&ParameterInfo, Option<ParamValue>) -> Option<ParamValue> + 'a;

pub struct ParameterSynthesizer<'a> {
    mocks: &'a dyn MockFactory,
}

impl<'a> ParameterSynthesizer<'a> {
    pub fn new(mocks: &'a dyn MockFactory) -> Self {
        Self { mocks }
    }

    /// Default value for a single parameter, before any override
    fn synthesize(&self, spec: &ParameterSpec) -> Result<Option<ParamValue>, MockError> {
        match spec.synthesis {
            Synthesis::Zero(zero) => Ok(Some(zero())),
            Synthesis::Absent => Ok(None),
            Synthesis::Mock => {
                let expected = spec.info.type_key();
                let mock = self.mocks.create_mock(&expected)?;
                if mock.type_key() != expected {
                    return Err(MockError::TypeMismatch {
                        expected,
                        actual: mock.type_key(),
                    });
                }
                Ok(Some(mock))
            }
        }
    }

    /// Build one record per parameter, in declaration order
    ///
    /// A synthesis failure is only raised when the override (if any) leaves
    /// the parameter absent.
    ///
    /// # Errors
    /// * `ParameterSynthesis` - the mock factory failed, or returned another type
    ///   than declared, and nothing replaced the value
    /// * `Argument` - the override returned a value of another type than declared
    pub fn synthesize_all<T>(
        &self,
        constructor: &Constructor<T>,
        mut parameter_override: Option<&mut ParameterOverride<'_>>,
    ) -> Result<Vec<ParameterRecord>, AutoMockError> {
        let mut records = Vec::with_capacity(constructor.arity());

        for spec in constructor.specs() {
            let info = &spec.info;
            let (mut value, failure) = match self.synthesize(spec) {
                Ok(value) => (value, None),
                Err(e) => (None, Some(e)),
            };

            if let Some(hook) = parameter_override.as_deref_mut() {
                value = hook(info, value);
                debug!(parameter = %info, replaced = value.is_some(), "parameter override applied");

                let mismatched = value
                    .as_ref()
                    .map(ParamValue::type_key)
                    .filter(|actual| *actual != info.type_key());
                if let Some(actual) = mismatched {
                    return Err(ArgumentError::OverrideType {
                        parameter: info.clone(),
                        actual,
                    }
                    .into());
                }
            }

            match (&value, failure) {
                (None, Some(e)) => return Err(e.into()),
                (Some(_), Some(e)) => debug!(parameter = %info, error = %e, "synthesis failure replaced by override"),
                _ => {}
            }

            trace!(parameter = %info, kind = ?info.kind(), present = value.is_some(), "parameter synthesized");
            records.push(ParameterRecord::new(info.clone(), value));
        }

        Ok(records)
    }
}
