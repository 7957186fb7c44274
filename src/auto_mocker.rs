use std::any::type_name;
use std::marker::PhantomData;

use tracing::debug;

use crate::core::ports::MockFactory;
use crate::core::{
    Arguments, ParamValue, ParameterInfo, ParameterOverride, ParameterRecord, ParameterSynthesizer, Subject, TypeKey,
    select_constructor,
};
use crate::errors::{AutoMockError, LookupFailure};

/// Subject under test built with synthesized constructor arguments
///
/// Construction selects a constructor, fills every parameter (mock, zero
/// value or absent string, optionally replaced by an override hook) and
/// builds the subject. The records stay available for typed lookups.
pub struct AutoMocker<T> {
    subject: T,
    parameters: Vec<ParameterRecord>,
}

impl<T: Subject> AutoMocker<T> {
    /// Widest public constructor, no override
    ///
    /// # Errors
    /// See [`AutoMockerBuilder::build`]
    pub fn new(mocks: &dyn MockFactory) -> Result<Self, AutoMockError> {
        Self::builder(mocks).build()
    }

    /// Constructor whose declared types equal `parameter_types`; an empty
    /// slice selects the zero-argument constructor
    ///
    /// # Errors
    /// See [`AutoMockerBuilder::build`]
    pub fn with_parameter_types(mocks: &dyn MockFactory, parameter_types: &[TypeKey]) -> Result<Self, AutoMockError> {
        Self::builder(mocks).parameter_types(parameter_types).build()
    }

    /// Widest public constructor, every value passed through `parameter_override`
    ///
    /// # Errors
    /// See [`AutoMockerBuilder::build`]
    pub fn with_override<'a, F>(mocks: &'a dyn MockFactory, parameter_override: F) -> Result<Self, AutoMockError>
    where
        F: FnMut(&ParameterInfo, Option<ParamValue>) -> Option<ParamValue> + 'a,
    {
        Self::builder(mocks).override_parameters(parameter_override).build()
    }

    /// # Errors
    /// See [`AutoMockerBuilder::build`]
    pub fn with_parameter_types_and_override<'a, F>(
        mocks: &'a dyn MockFactory,
        parameter_types: &[TypeKey],
        parameter_override: F,
    ) -> Result<Self, AutoMockError>
    where
        F: FnMut(&ParameterInfo, Option<ParamValue>) -> Option<ParamValue> + 'a,
    {
        Self::builder(mocks)
            .parameter_types(parameter_types)
            .override_parameters(parameter_override)
            .build()
    }

    pub fn builder(mocks: &dyn MockFactory) -> AutoMockerBuilder<'_, T> {
        AutoMockerBuilder {
            mocks,
            parameter_types: None,
            parameter_override: None,
            _subject: PhantomData,
        }
    }
}

impl<T> AutoMocker<T> {
    pub fn subject_under_test(&self) -> &T {
        &self.subject
    }

    /// Mutable access for calling state-changing methods on the subject
    pub fn subject_under_test_mut(&mut self) -> &mut T {
        &mut self.subject
    }

    pub fn into_subject(self) -> T {
        self.subject
    }

    /// Records of the selected constructor, in declaration order
    pub fn parameters(&self) -> &[ParameterRecord] {
        &self.parameters
    }

    /// Value bound to the only parameter declared as `P`
    ///
    /// Returns `Ok(None)` when that parameter was left absent.
    ///
    /// # Errors
    /// `ParameterNotFound` when no parameter, or more than one, is declared as `P`
    pub fn get<P: Clone + 'static>(&self) -> Result<Option<P>, AutoMockError> {
        self.lookup::<P>(None)
    }

    /// Value bound to the parameter declared as `P`, using `name` to pick
    /// among several parameters of that type
    ///
    /// # Errors
    /// `ParameterNotFound` when no parameter is declared as `P`, or when
    /// several are and `name` does not identify exactly one of them
    pub fn get_named<P: Clone + 'static>(&self, name: &str) -> Result<Option<P>, AutoMockError> {
        self.lookup::<P>(Some(name))
    }

    fn lookup<P: Clone + 'static>(&self, name: Option<&str>) -> Result<Option<P>, AutoMockError> {
        let requested = TypeKey::of::<P>();
        let not_found = |reason| AutoMockError::ParameterNotFound { requested, reason };

        let candidates: Vec<&ParameterRecord> = self
            .parameters
            .iter()
            .filter(|record| record.info().type_key() == requested)
            .collect();

        let record = match (candidates.as_slice(), name) {
            ([], _) => return Err(not_found(LookupFailure::NoMatch)),
            ([only], _) => *only,
            (_, None) => {
                return Err(not_found(LookupFailure::Ambiguous {
                    candidates: candidates.len(),
                }));
            }
            (_, Some(name)) => {
                let mut named = candidates.iter().filter(|record| record.info().name() == name);
                match (named.next(), named.next()) {
                    (Some(record), None) => *record,
                    _ => {
                        return Err(not_found(LookupFailure::NameNotUnique {
                            name: name.to_string(),
                            candidates: candidates.len(),
                        }));
                    }
                }
            }
        };

        Ok(record.value().and_then(ParamValue::downcast_ref::<P>).cloned())
    }
}

/// Options for building an [`AutoMocker`]
pub struct AutoMockerBuilder<'a, T> {
    mocks: &'a dyn MockFactory,
    parameter_types: Option<Vec<TypeKey>>,
    parameter_override: Option<Box<ParameterOverride<'a>>>,
    _subject: PhantomData<fn() -> T>,
}

impl<'a, T: Subject> AutoMockerBuilder<'a, T> {
    /// Require the constructor with exactly these declared types
    #[must_use]
    pub fn parameter_types(mut self, parameter_types: &[TypeKey]) -> Self {
        self.parameter_types = Some(parameter_types.to_vec());
        self
    }

    /// Hook called once per parameter, in order, with the synthesized value
    #[must_use]
    pub fn override_parameters<F>(mut self, parameter_override: F) -> Self
    where
        F: FnMut(&ParameterInfo, Option<ParamValue>) -> Option<ParamValue> + 'a,
    {
        self.parameter_override = Some(Box::new(parameter_override));
        self
    }

    /// Select the constructor, synthesize its arguments and build the subject
    ///
    /// # Errors
    /// * `ConstructorMatch` - no public constructor satisfies the requested types
    /// * `ParameterSynthesis` - a dependency could not be mocked and no override replaced it
    /// * `Argument` - an override returned a wrongly typed value, or the build closure failed
    pub fn build(mut self) -> Result<AutoMocker<T>, AutoMockError> {
        let constructors = T::constructors();
        let constructor = select_constructor(&constructors, self.parameter_types.as_deref())?;
        debug!(
            subject = type_name::<T>(),
            arity = constructor.arity(),
            "constructor selected"
        );

        let parameters = ParameterSynthesizer::new(self.mocks)
            .synthesize_all(constructor, self.parameter_override.as_deref_mut())?;

        let subject = constructor.invoke(&mut Arguments::new(&parameters))?;
        debug!(subject = type_name::<T>(), "subject under test constructed");

        Ok(AutoMocker { subject, parameters })
    }
}
