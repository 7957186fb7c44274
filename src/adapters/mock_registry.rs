use std::collections::HashMap;
use std::fmt;

use crate::core::ports::{MockError, MockFactory};
use crate::core::{ParamValue, TypeKey};

type Factory = Box<dyn Fn() -> ParamValue>;

/// `MockFactory` backed by one registered closure per declared type
///
/// The key is the closure's return type, so a dependency declared as
/// `Arc<dyn Trait>` needs a closure returning exactly `Arc<dyn Trait>`.
#[derive(Default)]
pub struct MockRegistry {
    factories: HashMap<TypeKey, Factory>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the factory for `P`
    pub fn register<P, F>(&mut self, factory: F) -> &mut Self
    where
        P: Clone + 'static,
        F: Fn() -> P + 'static,
    {
        self.factories
            .insert(TypeKey::of::<P>(), Box::new(move || ParamValue::new(factory())));
        self
    }

    /// Owned variant of [`MockRegistry::register`] for chaining
    #[must_use]
    pub fn with<P, F>(mut self, factory: F) -> Self
    where
        P: Clone + 'static,
        F: Fn() -> P + 'static,
    {
        self.register(factory);
        self
    }

    pub fn contains(&self, type_key: &TypeKey) -> bool {
        self.factories.contains_key(type_key)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl MockFactory for MockRegistry {
    fn create_mock(&self, type_key: &TypeKey) -> Result<ParamValue, MockError> {
        self.factories
            .get(type_key)
            .map(|factory| factory())
            .ok_or(MockError::Unmockable { type_key: *type_key })
    }
}

impl fmt::Debug for MockRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.factories.keys()).finish()
    }
}
