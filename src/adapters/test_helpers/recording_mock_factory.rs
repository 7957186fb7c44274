//! Recording mock factory for testing
//!
//! Wraps a `MockRegistry`, remembers every requested type and can be told to
//! fail the next request.

use std::cell::RefCell;
use std::sync::Arc;

use crate::adapters::MockRegistry;
use crate::adapters::test_helpers::sample_subjects::{
    Dependency1, Dependency2, InterestCalculator, MockDependency1, MockDependency2, MockInterestCalculator,
};
use crate::core::ports::{MockError, MockFactory};
use crate::core::{ParamValue, TypeKey};

pub struct RecordingMockFactory {
    registry: MockRegistry,
    requested: RefCell<Vec<TypeKey>>,
    force_error: RefCell<Option<String>>,
}

impl RecordingMockFactory {
    /// Factory that knows the sample dependencies, except `Overdraft`
    pub fn new() -> Self {
        let registry = MockRegistry::new()
            .with(|| Arc::new(MockDependency1::new()) as Arc<dyn Dependency1>)
            .with(|| Arc::new(MockDependency2::new()) as Arc<dyn Dependency2>)
            .with(|| Arc::new(MockInterestCalculator::new()) as Arc<dyn InterestCalculator>);
        Self::with_registry(registry)
    }

    /// Factory that cannot mock anything
    pub fn empty() -> Self {
        Self::with_registry(MockRegistry::new())
    }

    pub fn with_registry(registry: MockRegistry) -> Self {
        Self {
            registry,
            requested: RefCell::new(Vec::new()),
            force_error: RefCell::new(None),
        }
    }

    /// Fail the next request with `MockError::Factory`
    pub fn inject_error(&self, reason: impl Into<String>) {
        *self.force_error.borrow_mut() = Some(reason.into());
    }

    /// Types requested so far (for assertions)
    pub fn requested(&self) -> Vec<TypeKey> {
        self.requested.borrow().clone()
    }
}

impl Default for RecordingMockFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFactory for RecordingMockFactory {
    fn create_mock(&self, type_key: &TypeKey) -> Result<ParamValue, MockError> {
        self.requested.borrow_mut().push(*type_key);

        if let Some(reason) = self.force_error.borrow_mut().take() {
            return Err(MockError::Factory {
                type_key: *type_key,
                reason,
            });
        }

        self.registry.create_mock(type_key)
    }
}
