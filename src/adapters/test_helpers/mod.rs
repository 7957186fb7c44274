//! Test helpers for exercising the auto-mocker
//!
//! This module provides:
//! - Sample subject types covering the usual constructor layouts
//! - Dependency traits with `mockall` generated mocks
//! - `RecordingMockFactory`: a mock factory that records what it was asked for

mod recording_mock_factory;
mod sample_subjects;

pub use recording_mock_factory::RecordingMockFactory;
pub use sample_subjects::{
    AllConstructors, Dependency1, Dependency2, DuplicateConstructorTypes, InterestCalculator, JustDefaultConstructor,
    MockDependency1, MockDependency2, MockInterestCalculator, MockOverdraft, Overdraft, OverdraftAccount,
    PrimitiveConstructors, PrivateDefaultConstructor, SavingsAccount, VitoDependency1,
};
