//! Constructor-injection auto-mocking for unit tests
//!
//! `AutoMocker<T>` picks one of `T`'s registered constructors, fills each
//! parameter with a mock (dependencies), a zero value (primitives) or nothing
//! (strings), lets an override hook replace any of them, then builds `T`.
//! The values handed to the constructor stay reachable through `get`.
//!
//! A parameter's default follows its declared type: [`Primitive`] types get
//! their zero value, `String` is left absent, and everything else is asked
//! of the [`MockFactory`].
//!
//! # Stubbing mocks
//!
//! `get` hands back a clone of the bound value, usually an `Arc<dyn Trait>`
//! shared with the subject. A `mockall` mock behind that `Arc` can no longer
//! take expectations, so stub it where it is created: in the override hook
//! (see [`AutoMocker::with_override`]) or in a [`MockRegistry`] factory
//! closure, as below.
//!
//! ```
//! use std::sync::Arc;
//! use automocker::{AutoMocker, Constructor, MockRegistry, Subject};
//!
//! pub trait InterestCalculator {
//!     fn calculate(&self) -> i64;
//! }
//!
//! struct FixedRate(i64);
//!
//! impl InterestCalculator for FixedRate {
//!     fn calculate(&self) -> i64 {
//!         self.0
//!     }
//! }
//!
//! pub struct SavingsAccount {
//!     calculator: Arc<dyn InterestCalculator>,
//!     balance: i64,
//! }
//!
//! impl SavingsAccount {
//!     pub fn apply_interest(&mut self) {
//!         self.balance += self.calculator.calculate();
//!     }
//! }
//!
//! impl Subject for SavingsAccount {
//!     fn constructors() -> Vec<Constructor<Self>> {
//!         vec![
//!             Constructor::public()
//!                 .dependency::<Arc<dyn InterestCalculator>>("interest_calculator")
//!                 .build(|args| {
//!                     Ok(SavingsAccount {
//!                         calculator: args.require()?,
//!                         balance: 0,
//!                     })
//!                 }),
//!         ]
//!     }
//! }
//!
//! let mocks = MockRegistry::new().with(|| Arc::new(FixedRate(123)) as Arc<dyn InterestCalculator>);
//! let mut mocker = AutoMocker::<SavingsAccount>::new(&mocks).unwrap();
//!
//! mocker.subject_under_test_mut().apply_interest();
//!
//! assert_eq!(mocker.subject_under_test().balance, 123);
//! assert!(mocker.get::<Arc<dyn InterestCalculator>>().unwrap().is_some());
//! ```

pub mod adapters;
pub mod core;

mod auto_mocker;
mod errors;

pub use adapters::MockRegistry;
pub use auto_mocker::{AutoMocker, AutoMockerBuilder};
pub use crate::core::ports::{MockError, MockFactory};
pub use crate::core::{
    ArgumentError, Arguments, Constructor, ConstructorBuilder, ParamKind, ParamValue, ParameterInfo, ParameterOverride,
    ParameterRecord, Primitive, Subject, TypeKey, Visibility,
};
pub use errors::{AutoMockError, ConstructorMismatch, LookupFailure};
