//! Sample subject types for testing
//!
//! Each type covers one constructor layout: default only, private only,
//! several overloads, primitive parameters, duplicated parameter types and
//! an unmockable dependency.

use std::sync::Arc;

use mockall::automock;

use crate::core::{Constructor, Subject};

#[automock]
pub trait Dependency1 {
    fn describe(&self) -> String;
}

#[automock]
pub trait Dependency2 {
    fn describe(&self) -> String;
}

#[automock]
pub trait Overdraft {
    fn limit(&self) -> i64;
}

#[automock]
pub trait InterestCalculator {
    fn calculate(&self) -> i64;
}

/// Hand-written `Dependency1` used to check overrides
pub struct VitoDependency1;

impl Dependency1 for VitoDependency1 {
    fn describe(&self) -> String {
        "vito".to_string()
    }
}

pub struct JustDefaultConstructor;

impl Subject for JustDefaultConstructor {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::public().build(|_| Ok(JustDefaultConstructor))]
    }
}

pub struct PrivateDefaultConstructor;

impl Subject for PrivateDefaultConstructor {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::private().build(|_| Ok(PrivateDefaultConstructor))]
    }
}

/// Three public overloads: `()`, `(dependency1)`, `(dependency1, dependency2)`
pub struct AllConstructors {
    pub dependency1: Option<Arc<dyn Dependency1>>,
    pub dependency2: Option<Arc<dyn Dependency2>>,
}

impl Subject for AllConstructors {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![
            Constructor::public().build(|_| {
                Ok(AllConstructors {
                    dependency1: None,
                    dependency2: None,
                })
            }),
            Constructor::public()
                .dependency::<Arc<dyn Dependency1>>("dependency1")
                .build(|args| {
                    Ok(AllConstructors {
                        dependency1: args.take()?,
                        dependency2: None,
                    })
                }),
            Constructor::public()
                .dependency::<Arc<dyn Dependency1>>("dependency1")
                .dependency::<Arc<dyn Dependency2>>("dependency2")
                .build(|args| {
                    Ok(AllConstructors {
                        dependency1: args.take()?,
                        dependency2: args.take()?,
                    })
                }),
        ]
    }
}

pub struct PrimitiveConstructors {
    pub dependency1: Option<Arc<dyn Dependency1>>,
    pub dependency2: Option<Arc<dyn Dependency2>>,
    pub string_value: Option<String>,
    pub int_value: i32,
}

impl Subject for PrimitiveConstructors {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![
            Constructor::public().build(|_| {
                Ok(PrimitiveConstructors {
                    dependency1: None,
                    dependency2: None,
                    string_value: None,
                    int_value: -1,
                })
            }),
            Constructor::public()
                .dependency::<Arc<dyn Dependency1>>("dependency1")
                .dependency::<Arc<dyn Dependency2>>("dependency2")
                .text("string_value")
                .primitive::<i32>("int_value")
                .build(|args| {
                    Ok(PrimitiveConstructors {
                        dependency1: args.take()?,
                        dependency2: args.take()?,
                        string_value: args.take()?,
                        int_value: args.require()?,
                    })
                }),
        ]
    }
}

pub struct DuplicateConstructorTypes {
    pub dependency_one: Option<Arc<dyn Dependency1>>,
    pub dependency_two: Option<Arc<dyn Dependency1>>,
}

impl Subject for DuplicateConstructorTypes {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![
            Constructor::public()
                .dependency::<Arc<dyn Dependency1>>("dependency_one")
                .dependency::<Arc<dyn Dependency1>>("dependency_two")
                .build(|args| {
                    Ok(DuplicateConstructorTypes {
                        dependency_one: args.take()?,
                        dependency_two: args.take()?,
                    })
                }),
        ]
    }
}

/// Depends on `Overdraft`, which the recording factory never registers
pub struct OverdraftAccount {
    pub overdraft: Arc<dyn Overdraft>,
}

impl Subject for OverdraftAccount {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![
            Constructor::public()
                .dependency::<Arc<dyn Overdraft>>("overdraft")
                .build(|args| {
                    Ok(OverdraftAccount {
                        overdraft: args.require()?,
                    })
                }),
        ]
    }
}

pub struct SavingsAccount {
    calculator: Arc<dyn InterestCalculator>,
    balance: i64,
}

impl SavingsAccount {
    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn deposit(&mut self, amount: i64) {
        self.balance += amount;
    }

    pub fn withdraw(&mut self, amount: i64) {
        self.balance -= amount;
    }

    pub fn apply_interest(&mut self) {
        self.balance += self.calculator.calculate();
    }
}

impl Subject for SavingsAccount {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![
            Constructor::public()
                .dependency::<Arc<dyn InterestCalculator>>("interest_calculator")
                .build(|args| {
                    Ok(SavingsAccount {
                        calculator: args.require()?,
                        balance: 0,
                    })
                }),
        ]
    }
}
