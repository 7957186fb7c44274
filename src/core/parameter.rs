use std::fmt;

use crate::core::{ParamValue, TypeKey};

/// How a parameter's default value is synthesized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// Numeric or boolean value type, defaulted to its zero value
    Primitive,
    /// `String`, left absent rather than empty
    Text,
    /// Anything else, requested from the mock factory
    Dependency,
}

/// Descriptor of one constructor parameter
///
/// Identity is the tuple of position, declared type and name, so two
/// descriptors compare equal whenever they describe the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterInfo {
    position: usize,
    type_key: TypeKey,
    name: String,
    kind: ParamKind,
}

impl ParameterInfo {
    pub fn new(position: usize, type_key: TypeKey, name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            position,
            type_key,
            name: name.into(),
            kind,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn type_key(&self) -> TypeKey {
        self.type_key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    /// Check whether the declared type is exactly `P`
    pub fn is<P: ?Sized + 'static>(&self) -> bool {
        self.type_key.is::<P>()
    }
}

impl fmt::Display for ParameterInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}: {}", self.position, self.name, self.type_key)
    }
}

/// Final value bound to a constructor parameter
#[derive(Debug, Clone)]
pub struct ParameterRecord {
    info: ParameterInfo,
    value: Option<ParamValue>,
}

impl ParameterRecord {
    pub(crate) fn new(info: ParameterInfo, value: Option<ParamValue>) -> Self {
        Self { info, value }
    }

    pub fn info(&self) -> &ParameterInfo {
        &self.info
    }

    /// `None` when the parameter was left absent (strings, or an override returning `None`)
    pub fn value(&self) -> Option<&ParamValue> {
        self.value.as_ref()
    }
}
