use crate::core::{ParamValue, TypeKey};

#[derive(Debug, thiserror::Error)]
pub enum MockError {
    #[error("Type {type_key} is not mockable: no mock factory is registered for it")]
    Unmockable { type_key: TypeKey },

    #[error("Mock factory for {type_key} failed: {reason}")]
    Factory { type_key: TypeKey, reason: String },

    #[error("Mock factory returned a value of type {actual} for {expected}")]
    TypeMismatch { expected: TypeKey, actual: TypeKey },
}

pub trait MockFactory {
    /// Produce a stand-in for the given declared type
    ///
    /// # Arguments
    /// * `type_key` - The declared type of the parameter to fill
    ///
    /// # Returns
    /// * `Ok(ParamValue)` - A value whose type key equals `type_key`
    /// * `Err(MockError)` - If no stand-in can be produced for this type
    fn create_mock(&self, type_key: &TypeKey) -> Result<ParamValue, MockError>;
}
