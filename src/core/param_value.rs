use std::any::Any;
use std::fmt;

use crate::core::TypeKey;

trait CloneAny: Any {
    fn clone_boxed(&self) -> Box<dyn CloneAny>;
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + Clone> CloneAny for T {
    fn clone_boxed(&self) -> Box<dyn CloneAny> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Type-erased value bound to a constructor parameter
///
/// Any `Clone + 'static` value can be wrapped. Dependencies are usually
/// `Arc<dyn Trait>`, so clones handed to the subject share the same mock
/// as the copy kept for lookups.
pub struct ParamValue {
    type_key: TypeKey,
    inner: Box<dyn CloneAny>,
}

impl ParamValue {
    pub fn new<P: Clone + 'static>(value: P) -> Self {
        Self {
            type_key: TypeKey::of::<P>(),
            inner: Box::new(value),
        }
    }

    /// Type of the wrapped value
    pub fn type_key(&self) -> TypeKey {
        self.type_key
    }

    pub fn is<P: 'static>(&self) -> bool {
        self.type_key.is::<P>()
    }

    pub fn downcast_ref<P: 'static>(&self) -> Option<&P> {
        (*self.inner).as_any().downcast_ref::<P>()
    }

    /// Unwrap into the concrete value, handing `self` back on a type mismatch
    pub fn downcast<P: Clone + 'static>(self) -> Result<P, Self> {
        if let Some(value) = self.downcast_ref::<P>() {
            return Ok(value.clone());
        }
        Err(self)
    }
}

impl Clone for ParamValue {
    fn clone(&self) -> Self {
        Self {
            type_key: self.type_key,
            inner: (*self.inner).clone_boxed(),
        }
    }
}

impl fmt::Debug for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamValue")
            .field("type", &self.type_key)
            .finish_non_exhaustive()
    }
}
