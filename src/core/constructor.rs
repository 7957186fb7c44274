use std::fmt;
use std::marker::PhantomData;

use crate::core::arguments::{ArgumentError, Arguments};
use crate::core::{ParamKind, ParamValue, ParameterInfo, TypeKey};

/// A type whose constructors can be auto-mocked
///
/// Implementors list every constructor they expose, in a stable order. That
/// order breaks ties when the widest constructor is selected.
pub trait Subject: Sized + 'static {
    fn constructors() -> Vec<Constructor<Self>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

type BuildFn<T> = Box<dyn Fn(&mut Arguments) -> Result<T, ArgumentError>>;

#[derive(Clone, Copy)]
pub(crate) enum Synthesis {
    Zero(fn() -> ParamValue),
    Absent,
    Mock,
}

pub(crate) struct ParameterSpec {
    pub(crate) info: ParameterInfo,
    pub(crate) synthesis: Synthesis,
}

fn zero_value<P: Primitive>() -> ParamValue {
    ParamValue::new(P::default())
}

mod sealed {
    pub trait Sealed {}
}

/// Value types synthesized as their zero value
///
/// Sealed: only the numeric types, `bool` and `char` qualify. Strings go
/// through [`ConstructorBuilder::text`].
pub trait Primitive: sealed::Sealed + Default + Clone + 'static {}

macro_rules! primitives {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl Primitive for $t {}
        )*

        fn primitive_zero(type_key: TypeKey) -> Option<fn() -> ParamValue> {
            $(
                if type_key.is::<$t>() {
                    return Some(zero_value::<$t>);
                }
            )*
            None
        }
    };
}

primitives!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Kind and default synthesis follow the declared type, whichever builder
/// method declared it
fn classify(type_key: TypeKey) -> (ParamKind, Synthesis) {
    if type_key.is::<String>() {
        return (ParamKind::Text, Synthesis::Absent);
    }
    match primitive_zero(type_key) {
        Some(zero) => (ParamKind::Primitive, Synthesis::Zero(zero)),
        None => (ParamKind::Dependency, Synthesis::Mock),
    }
}

/// One constructor of a subject type
pub struct Constructor<T> {
    visibility: Visibility,
    parameters: Vec<ParameterSpec>,
    build: BuildFn<T>,
}

impl<T> Constructor<T> {
    pub fn public() -> ConstructorBuilder<T> {
        ConstructorBuilder::new(Visibility::Public)
    }

    pub fn private() -> ConstructorBuilder<T> {
        ConstructorBuilder::new(Visibility::Private)
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    pub fn parameters(&self) -> impl Iterator<Item = &ParameterInfo> {
        self.parameters.iter().map(|spec| &spec.info)
    }

    /// Check the declared parameter types against `types`, in order and count
    pub fn accepts(&self, types: &[TypeKey]) -> bool {
        self.parameters.len() == types.len()
            && self
                .parameters
                .iter()
                .zip(types)
                .all(|(spec, expected)| spec.info.type_key() == *expected)
    }

    pub(crate) fn specs(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    pub(crate) fn invoke(&self, arguments: &mut Arguments) -> Result<T, ArgumentError> {
        (self.build)(arguments)
    }
}

impl<T> fmt::Debug for Constructor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parameters: Vec<&ParameterInfo> = self.parameters().collect();
        f.debug_struct("Constructor")
            .field("visibility", &self.visibility)
            .field("parameters", &parameters)
            .finish_non_exhaustive()
    }
}

/// Declares a constructor's parameters, then its build closure
///
/// ```
/// use std::sync::Arc;
/// use automocker::{Constructor, Subject};
///
/// pub trait Clock {
///     fn now(&self) -> u64;
/// }
///
/// pub struct Scheduler {
///     clock: Option<Arc<dyn Clock>>,
///     retries: u32,
/// }
///
/// impl Subject for Scheduler {
///     fn constructors() -> Vec<Constructor<Self>> {
///         vec![
///             Constructor::public()
///                 .dependency::<Arc<dyn Clock>>("clock")
///                 .primitive::<u32>("retries")
///                 .build(|args| {
///                     Ok(Scheduler {
///                         clock: args.take()?,
///                         retries: args.require()?,
///                     })
///                 }),
///         ]
///     }
/// }
/// ```
pub struct ConstructorBuilder<T> {
    visibility: Visibility,
    parameters: Vec<ParameterSpec>,
    _subject: PhantomData<fn() -> T>,
}

impl<T> ConstructorBuilder<T> {
    fn new(visibility: Visibility) -> Self {
        Self {
            visibility,
            parameters: Vec::new(),
            _subject: PhantomData,
        }
    }

    fn push(mut self, type_key: TypeKey, name: &str) -> Self {
        let (kind, synthesis) = classify(type_key);
        let info = ParameterInfo::new(self.parameters.len(), type_key, name, kind);
        self.parameters.push(ParameterSpec { info, synthesis });
        self
    }

    /// Parameter filled by the mock factory
    ///
    /// A `String` or [`Primitive`] type declared here is still synthesized
    /// as a text or primitive parameter, never mocked.
    #[must_use]
    pub fn dependency<P: Clone + 'static>(self, name: &str) -> Self {
        self.push(TypeKey::of::<P>(), name)
    }

    /// Value-type parameter filled with `P::default()`
    #[must_use]
    pub fn primitive<P: Primitive>(self, name: &str) -> Self {
        self.push(TypeKey::of::<P>(), name)
    }

    /// `String` parameter, left absent
    #[must_use]
    pub fn text(self, name: &str) -> Self {
        self.push(TypeKey::of::<String>(), name)
    }

    pub fn build<F>(self, build: F) -> Constructor<T>
    where
        F: Fn(&mut Arguments) -> Result<T, ArgumentError> + 'static,
    {
        Constructor {
            visibility: self.visibility,
            parameters: self.parameters,
            build: Box::new(build),
        }
    }
}
