use std::any::type_name;

use crate::core::{Constructor, TypeKey};
use crate::errors::{AutoMockError, ConstructorMismatch};

/// Select the constructor to invoke for `T`
///
/// # Selection rules
/// - no public constructor: error
/// - `requested` is `None`: the public constructor with the most parameters,
///   the first one registered on ties
/// - `requested` is empty: the public zero-argument constructor
/// - otherwise: the public constructor whose declared types equal `requested`
///   in order and count
///
/// # Errors
/// `AutoMockError::ConstructorMatch` when none of the rules selects a constructor
pub fn select_constructor<'c, T>(
    constructors: &'c [Constructor<T>],
    requested: Option<&[TypeKey]>,
) -> Result<&'c Constructor<T>, AutoMockError> {
    let mismatch = |reason| AutoMockError::ConstructorMatch {
        subject: type_name::<T>(),
        reason,
    };

    let mut public = constructors.iter().filter(|c| c.is_public()).peekable();
    if public.peek().is_none() {
        return Err(mismatch(ConstructorMismatch::NoPublicConstructor));
    }

    match requested {
        None => widest(public).ok_or_else(|| mismatch(ConstructorMismatch::NoPublicConstructor)),
        Some([]) => public
            .find(|c| c.arity() == 0)
            .ok_or_else(|| mismatch(ConstructorMismatch::NoDefaultConstructor)),
        Some(types) => public
            .find(|c| c.accepts(types))
            .ok_or_else(|| mismatch(ConstructorMismatch::NoMatchingSignature(types.to_vec()))),
    }
}

fn widest<'c, T>(candidates: impl Iterator<Item = &'c Constructor<T>>) -> Option<&'c Constructor<T>>
where
    T: 'c,
{
    // strictly greater keeps the earliest candidate on ties
    candidates.fold(None, |best: Option<&Constructor<T>>, candidate| match best {
        Some(current) if current.arity() >= candidate.arity() => Some(current),
        _ => Some(candidate),
    })
}
