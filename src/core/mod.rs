pub mod ports;

pub mod type_key;
pub use type_key::TypeKey;

pub mod param_value;
pub use param_value::ParamValue;

pub mod parameter;
pub use parameter::{ParamKind, ParameterInfo, ParameterRecord};

pub mod arguments;
pub use arguments::{ArgumentError, Arguments};

pub mod constructor;
pub use constructor::{Constructor, ConstructorBuilder, Primitive, Subject, Visibility};

pub mod constructor_resolver;
pub use constructor_resolver::select_constructor;

pub mod parameter_synthesizer;
pub use parameter_synthesizer::{ParameterOverride, ParameterSynthesizer};
