pub mod coercion;
pub mod optional;
pub mod path;
pub mod scalar;
pub mod string;

pub use coercion::{Coercible, CoercionExt};
pub use optional::{ArrayElements, ObjectEntries, OptionalExt};
pub use path::PathExt;
pub use scalar::{FromJson, ValueKind};
pub use string::StringExt;
