pub mod nullable;
pub mod writer;

pub use nullable::{JsonScalar, NullableWrite};
pub use writer::JsonWriter;
