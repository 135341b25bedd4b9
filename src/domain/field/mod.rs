pub mod attribute;
pub mod types;

pub use attribute::{ArticleField, FieldOwner, FieldStore};
pub use types::{FieldValue, TypeTag};
