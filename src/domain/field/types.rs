// src/domain/field/types.rs
use chrono::NaiveDateTime;
use std::any::Any;
use std::fmt;

/// A runtime type with an optional parent.
///
/// Tags are compared by identity and are meant to live in `static`s:
/// ```
/// use article_core::domain::field::types::{TypeTag, INT};
///
/// static CUSTOM_INT: TypeTag = TypeTag::subtype("CustomInt", &INT);
/// assert!(CUSTOM_INT.is_a(&INT));
/// assert!(!INT.is_a(&CUSTOM_INT));
/// ```
pub struct TypeTag {
    name: &'static str,
    parent: Option<&'static TypeTag>,
}

impl TypeTag {
    #[must_use]
    pub const fn root(name: &'static str) -> Self {
        Self { name, parent: None }
    }

    #[must_use]
    pub const fn subtype(name: &'static str, parent: &'static Self) -> Self {
        Self {
            name,
            parent: Some(parent),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn parent(&self) -> Option<&'static Self> {
        self.parent
    }

    /// True when `self` is `other` or one of its descendants.
    #[must_use]
    pub fn is_a(&self, other: &Self) -> bool {
        let mut current = Some(self);
        while let Some(tag) = current {
            if std::ptr::eq(tag, other) {
                return true;
            }
            current = tag.parent;
        }
        false
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

pub static INT: TypeTag = TypeTag::root("int");
pub static BOOL: TypeTag = TypeTag::subtype("bool", &INT);
pub static FLOAT: TypeTag = TypeTag::root("float");
pub static STR: TypeTag = TypeTag::root("str");
pub static DATETIME: TypeTag = TypeTag::root("datetime");

/// A value that knows its runtime type.
pub trait FieldValue: Any + fmt::Debug + Send + Sync {
    fn type_tag(&self) -> &'static TypeTag;

    fn as_any(&self) -> &dyn Any;
}

macro_rules! impl_field_value {
    ($($ty:ty => $tag:expr),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn type_tag(&self) -> &'static TypeTag {
                    &$tag
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }
            }
        )*
    };
}

impl_field_value! {
    i64 => INT,
    i32 => INT,
    bool => BOOL,
    f64 => FLOAT,
    String => STR,
    &'static str => STR,
    NaiveDateTime => DATETIME,
}
