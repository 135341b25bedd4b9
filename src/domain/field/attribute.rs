// src/domain/field/attribute.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::field::types::{FieldValue, TypeTag};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::ptr;

/// Identity of a slot: its name together with the address of its expected
/// tag, so two slots sharing a name but not a type never collide.
#[derive(Debug, Clone, Copy)]
struct SlotKey {
    name: &'static str,
    expected: &'static TypeTag,
}

impl PartialEq for SlotKey {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && ptr::eq(self.expected, other.expected)
    }
}

impl Eq for SlotKey {}

impl Hash for SlotKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        ptr::hash(self.expected, state);
    }
}

/// Per-instance storage for the slots declared on an owning type.
#[derive(Debug, Default)]
pub struct FieldStore {
    slots: HashMap<SlotKey, Box<dyn FieldValue>>,
}

impl FieldStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Types that carry a [`FieldStore`] and can therefore declare
/// [`ArticleField`] slots.
pub trait FieldOwner {
    fn fields(&self) -> &FieldStore;
    fn fields_mut(&mut self) -> &mut FieldStore;
}

/// A named attribute slot that only accepts values of one type (or its
/// subtypes).
///
/// Declared once per owning type, usually as an associated constant; the
/// values live in each owner's [`FieldStore`].
#[derive(Debug, Clone, Copy)]
pub struct ArticleField {
    name: &'static str,
    expected: &'static TypeTag,
}

impl ArticleField {
    #[must_use]
    pub const fn new(name: &'static str, expected: &'static TypeTag) -> Self {
        Self { name, expected }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn expected(&self) -> &'static TypeTag {
        self.expected
    }

    const fn key(&self) -> SlotKey {
        SlotKey {
            name: self.name,
            expected: self.expected,
        }
    }

    #[must_use]
    pub fn is_set<O: FieldOwner + ?Sized>(&self, owner: &O) -> bool {
        owner.fields().slots.contains_key(&self.key())
    }

    #[must_use]
    pub fn get_dyn<'a, O: FieldOwner + ?Sized>(&self, owner: &'a O) -> Option<&'a dyn FieldValue> {
        owner.fields().slots.get(&self.key()).map(Box::as_ref)
    }

    /// Typed read; `None` when unset or when the stored value is not a `T`
    /// (e.g. a subtype value read back as its parent's Rust type).
    #[must_use]
    pub fn get<'a, T: FieldValue, O: FieldOwner + ?Sized>(&self, owner: &'a O) -> Option<&'a T> {
        self.get_dyn(owner)
            .and_then(|value| value.as_any().downcast_ref::<T>())
    }

    /// Stores `value` if its type is the expected one or a subtype of it.
    /// A rejected value leaves the slot untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TypeMismatch`] when the value's tag is neither
    /// the expected tag nor one of its descendants.
    pub fn set<V: FieldValue, O: FieldOwner + ?Sized>(
        &self,
        owner: &mut O,
        value: V,
    ) -> DomainResult<()> {
        let actual = value.type_tag();
        if !actual.is_a(self.expected) {
            let err = DomainError::TypeMismatch {
                attribute: self.name,
                expected: self.expected.name(),
                actual: actual.name(),
            };
            tracing::warn!(attribute = self.name, error = %err, "rejected attribute value");
            return Err(err);
        }

        owner.fields_mut().slots.insert(self.key(), Box::new(value));
        Ok(())
    }
}
