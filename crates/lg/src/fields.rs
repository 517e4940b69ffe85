//! crates/lg/src/fields.rs
//! Ordered, de-duplicated structured fields shared between derived logs.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// A single structured key/value pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    /// Field name, unique within a [`Fields`] set.
    pub key: String,
    /// Field value.
    pub value: Value,
}

/// Ordered field set with last-write-wins semantics per key.
///
/// `Fields` is a persistent value: [`with`](Self::with) returns a new set and
/// leaves the receiver untouched. The backing storage is reference counted, so
/// cloning a set (as every derived log does) is cheap, and storage is only
/// copied when a derived set actually changes.
///
/// # Examples
///
/// ```
/// use lg::{Fields, Value};
///
/// let base = Fields::new().with("k1", Value::from(1)).with("k2", Value::from(2));
/// let updated = base.with("k1", Value::from(3));
///
/// assert_eq!(base.get("k1"), Some(&Value::from(1)));
/// assert_eq!(updated.get("k1"), Some(&Value::from(3)));
/// assert_eq!(updated.keys().collect::<Vec<_>>(), ["k1", "k2"]);
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Fields {
    entries: Arc<Vec<Field>>,
}

impl Fields {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a set with `key` bound to `value`.
    ///
    /// An existing key keeps its position and takes the new value; a new key
    /// is appended.
    #[must_use]
    pub fn with(&self, key: &str, value: Value) -> Self {
        let mut derived = self.clone();
        derived.insert(key, value);
        derived
    }

    /// Binds `key` to `value` in place, with the same rules as [`with`](Self::with).
    pub fn insert(&mut self, key: &str, value: Value) {
        let entries = Arc::make_mut(&mut self.entries);
        match entries.iter_mut().find(|field| field.key == key) {
            Some(field) => field.value = value,
            None => entries.push(Field {
                key: key.to_owned(),
                value,
            }),
        }
    }

    /// Returns a set containing `self`'s fields overridden and extended by `other`'s.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        for field in other {
            merged.insert(&field.key, field.value.clone());
        }
        merged
    }

    /// Looks up the value bound to `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|field| field.key == key)
            .map(|field| &field.value)
    }

    /// Iterates over the fields in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.entries.iter()
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|field| field.key.as_str())
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether no field has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|field| (&field.key, &field.value)))
            .finish()
    }
}

impl fmt::Display for Fields {
    /// Renders `key=value` pairs separated by single spaces.
    ///
    /// String values are written bare; every other value uses its JSON form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, field) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            match &field.value {
                Value::String(text) => write!(f, "{}={text}", field.key)?,
                other => write!(f, "{}={other}", field.key)?,
            }
        }
        Ok(())
    }
}
