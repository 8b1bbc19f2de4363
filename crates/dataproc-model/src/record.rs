//! User record types.
//!
//! Raw records arrive as free-form JSON objects; normalization reduces them to
//! an identifier plus a lower-cased display name.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DataProcError, JsonKind, Result};

/// A free-form user record: string keys mapped to arbitrary JSON values.
///
/// No shape is enforced. Missing keys are expected and tolerated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawUserData(Map<String, Value>);

impl RawUserData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, builder style.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a field, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reads an optional string field.
    ///
    /// Returns `Ok(None)` when the key is absent. Any present value that is not
    /// a JSON string, `null` included, is a [`DataProcError::TypeMismatch`].
    pub fn optional_str(&self, key: &str) -> Result<Option<&str>> {
        match self.0.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(DataProcError::type_mismatch(
                key,
                JsonKind::String.as_str(),
                other,
            )),
        }
    }
}

impl From<Map<String, Value>> for RawUserData {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for RawUserData {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A normalized user record.
///
/// `id` is whatever identifier the caller supplied; `normalized` is the
/// lower-cased display name, empty when the source record had none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedUserData<I> {
    pub id: I,
    pub normalized: String,
}
