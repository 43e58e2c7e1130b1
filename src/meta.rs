//! Component metadata.
//!
//! Metadata comes in two forms: a strongly-typed value that consumers receive as-is, and a
//! weakly-typed string-keyed map that has to be decoded into a specific configuration shape
//! whenever someone asks for one. Decoding is centralized in [`decode`]; every configuration
//! shape only declares what it looks like (through `serde`) and what happens when there is no
//! metadata at all.

use core::any::{self, Any};
use core::fmt;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// A weakly-typed metadata map.
pub type MetaMap = serde_json::Map<String, Value>;

/// Metadata attached to a component node.
#[derive(Clone)]
pub enum Meta {
    /// A strongly-typed configuration value.
    Typed {
        value: Arc<dyn Any + Send + Sync>,
        type_name: &'static str,
    },
    /// A string-keyed map of primitive values.
    Map(MetaMap),
}

impl Meta {
    /// Wraps a strongly-typed configuration value.
    pub fn typed<T: Any + Send + Sync>(value: T) -> Meta {
        Meta::Typed {
            value: Arc::new(value),
            type_name: any::type_name::<T>(),
        }
    }

    /// Creates weakly-typed metadata from key/value pairs.
    ///
    /// ```
    /// # use clusterkit::Meta;
    /// let meta = Meta::map(vec![("title", "Home"), ("icon_name", "house")]);
    /// assert_eq!(meta.get("title").and_then(|v| v.as_str()), Some("Home"));
    /// ```
    pub fn map<I, K, V>(entries: I) -> Meta
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Meta::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns the typed payload if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Meta::Typed { value, .. } => value.downcast_ref::<T>(),
            Meta::Map(_) => None,
        }
    }

    /// Looks up a raw entry of weakly-typed metadata.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Meta::Typed { .. } => None,
            Meta::Map(map) => map.get(key),
        }
    }

    /// Decodes this metadata into `T`.
    pub fn decode<T: FromMeta>(&self) -> Result<T, DecodeError> {
        decode(Some(self))
    }
}

impl From<MetaMap> for Meta {
    fn from(map: MetaMap) -> Meta {
        Meta::Map(map)
    }
}

impl fmt::Debug for Meta {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Meta::Typed { type_name, .. } => write!(f, "Typed({})", type_name),
            Meta::Map(map) => f.debug_tuple("Map").field(map).finish(),
        }
    }
}

/// Errors that may occur when decoding metadata.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("no metadata for {expected}")]
    Absent { expected: &'static str },

    #[error("expected metadata of type {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("malformed metadata for {expected}: {source}")]
    Malformed {
        expected: &'static str,
        source: serde_json::Error,
    },
}

/// A configuration shape that can be decoded from [`Meta`].
///
/// The weakly-typed form is decoded through the `Deserialize` implementation, so the recognized
/// keys are the (possibly renamed) field names; unknown keys are ignored. Fields without a
/// `#[serde(default)]` are required.
pub trait FromMeta: DeserializeOwned + Clone + Any {
    /// The value used when there is no metadata at all.
    ///
    /// Fails by default; shapes whose fields are all defaulted should override this.
    fn absent() -> Result<Self, DecodeError> {
        Err(DecodeError::Absent {
            expected: any::type_name::<Self>(),
        })
    }
}

/// Decodes optional metadata into the configuration shape `T`.
///
/// Typed metadata holding a `T` is passed through unchanged. Decoding never yields a partially
/// populated value.
pub fn decode<T: FromMeta>(meta: Option<&Meta>) -> Result<T, DecodeError> {
    let expected = any::type_name::<T>();
    match meta {
        None => T::absent(),
        Some(Meta::Typed { value, type_name }) => value
            .downcast_ref::<T>()
            .cloned()
            .ok_or(DecodeError::TypeMismatch {
                expected,
                found: *type_name,
            }),
        Some(Meta::Map(map)) => serde_json::from_value(Value::Object(map.clone()))
            .map_err(|source| DecodeError::Malformed { expected, source }),
    }
}

#[cfg(test)]
#[path = "tests/meta_tests.rs"]
mod tests;
