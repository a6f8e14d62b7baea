//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.
//!
//! Identifiers are opaque strings that sort by creation time: a zero-padded
//! unix-millisecond prefix followed by a UUID v4 in simple (dashless) form
//! and a fixed `000` suffix. An identifier never contains `-`; the session
//! cookie format relies on that.

use std::fmt;
use std::marker::PhantomData;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::Id;
///
/// struct UserMarker;
/// type UserId = Id<UserMarker>;
///
/// let id = UserId::generate();
/// assert_eq!(id.as_str().len(), 50);
/// ```
pub struct Id<T> {
    value: String,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create a new time-orderable ID.
    pub fn generate() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();

        Self {
            value: format!("{:015}{}000", millis, Uuid::new_v4().simple()),
            _marker: PhantomData,
        }
    }

    /// Create from an existing string (e.g. a database row).
    pub fn from_string(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::generate()
    }
}

// Manual impls: derives would put bounds on the marker type.

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::from_string(value)
    }
}

impl<T> From<Id<T>> for String {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> serde::Serialize for Id<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T> serde::Deserialize<'de> for Id<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;
    type TestId = Id<Marker>;

    #[test]
    fn test_generated_shape() {
        let id = TestId::generate();
        // 15 millis digits + 32 uuid hex + "000"
        assert_eq!(id.as_str().len(), 50);
        assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(!id.as_str().contains('-'));
    }

    #[test]
    fn test_generated_unique() {
        let a = TestId::generate();
        let b = TestId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_time_orderable() {
        let a = TestId::generate();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = TestId::generate();
        assert!(a.as_str() < b.as_str());
    }

    #[test]
    fn test_from_string_roundtrip() {
        let id = TestId::from_string("0017212345678901234");
        assert_eq!(id.as_str(), "0017212345678901234");
        assert_eq!(String::from(id), "0017212345678901234");
    }
}
