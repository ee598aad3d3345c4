//! VehicleName - Cheap-to-clone vehicle identifier
//!
//! Embedded into signal paths (`vehicles.<name>.actuation.*`), so it is
//! created once at configuration time and cloned into every registration.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Vehicle identifier with cheap cloning.
///
/// Internally uses `Arc<str>` so cloning only bumps a reference count.
///
/// # Examples
/// ```
/// use contracts::VehicleName;
///
/// let name: VehicleName = "Ego".into();
/// assert_eq!(format!("vehicles.{name}.actuation.acceleration"),
///            "vehicles.Ego.actuation.acceleration");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct VehicleName(Arc<str>);

impl VehicleName {
    /// Create a new VehicleName from a string slice.
    pub fn new(s: &str) -> Self {
        Self(Arc::from(s))
    }

    /// Get the underlying string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for VehicleName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for VehicleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VehicleName {
    fn from(s: &str) -> Self {
        Self(Arc::from(s))
    }
}

impl From<String> for VehicleName {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl fmt::Display for VehicleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for VehicleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VehicleName({:?})", self.0)
    }
}

impl PartialEq<str> for VehicleName {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for VehicleName {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for VehicleName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for VehicleName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_with_str() {
        let name: VehicleName = "Ego".into();
        assert_eq!(name, "Ego");
        assert_eq!(name, VehicleName::from(String::from("Ego")));
    }

    #[test]
    fn clone_shares_storage() {
        let a: VehicleName = "Target1".into();
        let b = a.clone();
        assert_eq!(a.as_str().as_ptr(), b.as_str().as_ptr());
    }

    #[test]
    fn serde_as_plain_string() {
        let name: VehicleName = "Ego".into();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Ego\"");

        let parsed: VehicleName = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, name);
    }
}
