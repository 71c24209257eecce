use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier a capability is registered and dispatched under.
///
/// Serialized as a bare string so breakdown records and catalogs stay flat.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityName(pub String);

impl CapabilityName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CapabilityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CapabilityName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CapabilityName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for CapabilityName {
    fn borrow(&self) -> &str {
        &self.0
    }
}
