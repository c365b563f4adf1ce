use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a squad member.
///
/// Identity never changes; only the member's location (roster vs. slot)
/// does.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub String);

impl MemberId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A squad member: display name plus shirt number.
///
/// Attributes are immutable for the lifetime of a session. Shirt numbers
/// are not unique (the source squad carries two number 10s), so `id` is
/// the only identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub number: u8,
}

impl Member {
    pub fn new(id: impl Into<String>, name: impl Into<String>, number: u8) -> Self {
        let name = name.into();
        Self {
            id: MemberId::new(id),
            name,
            number,
        }
    }
}
