use alloc::string::String;
use core::fmt::{Display, Formatter, Result};

use derive_more::From;

/// A named column of a relation schema.
///
/// Equality and hashing are by name only. Two `Attribute`s constructed
/// independently from the same name are indistinguishable, so attributes can
/// be shared freely across dependencies and relvars.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, From)]
pub struct Attribute(pub String);

impl Attribute {
    /// Construct an attribute from anything convertible to a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The attribute's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Attribute {
    fn from(name: &str) -> Self {
        Self(String::from(name))
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.0)
    }
}
