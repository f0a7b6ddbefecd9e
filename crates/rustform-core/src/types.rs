//! Identity types shared across the engine: resource ids, type tokens, URNs.

use std::fmt;

/// Opaque identifier assigned to each resource registered with a [`Stack`].
///
/// Ids are handed out in registration order and are only meaningful within
/// the stack that issued them.
///
/// [`Stack`]: crate::Stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(u64);

impl ResourceId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub(crate) fn index(self) -> usize {
        usize::try_from(self.0).unwrap_or(usize::MAX)
    }

    /// Get the raw numeric value.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "res-{}", self.0)
    }
}

/// A resource type token in `package:module:Member` form, e.g.
/// `aws:s3:Bucket` or `rustform:web:WebsiteBucket`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceType(&'static str);

impl ResourceType {
    /// Create a type token from a static string.
    #[must_use]
    pub const fn from_static(token: &'static str) -> Self {
        Self(token)
    }

    /// Get the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Uniform resource name identifying a declared resource within a stack.
///
/// Format: `urn:rustform:{stack}::{type}::{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Urn(String);

impl Urn {
    /// Build the URN for a resource declared in `stack`.
    #[must_use]
    pub fn new(stack: &str, type_token: ResourceType, name: &str) -> Self {
        Self(format!("urn:rustform:{stack}::{type_token}::{name}"))
    }

    /// Get the URN as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
