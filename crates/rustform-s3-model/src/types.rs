//! Shared S3 configuration value types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bucket versioning status accepted by a versioning resource.
///
/// `Disabled` is deliberately not a value here: a bucket that should not be
/// versioned simply declares no versioning resource at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VersioningStatus {
    /// Versioning is enabled.
    Enabled,
    /// Versioning was previously enabled and is now suspended.
    Suspended,
}

impl VersioningStatus {
    /// The wire-format string for this status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "Enabled",
            Self::Suspended => "Suspended",
        }
    }
}

impl fmt::Display for VersioningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Versioning configuration carried by a versioning resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersioningConfiguration {
    /// The desired status; `None` means no status was specified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VersioningStatus>,
}

impl VersioningConfiguration {
    /// Configuration with an explicit status.
    #[must_use]
    pub fn with_status(status: VersioningStatus) -> Self {
        Self {
            status: Some(status),
        }
    }
}

/// Object ownership setting applied through ownership controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectOwnership {
    /// The bucket owner owns objects if uploaded with the
    /// `bucket-owner-full-control` ACL.
    BucketOwnerPreferred,
    /// The uploading account owns the object.
    ObjectWriter,
    /// ACLs are disabled; the bucket owner owns every object.
    BucketOwnerEnforced,
}

impl ObjectOwnership {
    /// The wire-format string for this setting.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BucketOwnerPreferred => "BucketOwnerPreferred",
            Self::ObjectWriter => "ObjectWriter",
            Self::BucketOwnerEnforced => "BucketOwnerEnforced",
        }
    }
}

impl fmt::Display for ObjectOwnership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single rule carried by an ownership-controls resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipControlsRule {
    /// The object ownership setting.
    pub object_ownership: ObjectOwnership,
}

/// Index document configuration for a website configuration resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDocument {
    /// Suffix appended to directory requests, e.g. `index.html`.
    pub suffix: String,
}

impl IndexDocument {
    /// Create an index document configuration.
    #[must_use]
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}
