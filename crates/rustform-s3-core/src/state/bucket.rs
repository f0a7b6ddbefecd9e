//! Per-bucket state and configuration types.
//!
//! An [`S3Bucket`] holds the physical bucket identity (name, ARN, region)
//! and the per-bucket state the provider mutates during provisioning:
//! objects, versioning, website configuration, ownership controls, public
//! access block, and policy. Interior mutability uses `parking_lot::RwLock`
//! for single-valued configuration fields and `DashMap` for the object
//! table.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use rustform_s3_model::VersioningStatus;

// ---------------------------------------------------------------------------
// Supporting configuration types
// ---------------------------------------------------------------------------

/// Bucket versioning state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VersioningState {
    /// Versioning has never been enabled on this bucket.
    #[default]
    Disabled,
    /// Versioning is currently enabled.
    Enabled,
    /// Versioning was previously enabled but is now suspended.
    Suspended,
}

impl From<VersioningStatus> for VersioningState {
    fn from(status: VersioningStatus) -> Self {
        match status {
            VersioningStatus::Enabled => Self::Enabled,
            VersioningStatus::Suspended => Self::Suspended,
        }
    }
}

/// Website configuration stored on a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteConfig {
    /// Index document suffix, e.g. `index.html`.
    pub index_document_suffix: String,
}

/// Public access block configuration stored on a bucket.
///
/// New buckets start with all four guards enabled; a public-access-block
/// resource overwrites the whole record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct PublicAccessBlockConfig {
    /// Whether public ACLs are rejected.
    pub block_public_acls: bool,
    /// Whether existing public ACLs are ignored.
    pub ignore_public_acls: bool,
    /// Whether public bucket policies are rejected.
    pub block_public_policy: bool,
    /// Whether access to a public bucket is restricted to its owner.
    pub restrict_public_buckets: bool,
}

impl Default for PublicAccessBlockConfig {
    fn default() -> Self {
        Self {
            block_public_acls: true,
            ignore_public_acls: true,
            block_public_policy: true,
            restrict_public_buckets: true,
        }
    }
}

/// Ownership controls configuration stored on a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipControlsConfig {
    /// The object ownership setting (e.g. `ObjectWriter`).
    pub object_ownership: String,
}

/// A stored object.
#[derive(Debug, Clone)]
pub struct S3Object {
    /// The object key.
    pub key: String,
    /// The object body.
    pub content: bytes::Bytes,
    /// The object's content type, if one was supplied.
    pub content_type: Option<String>,
    /// Hex MD5 of the body.
    pub etag: String,
    /// When the object was stored.
    pub last_modified: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Bucket
// ---------------------------------------------------------------------------

/// Per-bucket provider state.
#[derive(Debug)]
pub struct S3Bucket {
    /// Physical bucket name.
    pub bucket: String,
    /// Bucket ARN.
    pub arn: String,
    /// Region the bucket lives in.
    pub region: String,
    /// When the bucket was created.
    pub creation_date: DateTime<Utc>,
    /// Versioning state.
    pub versioning: RwLock<VersioningState>,
    /// Website configuration, if declared.
    pub website: RwLock<Option<WebsiteConfig>>,
    /// Ownership controls, if declared.
    pub ownership_controls: RwLock<Option<OwnershipControlsConfig>>,
    /// Public access block settings.
    pub public_access_block: RwLock<PublicAccessBlockConfig>,
    /// Bucket policy JSON, if attached.
    pub policy: RwLock<Option<String>>,
    /// Objects by key.
    pub objects: DashMap<String, S3Object>,
}

impl S3Bucket {
    /// Create an empty bucket in `region` with the AWS defaults: versioning
    /// disabled and every public-access guard enabled.
    #[must_use]
    pub fn new(bucket: impl Into<String>, region: impl Into<String>) -> Self {
        let bucket = bucket.into();
        let arn = format!("arn:aws:s3:::{bucket}");
        Self {
            bucket,
            arn,
            region: region.into(),
            creation_date: Utc::now(),
            versioning: RwLock::new(VersioningState::Disabled),
            website: RwLock::new(None),
            ownership_controls: RwLock::new(None),
            public_access_block: RwLock::new(PublicAccessBlockConfig::default()),
            policy: RwLock::new(None),
            objects: DashMap::new(),
        }
    }

    /// The bucket's website endpoint, available once a website
    /// configuration has been applied.
    #[must_use]
    pub fn website_endpoint(&self) -> Option<String> {
        self.website
            .read()
            .as_ref()
            .map(|_| format!("{}.s3-website-{}.amazonaws.com", self.bucket, self.region))
    }
}
