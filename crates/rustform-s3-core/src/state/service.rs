//! Top-level provider state: the bucket table and its mutation operations.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use dashmap::DashMap;
use md5::{Digest, Md5};
use serde_json::Value;
use tracing::debug;

use rustform_s3_model::VersioningStatus;

use crate::error::S3ProviderError;
use crate::state::bucket::{
    OwnershipControlsConfig, PublicAccessBlockConfig, S3Bucket, S3Object, WebsiteConfig,
};

/// Top-level S3 provider state.
#[derive(Debug, Default)]
pub struct S3ServiceState {
    buckets: DashMap<String, Arc<S3Bucket>>,
}

impl S3ServiceState {
    /// Create empty provider state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bucket.
    ///
    /// # Errors
    /// Returns [`S3ProviderError::BucketAlreadyExists`] on a name collision.
    pub fn create_bucket(
        &self,
        bucket: &str,
        region: &str,
    ) -> Result<Arc<S3Bucket>, S3ProviderError> {
        if self.buckets.contains_key(bucket) {
            return Err(S3ProviderError::BucketAlreadyExists {
                bucket: bucket.to_owned(),
            });
        }
        let state = Arc::new(S3Bucket::new(bucket, region));
        self.buckets.insert(bucket.to_owned(), Arc::clone(&state));
        debug!(bucket = %bucket, region = %region, "create_bucket completed");
        Ok(state)
    }

    /// Look up a bucket by physical name.
    ///
    /// # Errors
    /// Returns [`S3ProviderError::NoSuchBucket`] if the bucket is unknown.
    pub fn get_bucket(&self, bucket: &str) -> Result<Arc<S3Bucket>, S3ProviderError> {
        self.buckets
            .get(bucket)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| S3ProviderError::NoSuchBucket {
                bucket: bucket.to_owned(),
            })
    }

    /// Number of buckets currently held.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Apply a website configuration and return the website endpoint.
    ///
    /// # Errors
    /// Returns [`S3ProviderError::NoSuchBucket`] if the bucket is unknown.
    pub fn put_bucket_website(
        &self,
        bucket: &str,
        index_document_suffix: &str,
    ) -> Result<String, S3ProviderError> {
        let state = self.get_bucket(bucket)?;
        *state.website.write() = Some(WebsiteConfig {
            index_document_suffix: index_document_suffix.to_owned(),
        });
        debug!(bucket = %bucket, "put_bucket_website completed");
        // The endpoint exists by construction: the configuration was just set.
        state
            .website_endpoint()
            .ok_or_else(|| S3ProviderError::NoSuchBucket {
                bucket: bucket.to_owned(),
            })
    }

    /// Store an object and return its etag.
    ///
    /// # Errors
    /// Returns [`S3ProviderError::NoSuchBucket`] if the bucket is unknown.
    pub fn put_object(
        &self,
        bucket: &str,
        key: &str,
        content: Bytes,
        content_type: Option<String>,
    ) -> Result<String, S3ProviderError> {
        let state = self.get_bucket(bucket)?;
        let etag = hex::encode(Md5::digest(&content));
        state.objects.insert(
            key.to_owned(),
            S3Object {
                key: key.to_owned(),
                content,
                content_type,
                etag: etag.clone(),
                last_modified: Utc::now(),
            },
        );
        debug!(bucket = %bucket, key = %key, etag = %etag, "put_object completed");
        Ok(etag)
    }

    /// Apply a versioning status.
    ///
    /// # Errors
    /// Returns [`S3ProviderError::NoSuchBucket`] if the bucket is unknown.
    pub fn put_bucket_versioning(
        &self,
        bucket: &str,
        status: VersioningStatus,
    ) -> Result<(), S3ProviderError> {
        let state = self.get_bucket(bucket)?;
        *state.versioning.write() = status.into();
        debug!(bucket = %bucket, status = %status, "put_bucket_versioning completed");
        Ok(())
    }

    /// Apply ownership controls.
    ///
    /// # Errors
    /// Returns [`S3ProviderError::NoSuchBucket`] if the bucket is unknown.
    pub fn put_bucket_ownership_controls(
        &self,
        bucket: &str,
        config: OwnershipControlsConfig,
    ) -> Result<(), S3ProviderError> {
        let state = self.get_bucket(bucket)?;
        *state.ownership_controls.write() = Some(config);
        debug!(bucket = %bucket, "put_bucket_ownership_controls completed");
        Ok(())
    }

    /// Apply a public access block configuration.
    ///
    /// # Errors
    /// Returns [`S3ProviderError::NoSuchBucket`] if the bucket is unknown.
    pub fn put_public_access_block(
        &self,
        bucket: &str,
        config: PublicAccessBlockConfig,
    ) -> Result<(), S3ProviderError> {
        let state = self.get_bucket(bucket)?;
        *state.public_access_block.write() = config;
        debug!(bucket = %bucket, "put_public_access_block completed");
        Ok(())
    }

    /// Attach a bucket policy.
    ///
    /// A policy with a public principal is rejected while the bucket's
    /// `block_public_policy` guard is still in effect; this is the behavior
    /// that forces public-website stacks to relax the public access block
    /// before their policy.
    ///
    /// # Errors
    /// Returns [`S3ProviderError::NoSuchBucket`] for an unknown bucket,
    /// [`S3ProviderError::MalformedPolicy`] if the document is not valid
    /// JSON, and [`S3ProviderError::PublicPolicyBlocked`] as described above.
    pub fn put_bucket_policy(&self, bucket: &str, policy: &str) -> Result<(), S3ProviderError> {
        let state = self.get_bucket(bucket)?;

        let document: Value =
            serde_json::from_str(policy).map_err(|err| S3ProviderError::MalformedPolicy {
                reason: err.to_string(),
            })?;

        if policy_grants_public_access(&document)
            && state.public_access_block.read().block_public_policy
        {
            return Err(S3ProviderError::PublicPolicyBlocked {
                bucket: bucket.to_owned(),
            });
        }

        *state.policy.write() = Some(policy.to_owned());
        debug!(bucket = %bucket, "put_bucket_policy completed");
        Ok(())
    }
}

/// Whether a policy document contains an Allow statement for a public
/// principal (`"*"`, either bare or under `AWS`).
fn policy_grants_public_access(document: &Value) -> bool {
    let Some(statements) = document.get("Statement").and_then(Value::as_array) else {
        return false;
    };
    statements.iter().any(|statement| {
        statement.get("Effect").and_then(Value::as_str) == Some("Allow")
            && statement
                .get("Principal")
                .is_some_and(principal_is_public)
    })
}

fn principal_is_public(principal: &Value) -> bool {
    match principal {
        Value::String(value) => value == "*",
        Value::Object(map) => map.get("AWS").is_some_and(|aws| match aws {
            Value::String(value) => value == "*",
            Value::Array(values) => values.iter().any(|value| value == "*"),
            _ => false,
        }),
        _ => false,
    }
}
