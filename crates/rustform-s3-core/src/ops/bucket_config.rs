//! Bucket configuration provisioning: website, versioning, ownership
//! controls, public access block, and policy.

use std::sync::Arc;

use async_trait::async_trait;

use rustform_core::{Provision, Resolver};
use rustform_s3_model::{
    BucketOwnershipControlsArgs, BucketPolicyArgs, BucketPublicAccessBlockArgs,
    BucketVersioningArgs, BucketWebsiteConfigurationArgs,
};

use crate::state::{OwnershipControlsConfig, PublicAccessBlockConfig, S3ServiceState};

/// Applies a website configuration and resolves the `website_endpoint`
/// output.
pub(crate) struct CreateWebsiteConfiguration {
    pub(crate) state: Arc<S3ServiceState>,
    pub(crate) args: BucketWebsiteConfigurationArgs,
    pub(crate) website_endpoint: Resolver<String>,
}

#[async_trait]
impl Provision for CreateWebsiteConfiguration {
    async fn create(self: Box<Self>) -> anyhow::Result<()> {
        let bucket = self.args.bucket.resolve()?;
        let endpoint = self
            .state
            .put_bucket_website(&bucket, &self.args.index_document.suffix)?;
        self.website_endpoint.resolve(endpoint);
        Ok(())
    }
}

/// Applies a versioning configuration.
///
/// The args always carry a status here: declaring a versioning resource
/// without one is the caller's decision to skip the resource entirely.
pub(crate) struct CreateVersioning {
    pub(crate) state: Arc<S3ServiceState>,
    pub(crate) args: BucketVersioningArgs,
}

#[async_trait]
impl Provision for CreateVersioning {
    async fn create(self: Box<Self>) -> anyhow::Result<()> {
        let bucket = self.args.bucket.resolve()?;
        if let Some(status) = self.args.versioning_configuration.status {
            self.state.put_bucket_versioning(&bucket, status)?;
        }
        Ok(())
    }
}

/// Applies ownership controls.
pub(crate) struct CreateOwnershipControls {
    pub(crate) state: Arc<S3ServiceState>,
    pub(crate) args: BucketOwnershipControlsArgs,
}

#[async_trait]
impl Provision for CreateOwnershipControls {
    async fn create(self: Box<Self>) -> anyhow::Result<()> {
        let bucket = self.args.bucket.resolve()?;
        self.state.put_bucket_ownership_controls(
            &bucket,
            OwnershipControlsConfig {
                object_ownership: self.args.rule.object_ownership.as_str().to_owned(),
            },
        )?;
        Ok(())
    }
}

/// Applies a public access block configuration. Unset fields apply as
/// `false`.
pub(crate) struct CreatePublicAccessBlock {
    pub(crate) state: Arc<S3ServiceState>,
    pub(crate) args: BucketPublicAccessBlockArgs,
}

#[async_trait]
impl Provision for CreatePublicAccessBlock {
    async fn create(self: Box<Self>) -> anyhow::Result<()> {
        let bucket = self.args.bucket.resolve()?;
        self.state.put_public_access_block(
            &bucket,
            PublicAccessBlockConfig {
                block_public_acls: self.args.block_public_acls.unwrap_or(false),
                ignore_public_acls: self.args.ignore_public_acls.unwrap_or(false),
                block_public_policy: self.args.block_public_policy.unwrap_or(false),
                restrict_public_buckets: self.args.restrict_public_buckets.unwrap_or(false),
            },
        )?;
        Ok(())
    }
}

/// Attaches a bucket policy.
pub(crate) struct CreateBucketPolicy {
    pub(crate) state: Arc<S3ServiceState>,
    pub(crate) args: BucketPolicyArgs,
}

#[async_trait]
impl Provision for CreateBucketPolicy {
    async fn create(self: Box<Self>) -> anyhow::Result<()> {
        let bucket = self.args.bucket.resolve()?;
        let policy = self.args.policy.resolve()?;
        self.state.put_bucket_policy(&bucket, &policy)?;
        Ok(())
    }
}
