//! Argument records for declarable S3 resources.
//!
//! Each record mirrors the inputs of one resource kind. Fields that consume
//! another resource's output attribute are typed [`Input<String>`] so the
//! data dependency survives into the deployment graph.

use rustform_core::Input;
use typed_builder::TypedBuilder;

use crate::types::{IndexDocument, OwnershipControlsRule, VersioningConfiguration};

/// Arguments for an `aws:s3:Bucket` resource.
///
/// The bucket itself takes no required inputs; its physical name is derived
/// from the logical name by the provider (auto-naming).
#[derive(Debug, Clone, Copy, Default)]
pub struct BucketArgs {}

/// Arguments for an `aws:s3:BucketWebsiteConfiguration` resource.
#[derive(Debug, Clone, TypedBuilder)]
pub struct BucketWebsiteConfigurationArgs {
    /// The bucket to configure, usually a bucket resource's `bucket` output.
    #[builder(setter(into))]
    pub bucket: Input<String>,
    /// The index document served for directory requests.
    pub index_document: IndexDocument,
}

/// Arguments for an `aws:s3:BucketObject` resource.
#[derive(Debug, Clone, TypedBuilder)]
pub struct BucketObjectArgs {
    /// The bucket to store the object in.
    #[builder(setter(into))]
    pub bucket: Input<String>,
    /// The object key.
    #[builder(setter(into))]
    pub key: String,
    /// The literal object body.
    #[builder(setter(into))]
    pub content: String,
    /// The object's content type.
    #[builder(default, setter(strip_option, into))]
    pub content_type: Option<String>,
}

/// Arguments for an `aws:s3:BucketVersioning` resource.
#[derive(Debug, Clone, TypedBuilder)]
pub struct BucketVersioningArgs {
    /// The bucket to configure.
    #[builder(setter(into))]
    pub bucket: Input<String>,
    /// The versioning configuration to apply.
    pub versioning_configuration: VersioningConfiguration,
}

/// Arguments for an `aws:s3:BucketOwnershipControls` resource.
#[derive(Debug, Clone, TypedBuilder)]
pub struct BucketOwnershipControlsArgs {
    /// The bucket to configure.
    #[builder(setter(into))]
    pub bucket: Input<String>,
    /// The ownership rule to apply.
    pub rule: OwnershipControlsRule,
}

/// Arguments for an `aws:s3:BucketPublicAccessBlock` resource.
///
/// Unset fields are applied as `false`, matching the provider resource:
/// declaring this resource with only `block_public_acls` set therefore
/// relaxes the other three guards as well.
#[derive(Debug, Clone, TypedBuilder)]
pub struct BucketPublicAccessBlockArgs {
    /// The bucket to configure.
    #[builder(setter(into))]
    pub bucket: Input<String>,
    /// Whether public ACLs are rejected.
    #[builder(default, setter(strip_option))]
    pub block_public_acls: Option<bool>,
    /// Whether existing public ACLs are ignored.
    #[builder(default, setter(strip_option))]
    pub ignore_public_acls: Option<bool>,
    /// Whether public bucket policies are rejected.
    #[builder(default, setter(strip_option))]
    pub block_public_policy: Option<bool>,
    /// Whether access to a public bucket is restricted to its owner.
    #[builder(default, setter(strip_option))]
    pub restrict_public_buckets: Option<bool>,
}

/// Arguments for an `aws:s3:BucketPolicy` resource.
#[derive(Debug, Clone, TypedBuilder)]
pub struct BucketPolicyArgs {
    /// The bucket to attach the policy to.
    #[builder(setter(into))]
    pub bucket: Input<String>,
    /// The policy document JSON, usually derived from the bucket ARN.
    #[builder(setter(into))]
    pub policy: Input<String>,
}
