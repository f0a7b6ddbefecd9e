//! Typed resource arguments and configuration records for the rustform S3
//! provider.
//!
//! One argument record per declarable resource kind (bucket, website
//! configuration, object, versioning, ownership controls, public access
//! block, policy), the shared configuration enums they carry, and IAM
//! policy-document types.

mod iam;
mod input;
mod types;

pub use iam::{Effect, PolicyDocument, PolicyStatement, Principal};
pub use input::{
    BucketArgs, BucketObjectArgs, BucketOwnershipControlsArgs, BucketPolicyArgs,
    BucketPublicAccessBlockArgs, BucketVersioningArgs, BucketWebsiteConfigurationArgs,
};
pub use types::{
    IndexDocument, ObjectOwnership, OwnershipControlsRule, VersioningConfiguration,
    VersioningStatus,
};
