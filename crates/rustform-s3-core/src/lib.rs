//! In-memory S3 provider for rustform.
//!
//! Implements the provider side of the seven S3 resource kinds a
//! [`rustform_core::Stack`] deployment can declare: buckets, website
//! configurations, objects, versioning, ownership controls, public access
//! blocks, and bucket policies.
//!
//! # Architecture
//!
//! ```text
//! S3Provider (resource constructors, registers with the Stack)
//!        |
//!        v
//! Provision ops (one per resource kind, run by the engine)
//!        |
//!        v
//! S3ServiceState (bucket table) -> S3Bucket (per-bucket state)
//! ```
//!
//! The provider enforces the AWS rejection semantics the component design
//! leans on: a new bucket starts with every public-access guard enabled, so
//! a public bucket policy is rejected until a public-access-block resource
//! relaxes `block_public_policy`.

pub mod config;
pub mod error;
mod ops;
pub mod provider;
pub mod state;

pub use config::S3Config;
pub use error::S3ProviderError;
pub use provider::{
    Bucket, BucketObject, BucketOwnershipControls, BucketPolicy, BucketPublicAccessBlock,
    BucketVersioning, BucketWebsiteConfiguration, S3Provider,
};
