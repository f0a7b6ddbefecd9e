//! S3 provider state.
//!
//! - [`S3ServiceState`] -- top-level state owning the bucket table
//! - [`S3Bucket`] -- per-bucket state (objects plus the optional
//!   configurations the provider supports)
//!
//! # Thread Safety
//!
//! All types are `Send + Sync`: `DashMap` for the bucket and object tables,
//! `parking_lot::RwLock` for single-valued configuration fields.

pub(crate) mod bucket;
pub(crate) mod service;

pub use bucket::{
    OwnershipControlsConfig, PublicAccessBlockConfig, S3Bucket, S3Object, VersioningState,
    WebsiteConfig,
};
pub use service::S3ServiceState;
