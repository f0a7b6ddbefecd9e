//! Declarative resource engine for rustform.
//!
//! This crate provides the substrate that rustform components declare
//! resources against: logical names and URNs, output values that resolve
//! only after provisioning, a per-deployment [`Stack`] registry with
//! parent/child ownership and explicit dependency edges, and a single-pass
//! deployment engine that provisions resources in dependency order.
//!
//! # Architecture
//!
//! ```text
//! Component (e.g. WebsiteBucket)
//!        |  declares resources, wires Output -> Input references
//!        v
//! Stack (registry: URNs, ownership, dependency edges)
//!        |  deploy(): dependency waves
//!        v
//! Provision ops (provider-supplied, e.g. the in-memory S3 provider)
//! ```

mod engine;
mod error;
mod output;
mod stack;
mod types;

pub use engine::DeploySummary;
pub use error::{RustformError, RustformResult};
pub use output::{Input, Output, Resolver};
pub use stack::{ComponentScope, Declaration, Provision, ResourceOptions, ResourceSummary, Stack};
pub use types::{ResourceId, ResourceType, Urn};
