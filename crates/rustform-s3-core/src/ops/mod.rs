//! Provisioning operations, one per declarable resource kind.
//!
//! Each operation resolves its inputs (available by the time the engine
//! runs it), performs the state mutation, and resolves the outputs on the
//! resource handle. Provider errors pass through unchanged.

pub(crate) mod bucket;
pub(crate) mod bucket_config;
pub(crate) mod object;
