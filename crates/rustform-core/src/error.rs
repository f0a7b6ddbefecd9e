//! Error types for the rustform engine.

use crate::types::{ResourceId, Urn};

/// Engine error type.
///
/// Provider failures are carried through [`RustformError::Provision`] with
/// the failing resource's URN attached; the underlying provider error is
/// preserved unchanged as the source.
#[derive(Debug, thiserror::Error)]
pub enum RustformError {
    /// A resource was declared with an empty logical name.
    #[error("resource name must be a non-empty identifier")]
    EmptyName,

    /// A `(type, name)` pair was declared twice within the same stack.
    #[error("duplicate resource: {type_token} named \"{name}\"")]
    DuplicateResource {
        /// The resource type token.
        type_token: String,
        /// The duplicated logical name.
        name: String,
    },

    /// A dependency edge references a resource id unknown to this stack.
    #[error("depends_on references unknown resource {0}")]
    UnknownDependency(ResourceId),

    /// An output was read before the owning resource was provisioned.
    #[error("output is not yet resolved; it becomes available after deployment")]
    OutputUnresolved,

    /// `deploy` was called on a stack that has already been deployed.
    #[error("stack has already been deployed")]
    AlreadyDeployed,

    /// A provider rejected a resource creation.
    #[error("failed to provision {urn}")]
    Provision {
        /// URN of the resource that failed to provision.
        urn: Urn,
        /// The provider's own error, propagated unchanged.
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience result type for engine operations.
pub type RustformResult<T> = Result<T, RustformError>;
