//! S3 provider error types.

/// S3 provider error type.
///
/// Each variant corresponds to a rejection the real service would produce
/// for the same request. Provisioning operations surface these unchanged;
/// the engine only attaches the failing resource's URN.
#[derive(Debug, thiserror::Error)]
pub enum S3ProviderError {
    /// The specified bucket does not exist.
    #[error("the specified bucket does not exist: {bucket}")]
    NoSuchBucket {
        /// The bucket name that was not found.
        bucket: String,
    },

    /// The requested bucket name is already taken.
    #[error("the requested bucket name is not available: {bucket}")]
    BucketAlreadyExists {
        /// The bucket name that already exists.
        bucket: String,
    },

    /// The policy document could not be parsed.
    #[error("the policy is not well-formed JSON: {reason}")]
    MalformedPolicy {
        /// The parse failure.
        reason: String,
    },

    /// A public policy was rejected because `block_public_policy` is in
    /// effect on the bucket.
    #[error("public policies are blocked by the BlockPublicPolicy setting on {bucket}")]
    PublicPolicyBlocked {
        /// The bucket the policy was attached to.
        bucket: String,
    },
}
