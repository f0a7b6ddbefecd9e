//! Provider configuration.

/// Region name used when no environment override is present.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Configuration for the in-memory S3 provider.
#[derive(Debug, Clone)]
pub struct S3Config {
    /// Region used for website endpoints and new buckets.
    pub region: String,
}

impl Default for S3Config {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_owned(),
        }
    }
}

impl S3Config {
    /// Build the configuration from the environment.
    ///
    /// Honors `AWS_REGION`, then `AWS_DEFAULT_REGION`, then falls back to
    /// [`DEFAULT_REGION`].
    #[must_use]
    pub fn from_env() -> Self {
        let region = std::env::var("AWS_REGION")
            .or_else(|_| std::env::var("AWS_DEFAULT_REGION"))
            .unwrap_or_else(|_| DEFAULT_REGION.to_owned());
        Self { region }
    }
}
