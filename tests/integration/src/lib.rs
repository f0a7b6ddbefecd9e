//! Integration tests for rustform (engine + S3 provider + WebsiteBucket).
//!
//! Everything runs in-process against the in-memory provider, so the whole
//! suite executes under a plain `cargo test`.

use std::sync::Once;

use rustform_core::Stack;
use rustform_s3_core::{S3Config, S3Provider};

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Create a stack for a test.
#[must_use]
pub fn test_stack(name: &str) -> Stack {
    init_tracing();
    Stack::new(name)
}

/// Create a provider with the default (us-east-1) configuration.
#[must_use]
pub fn s3_provider() -> S3Provider {
    S3Provider::new(S3Config::default())
}

/// Generate a unique logical name for a test.
#[must_use]
pub fn unique_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().simple().to_string()[..8].to_owned();
    format!("{prefix}-{id}")
}

/// Extract the physical bucket name from a website endpoint URL.
#[must_use]
pub fn bucket_from_endpoint(endpoint: &str) -> String {
    endpoint
        .split('.')
        .next()
        .unwrap_or_default()
        .to_owned()
}

mod test_engine;
mod test_provider;
mod test_website_bucket;
