//! rustform - deploy a WebsiteBucket stack.
//!
//! This binary declares a [`WebsiteBucket`] component, deploys it against
//! the in-memory S3 provider, and prints the resulting website URL.
//!
//! # Usage
//!
//! ```text
//! SITE_NAME=my-site SITE_CONTENT='<h1>Hi</h1>' rustform
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `STACK_NAME` | `dev` | Stack name used in resource URNs |
//! | `SITE_NAME` | `site` | Logical name of the component |
//! | `SITE_CONTENT` | *(unset = "Hello, World!")* | Body of the seeded index document |
//! | `SITE_VERSIONING` | *(unset = no versioning resource)* | `Enabled` or `Suspended` |
//! | `AWS_REGION` | `us-east-1` | Region used for website endpoints |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rustform_core::{ResourceOptions, Stack};
use rustform_s3_core::{S3Config, S3Provider};
use rustform_s3_model::{VersioningConfiguration, VersioningStatus};
use rustform_website::{VersioningOverride, WebsiteBucket, WebsiteBucketArgs};

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

/// Read the optional versioning override from `SITE_VERSIONING`.
fn versioning_from_env() -> Result<Option<VersioningOverride>> {
    let Ok(raw) = std::env::var("SITE_VERSIONING") else {
        return Ok(None);
    };
    let status = match raw.as_str() {
        "Enabled" => VersioningStatus::Enabled,
        "Suspended" => VersioningStatus::Suspended,
        other => anyhow::bail!("invalid SITE_VERSIONING value: {other}"),
    };
    Ok(Some(
        VersioningOverride::builder()
            .versioning_configuration(VersioningConfiguration::with_status(status))
            .build(),
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_owned());
    init_tracing(&log_level)?;

    let stack_name = std::env::var("STACK_NAME").unwrap_or_else(|_| "dev".to_owned());
    let site_name = std::env::var("SITE_NAME").unwrap_or_else(|_| "site".to_owned());

    let args = WebsiteBucketArgs {
        content: std::env::var("SITE_CONTENT").ok(),
        versioning: versioning_from_env()?,
    };

    let stack = Stack::new(stack_name);
    let s3 = S3Provider::new(S3Config::from_env());

    let site = WebsiteBucket::new(&stack, &s3, &site_name, args, ResourceOptions::default())
        .context("failed to declare the website bucket")?;

    let summary = stack.deploy().await?;
    info!(
        stack = %stack.name(),
        resources = summary.created.len(),
        "deployment complete"
    );

    let url = site.url.get()?;
    println!("url: http://{url}");
    Ok(())
}
