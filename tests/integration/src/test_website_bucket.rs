//! End-to-end WebsiteBucket scenarios: declare, deploy, inspect.

use rustform_core::{ResourceOptions, ResourceSummary};
use rustform_s3_core::provider;
use rustform_s3_model::{VersioningConfiguration, VersioningStatus};
use rustform_website::{
    DEFAULT_CONTENT, VersioningOverride, WebsiteBucket, WebsiteBucketArgs,
};

use crate::{bucket_from_endpoint, s3_provider, test_stack, unique_name};

fn summary_of(
    stack: &rustform_core::Stack,
    type_token: rustform_core::ResourceType,
) -> ResourceSummary {
    let mut matching = stack.resources_of_type(type_token);
    assert_eq!(matching.len(), 1, "{type_token:?}");
    matching.remove(0)
}

#[tokio::test]
async fn test_should_deploy_a_default_site() {
    let stack = test_stack("website");
    let s3 = s3_provider();
    let name = unique_name("site");

    let site = WebsiteBucket::new(
        &stack,
        &s3,
        &name,
        WebsiteBucketArgs::default(),
        ResourceOptions::default(),
    )
    .unwrap();
    stack.deploy().await.unwrap();

    let url = site.url.get().unwrap();
    assert!(url.ends_with(".s3-website-us-east-1.amazonaws.com"));
    assert!(!url.contains("arn:"));

    let bucket = s3.state().get_bucket(&bucket_from_endpoint(&url)).unwrap();
    let object = bucket.objects.get("index.html").unwrap();
    assert_eq!(object.content.as_ref(), DEFAULT_CONTENT.as_bytes());
    assert_eq!(
        object.content_type.as_deref(),
        Some("text/html; charset=utf-8")
    );
    assert!(bucket.policy.read().is_some());

    // Component plus six children, no versioning resource.
    assert_eq!(stack.resources().len(), 7);
    assert!(stack.resources_of_type(provider::BUCKET_VERSIONING).is_empty());
}

#[tokio::test]
async fn test_should_serve_supplied_content() {
    let stack = test_stack("website");
    let s3 = s3_provider();
    let name = unique_name("site");

    let site = WebsiteBucket::new(
        &stack,
        &s3,
        &name,
        WebsiteBucketArgs::builder().content("<h1>Hi</h1>").build(),
        ResourceOptions::default(),
    )
    .unwrap();
    stack.deploy().await.unwrap();

    let url = site.url.get().unwrap();
    let bucket = s3.state().get_bucket(&bucket_from_endpoint(&url)).unwrap();
    assert_eq!(
        bucket.objects.get("index.html").unwrap().content.as_ref(),
        b"<h1>Hi</h1>"
    );
}

#[tokio::test]
async fn test_should_enable_versioning_when_requested() {
    let stack = test_stack("website");
    let s3 = s3_provider();
    let name = unique_name("site");

    let site = WebsiteBucket::new(
        &stack,
        &s3,
        &name,
        WebsiteBucketArgs::builder()
            .versioning(
                VersioningOverride::builder()
                    .versioning_configuration(VersioningConfiguration::with_status(
                        VersioningStatus::Enabled,
                    ))
                    .build(),
            )
            .build(),
        ResourceOptions::default(),
    )
    .unwrap();
    stack.deploy().await.unwrap();

    assert_eq!(stack.resources().len(), 8);

    let url = site.url.get().unwrap();
    let bucket = s3.state().get_bucket(&bucket_from_endpoint(&url)).unwrap();
    assert_eq!(
        *bucket.versioning.read(),
        rustform_s3_core::state::VersioningState::Enabled
    );
}

#[tokio::test]
async fn test_should_order_the_policy_after_both_guard_resources() {
    let stack = test_stack("website");
    let s3 = s3_provider();

    WebsiteBucket::new(
        &stack,
        &s3,
        &unique_name("site"),
        WebsiteBucketArgs::default(),
        ResourceOptions::default(),
    )
    .unwrap();

    let ownership = summary_of(&stack, provider::BUCKET_OWNERSHIP_CONTROLS);
    let access_block = summary_of(&stack, provider::BUCKET_PUBLIC_ACCESS_BLOCK);
    let policy = summary_of(&stack, provider::BUCKET_POLICY);

    assert!(policy.explicit_depends_on.contains(&ownership.id));
    assert!(policy.explicit_depends_on.contains(&access_block.id));
}

#[tokio::test]
async fn test_should_register_the_url_component_output() {
    let stack = test_stack("website");
    let s3 = s3_provider();

    let site = WebsiteBucket::new(
        &stack,
        &s3,
        &unique_name("site"),
        WebsiteBucketArgs::default(),
        ResourceOptions::default(),
    )
    .unwrap();
    stack.deploy().await.unwrap();

    let outputs = stack.outputs_of(site.id());
    let (name, output) = outputs.first().unwrap();
    assert_eq!(name, "url");
    assert_eq!(output.get().unwrap(), site.url.get().unwrap());
}

#[tokio::test]
async fn test_should_host_multiple_sites_on_one_stack() {
    let stack = test_stack("website");
    let s3 = s3_provider();

    let first = WebsiteBucket::new(
        &stack,
        &s3,
        &unique_name("first"),
        WebsiteBucketArgs::default(),
        ResourceOptions::default(),
    )
    .unwrap();
    let second = WebsiteBucket::new(
        &stack,
        &s3,
        &unique_name("second"),
        WebsiteBucketArgs::builder().content("two").build(),
        ResourceOptions::default(),
    )
    .unwrap();
    stack.deploy().await.unwrap();

    assert_ne!(first.url.get().unwrap(), second.url.get().unwrap());
    assert_eq!(s3.state().bucket_count(), 2);
}
