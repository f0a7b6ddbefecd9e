//! S3 provider semantics: naming, regions, and the public-policy guard.

use rustform_core::{ResourceOptions, RustformError};
use rustform_s3_core::{S3Config, S3Provider, S3ProviderError, state::VersioningState};
use rustform_s3_model::{
    BucketArgs, BucketPolicyArgs, BucketVersioningArgs, BucketWebsiteConfigurationArgs,
    IndexDocument, PolicyDocument, VersioningConfiguration, VersioningStatus,
};

use crate::{s3_provider, test_stack, unique_name};

#[tokio::test]
async fn test_should_suffix_physical_names_per_deployment() {
    let s3 = s3_provider();
    let name = unique_name("bucket");

    let first = test_stack("one");
    let a = s3
        .bucket(&first, &name, BucketArgs::default(), ResourceOptions::default())
        .unwrap();
    first.deploy().await.unwrap();

    let second = test_stack("two");
    let b = s3
        .bucket(&second, &name, BucketArgs::default(), ResourceOptions::default())
        .unwrap();
    second.deploy().await.unwrap();

    // Same logical name, distinct physical buckets.
    let a = a.bucket.get().unwrap();
    let b = b.bucket.get().unwrap();
    assert_ne!(a, b);
    assert!(a.starts_with(&format!("{name}-")));
    assert_eq!(s3.state().bucket_count(), 2);
}

#[tokio::test]
async fn test_should_build_website_endpoint_from_configured_region() {
    let stack = test_stack("provider");
    let s3 = S3Provider::new(S3Config {
        region: "eu-west-1".to_owned(),
    });
    let name = unique_name("site");

    let bucket = s3
        .bucket(&stack, &name, BucketArgs::default(), ResourceOptions::default())
        .unwrap();
    let website = s3
        .bucket_website_configuration(
            &stack,
            &name,
            BucketWebsiteConfigurationArgs::builder()
                .bucket(bucket.bucket.clone())
                .index_document(IndexDocument::new("index.html"))
                .build(),
            ResourceOptions::default(),
        )
        .unwrap();

    stack.deploy().await.unwrap();

    let physical = bucket.bucket.get().unwrap();
    assert_eq!(
        website.website_endpoint.get().unwrap(),
        format!("{physical}.s3-website-eu-west-1.amazonaws.com")
    );
}

#[tokio::test]
async fn test_should_block_public_policy_while_guards_are_default() {
    let stack = test_stack("provider");
    let s3 = s3_provider();
    let name = unique_name("site");

    // No public-access-block resource declared: the bucket keeps its
    // default guards and must reject the public policy.
    let bucket = s3
        .bucket(&stack, &name, BucketArgs::default(), ResourceOptions::default())
        .unwrap();
    s3.bucket_policy(
        &stack,
        &name,
        BucketPolicyArgs::builder()
            .bucket(bucket.bucket.clone())
            .policy(
                bucket
                    .arn
                    .map(|arn| PolicyDocument::public_read(format!("{arn}/*")).to_json()),
            )
            .build(),
        ResourceOptions::default(),
    )
    .unwrap();

    let err = stack.deploy().await.unwrap_err();
    let RustformError::Provision { urn, source } = err else {
        panic!("expected a provision error");
    };
    assert!(urn.as_str().contains("aws:s3:BucketPolicy"));
    assert!(
        source
            .downcast_ref::<S3ProviderError>()
            .is_some_and(|err| matches!(err, S3ProviderError::PublicPolicyBlocked { .. }))
    );
}

#[tokio::test]
async fn test_should_apply_versioning_status_to_bucket_state() {
    let stack = test_stack("provider");
    let s3 = s3_provider();
    let name = unique_name("site");

    let bucket = s3
        .bucket(&stack, &name, BucketArgs::default(), ResourceOptions::default())
        .unwrap();
    s3.bucket_versioning(
        &stack,
        &name,
        BucketVersioningArgs::builder()
            .bucket(bucket.bucket.clone())
            .versioning_configuration(VersioningConfiguration::with_status(
                VersioningStatus::Suspended,
            ))
            .build(),
        ResourceOptions::default(),
    )
    .unwrap();

    stack.deploy().await.unwrap();

    let physical = bucket.bucket.get().unwrap();
    let state = s3.state().get_bucket(&physical).unwrap();
    assert_eq!(*state.versioning.read(), VersioningState::Suspended);
}
