//! Engine behavior exercised through real provider resources.

use rustform_core::{ResourceOptions, RustformError};
use rustform_s3_model::{BucketArgs, BucketObjectArgs};

use crate::{s3_provider, test_stack, unique_name};

#[tokio::test]
async fn test_should_resolve_outputs_only_after_deploy() {
    let stack = test_stack("engine");
    let s3 = s3_provider();
    let name = unique_name("bucket");

    let bucket = s3
        .bucket(&stack, &name, BucketArgs::default(), ResourceOptions::default())
        .unwrap();

    assert!(bucket.bucket.try_get().is_none());
    assert!(matches!(
        bucket.arn.get(),
        Err(RustformError::OutputUnresolved)
    ));

    stack.deploy().await.unwrap();

    let physical = bucket.bucket.get().unwrap();
    assert_eq!(bucket.arn.get().unwrap(), format!("arn:aws:s3:::{physical}"));
}

#[tokio::test]
async fn test_should_create_data_dependents_after_their_source() {
    let stack = test_stack("engine");
    let s3 = s3_provider();
    let name = unique_name("bucket");

    // The object references the bucket's name output, so the engine must
    // create the bucket first even though no depends_on edge was declared.
    let bucket = s3
        .bucket(&stack, &name, BucketArgs::default(), ResourceOptions::default())
        .unwrap();
    let object = s3
        .bucket_object(
            &stack,
            &name,
            BucketObjectArgs::builder()
                .bucket(bucket.bucket.clone())
                .key("index.html")
                .content("body")
                .build(),
            ResourceOptions::default(),
        )
        .unwrap();

    let summary = stack.deploy().await.unwrap();

    assert_eq!(summary.created.len(), 2);
    assert!(summary.created[0].as_str().contains("aws:s3:Bucket::"));
    assert!(summary.created[1].as_str().contains("aws:s3:BucketObject"));
    assert!(!object.etag.get().unwrap().is_empty());
}

#[tokio::test]
async fn test_should_reject_second_deploy_of_the_same_stack() {
    let stack = test_stack("engine");
    let s3 = s3_provider();

    s3.bucket(
        &stack,
        &unique_name("bucket"),
        BucketArgs::default(),
        ResourceOptions::default(),
    )
    .unwrap();

    stack.deploy().await.unwrap();
    assert!(matches!(
        stack.deploy().await,
        Err(RustformError::AlreadyDeployed)
    ));
}

#[tokio::test]
async fn test_should_reject_duplicate_declarations_up_front() {
    let stack = test_stack("engine");
    let s3 = s3_provider();
    let name = unique_name("bucket");

    s3.bucket(&stack, &name, BucketArgs::default(), ResourceOptions::default())
        .unwrap();
    let err = s3
        .bucket(&stack, &name, BucketArgs::default(), ResourceOptions::default())
        .unwrap_err();

    assert!(matches!(err, RustformError::DuplicateResource { .. }));
}
