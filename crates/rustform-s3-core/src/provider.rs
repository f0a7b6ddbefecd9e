//! The S3 provider: resource constructors and typed resource handles.
//!
//! Constructor methods register a declaration with the [`Stack`] and hand
//! back a typed handle whose output attributes resolve during deployment.
//! Data dependencies are harvested from the argument inputs; callers add
//! explicit `depends_on` edges through [`ResourceOptions`] where ordering is
//! not implied by data flow.

use std::sync::Arc;

use rustform_core::{
    Declaration, Output, ResourceId, ResourceOptions, ResourceType, RustformResult, Stack,
};
use rustform_s3_model::{
    BucketArgs, BucketObjectArgs, BucketOwnershipControlsArgs, BucketPolicyArgs,
    BucketPublicAccessBlockArgs, BucketVersioningArgs, BucketWebsiteConfigurationArgs,
};
use uuid::Uuid;

use crate::config::S3Config;
use crate::ops;
use crate::state::S3ServiceState;

/// Type token for bucket resources.
pub const BUCKET: ResourceType = ResourceType::from_static("aws:s3:Bucket");
/// Type token for website configuration resources.
pub const BUCKET_WEBSITE_CONFIGURATION: ResourceType =
    ResourceType::from_static("aws:s3:BucketWebsiteConfiguration");
/// Type token for object resources.
pub const BUCKET_OBJECT: ResourceType = ResourceType::from_static("aws:s3:BucketObject");
/// Type token for versioning resources.
pub const BUCKET_VERSIONING: ResourceType = ResourceType::from_static("aws:s3:BucketVersioning");
/// Type token for ownership controls resources.
pub const BUCKET_OWNERSHIP_CONTROLS: ResourceType =
    ResourceType::from_static("aws:s3:BucketOwnershipControls");
/// Type token for public access block resources.
pub const BUCKET_PUBLIC_ACCESS_BLOCK: ResourceType =
    ResourceType::from_static("aws:s3:BucketPublicAccessBlock");
/// Type token for bucket policy resources.
pub const BUCKET_POLICY: ResourceType = ResourceType::from_static("aws:s3:BucketPolicy");

/// Handle to a declared bucket.
#[derive(Debug, Clone)]
pub struct Bucket {
    id: ResourceId,
    /// The physical bucket name.
    pub bucket: Output<String>,
    /// The bucket ARN.
    pub arn: Output<String>,
}

impl Bucket {
    /// The bucket's resource id.
    #[must_use]
    pub fn id(&self) -> ResourceId {
        self.id
    }
}

/// Handle to a declared website configuration.
#[derive(Debug, Clone)]
pub struct BucketWebsiteConfiguration {
    id: ResourceId,
    /// The bucket's website endpoint.
    pub website_endpoint: Output<String>,
}

impl BucketWebsiteConfiguration {
    /// The resource id.
    #[must_use]
    pub fn id(&self) -> ResourceId {
        self.id
    }
}

/// Handle to a declared object.
#[derive(Debug, Clone)]
pub struct BucketObject {
    id: ResourceId,
    /// Hex MD5 of the stored body.
    pub etag: Output<String>,
}

impl BucketObject {
    /// The resource id.
    #[must_use]
    pub fn id(&self) -> ResourceId {
        self.id
    }
}

/// Handle to a declared versioning resource.
#[derive(Debug, Clone, Copy)]
pub struct BucketVersioning {
    id: ResourceId,
}

impl BucketVersioning {
    /// The resource id.
    #[must_use]
    pub fn id(&self) -> ResourceId {
        self.id
    }
}

/// Handle to a declared ownership controls resource.
#[derive(Debug, Clone, Copy)]
pub struct BucketOwnershipControls {
    id: ResourceId,
}

impl BucketOwnershipControls {
    /// The resource id.
    #[must_use]
    pub fn id(&self) -> ResourceId {
        self.id
    }
}

/// Handle to a declared public access block resource.
#[derive(Debug, Clone, Copy)]
pub struct BucketPublicAccessBlock {
    id: ResourceId,
}

impl BucketPublicAccessBlock {
    /// The resource id.
    #[must_use]
    pub fn id(&self) -> ResourceId {
        self.id
    }
}

/// Handle to a declared bucket policy resource.
#[derive(Debug, Clone, Copy)]
pub struct BucketPolicy {
    id: ResourceId,
}

impl BucketPolicy {
    /// The resource id.
    #[must_use]
    pub fn id(&self) -> ResourceId {
        self.id
    }
}

/// The in-memory S3 provider.
#[derive(Debug, Clone)]
pub struct S3Provider {
    state: Arc<S3ServiceState>,
    config: S3Config,
}

impl S3Provider {
    /// Create a provider with the given configuration.
    #[must_use]
    pub fn new(config: S3Config) -> Self {
        Self {
            state: Arc::new(S3ServiceState::new()),
            config,
        }
    }

    /// The provider's backing state, for inspection.
    #[must_use]
    pub fn state(&self) -> &Arc<S3ServiceState> {
        &self.state
    }

    /// The configured region.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.config.region
    }

    /// Declare a bucket.
    ///
    /// The physical name is the logical name with a random 8-hex suffix, so
    /// repeated deployments of the same logical name do not collide.
    ///
    /// # Errors
    /// Fails if the declaration is rejected by the stack.
    pub fn bucket(
        &self,
        stack: &Stack,
        name: &str,
        args: BucketArgs,
        options: ResourceOptions,
    ) -> RustformResult<Bucket> {
        let BucketArgs {} = args;
        let (bucket, bucket_resolver) = Output::pending();
        let (arn, arn_resolver) = Output::pending();

        let id = stack.register(Declaration {
            type_token: BUCKET,
            name: name.to_owned(),
            data_deps: Vec::new(),
            options,
            provision: Some(Box::new(ops::bucket::CreateBucket {
                state: Arc::clone(&self.state),
                physical_name: physical_name(name),
                region: self.config.region.clone(),
                bucket: bucket_resolver,
                arn: arn_resolver,
            })),
        })?;

        Ok(Bucket {
            id,
            bucket: bucket.bind(id),
            arn: arn.bind(id),
        })
    }

    /// Declare a website configuration.
    ///
    /// # Errors
    /// Fails if the declaration is rejected by the stack.
    pub fn bucket_website_configuration(
        &self,
        stack: &Stack,
        name: &str,
        args: BucketWebsiteConfigurationArgs,
        options: ResourceOptions,
    ) -> RustformResult<BucketWebsiteConfiguration> {
        let (website_endpoint, endpoint_resolver) = Output::pending();
        let data_deps = args.bucket.resource().into_iter().collect();

        let id = stack.register(Declaration {
            type_token: BUCKET_WEBSITE_CONFIGURATION,
            name: name.to_owned(),
            data_deps,
            options,
            provision: Some(Box::new(ops::bucket_config::CreateWebsiteConfiguration {
                state: Arc::clone(&self.state),
                args,
                website_endpoint: endpoint_resolver,
            })),
        })?;

        Ok(BucketWebsiteConfiguration {
            id,
            website_endpoint: website_endpoint.bind(id),
        })
    }

    /// Declare an object.
    ///
    /// # Errors
    /// Fails if the declaration is rejected by the stack.
    pub fn bucket_object(
        &self,
        stack: &Stack,
        name: &str,
        args: BucketObjectArgs,
        options: ResourceOptions,
    ) -> RustformResult<BucketObject> {
        let (etag, etag_resolver) = Output::pending();
        let data_deps = args.bucket.resource().into_iter().collect();

        let id = stack.register(Declaration {
            type_token: BUCKET_OBJECT,
            name: name.to_owned(),
            data_deps,
            options,
            provision: Some(Box::new(ops::object::CreateBucketObject {
                state: Arc::clone(&self.state),
                args,
                etag: etag_resolver,
            })),
        })?;

        Ok(BucketObject {
            id,
            etag: etag.bind(id),
        })
    }

    /// Declare a versioning resource.
    ///
    /// # Errors
    /// Fails if the declaration is rejected by the stack.
    pub fn bucket_versioning(
        &self,
        stack: &Stack,
        name: &str,
        args: BucketVersioningArgs,
        options: ResourceOptions,
    ) -> RustformResult<BucketVersioning> {
        let data_deps = args.bucket.resource().into_iter().collect();

        let id = stack.register(Declaration {
            type_token: BUCKET_VERSIONING,
            name: name.to_owned(),
            data_deps,
            options,
            provision: Some(Box::new(ops::bucket_config::CreateVersioning {
                state: Arc::clone(&self.state),
                args,
            })),
        })?;

        Ok(BucketVersioning { id })
    }

    /// Declare an ownership controls resource.
    ///
    /// # Errors
    /// Fails if the declaration is rejected by the stack.
    pub fn bucket_ownership_controls(
        &self,
        stack: &Stack,
        name: &str,
        args: BucketOwnershipControlsArgs,
        options: ResourceOptions,
    ) -> RustformResult<BucketOwnershipControls> {
        let data_deps = args.bucket.resource().into_iter().collect();

        let id = stack.register(Declaration {
            type_token: BUCKET_OWNERSHIP_CONTROLS,
            name: name.to_owned(),
            data_deps,
            options,
            provision: Some(Box::new(ops::bucket_config::CreateOwnershipControls {
                state: Arc::clone(&self.state),
                args,
            })),
        })?;

        Ok(BucketOwnershipControls { id })
    }

    /// Declare a public access block resource.
    ///
    /// # Errors
    /// Fails if the declaration is rejected by the stack.
    pub fn bucket_public_access_block(
        &self,
        stack: &Stack,
        name: &str,
        args: BucketPublicAccessBlockArgs,
        options: ResourceOptions,
    ) -> RustformResult<BucketPublicAccessBlock> {
        let data_deps = args.bucket.resource().into_iter().collect();

        let id = stack.register(Declaration {
            type_token: BUCKET_PUBLIC_ACCESS_BLOCK,
            name: name.to_owned(),
            data_deps,
            options,
            provision: Some(Box::new(ops::bucket_config::CreatePublicAccessBlock {
                state: Arc::clone(&self.state),
                args,
            })),
        })?;

        Ok(BucketPublicAccessBlock { id })
    }

    /// Declare a bucket policy resource.
    ///
    /// # Errors
    /// Fails if the declaration is rejected by the stack.
    pub fn bucket_policy(
        &self,
        stack: &Stack,
        name: &str,
        args: BucketPolicyArgs,
        options: ResourceOptions,
    ) -> RustformResult<BucketPolicy> {
        let data_deps = args
            .bucket
            .resource()
            .into_iter()
            .chain(args.policy.resource())
            .collect();

        let id = stack.register(Declaration {
            type_token: BUCKET_POLICY,
            name: name.to_owned(),
            data_deps,
            options,
            provision: Some(Box::new(ops::bucket_config::CreateBucketPolicy {
                state: Arc::clone(&self.state),
                args,
            })),
        })?;

        Ok(BucketPolicy { id })
    }
}

/// Derive a physical bucket name from a logical name.
fn physical_name(logical: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{logical}-{}", &suffix[..8])
}

#[cfg(test)]
mod tests {
    use rustform_s3_model::IndexDocument;

    use super::*;

    #[tokio::test]
    async fn test_should_provision_bucket_and_resolve_outputs() {
        let stack = Stack::new("test");
        let provider = S3Provider::new(S3Config::default());

        let bucket = provider
            .bucket(&stack, "site", BucketArgs::default(), ResourceOptions::default())
            .unwrap();
        assert!(bucket.bucket.try_get().is_none());

        stack.deploy().await.unwrap();

        let physical = bucket.bucket.get().unwrap();
        assert!(physical.starts_with("site-"));
        assert_eq!(physical.len(), "site-".len() + 8);
        assert_eq!(bucket.arn.get().unwrap(), format!("arn:aws:s3:::{physical}"));
        assert_eq!(provider.state().bucket_count(), 1);
    }

    #[tokio::test]
    async fn test_should_resolve_website_endpoint_from_bucket_output() {
        let stack = Stack::new("test");
        let provider = S3Provider::new(S3Config::default());

        let bucket = provider
            .bucket(&stack, "site", BucketArgs::default(), ResourceOptions::default())
            .unwrap();
        let website = provider
            .bucket_website_configuration(
                &stack,
                "site",
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
            format!("{physical}.s3-website-us-east-1.amazonaws.com")
        );
    }

    #[tokio::test]
    async fn test_should_surface_provider_rejections_with_urn() {
        let stack = Stack::new("test");
        let provider = S3Provider::new(S3Config::default());

        // Policy against a bucket that still has its default guards: the
        // deployment fails with the provider's own error as the source.
        let bucket = provider
            .bucket(&stack, "site", BucketArgs::default(), ResourceOptions::default())
            .unwrap();
        provider
            .bucket_policy(
                &stack,
                "site",
                BucketPolicyArgs::builder()
                    .bucket(bucket.bucket.clone())
                    .policy(bucket.arn.map(|arn| {
                        rustform_s3_model::PolicyDocument::public_read(format!("{arn}/*"))
                            .to_json()
                    }))
                    .build(),
                ResourceOptions::default(),
            )
            .unwrap();

        let err = stack.deploy().await.unwrap_err();
        let rustform_core::RustformError::Provision { urn, source } = err else {
            panic!("expected a provision error");
        };
        assert!(urn.as_str().contains("aws:s3:BucketPolicy"));
        assert!(
            source
                .downcast_ref::<crate::S3ProviderError>()
                .is_some_and(|err| matches!(err, crate::S3ProviderError::PublicPolicyBlocked { .. }))
        );
    }
}
