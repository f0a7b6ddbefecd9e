//! The WebsiteBucket component resource.

use tracing::debug;
use typed_builder::TypedBuilder;

use rustform_core::{Output, ResourceId, ResourceOptions, ResourceType, RustformResult, Stack};
use rustform_s3_core::S3Provider;
use rustform_s3_model::{
    BucketArgs, BucketObjectArgs, BucketOwnershipControlsArgs, BucketPolicyArgs,
    BucketPublicAccessBlockArgs, BucketVersioningArgs, BucketWebsiteConfigurationArgs,
    IndexDocument, ObjectOwnership, OwnershipControlsRule, PolicyDocument,
    VersioningConfiguration,
};

/// Type token for the component resource.
pub const WEBSITE_BUCKET: ResourceType = ResourceType::from_static("rustform:web:WebsiteBucket");

/// Body seeded into the index document when no content is supplied.
pub const DEFAULT_CONTENT: &str = "Hello, World!";

/// Key and index-document suffix of the seeded object.
const INDEX_DOCUMENT: &str = "index.html";

/// Content type of the seeded object.
const CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Arguments for [`WebsiteBucket`].
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct WebsiteBucketArgs {
    /// Body of the seeded index document. Used verbatim when present (an
    /// empty string seeds an empty object); [`DEFAULT_CONTENT`] otherwise.
    #[builder(default, setter(strip_option, into))]
    pub content: Option<String>,
    /// Versioning override. A versioning resource is declared only when a
    /// status value is present all the way down the optional chain.
    #[builder(default, setter(strip_option))]
    pub versioning: Option<VersioningOverride>,
}

/// Partial versioning resource arguments accepted by the component.
#[derive(Debug, Clone, Copy, Default, TypedBuilder)]
pub struct VersioningOverride {
    /// The versioning configuration, if any.
    #[builder(default, setter(strip_option))]
    pub versioning_configuration: Option<VersioningConfiguration>,
}

/// A static-website bucket with a public-read policy.
///
/// All sub-resources are owned children of the component and share its
/// logical name. The one ordering constraint not implied by data flow —
/// the public policy must not be applied before ownership controls and the
/// public access block — is asserted as an explicit `depends_on` edge on
/// the policy declaration.
#[derive(Debug, Clone)]
pub struct WebsiteBucket {
    id: ResourceId,
    /// The bucket's website endpoint, resolved after deployment.
    pub url: Output<String>,
}

impl WebsiteBucket {
    /// Declare the component and its sub-resources on `stack`.
    ///
    /// # Errors
    /// Fails if any declaration is rejected by the stack (empty name,
    /// duplicate `(type, name)` pair). Provider failures surface later,
    /// from `deploy`, unchanged.
    pub fn new(
        stack: &Stack,
        s3: &S3Provider,
        name: &str,
        args: WebsiteBucketArgs,
        options: ResourceOptions,
    ) -> RustformResult<Self> {
        let scope = stack.component(WEBSITE_BUCKET, name, options)?;

        let bucket = s3.bucket(stack, name, BucketArgs::default(), scope.child_options())?;

        let website = s3.bucket_website_configuration(
            stack,
            name,
            BucketWebsiteConfigurationArgs::builder()
                .bucket(bucket.bucket.clone())
                .index_document(IndexDocument::new(INDEX_DOCUMENT))
                .build(),
            scope.child_options(),
        )?;

        let content = args
            .content
            .unwrap_or_else(|| DEFAULT_CONTENT.to_owned());
        s3.bucket_object(
            stack,
            name,
            BucketObjectArgs::builder()
                .bucket(bucket.bucket.clone())
                .key(INDEX_DOCUMENT)
                .content(content)
                .content_type(CONTENT_TYPE)
                .build(),
            scope.child_options(),
        )?;

        // A versioning resource is declared only for an explicit status;
        // an override without one declares nothing, not a disabled state.
        let status = args
            .versioning
            .and_then(|versioning| versioning.versioning_configuration)
            .and_then(|configuration| configuration.status);
        if let Some(status) = status {
            s3.bucket_versioning(
                stack,
                name,
                BucketVersioningArgs::builder()
                    .bucket(bucket.bucket.clone())
                    .versioning_configuration(VersioningConfiguration::with_status(status))
                    .build(),
                scope.child_options(),
            )?;
        }

        let ownership_controls = s3.bucket_ownership_controls(
            stack,
            name,
            BucketOwnershipControlsArgs::builder()
                .bucket(bucket.bucket.clone())
                .rule(OwnershipControlsRule {
                    object_ownership: ObjectOwnership::ObjectWriter,
                })
                .build(),
            scope.child_options(),
        )?;

        let access_block = s3.bucket_public_access_block(
            stack,
            name,
            BucketPublicAccessBlockArgs::builder()
                .bucket(bucket.bucket.clone())
                .block_public_acls(false)
                .build(),
            scope.child_options(),
        )?;

        let policy = bucket
            .arn
            .map(|arn| PolicyDocument::public_read(format!("{arn}/*")).to_json());
        s3.bucket_policy(
            stack,
            name,
            BucketPolicyArgs::builder()
                .bucket(bucket.bucket.clone())
                .policy(policy)
                .build(),
            scope
                .child_options()
                .with_depends_on([ownership_controls.id(), access_block.id()]),
        )?;

        let url = website.website_endpoint.clone();
        scope.register_output("url", &url);
        debug!(component = %name, "website bucket declared");

        Ok(Self {
            id: scope.id(),
            url,
        })
    }

    /// The component's resource id.
    #[must_use]
    pub fn id(&self) -> ResourceId {
        self.id
    }
}
