//! Object seeding.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use rustform_core::{Provision, Resolver};
use rustform_s3_model::BucketObjectArgs;

use crate::state::S3ServiceState;

/// Stores an object body and resolves its `etag` output.
pub(crate) struct CreateBucketObject {
    pub(crate) state: Arc<S3ServiceState>,
    pub(crate) args: BucketObjectArgs,
    pub(crate) etag: Resolver<String>,
}

#[async_trait]
impl Provision for CreateBucketObject {
    async fn create(self: Box<Self>) -> anyhow::Result<()> {
        let bucket = self.args.bucket.resolve()?;
        let content = Bytes::from(self.args.content.into_bytes());
        let etag =
            self.state
                .put_object(&bucket, &self.args.key, content, self.args.content_type)?;
        self.etag.resolve(etag);
        Ok(())
    }
}
