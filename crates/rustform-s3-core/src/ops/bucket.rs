//! Bucket creation.

use std::sync::Arc;

use async_trait::async_trait;

use rustform_core::{Provision, Resolver};

use crate::state::S3ServiceState;

/// Creates the base bucket and resolves its `bucket` and `arn` outputs.
pub(crate) struct CreateBucket {
    pub(crate) state: Arc<S3ServiceState>,
    pub(crate) physical_name: String,
    pub(crate) region: String,
    pub(crate) bucket: Resolver<String>,
    pub(crate) arn: Resolver<String>,
}

#[async_trait]
impl Provision for CreateBucket {
    async fn create(self: Box<Self>) -> anyhow::Result<()> {
        let bucket = self.state.create_bucket(&self.physical_name, &self.region)?;
        self.bucket.resolve(bucket.bucket.clone());
        self.arn.resolve(bucket.arn.clone());
        Ok(())
    }
}
