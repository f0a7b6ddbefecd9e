//! WebsiteBucket: a static-website S3 bucket component.
//!
//! Declares a bucket configured to serve static content over its website
//! endpoint, with sane security defaults for a public site: ownership
//! controls set to `ObjectWriter`, the public access block relaxed for
//! ACLs, and a public-read bucket policy applied only after both are in
//! place. Optionally seeds an index document and enables versioning.

mod component;

pub use component::{
    DEFAULT_CONTENT, VersioningOverride, WEBSITE_BUCKET, WebsiteBucket, WebsiteBucketArgs,
};
