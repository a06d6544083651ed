use crate::entity::{AppDetails, Review};

/// External service returning the most recent reviews of an application.
#[allow(async_fn_in_trait)]
pub trait ReviewSource {
    /// Returns up to `count` newest reviews, or an empty vector when the
    /// response carries no usable records.
    async fn fetch_reviews(&self, app_id: &str, count: usize) -> anyhow::Result<Vec<Review>>;
}

/// External service returning store metadata of an application.
#[allow(async_fn_in_trait)]
pub trait AppMetadataSource {
    async fn app_details(&self, app_id: &str) -> anyhow::Result<AppDetails>;
}
