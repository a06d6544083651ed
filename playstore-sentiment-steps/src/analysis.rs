use {
    anyhow::Result,
    tracing::{info, warn},
    playstore_sentiment_core::{
        entity::PredictedReview,
        error::PipelineError,
        source::ReviewSource,
    },
    playstore_sentiment_nlp::{
        labeling::label_reviews,
        normalization::clean_reviews,
        pipeline::train,
    },
};

/// Result of one analysis request. Nothing here outlives the request.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub app_id: String,
    pub reviews: Vec<PredictedReview>,
    pub vocabulary_size: usize,
}

/// Fetches reviews, labels them from their ratings, fits a classifier on the
/// batch and predicts the same batch.
///
/// A blank app id or an empty fetch halts before any model is fitted.
pub async fn run_analysis<S: ReviewSource>(source: &S, app_id: &str, count: usize) -> Result<Analysis> {
    let app_id = app_id.trim();
    if app_id.is_empty() {
        return Err(PipelineError::EmptyInput.into());
    }

    let reviews = source.fetch_reviews(app_id, count).await?;
    if reviews.is_empty() {
        warn!("no usable reviews for {}, skipping classification", app_id);
        return Err(PipelineError::EmptyDataset { app_id: app_id.to_owned() }.into());
    }

    let labeled = label_reviews(clean_reviews(reviews));
    let model = train(&labeled)?;
    let reviews = model.predict_reviews(labeled);

    info!("classified {} reviews for {}", reviews.len(), app_id);

    Ok(Analysis {
        app_id: app_id.to_owned(),
        reviews,
        vocabulary_size: model.vocabulary_size(),
    })
}

/// Text shown to the user for conditions that halt the pipeline without a
/// technical failure.
pub fn warning_message(err: &PipelineError) -> Option<&'static str> {
    match err {
        PipelineError::EmptyInput => Some("Enter an app id first!"),
        PipelineError::EmptyDataset { .. } => Some("Failed to fetch reviews. The app id may be wrong."),
        _ => None,
    }
}
