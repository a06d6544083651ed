use {
    tracing::info,
    playstore_sentiment_core::{
        entity::{LabeledReview, PredictedReview, Sentiment},
        error::PipelineError,
    },
    crate::{
        naive_bayes::{MultinomialNaiveBayes, DEFAULT_ALPHA},
        tfidf::TfIdfVectorizer,
    },
};

/// Vectorizer and classifier fitted together on one batch of reviews.
#[derive(Debug, Clone)]
pub struct SentimentModel {
    vectorizer: TfIdfVectorizer,
    classifier: MultinomialNaiveBayes,
}

pub fn train(reviews: &[LabeledReview]) -> Result<SentimentModel, PipelineError> {
    let texts: Vec<&str> = reviews.iter().map(|review| review.clean_text.as_str()).collect();
    let labels: Vec<Sentiment> = reviews.iter().map(|review| review.label).collect();

    let vectorizer = TfIdfVectorizer::fit(&texts)?;
    let features = vectorizer.transform(&texts);
    let classifier = MultinomialNaiveBayes::fit(&features, &labels, DEFAULT_ALPHA)?;

    info!(
        "fitted sentiment model on {} reviews ({} terms, classes: {:?})",
        reviews.len(),
        vectorizer.n_terms(),
        classifier.classes(),
    );

    Ok(SentimentModel {
        vectorizer,
        classifier,
    })
}

impl SentimentModel {
    pub fn classes(&self) -> &[Sentiment] {
        self.classifier.classes()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.n_terms()
    }

    /// One label per text, in input order.
    pub fn predict<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Sentiment> {
        let features = self.vectorizer.transform(texts);
        self.classifier.predict(&features)
    }

    pub fn predict_reviews(&self, reviews: Vec<LabeledReview>) -> Vec<PredictedReview> {
        let texts: Vec<&str> = reviews.iter().map(|review| review.clean_text.as_str()).collect();
        let predictions = self.predict(&texts);

        reviews.into_iter()
            .zip(predictions)
            .map(|(review, predicted)| review.predicted(predicted))
            .collect()
    }
}
