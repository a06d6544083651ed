use playstore_sentiment_core::entity::{CleanedReview, LabeledReview, Sentiment};

pub fn rating_to_label(rating: i32) -> Sentiment {
    if rating <= 2 {
        Sentiment::Negative
    } else if rating == 3 {
        Sentiment::Neutral
    } else {
        Sentiment::Positive
    }
}

pub fn label_reviews(reviews: Vec<CleanedReview>) -> Vec<LabeledReview> {
    reviews.into_iter()
        .map(|review| {
            let label = rating_to_label(review.rating);
            review.labeled(label)
        })
        .collect()
}
