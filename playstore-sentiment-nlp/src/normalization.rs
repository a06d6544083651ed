use playstore_sentiment_core::entity::{CleanedReview, Review};

/// Lowercases `text` and replaces every character other than an ASCII letter
/// or digit with a space. Only the ends are trimmed, inner runs of spaces stay.
pub fn normalize(text: &str) -> String {
    let replaced: String = text.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();

    replaced.trim().to_owned()
}

pub fn clean_reviews(reviews: Vec<Review>) -> Vec<CleanedReview> {
    reviews.into_iter()
        .map(|review| {
            let clean_text = normalize(&review.raw_text);
            review.cleaned(clean_text)
        })
        .collect()
}
