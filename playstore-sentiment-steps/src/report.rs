use {
    std::{collections::HashMap, fmt::Write},
    playstore_sentiment_core::entity::{AppDetails, PredictedReview, Sentiment},
    playstore_sentiment_nlp::tokenization::tokenize,
};

const BAR_WIDTH: usize = 40;
const TABLE_TEXT_WIDTH: usize = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SentimentCounts {
    counts: [usize; 3],
}

impl SentimentCounts {
    pub fn from_predictions(reviews: &[PredictedReview]) -> Self {
        let mut counts = [0; 3];
        for review in reviews {
            counts[review.predicted_label.index()] += 1;
        }
        Self { counts }
    }

    pub fn get(&self, sentiment: Sentiment) -> usize {
        self.counts[sentiment.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Positive, neutral, negative, with zero for classes never predicted.
    pub fn in_display_order(&self) -> Vec<(Sentiment, usize)> {
        Sentiment::DISPLAY_ORDER.iter().map(|sentiment| (*sentiment, self.get(*sentiment))).collect()
    }

    pub fn percentage(&self, sentiment: Sentiment) -> f64 {
        match self.total() {
            0 => 0.0,
            total => 100.0 * self.get(sentiment) as f64 / total as f64,
        }
    }
}

/// Most frequent terms among reviews predicted as `sentiment`, by count and
/// then alphabetically.
pub fn top_terms(reviews: &[PredictedReview], sentiment: Sentiment, limit: usize) -> Vec<(String, usize)> {
    let mut frequencies: HashMap<String, usize> = HashMap::new();

    for review in reviews.iter().filter(|review| review.predicted_label == sentiment) {
        for token in tokenize(&review.clean_text) {
            *frequencies.entry(token).or_insert(0) += 1;
        }
    }

    let mut terms: Vec<_> = frequencies.into_iter().collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    terms.truncate(limit);
    terms
}

pub fn render_statistics(counts: &SentimentCounts) -> String {
    let mut out = String::from("Sentiment statistics\n");
    for (sentiment, count) in counts.in_display_order() {
        let _ = writeln!(out, "  {:<8} : {}", sentiment, count);
    }
    out
}

pub fn render_bar_chart(app_id: &str, counts: &SentimentCounts) -> String {
    let max = counts.in_display_order().iter().map(|(_, count)| *count).max().unwrap_or(0);

    let mut out = format!("Sentiment distribution for {}\n", app_id);
    for (sentiment, count) in counts.in_display_order() {
        let width = if max == 0 { 0 } else { count * BAR_WIDTH / max };
        let _ = writeln!(out, "  {:<8} | {:<pad$} {}", sentiment, "█".repeat(width), count, pad = BAR_WIDTH);
    }
    out
}

pub fn render_shares(counts: &SentimentCounts) -> String {
    let mut out = String::from("Sentiment share\n");
    for (sentiment, _) in counts.in_display_order() {
        let _ = writeln!(out, "  {:<8} : {:.1}%", sentiment, counts.percentage(sentiment));
    }
    out
}

pub fn render_word_cloud(sentiment: Sentiment, terms: &[(String, usize)]) -> String {
    let mut out = format!("Word cloud ({})\n", sentiment);
    if terms.is_empty() {
        out.push_str("  (no terms)\n");
        return out;
    }

    for (term, count) in terms {
        let _ = writeln!(out, "  {:<20} {}", term, count);
    }
    out
}

pub fn render_table(reviews: &[PredictedReview], max_rows: Option<usize>) -> String {
    let mut out = format!(
        "{:>4}  {:>6}  {:<8}  {:<9}  {:<w$}  {}\n",
        "#", "rating", "label", "predicted", "review", "clean text",
        w = TABLE_TEXT_WIDTH,
    );

    let shown = max_rows.unwrap_or(reviews.len()).min(reviews.len());
    for (index, review) in reviews.iter().take(shown).enumerate() {
        let _ = writeln!(
            out,
            "{:>4}  {:>6}  {:<8}  {:<9}  {:<w$}  {}",
            index + 1,
            review.rating,
            review.true_label,
            review.predicted_label,
            truncate(&single_line(&review.raw_text), TABLE_TEXT_WIDTH),
            truncate(&review.clean_text, TABLE_TEXT_WIDTH),
            w = TABLE_TEXT_WIDTH,
        );
    }

    if shown < reviews.len() {
        let _ = writeln!(out, "  ... {} more rows in the export", reviews.len() - shown);
    }
    out
}

pub fn render_app_details(details: &AppDetails, description_chars: usize) -> String {
    let mut out = format!("{} ({})\n", details.title(), details.app_id());
    if let Some(icon) = details.icon() {
        let _ = writeln!(out, "  Icon        : {}", icon);
    }
    let _ = writeln!(out, "  Description : {}", details.description_preview(description_chars));
    let _ = writeln!(out, "  Category    : {}", details.genre().unwrap_or("N/A"));
    let _ = writeln!(out, "  Rating      : {}", details.score().map(|v| v.to_string()).unwrap_or("N/A".to_owned()));
    let _ = writeln!(out, "  Installs    : {}", details.installs_or_na());
    out
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let head: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        playstore_sentiment_core::entity::Review,
    };

    fn predicted(text: &str, rating: i32, label: Sentiment, predicted: Sentiment) -> PredictedReview {
        Review::new(text, rating)
            .cleaned(text.to_lowercase())
            .labeled(label)
            .predicted(predicted)
    }

    fn sample() -> Vec<PredictedReview> {
        vec![
            predicted("mantap bagus", 5, Sentiment::Positive, Sentiment::Positive),
            predicted("bagus sekali mantap", 5, Sentiment::Positive, Sentiment::Positive),
            predicted("aplikasi bagus", 4, Sentiment::Positive, Sentiment::Positive),
            predicted("lemot parah", 1, Sentiment::Negative, Sentiment::Negative),
        ]
    }

    #[test]
    fn counts_list_positive_neutral_negative() {
        let counts = SentimentCounts::from_predictions(&sample());

        assert_eq!(counts.in_display_order(), vec![
            (Sentiment::Positive, 3),
            (Sentiment::Neutral, 0),
            (Sentiment::Negative, 1),
        ]);
        assert_eq!(counts.total(), 4);
        assert!((counts.percentage(Sentiment::Positive) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn empty_counts_have_zero_share() {
        let counts = SentimentCounts::default();
        assert_eq!(counts.percentage(Sentiment::Neutral), 0.0);
        assert!(render_bar_chart("com.whatsapp", &counts).contains("neutral"));
    }

    #[test]
    fn shares_use_one_decimal() {
        let counts = SentimentCounts::from_predictions(&sample()[1..]);
        let shares = render_shares(&counts);

        assert!(shares.contains("positive : 66.7%"));
        assert!(shares.contains("neutral  : 0.0%"));
        assert!(shares.contains("negative : 33.3%"));
    }

    #[test]
    fn top_terms_are_ranked_by_frequency() {
        let terms = top_terms(&sample(), Sentiment::Positive, 2);
        assert_eq!(terms, vec![("bagus".to_owned(), 3), ("mantap".to_owned(), 2)]);
    }

    #[test]
    fn empty_word_cloud_renders_placeholder() {
        let terms = top_terms(&sample(), Sentiment::Neutral, 10);
        assert!(terms.is_empty());
        assert!(render_word_cloud(Sentiment::Neutral, &terms).contains("(no terms)"));
    }

    #[test]
    fn table_truncates_rows_and_text() {
        let mut reviews = sample();
        reviews.push(predicted(&"panjang ".repeat(20), 3, Sentiment::Neutral, Sentiment::Positive));

        let table = render_table(&reviews, Some(2));
        assert_eq!(table.lines().count(), 4);
        assert!(table.contains("3 more rows"));

        let table = render_table(&reviews, None);
        let last = table.lines().nth(5).unwrap();
        assert!(last.ends_with("..."));
        assert!(last.contains("neutral"));
    }

    #[test]
    fn app_details_show_na_for_missing_fields() {
        let details = AppDetails::builder()
            .app_id("com.mobile.legends")
            .title("Mobile Legends: Bang Bang")
            .description("MOBA 5v5")
            .build();

        let rendered = render_app_details(&details, 500);
        assert!(rendered.starts_with("Mobile Legends: Bang Bang (com.mobile.legends)\n"));
        assert!(rendered.contains("Description : MOBA 5v5 ..."));
        assert!(rendered.contains("Installs    : N/A"));
        assert!(!rendered.contains("Icon"));
    }
}
