use {
    std::fmt,
    typed_builder::TypedBuilder,
    serde::{Serialize, Deserialize},
};

/// Sentiment class derived from a star rating.
///
/// Variant order matches the class order of the classifier, so ties resolve
/// toward `Negative`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Negative, Sentiment::Neutral, Sentiment::Positive];

    /// Order used by every summary the dashboard shows.
    pub const DISPLAY_ORDER: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Positive => "positive",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub raw_text: String,
    pub rating: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedReview {
    pub raw_text: String,
    pub clean_text: String,
    pub rating: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledReview {
    pub raw_text: String,
    pub clean_text: String,
    pub rating: i32,
    pub label: Sentiment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictedReview {
    pub raw_text: String,
    pub clean_text: String,
    pub rating: i32,
    pub true_label: Sentiment,
    pub predicted_label: Sentiment,
}

#[derive(TypedBuilder, Debug, Clone, PartialEq)]
pub struct AppDetails {
    #[builder(setter(into))]
    app_id: String,
    #[builder(setter(into))]
    title: String,
    #[builder(default, setter(into))]
    icon: Option<String>,
    #[builder(default, setter(into))]
    description: String,
    #[builder(default, setter(into))]
    genre: Option<String>,
    #[builder(default)]
    score: Option<f64>,
    #[builder(default, setter(into))]
    installs: Option<String>,
}

impl Review {
    pub fn new(raw_text: impl Into<String>, rating: i32) -> Self {
        Self {
            raw_text: raw_text.into(),
            rating,
        }
    }

    pub fn cleaned(self, clean_text: String) -> CleanedReview {
        CleanedReview {
            raw_text: self.raw_text,
            clean_text,
            rating: self.rating,
        }
    }
}

impl CleanedReview {
    pub fn labeled(self, label: Sentiment) -> LabeledReview {
        LabeledReview {
            raw_text: self.raw_text,
            clean_text: self.clean_text,
            rating: self.rating,
            label,
        }
    }
}

impl LabeledReview {
    pub fn predicted(self, predicted_label: Sentiment) -> PredictedReview {
        PredictedReview {
            raw_text: self.raw_text,
            clean_text: self.clean_text,
            rating: self.rating,
            true_label: self.label,
            predicted_label,
        }
    }
}

impl AppDetails {
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    pub fn score(&self) -> Option<f64> {
        self.score
    }

    pub fn installs(&self) -> Option<&str> {
        self.installs.as_deref()
    }

    pub fn installs_or_na(&self) -> &str {
        self.installs().unwrap_or("N/A")
    }

    /// First `max_chars` characters of the description followed by an ellipsis.
    pub fn description_preview(&self, max_chars: usize) -> String {
        let preview: String = self.description.chars().take(max_chars).collect();
        format!("{} ...", preview)
    }
}
