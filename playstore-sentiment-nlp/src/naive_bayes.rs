use {
    ndarray::{Array1, Array2, Axis},
    playstore_sentiment_core::{entity::Sentiment, error::PipelineError},
};

pub const DEFAULT_ALPHA: f64 = 1.0;

/// Multinomial Naive Bayes over non-negative feature vectors.
///
/// Only classes seen during fitting can be predicted, so a batch with a
/// single label produces a constant classifier.
#[derive(Debug, Clone)]
pub struct MultinomialNaiveBayes {
    classes: Vec<Sentiment>,
    class_log_prior: Array1<f64>,
    feature_log_prob: Array2<f64>,
}

impl MultinomialNaiveBayes {
    pub fn fit(features: &Array2<f64>, labels: &[Sentiment], alpha: f64) -> Result<Self, PipelineError> {
        if features.nrows() != labels.len() {
            return Err(PipelineError::LengthMismatch {
                rows: features.nrows(),
                labels: labels.len(),
            });
        }

        if labels.is_empty() {
            return Err(PipelineError::EmptyTrainingSet);
        }

        let classes: Vec<Sentiment> = Sentiment::ALL.iter()
            .copied()
            .filter(|class| labels.contains(class))
            .collect();

        let n_features = features.ncols();
        let mut feature_count = Array2::<f64>::zeros((classes.len(), n_features));
        let mut class_count = Array1::<f64>::zeros(classes.len());

        for (row, label) in features.axis_iter(Axis(0)).zip(labels.iter()) {
            // classes holds every label present, lookup cannot miss
            let class_index = classes.iter().position(|class| class == label).unwrap_or_default();
            class_count[class_index] += 1.0;

            let mut counts = feature_count.row_mut(class_index);
            counts += &row;
        }

        let smoothed = feature_count.mapv(|count| count + alpha);
        let smoothed_totals = smoothed.sum_axis(Axis(1)).insert_axis(Axis(1));
        let feature_log_prob = smoothed.mapv(f64::ln) - smoothed_totals.mapv(f64::ln);

        let total = labels.len() as f64;
        let class_log_prior = class_count.mapv(|count| (count / total).ln());

        Ok(Self {
            classes,
            class_log_prior,
            feature_log_prob,
        })
    }

    pub fn classes(&self) -> &[Sentiment] {
        &self.classes
    }

    /// Joint log likelihood, one row per sample and one column per class.
    pub fn joint_log_likelihood(&self, features: &Array2<f64>) -> Array2<f64> {
        features.dot(&self.feature_log_prob.t()) + &self.class_log_prior
    }

    /// The most likely class per row. Ties go to the class listed first.
    pub fn predict(&self, features: &Array2<f64>) -> Vec<Sentiment> {
        self.joint_log_likelihood(features)
            .axis_iter(Axis(0))
            .map(|scores| {
                let mut best = 0;
                for (index, score) in scores.iter().enumerate() {
                    if *score > scores[best] {
                        best = index;
                    }
                }
                self.classes[best]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        ndarray::array,
    };

    #[test]
    fn separates_disjoint_vocabularies() {
        let features = array![
            [2.0, 0.0],
            [3.0, 0.0],
            [0.0, 2.0],
            [0.0, 4.0],
        ];
        let labels = [Sentiment::Positive, Sentiment::Positive, Sentiment::Negative, Sentiment::Negative];

        let model = MultinomialNaiveBayes::fit(&features, &labels, DEFAULT_ALPHA).unwrap();

        assert_eq!(model.classes(), &[Sentiment::Negative, Sentiment::Positive]);
        assert_eq!(model.predict(&array![[1.0, 0.0], [0.0, 1.0]]), vec![Sentiment::Positive, Sentiment::Negative]);
    }

    #[test]
    fn zero_features_fall_back_to_prior() {
        let features = array![[1.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
        let labels = [Sentiment::Neutral, Sentiment::Neutral, Sentiment::Negative];

        let model = MultinomialNaiveBayes::fit(&features, &labels, DEFAULT_ALPHA).unwrap();

        assert_eq!(model.predict(&array![[0.0, 0.0]]), vec![Sentiment::Neutral]);
    }

    #[test]
    fn equal_priors_tie_to_first_class() {
        let features = array![[1.0, 0.0], [0.0, 1.0]];
        let labels = [Sentiment::Positive, Sentiment::Negative];

        let model = MultinomialNaiveBayes::fit(&features, &labels, DEFAULT_ALPHA).unwrap();

        assert_eq!(model.predict(&array![[0.0, 0.0]]), vec![Sentiment::Negative]);
    }

    #[test]
    fn single_class_is_constant() {
        let features = array![[1.0, 0.0], [0.0, 1.0]];
        let labels = [Sentiment::Positive, Sentiment::Positive];

        let model = MultinomialNaiveBayes::fit(&features, &labels, DEFAULT_ALPHA).unwrap();

        assert_eq!(model.predict(&array![[5.0, 0.0], [0.0, 0.0], [0.0, 9.0]]), vec![Sentiment::Positive; 3]);
    }

    #[test]
    fn likelihood_rows_are_normalisable() {
        let features = array![[1.0, 1.0, 0.0], [0.0, 1.0, 1.0], [1.0, 0.0, 1.0]];
        let labels = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

        let model = MultinomialNaiveBayes::fit(&features, &labels, DEFAULT_ALPHA).unwrap();
        let jll = model.joint_log_likelihood(&features);

        assert_eq!(jll.dim(), (3, 3));
        assert!(jll.iter().all(|v| v.is_finite() && *v < 0.0));
    }

    #[test]
    fn mismatched_labels_are_rejected() {
        let features = array![[1.0, 0.0], [0.0, 1.0]];

        assert_eq!(
            MultinomialNaiveBayes::fit(&features, &[Sentiment::Positive], DEFAULT_ALPHA).unwrap_err(),
            PipelineError::LengthMismatch { rows: 2, labels: 1 }
        );
    }

    #[test]
    fn empty_labels_are_rejected() {
        let features = Array2::<f64>::zeros((0, 3));
        assert_eq!(
            MultinomialNaiveBayes::fit(&features, &[], DEFAULT_ALPHA).unwrap_err(),
            PipelineError::EmptyTrainingSet
        );
    }
}
