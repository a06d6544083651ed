use {
    std::collections::{BTreeSet, HashMap},
    ndarray::{Array1, Array2, Axis},
    playstore_sentiment_core::error::PipelineError,
    crate::tokenization::tokenize,
};

/// Term-frequency times inverse-document-frequency features with a
/// vocabulary learned from the training documents.
///
/// Uses smoothed idf `ln((1 + n) / (1 + df)) + 1`, raw term counts and
/// L2-normalized rows.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    vocabulary: HashMap<String, usize>,
    terms: Vec<String>,
    idf: Array1<f64>,
}

impl TfIdfVectorizer {
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Result<Self, PipelineError> {
        if documents.is_empty() {
            return Err(PipelineError::EmptyTrainingSet);
        }

        let tokenized: Vec<Vec<String>> = documents.iter().map(|doc| tokenize(doc.as_ref())).collect();

        let terms: Vec<String> = tokenized.iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if terms.is_empty() {
            return Err(PipelineError::EmptyVocabulary);
        }

        let vocabulary: HashMap<String, usize> = terms.iter()
            .enumerate()
            .map(|(index, term)| (term.clone(), index))
            .collect();

        let mut doc_freq = Array1::<f64>::zeros(terms.len());
        for tokens in &tokenized {
            let unique: BTreeSet<usize> = tokens.iter().filter_map(|token| vocabulary.get(token).copied()).collect();
            for index in unique {
                doc_freq[index] += 1.0;
            }
        }

        let n_docs = documents.len() as f64;
        let idf = doc_freq.mapv(|df| ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0);

        Ok(Self {
            vocabulary,
            terms,
            idf,
        })
    }

    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// One row per document. Terms outside the vocabulary are ignored, so a
    /// document without known terms becomes a zero row.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Array2<f64> {
        let mut matrix = Array2::<f64>::zeros((documents.len(), self.terms.len()));

        for (mut row, doc) in matrix.axis_iter_mut(Axis(0)).zip(documents.iter()) {
            for token in tokenize(doc.as_ref()) {
                if let Some(&index) = self.vocabulary.get(&token) {
                    row[index] += 1.0;
                }
            }

            row *= &self.idf;

            let norm = row.dot(&row).sqrt();
            if norm > 0.0 {
                row /= norm;
            }
        }

        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_is_sorted_and_skips_short_terms() {
        let vectorizer = TfIdfVectorizer::fit(&["ojek x murah", "murah banget"]).unwrap();
        assert_eq!(vectorizer.terms, &["banget", "murah", "ojek"]);
    }

    #[test]
    fn rare_terms_weigh_more() {
        let vectorizer = TfIdfVectorizer::fit(&["bagus sekali", "bagus lemot", "lemot parah"]).unwrap();
        let index = |term: &str| vectorizer.terms.iter().position(|t| t == term).unwrap();

        assert!(vectorizer.idf[index("sekali")] > vectorizer.idf[index("bagus")]);
        // term present in every document keeps idf of one
        let everywhere = TfIdfVectorizer::fit(&["app", "app"]).unwrap();
        assert!((everywhere.idf[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rows_are_unit_length() {
        let docs = ["aplikasi bagus bagus", "aplikasi lemot"];
        let vectorizer = TfIdfVectorizer::fit(&docs).unwrap();
        let matrix = vectorizer.transform(&docs);

        assert_eq!(matrix.dim(), (2, 3));
        for row in matrix.axis_iter(Axis(0)) {
            assert!((row.dot(&row) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn unseen_terms_give_zero_row() {
        let vectorizer = TfIdfVectorizer::fit(&["aplikasi bagus"]).unwrap();
        let matrix = vectorizer.transform(&["completely unrelated words", ""]);

        assert_eq!(matrix.dim(), (2, 2));
        assert!(matrix.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn empty_inputs_are_rejected() {
        let none: [&str; 0] = [];
        assert_eq!(TfIdfVectorizer::fit(&none).unwrap_err(), PipelineError::EmptyTrainingSet);
        assert_eq!(TfIdfVectorizer::fit(&["a b c", ""]).unwrap_err(), PipelineError::EmptyVocabulary);
    }
}
