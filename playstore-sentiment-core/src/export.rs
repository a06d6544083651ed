use {
    std::{fs, path::{Path, PathBuf}},
    anyhow::{Context, Result},
    serde::{Serialize, Deserialize},
    tracing::info,
    crate::entity::{PredictedReview, Sentiment},
};

pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// One line of the results table, as exported.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub review: String,
    pub rating: i32,
    pub clean_text: String,
    pub label: Sentiment,
    pub predicted_label: Sentiment,
}

/// Downloadable file produced from the results table.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    file_name: String,
    content_type: &'static str,
    data: Vec<u8>,
}

impl From<&PredictedReview> for ResultRow {
    fn from(review: &PredictedReview) -> Self {
        Self {
            review: review.raw_text.clone(),
            rating: review.rating,
            clean_text: review.clean_text.clone(),
            label: review.true_label,
            predicted_label: review.predicted_label,
        }
    }
}

impl ExportArtifact {
    pub fn csv(file_name: &str, reviews: &[PredictedReview]) -> Result<Self> {
        Ok(Self {
            file_name: file_name.to_owned(),
            content_type: CSV_CONTENT_TYPE,
            data: to_csv(reviews)?,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        self.content_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;

        let path = dir.join(&self.file_name);
        fs::write(&path, &self.data)
            .with_context(|| format!("failed to write {}", path.display()))?;

        info!("exported {} bytes to {}", self.data.len(), path.display());
        Ok(path)
    }
}

pub fn to_csv(reviews: &[PredictedReview]) -> Result<Vec<u8>> {
    let mut output_data = Vec::new();

    {
        let mut csv_writer = csv::Writer::from_writer(&mut output_data);
        for review in reviews {
            csv_writer.serialize(ResultRow::from(review))
                .context("failed to serialize result row")?;
        }
        csv_writer.flush().context("failed to flush csv export")?;
    }

    Ok(output_data)
}

pub fn from_csv(data: &[u8]) -> Result<Vec<ResultRow>> {
    let mut reader = csv::Reader::from_reader(data);
    reader.deserialize()
        .map(|row| row.context("failed to parse result row"))
        .collect()
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::entity::Review,
    };

    fn predicted(raw: &str, clean: &str, rating: i32, label: Sentiment, predicted: Sentiment) -> PredictedReview {
        Review::new(raw, rating)
            .cleaned(clean.to_owned())
            .labeled(label)
            .predicted(predicted)
    }

    fn sample() -> Vec<PredictedReview> {
        vec![
            predicted("Bagus, tapi \"lemot\"", "bagus  tapi  lemot", 4, Sentiment::Positive, Sentiment::Positive),
            predicted("Sering force close,\nkecewa", "sering force close  kecewa", 1, Sentiment::Negative, Sentiment::Negative),
            predicted("Biasa aja 😐", "biasa aja", 3, Sentiment::Neutral, Sentiment::Positive),
        ]
    }

    #[test]
    fn header_lists_result_columns() {
        let data = to_csv(&sample()).unwrap();
        let text = String::from_utf8(data).unwrap();

        assert!(text.starts_with("review,rating,clean_text,label,predicted_label\n"));
        assert!(text.contains(",3,biasa aja,neutral,positive\n"));
    }

    #[test]
    fn export_parses_back_to_same_rows() {
        let reviews = sample();
        let rows = from_csv(&to_csv(&reviews).unwrap()).unwrap();

        assert_eq!(rows.len(), reviews.len());
        for (row, review) in rows.iter().zip(reviews.iter()) {
            assert_eq!(row.review, review.raw_text);
            assert_eq!(row.clean_text, review.clean_text);
            assert_eq!(row.rating, review.rating);
            assert_eq!(row.predicted_label, review.predicted_label);
        }
    }

    #[test]
    fn artifact_is_written_under_fixed_name() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = ExportArtifact::csv("hasil_sentimen.csv", &sample()).unwrap();

        assert_eq!(artifact.content_type(), "text/csv");

        let path = artifact.write_to_dir(&dir.path().join("out")).unwrap();
        assert_eq!(path.file_name().unwrap(), "hasil_sentimen.csv");
        assert_eq!(fs::read(&path).unwrap(), artifact.data());
    }

    #[test]
    fn empty_table_exports_nothing() {
        assert!(to_csv(&[]).unwrap().is_empty());
        assert!(from_csv(b"").unwrap().is_empty());
    }
}
