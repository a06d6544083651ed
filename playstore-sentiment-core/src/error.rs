use thiserror::Error;

/// Conditions the analysis pipeline recognises by name.
///
/// Anything else (network failures, unexpected payloads) travels as a plain
/// `anyhow::Error` and is reported as a technical failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("app id must not be blank")]
    EmptyInput,

    #[error("no usable reviews returned for {app_id}")]
    EmptyDataset { app_id: String },

    #[error("cannot fit a classifier on zero documents")]
    EmptyTrainingSet,

    #[error("empty vocabulary: no document contains a term of two or more characters")]
    EmptyVocabulary,

    #[error("{rows} feature rows do not match {labels} labels")]
    LengthMismatch { rows: usize, labels: usize },
}

impl PipelineError {
    /// Whether the pipeline halts with a user-facing warning instead of a failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PipelineError::EmptyInput | PipelineError::EmptyDataset { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_input_and_dataset_errors_are_recoverable() {
        assert!(PipelineError::EmptyInput.is_recoverable());
        assert!(PipelineError::EmptyDataset { app_id: "com.whatsapp".to_owned() }.is_recoverable());
        assert!(!PipelineError::EmptyTrainingSet.is_recoverable());
        assert!(!PipelineError::EmptyVocabulary.is_recoverable());
        assert!(!PipelineError::LengthMismatch { rows: 2, labels: 1 }.is_recoverable());
    }

    #[test]
    fn downcasts_through_anyhow() {
        let err: anyhow::Error = PipelineError::EmptyDataset { app_id: "x.y".to_owned() }.into();
        let err = err.context("analysis failed");

        assert_eq!(
            err.downcast_ref::<PipelineError>(),
            Some(&PipelineError::EmptyDataset { app_id: "x.y".to_owned() })
        );
    }
}
