use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The document holds nothing the operation can measure (no words or no sentences).
    #[error("cannot compute {operation}: document has no {unit}")]
    EmptyDocument {
        operation: &'static str,
        unit: &'static str,
    },
}

impl AnalysisError {
    pub(crate) fn no_words(operation: &'static str) -> Self {
        Self::EmptyDocument {
            operation,
            unit: "words",
        }
    }

    pub(crate) fn no_sentences(operation: &'static str) -> Self {
        Self::EmptyDocument {
            operation,
            unit: "sentences",
        }
    }
}
