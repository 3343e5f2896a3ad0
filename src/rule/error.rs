use crate::DocumentType;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum RuleConfigError {
    #[error("Rules must target a non-empty field name")]
    EmptyFieldName,

    #[error("Custom validation messages must not be empty")]
    EmptyMessage,

    #[error("The field `{0}` already has a rule for this document type")]
    DuplicateRule(String),
}

/// A value rejected by a document rule. Displays as the rendered validation message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DocumentValidationError {
    pub field: String,
    pub document_type: DocumentType,
    pub message: String,
}
