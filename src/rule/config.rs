use crate::rule::error::RuleConfigError;
use crate::rule::metrics::RuleMetrics;
use crate::rule::DocumentRule;
use crate::{DocumentType, Labels};
use serde::{Deserialize, Serialize};

/// Placeholders substituted when rendering a validation message.
pub const FIELD_PLACEHOLDER: &str = "{field}";
pub const DOCUMENT_PLACEHOLDER: &str = "{document}";

pub const DEFAULT_MESSAGE: &str = "{field} must be a valid {document}.";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DocumentRuleConfig {
    pub field: String,
    pub document_type: DocumentType,

    /// Overrides [DEFAULT_MESSAGE]. May use the `{field}` and `{document}` placeholders.
    #[serde(default)]
    pub message: Option<String>,

    /// Extra metric labels, not part of the serialized config.
    #[serde(skip)]
    pub labels: Labels,
}

impl DocumentRuleConfig {
    pub fn new(field: &str, document_type: DocumentType) -> Self {
        Self {
            field: field.to_owned(),
            document_type,
            message: None,
            labels: Labels::default(),
        }
    }

    pub fn cpf(field: &str) -> Self {
        Self::new(field, DocumentType::BrazilianCpf)
    }

    pub fn cnpj(field: &str) -> Self {
        Self::new(field, DocumentType::BrazilianCnpj)
    }

    pub fn message(&self, message: &str) -> Self {
        self.mutate_clone(|x| x.message = Some(message.to_owned()))
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    pub fn build(&self) -> Result<DocumentRule, RuleConfigError> {
        if self.field.trim().is_empty() {
            return Err(RuleConfigError::EmptyFieldName);
        }

        let template = match &self.message {
            Some(message) if message.trim().is_empty() => {
                return Err(RuleConfigError::EmptyMessage);
            }
            Some(message) => message.as_str(),
            None => DEFAULT_MESSAGE,
        };
        let message = template
            .replace(FIELD_PLACEHOLDER, &self.field)
            .replace(DOCUMENT_PLACEHOLDER, self.document_type.acronym());

        Ok(DocumentRule {
            field: self.field.clone(),
            document_type: self.document_type,
            message,
            metrics: RuleMetrics::new(&self.labels.for_rule(&self.field, self.document_type)),
        })
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
