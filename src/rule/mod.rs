//! Adapter exposing the document checksums as named validation rules.
//!
//! A rule binds a field name to a [DocumentType] and renders a message such as
//! `"cpf must be a valid CPF."` when the value of that field is rejected.

mod config;
mod error;
mod metrics;


pub use config::DocumentRuleConfig;
pub use error::{DocumentValidationError, RuleConfigError};

use crate::DocumentType;
use self::metrics::RuleMetrics;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::hash::BuildHasher;

/// A record whose fields can be looked up by name.
pub trait FieldSource {
    /// The string value of a field, or `None` if it is missing or not a string.
    fn get_field(&self, name: &str) -> Option<&str>;
}

impl FieldSource for BTreeMap<String, String> {
    fn get_field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<S: BuildHasher> FieldSource for HashMap<String, String, S> {
    fn get_field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl FieldSource for serde_json::Value {
    fn get_field(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(serde_json::Value::as_str)
    }
}

pub struct DocumentRule {
    field: String,
    document_type: DocumentType,
    message: String,
    metrics: RuleMetrics,
}

impl fmt::Debug for DocumentRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentRule")
            .field("field", &self.field)
            .field("document_type", &self.document_type)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl DocumentRule {
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    /// The rendered message reported when a value is rejected.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Validate a single value. A missing value is rejected like an invalid one.
    pub fn check(&self, value: Option<&str>) -> Result<(), DocumentValidationError> {
        self.metrics.checks.increment(1);

        if self.document_type.is_valid(value) {
            Ok(())
        } else {
            self.metrics.rejections.increment(1);
            Err(DocumentValidationError {
                field: self.field.clone(),
                document_type: self.document_type,
                message: self.message.clone(),
            })
        }
    }

    /// Validate the field targeted by this rule in `source`.
    pub fn check_field(&self, source: &impl FieldSource) -> Result<(), DocumentValidationError> {
        self.check(source.get_field(&self.field))
    }
}

/// Rules evaluated together against the same record.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<DocumentRule>,
}

impl RuleSet {
    pub fn new(configs: &[DocumentRuleConfig]) -> Result<Self, RuleConfigError> {
        let mut seen = HashSet::new();
        let mut rules = Vec::with_capacity(configs.len());
        for config in configs {
            if !seen.insert((config.field.as_str(), config.document_type)) {
                return Err(RuleConfigError::DuplicateRule(config.field.clone()));
            }
            rules.push(config.build()?);
        }
        Ok(RuleSet { rules })
    }

    pub fn rules(&self) -> &[DocumentRule] {
        &self.rules
    }

    /// Run every rule against `source`, returning the rejections in rule order.
    /// An empty result means the record is valid.
    pub fn validate(&self, source: &impl FieldSource) -> Vec<DocumentValidationError> {
        self.rules
            .iter()
            .filter_map(|rule| rule.check_field(source).err())
            .collect()
    }

    pub fn is_valid(&self, source: &impl FieldSource) -> bool {
        self.validate(source).is_empty()
    }
}
