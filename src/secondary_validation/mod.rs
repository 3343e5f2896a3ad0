mod brazilian_cnpj_checksum;
mod brazilian_cpf_checksum;

pub use crate::secondary_validation::brazilian_cnpj_checksum::{
    cnpj_is_valid, BrazilianCnpjChecksum, CNPJ_FIRST_DIGIT_WEIGHTS, CNPJ_SECOND_DIGIT_WEIGHTS,
};
pub use crate::secondary_validation::brazilian_cpf_checksum::{
    cpf_is_valid, BrazilianCpfChecksum, CPF_FIRST_DIGIT_WEIGHTS, CPF_SECOND_DIGIT_WEIGHTS,
};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, candidate: &str) -> bool;
}

/// The kinds of documents that can be validated, usable in serialized rule configs.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, IntoStaticStr,
)]
#[serde(tag = "type")]
#[strum(serialize_all = "snake_case")]
pub enum DocumentType {
    BrazilianCpf,
    BrazilianCnpj,
}

impl DocumentType {
    /// Same as [Validator::is_valid_match], but also accepts a missing value.
    pub fn is_valid(&self, input: Option<&str>) -> bool {
        match self {
            DocumentType::BrazilianCpf => cpf_is_valid(input),
            DocumentType::BrazilianCnpj => cnpj_is_valid(input),
        }
    }

    /// Short name of the document, as used in validation messages.
    pub fn acronym(&self) -> &'static str {
        match self {
            DocumentType::BrazilianCpf => "CPF",
            DocumentType::BrazilianCnpj => "CNPJ",
        }
    }
}

impl Validator for DocumentType {
    fn is_valid_match(&self, candidate: &str) -> bool {
        match self {
            DocumentType::BrazilianCpf => BrazilianCpfChecksum.is_valid_match(candidate),
            DocumentType::BrazilianCnpj => BrazilianCnpjChecksum.is_valid_match(candidate),
        }
    }
}

/// True if the input has at least one char and all of them are the same.
fn all_chars_equal(input: &str) -> bool {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_chars_equal() {
        assert!(all_chars_equal("1"));
        assert!(all_chars_equal("0000"));
        assert!(!all_chars_equal("0001"));
        assert!(!all_chars_equal(""));
    }

    #[test]
    fn test_document_type_dispatch() {
        assert!(DocumentType::BrazilianCpf.is_valid_match("529.982.247-25"));
        assert!(!DocumentType::BrazilianCpf.is_valid_match("04.252.011/0001-10"));
        assert!(DocumentType::BrazilianCnpj.is_valid_match("04.252.011/0001-10"));
        assert!(!DocumentType::BrazilianCnpj.is_valid_match("529.982.247-25"));

        for document_type in DocumentType::iter() {
            assert!(!document_type.is_valid(None));
            assert!(!document_type.is_valid(Some(" ")));
        }
    }

    #[test]
    fn test_document_type_names() {
        let name: &'static str = DocumentType::BrazilianCpf.into();
        assert_eq!(name, "brazilian_cpf");
        let name: &'static str = DocumentType::BrazilianCnpj.into();
        assert_eq!(name, "brazilian_cnpj");
        assert_eq!(DocumentType::BrazilianCnpj.acronym(), "CNPJ");
    }

    #[test]
    fn test_document_type_serde() {
        let document_type: DocumentType =
            serde_json::from_str(r#"{"type": "BrazilianCnpj"}"#).unwrap();
        assert_eq!(document_type, DocumentType::BrazilianCnpj);
        assert_eq!(
            serde_json::to_string(&DocumentType::BrazilianCpf).unwrap(),
            r#"{"type":"BrazilianCpf"}"#
        );
    }
}
