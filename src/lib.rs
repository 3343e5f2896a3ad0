// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod check_digit;
mod normalization;
mod observability;
mod rule;
mod secondary_validation;

// This is the public API of the library
pub use observability::labels::Labels;
pub use rule::{
    DocumentRule, DocumentRuleConfig, DocumentValidationError, FieldSource, RuleConfigError,
    RuleSet,
};
pub use secondary_validation::{
    cnpj_is_valid, cpf_is_valid, BrazilianCnpjChecksum, BrazilianCpfChecksum, DocumentType,
    Validator,
};

#[cfg(any(test, feature = "testing", feature = "bench"))]
pub use crate::{
    check_digit::{calculate_digit, cnpj_char_value, cpf_char_value, MODULUS},
    normalization::normalize,
    secondary_validation::{
        CNPJ_FIRST_DIGIT_WEIGHTS, CNPJ_SECOND_DIGIT_WEIGHTS, CPF_FIRST_DIGIT_WEIGHTS,
        CPF_SECOND_DIGIT_WEIGHTS,
    },
};
