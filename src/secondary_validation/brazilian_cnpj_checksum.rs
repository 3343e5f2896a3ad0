use crate::check_digit::{calculate_digit, cnpj_char_value, digit_char};
use crate::normalization::normalize;
use crate::secondary_validation::{all_chars_equal, Validator};
use std::iter::once;

pub struct BrazilianCnpjChecksum;

const BRAZILIAN_CNPJ_CHAR_COUNT: usize = 14;
const BRAZILIAN_CNPJ_BASE_LENGTH: usize = BRAZILIAN_CNPJ_CHAR_COUNT - 2;

pub const CNPJ_FIRST_DIGIT_WEIGHTS: [u32; BRAZILIAN_CNPJ_BASE_LENGTH] =
    [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
pub const CNPJ_SECOND_DIGIT_WEIGHTS: [u32; BRAZILIAN_CNPJ_BASE_LENGTH + 1] =
    [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Returns true if `input` is a well-formed CNPJ with matching check digits.
///
/// Both the numeric format (`04.252.011/0001-10`) and the alphanumeric format introduced
/// by Receita Federal for 2026 (`12.ABC.345/01DE-35`) are supported. Letters are case
/// insensitive, but the two check digits are always numeric. Letters and digits outside of
/// `0-9` and `A-Z` count toward the length but always reject.
pub fn cnpj_is_valid<'a>(input: impl Into<Option<&'a str>>) -> bool {
    // https://pt.wikipedia.org/wiki/Cadastro_Nacional_da_Pessoa_Jur%C3%ADdica
    let chars = normalize(input.into(), |c| c.is_alphanumeric(), |c| {
        c.to_ascii_uppercase()
    });
    if chars.chars().count() != BRAZILIAN_CNPJ_CHAR_COUNT {
        return false;
    }

    if !chars
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
    {
        return false;
    }

    let (base, actual) = chars.split_at(BRAZILIAN_CNPJ_BASE_LENGTH);
    if !actual.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    if all_chars_equal(&chars) {
        return false;
    }

    let v1 = digit_char(calculate_digit(
        base.chars(),
        &CNPJ_FIRST_DIGIT_WEIGHTS,
        cnpj_char_value,
    ));
    let v2 = digit_char(calculate_digit(
        base.chars().chain(once(v1)),
        &CNPJ_SECOND_DIGIT_WEIGHTS,
        cnpj_char_value,
    ));

    actual.chars().eq([v1, v2])
}

impl Validator for BrazilianCnpjChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        cnpj_is_valid(candidate)
    }
}
