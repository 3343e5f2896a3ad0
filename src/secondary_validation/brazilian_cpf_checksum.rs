use crate::check_digit::{calculate_digit, cpf_char_value, digit_char};
use crate::normalization::normalize;
use crate::secondary_validation::{all_chars_equal, Validator};
use std::convert::identity;
use std::iter::once;

pub struct BrazilianCpfChecksum;

const BRAZILIAN_CPF_DIGIT_COUNT: usize = 11;
const BRAZILIAN_CPF_BASE_LENGTH: usize = BRAZILIAN_CPF_DIGIT_COUNT - 2;

pub const CPF_FIRST_DIGIT_WEIGHTS: [u32; BRAZILIAN_CPF_BASE_LENGTH] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
pub const CPF_SECOND_DIGIT_WEIGHTS: [u32; BRAZILIAN_CPF_BASE_LENGTH + 1] =
    [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Returns true if `input` is a well-formed CPF with matching check digits.
///
/// Any non-numeric char is ignored, so both `529.982.247-25` and `52998224725` are accepted.
/// Numeric chars outside of `0-9` count toward the length but always reject.
/// `None`, empty and whitespace-only inputs are rejected.
pub fn cpf_is_valid<'a>(input: impl Into<Option<&'a str>>) -> bool {
    // https://pt.wikipedia.org/wiki/Cadastro_de_Pessoas_F%C3%ADsicas#C%C3%A1lculo_do_d%C3%ADgito_verificador
    let digits = normalize(input.into(), |c| c.is_numeric(), identity);
    if digits.chars().count() != BRAZILIAN_CPF_DIGIT_COUNT {
        return false;
    }

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    // Sequences like 111.111.111-11 have valid check digits but are never issued
    if all_chars_equal(&digits) {
        return false;
    }

    let (base, actual) = digits.split_at(BRAZILIAN_CPF_BASE_LENGTH);
    let v1 = digit_char(calculate_digit(
        base.chars(),
        &CPF_FIRST_DIGIT_WEIGHTS,
        cpf_char_value,
    ));
    let v2 = digit_char(calculate_digit(
        base.chars().chain(once(v1)),
        &CPF_SECOND_DIGIT_WEIGHTS,
        cpf_char_value,
    ));

    actual.chars().eq([v1, v2])
}

impl Validator for BrazilianCpfChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        cpf_is_valid(candidate)
    }
}

#[cfg(test)]
mod test {
    use crate::secondary_validation::*;

    #[test]
    fn test_valid_brazilian_cpf_ids() {
        let valid_ids = vec![
            "529.982.247-25",
            "52998224725",
            "123.456.789-09",
            "012.345.678-90",
            "083.358.948-25",
            // separators are not checked
            " 529 982 247 25 ",
            "529/982/247.25",
            // letters are not numeric, whatever the script
            "529.982.247-25ñ",
            "CPF 529.982.247-25",
        ];
        for id in valid_ids {
            assert!(cpf_is_valid(id), "{id} should be valid");
            assert!(BrazilianCpfChecksum.is_valid_match(id));
        }
    }

    #[test]
    fn test_invalid_brazilian_cpf_ids() {
        let invalid_ids = vec![
            // wrong checksum
            "12345678900",
            "345.675.677-78",
            "123.567.234-67",
            "678.534.123-98",
            "234.546.324-97",
            "567.456.234-90",
            "345.678.342-76",
            "529.982.247-52",
            // Non ascii characters are ignored, the checksum is still wrong
            "567.456.234-90ñô",
            // wrong length
            "123",
            "345.678.3428723-76",
            "529.982.247-251",
            // repeated digits
            "111.111.111-11",
            "00000000000",
            "99999999999",
        ];
        for id in invalid_ids {
            assert!(!cpf_is_valid(id), "{id} should be invalid");
            assert!(!BrazilianCpfChecksum.is_valid_match(id));
        }
    }

    #[test]
    fn test_blank_brazilian_cpf_ids() {
        assert!(!cpf_is_valid(None));
        assert!(!cpf_is_valid(""));
        assert!(!cpf_is_valid("   "));
        assert!(!BrazilianCpfChecksum.is_valid_match(""));
    }

    #[test]
    fn test_formatting_is_irrelevant() {
        assert_eq!(cpf_is_valid("529.982.247-25"), cpf_is_valid("52998224725"));
        assert_eq!(cpf_is_valid("123.456.789-00"), cpf_is_valid("12345678900"));
    }

    #[test]
    fn test_non_ascii_digits_are_rejected() {
        // Arabic-Indic digits are numeric: they are kept, then rejected
        assert!(!cpf_is_valid("529.982.247-25٣"));
        assert!(!cpf_is_valid("٣529.982.247-25"));
        // same length as a valid CPF
        assert!(!cpf_is_valid("529.982.247-2٥"));
        assert!(!cpf_is_valid("٥٢٩٩٨٢٢٤٧٢٥"));
    }

    #[test]
    fn test_letters_are_not_cpf_digits() {
        // letters are dropped, leaving only 10 digits
        assert!(!cpf_is_valid("529.982.247-2A"));
    }
}
