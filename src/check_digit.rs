/// Modulus of the Receita Federal check digit algorithm, shared by CPF and CNPJ.
pub const MODULUS: u32 = 11;

/// Value of the first letter in the alphanumeric CNPJ alphabet ('A' = 17, ..., 'Z' = 42).
const CNPJ_FIRST_LETTER_VALUE: u32 = 17;

/// Compute a single modulo-11 check digit.
///
/// Every char value is multiplied by the weight at the same position and the products
/// are summed. A remainder below 2 yields 0, any other remainder `r` yields `11 - r`,
/// so the result is always in `0..=9`.
///
/// Pairing stops at the shorter of `sequence` and `weights`: callers are expected to
/// provide a weight per char.
pub fn calculate_digit(
    sequence: impl IntoIterator<Item = char>,
    weights: &[u32],
    char_value: impl Fn(char) -> u32,
) -> u32 {
    let sum: u32 = sequence
        .into_iter()
        .zip(weights)
        .map(|(c, weight)| char_value(c) * weight)
        .sum();

    let remainder = sum % MODULUS;
    if remainder < 2 {
        0
    } else {
        MODULUS - remainder
    }
}

/// Numeric value of a decimal digit, non-digits map to 0.
pub fn cpf_char_value(c: char) -> u32 {
    c.to_digit(10).unwrap_or(0)
}

/// Digits keep their numeric value, uppercase letters are mapped from 17 upwards.
pub fn cnpj_char_value(c: char) -> u32 {
    match c {
        '0'..='9' => c as u32 - '0' as u32,
        'A'..='Z' => c as u32 - 'A' as u32 + CNPJ_FIRST_LETTER_VALUE,
        _ => 0,
    }
}

/// The ascii char of a check digit. Only valid for values in `0..=9`.
pub fn digit_char(digit: u32) -> char {
    char::from_digit(digit, 10).unwrap_or('0')
}
