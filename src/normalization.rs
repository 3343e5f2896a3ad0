/// Reduce a raw identifier to the characters relevant for its checksum.
///
/// Absent, empty and whitespace-only inputs all produce an empty string, so callers
/// only need to check the length of the result. Otherwise every char accepted by `keep`
/// is passed through `transform`, preserving the original order.
pub fn normalize(
    input: Option<&str>,
    keep: impl Fn(&char) -> bool,
    transform: impl Fn(char) -> char,
) -> String {
    match input {
        Some(input) if !input.trim().is_empty() => {
            input.chars().filter(keep).map(transform).collect()
        }
        _ => String::new(),
    }
}
