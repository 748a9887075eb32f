/// Canonicalize free text for comparison.
///
/// Lower-cases, drops everything except `a-z`, `0-9` and whitespace,
/// collapses whitespace runs to one space and trims. Total and idempotent.
pub fn normalize(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}
