//! Derivation of ordering keys from display tags.

const NUMERIC_WIDTH: usize = 6;

/// Compute the ordering key for a tag value.
///
/// Track and disc numbers keep their leading number zero-padded so that
/// lexical order equals numeric order; dates keep their year. Everything
/// else orders case-insensitively.
pub(crate) fn sort_value(key: &str, value: &str) -> String {
    match key {
        "track" | "disc" => leading_number(value)
            .map(|n| format!("{n:0width$}", width = NUMERIC_WIDTH))
            .unwrap_or_else(|| value.trim().to_lowercase()),
        "date" => {
            let year: String = value.trim().chars().take(4).collect();
            if year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()) {
                year
            } else {
                value.trim().to_lowercase()
            }
        }
        _ => value.trim().to_lowercase(),
    }
}

/// Parse the leading decimal number of values like `"3"` or `"3/12"`.
fn leading_number(value: &str) -> Option<u64> {
    let digits: String = value
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}
