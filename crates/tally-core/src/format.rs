//! Display formatting for counts, names, and day boundaries

use std::time::Duration;

/// Abbreviate a vote count for leaderboard output.
///
/// Counts of 1000 and above render in thousands with one decimal, a comma
/// decimal separator, and a `K` suffix; smaller counts render as-is.
/// Exact halves round up (1250 is `1,3K`).
pub fn abbreviate_count(count: i64) -> String {
    if count >= 1000 {
        let tenths = (count + 50) / 100;
        format!("{},{}K", tenths / 10, tenths % 10)
    } else {
        count.to_string()
    }
}

/// Uppercase the first character and lowercase the rest
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Render a wait such as the time left until the next day bucket, e.g. `5h 07m`
pub fn format_time_until(remaining: Duration) -> String {
    let minutes = remaining.as_secs().div_ceil(60);
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}
