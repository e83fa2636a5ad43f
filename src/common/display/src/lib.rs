//! Display utilities for Airgraph.
//!
//! Provides plain-text formatting for network listings and statistics.

mod tree;

pub use tree::{DisplayTree, TextTree};

/// Truncate a label to at most `max_len` characters, ending in `...` when cut.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Indent a multi-line string.
pub fn indent(s: &str, prefix: &str) -> String {
    s.lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render `label: value` rows with the values aligned in one column.
pub fn key_value_table<K, V>(rows: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: std::fmt::Display,
{
    let width = rows
        .iter()
        .map(|(key, _)| key.as_ref().chars().count())
        .max()
        .unwrap_or(0);
    rows.iter()
        .map(|(key, value)| {
            let label = format!("{}:", key.as_ref());
            format!("{label:<width$}  {value}", width = width + 1)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
