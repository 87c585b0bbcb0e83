//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.

use crate::query::ReleaseQueryItem;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Render query results as plain text, one release per line with its
/// prereleases indented underneath.
///
/// # Example
/// ```text
/// 1.1.0  2023-02-01
///   1.1.0-beta.1  2023-01-15
/// 1.0.0  2023-01-01
/// ```
pub fn format_releases(items: &[ReleaseQueryItem]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&format!(
            "{}  {}\n",
            item.version,
            item.created_at.format("%Y-%m-%d")
        ));
        for prerelease in &item.prereleases {
            out.push_str(&format!(
                "  {}  {}\n",
                prerelease.version,
                prerelease.created_at.format("%Y-%m-%d")
            ));
        }
    }
    out
}

/// Print query results as plain text.
pub fn display_releases(items: &[ReleaseQueryItem]) {
    if items.is_empty() {
        display_status("No releases matched");
        return;
    }
    print!("{}", format_releases(items));
}

/// Format a numbered tag menu.
///
/// # Arguments
/// * `tags` - Tags to list, numbered from 0 in the given order
pub fn format_tag_menu(tags: &[&str]) -> String {
    tags.iter()
        .enumerate()
        .map(|(i, tag)| format!("[{}]  {}", i, tag))
        .collect::<Vec<_>>()
        .join("\n")
}
