use crate::domain::constants::{
    FIELD_STATUS, FIELD_SUMMARY, FIELD_WINDOW_CHARS, HEADER_WINDOW_CHARS, INDEX_STATUS_LINES,
    INDEX_SUMMARY_LINES, RECOGNIZED_FIELDS,
};
use crate::domain::models::MetadataFields;
use regex::Regex;
use std::sync::OnceLock;

static FIELD_REGEXES: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();

fn field_regexes() -> &'static [(&'static str, Regex)] {
    FIELD_REGEXES.get_or_init(|| {
        RECOGNIZED_FIELDS
            .iter()
            .map(|key| {
                let pattern = format!(r"(?m)^{}:[ \t]*(.+?)[ \t\r]*$", regex::escape(key));
                let re = Regex::new(&pattern).expect("Invalid header field regex");
                (*key, re)
            })
            .collect()
    })
}

/// First `max_chars` characters of `text`.
pub fn lead_window(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

fn has_field_line(window: &str, key: &str) -> bool {
    let prefix = format!("{key}:");
    window.lines().any(|line| line.starts_with(&prefix))
}

pub fn has_status_summary(text: &str) -> bool {
    let head = lead_window(text, HEADER_WINDOW_CHARS);
    has_field_line(head, FIELD_STATUS) && has_field_line(head, FIELD_SUMMARY)
}

pub fn extract_fields(text: &str) -> MetadataFields {
    let head = lead_window(text, FIELD_WINDOW_CHARS);
    let mut fields = MetadataFields::new();
    for (key, re) in field_regexes() {
        if let Some(value) = re.captures(head).and_then(|c| c.get(1)) {
            let value = value.as_str().trim();
            if !value.is_empty() {
                fields.insert(*key, value.to_string());
            }
        }
    }
    fields
}

fn first_field_in_lines(text: &str, key: &str, max_lines: usize) -> Option<String> {
    let prefix = format!("{key}:");
    text.lines()
        .take(max_lines)
        .find_map(|line| line.strip_prefix(&prefix))
        .map(|rest| rest.trim().to_string())
}

fn strip_markup(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, '`' | '*' | '_')).collect()
}

/// Status and one-line description as shown in the docs index.
pub fn status_and_description(text: &str) -> (Option<String>, Option<String>) {
    let status = first_field_in_lines(text, FIELD_STATUS, INDEX_STATUS_LINES)
        .filter(|s| !s.is_empty());

    if let Some(summary) = first_field_in_lines(text, FIELD_SUMMARY, INDEX_SUMMARY_LINES)
        .filter(|s| !s.is_empty())
    {
        return (status, Some(strip_markup(&summary)).filter(|d| !d.is_empty()));
    }

    let status_prefix = format!("{FIELD_STATUS}:");
    let summary_prefix = format!("{FIELD_SUMMARY}:");
    let description = text
        .lines()
        .map(str::trim)
        .find(|line| {
            !line.is_empty()
                && !line.starts_with('#')
                && !line.starts_with(&status_prefix)
                && !line.starts_with(&summary_prefix)
        })
        .map(strip_markup)
        .filter(|d| !d.is_empty());

    (status, description)
}
