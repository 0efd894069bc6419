//! Common utilities for document generation.
//!
//! Shared helpers for date formatting, Typst escaping, and filenames.

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("whitespace pattern");
}

/// Format a date in long Indonesian form (e.g., "10 Maret 2025").
///
/// Applied identically to letter, start, and end dates on the form.
pub fn format_tanggal(date: NaiveDate) -> String {
    let months = [
        "Januari",
        "Februari",
        "Maret",
        "April",
        "Mei",
        "Juni",
        "Juli",
        "Agustus",
        "September",
        "Oktober",
        "November",
        "Desember",
    ];

    let day = date.day();
    let month = months[(date.month0() as usize).min(months.len() - 1)];
    let year = date.year();

    format!("{day} {month} {year}")
}

/// Escape special characters for Typst strings.
pub fn escape_typst_string(value: &str) -> String {
    value
        .replace('\\', r"\\")
        .replace('"', r#"\""#)
        .replace('\n', r"\n")
}

/// Download filename for a rendered leave form:
/// `Surat_Cuti_<employee name, whitespace runs -> underscores>_<ISO date>.pdf`.
pub fn pdf_filename(employee_name: &str, today: NaiveDate) -> String {
    let name = WHITESPACE_RUN.replace_all(employee_name.trim(), "_");
    format!("Surat_Cuti_{}_{}.pdf", name, today)
}

/// Sanitize a string for use in temporary filenames.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut result = String::new();
    let mut last_dash = false;

    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            result.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            if !last_dash && !result.is_empty() {
                result.push('-');
                last_dash = true;
            }
        }
    }

    if result.is_empty() {
        return fallback.to_string();
    }

    result.trim_matches('-').to_string()
}
