use std::fmt;

use rand::{Rng, distr::Alphanumeric};

use crate::warning;

/// Input that selects every listed track.
pub const SELECT_ALL: &str = "Y";

const RESERVED_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    InvalidToken(String),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::InvalidToken(token) => write!(f, "'{}' is not a track number", token),
        }
    }
}

impl std::error::Error for SelectionError {}

pub fn generate_job_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

/// Parses a selection line against a track list.
///
/// `"Y"` (exact, case-sensitive) selects everything. Anything else goes
/// through [`parse_indices`].
pub fn parse_selection(input: &str, tracks: &[String]) -> Result<Vec<String>, SelectionError> {
    if input == SELECT_ALL {
        return Ok(tracks.to_vec());
    }

    parse_indices(input, tracks)
}

/// Parses a whitespace separated list of 1-based track numbers.
///
/// Out-of-range numbers (zero, negative, or too large for any list) are
/// dropped, duplicates are kept and the typed order is preserved. A single
/// non-numeric token rejects the whole line.
pub fn parse_indices(input: &str, tracks: &[String]) -> Result<Vec<String>, SelectionError> {
    let indices = input
        .split_whitespace()
        .map(parse_index)
        .collect::<Result<Vec<Option<usize>>, _>>()?;

    Ok(indices
        .into_iter()
        .flatten()
        .filter_map(|idx| tracks.get(idx).cloned())
        .collect())
}

/// Maps a 1-based track number to a 0-based index. `Ok(None)` marks a number
/// that can never address a track.
fn parse_index(token: &str) -> Result<Option<usize>, SelectionError> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SelectionError::InvalidToken(token.to_string()));
    }
    if negative {
        return Ok(None);
    }

    Ok(digits.parse::<usize>().ok().and_then(|n| n.checked_sub(1)))
}

/// Same as [`parse_selection`] but reports invalid input and falls back to an
/// empty selection.
pub fn select_tracks(input: &str, tracks: &[String]) -> Vec<String> {
    report_invalid(parse_selection(input, tracks))
}

/// Same as [`parse_indices`] but reports invalid input and falls back to an
/// empty selection. `"Y"` is not special here.
pub fn select_indices(input: &str, tracks: &[String]) -> Vec<String> {
    report_invalid(parse_indices(input, tracks))
}

fn report_invalid(selection: Result<Vec<String>, SelectionError>) -> Vec<String> {
    match selection {
        Ok(selected) => selected,
        Err(e) => {
            warning!("Invalid selection: {}", e);
            Vec::new()
        }
    }
}

/// Turns a track display string into a file stem that is safe on every
/// common filesystem.
pub fn sanitize_filename(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let trimmed = replaced.trim().trim_end_matches(['.', ' ']);
    if trimmed.is_empty() {
        return "track".to_string();
    }

    let stem = trimmed.split('.').next().unwrap_or(trimmed);
    if RESERVED_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(stem))
    {
        return format!("_{}", trimmed);
    }

    trimmed.to_string()
}
