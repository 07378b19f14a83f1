/// Integer text to English words
///
/// Accepts loosely formatted integers ("1,234", "1 000 000", "+42",
/// " - 13", "001.000") and renders them as a capitalized English phrase:
/// "1,234" → "One thousand two hundred thirty four".
///
/// Only the signed 32-bit range is supported. Anything that does not reduce
/// to an optionally negative run of ASCII digits inside that range is
/// rejected with `NumberError::InvalidNumber`.
use crate::config::constants::{GROUP_WIDTH, MAX_VALUE, MIN_VALUE, PLACE_LABELS};
use crate::error::{NumberError, Result};
use crate::text_processing::normalization::normalize_input;
use crate::text_processing::triplet::Triplet;

const MINUS: char = '-';

/// Convert a number string into capitalized English words
///
/// Examples:
/// - "13" → "Thirteen"
/// - "1,000,027,001" → "One billion twenty seven thousand one"
/// - "-00" → "Minus zero"
pub fn parse(input: &str) -> Result<String> {
    let spoken = to_words(input)?;
    Ok(capitalize_first(&spoken))
}

/// `parse` for callers whose input may be absent
pub fn parse_nullable(input: Option<&str>) -> Result<String> {
    match input {
        Some(raw) => parse(raw),
        None => {
            tracing::debug!("Rejected null number input");
            Err(NumberError::null_input())
        }
    }
}

/// Convert a number string into lower-case English words
///
/// Same rules as `parse`, without the final capitalization. Used when the
/// words end up inside running text.
pub fn to_words(input: &str) -> Result<String> {
    if input.trim().is_empty() {
        tracing::debug!("Rejected blank number input");
        return Err(NumberError::invalid(input));
    }

    let normalized = normalize_input(input);
    if normalized.changed() {
        tracing::debug!(
            original = %normalized.original,
            normalized = %normalized.normalized,
            "Applied unicode normalization to number input"
        );
    }

    let stripped = strip(&normalized.normalized);

    // Any run of leading minus signs means negative; they never cancel out
    let negative = stripped.starts_with(MINUS);
    let digits = strip(stripped.trim_start_matches(MINUS));

    tracing::debug!(input, negative, digits = %digits, "Stripped number input");

    if digits.is_empty() || digits == "0" {
        return Ok(if negative { "minus zero" } else { "zero" }.to_string());
    }

    validate_range(input, &digits, negative)?;

    let groups = build_groups(&digits);
    tracing::trace!(?groups, "Split digits into groups");

    let triplets = label_groups(input, &groups)?;
    let mut parts: Vec<&str> = Vec::with_capacity(triplets.len() * 2 + 1);

    if negative {
        parts.push("minus");
    }

    for (triplet, label) in &triplets {
        if !triplet.has_value() {
            continue;
        }
        parts.push(triplet.words());
        if !label.is_empty() {
            parts.push(*label);
        }
    }

    Ok(parts.join(" "))
}

/// Remove formatting from a number string
///
/// Drops every whitespace, comma, period and plus character wherever it
/// appears, then the leading run of zeros. Minus signs are kept.
/// Stripping an already stripped string returns it unchanged.
///
/// Examples:
/// - "1,000,000" → "1000000"
/// - "+1, 000, 000" → "1000000"
/// - "001.000.000" → "1000000"
pub fn strip(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|ch| !(ch.is_whitespace() || matches!(ch, ',' | '.' | '+')))
        .collect();

    cleaned.trim_start_matches('0').to_string()
}

/// Split a digit string into 3-digit groups, most significant first
///
/// The string is left-padded with zeros to a multiple of three, so
/// "1234567" becomes ["001", "234", "567"].
pub fn build_groups(digits: &str) -> Vec<String> {
    let padding = (GROUP_WIDTH - digits.len() % GROUP_WIDTH) % GROUP_WIDTH;
    let padded = format!("{}{}", "0".repeat(padding), digits);

    padded
        .as_bytes()
        .chunks(GROUP_WIDTH)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect()
}

/// Pair each group with its place label
///
/// Labels are assigned from the least-significant group upward: the last
/// group gets "", the one before it "thousand", and so on.
fn label_groups(input: &str, groups: &[String]) -> Result<Vec<(Triplet, &'static str)>> {
    let count = groups.len();

    groups
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let place = count - 1 - index;
            PLACE_LABELS
                .get(place)
                .map(|label| (Triplet::new(group), *label))
                .ok_or_else(|| NumberError::invalid(input))
        })
        .collect()
}

fn validate_range(input: &str, digits: &str, negative: bool) -> Result<()> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        tracing::debug!(input, "Rejected number input with non-digit characters");
        return Err(NumberError::invalid(input));
    }

    let magnitude: i64 = digits.parse().map_err(|_| {
        tracing::debug!(input, "Rejected number input too long to parse");
        NumberError::invalid(input)
    })?;
    let value = if negative { -magnitude } else { magnitude };

    if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
        tracing::debug!(input, value, "Rejected number outside the 32-bit range");
        return Err(NumberError::invalid(input));
    }

    Ok(())
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
