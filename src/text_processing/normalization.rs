/// Unicode clean-up applied to raw number input
///
/// Numbers pasted from documents often carry typographic minus signs,
/// full-width digits or narrow no-break spaces as thousands separators.
/// This folds them to their ASCII forms so the formatter only has to deal
/// with ASCII digits, separators and signs.
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone)]
pub struct NormalizationResult {
    /// Original input before normalization
    pub original: String,
    /// Input with dashes folded and NFKC applied
    pub normalized: String,
}

impl NormalizationResult {
    /// Whether normalization changed anything
    pub fn changed(&self) -> bool {
        self.original != self.normalized
    }
}

/// Normalize raw number input
///
/// This function handles:
/// - Minus sign, figure dash, en/em dash, small and full-width hyphen-minus → '-'
/// - Unicode compatibility normalization (NFKC), which folds full-width
///   digits, commas, periods, plus signs and no-break spaces
pub fn normalize_input(text: &str) -> NormalizationResult {
    let folded: String = text
        .chars()
        .map(|ch| match ch {
            '\u{2212}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}' | '\u{FE63}'
            | '\u{FF0D}' => '-',
            _ => ch,
        })
        .collect();

    NormalizationResult {
        original: text.to_string(),
        normalized: folded.nfkc().collect(),
    }
}

/// Convenience wrapper for callers that only need the normalized text
pub fn normalize_simple(text: &str) -> String {
    normalize_input(text).normalized
}
