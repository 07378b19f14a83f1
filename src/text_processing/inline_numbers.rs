/// Spelling out integers embedded in running text
///
/// Every whitespace-delimited token that is an integer gets replaced by its
/// words, keeping surrounding brackets, quotes and punctuation:
/// - "I owe you 1,250." → "I owe you one thousand two hundred fifty."
/// - "(-3)" → "(minus three)"
///
/// Decimals ("3.14"), ranges ("3-2") and mixed tokens ("30a") are not
/// integers and stay as they are. So do integers outside the 32-bit range.
use crate::config::constants::MAX_TEXT_LENGTH;
use crate::text_processing::number_formatter::to_words;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// Any run of non-whitespace characters
    static ref TOKEN_REGEX: Regex = Regex::new(r"\S+").unwrap();

    /// An integer token with optional opening and closing punctuation
    /// Matches: 42, -42, 1,234,567, (12), "7", 12., 12,
    static ref INTEGER_TOKEN_REGEX: Regex = Regex::new(
        r#"^([(\[{"']*)(-?(?:\d{1,3}(?:,\d{3})+|\d+))([)\]}"'.,;:!?]*)$"#
    ).unwrap();
}

/// Replace every integer token in `text` with its words
pub fn spell_numbers_in_text(text: &str) -> String {
    if text.chars().count() > MAX_TEXT_LENGTH {
        tracing::warn!(
            length = text.chars().count(),
            max = MAX_TEXT_LENGTH,
            "Text too long for inline number spelling, leaving unchanged"
        );
        return text.to_string();
    }

    TOKEN_REGEX
        .replace_all(text, |caps: &Captures| spell_token(&caps[0]))
        .to_string()
}

/// Spell a single token, or return it unchanged if it is not an integer
fn spell_token(token: &str) -> String {
    let caps = match INTEGER_TOKEN_REGEX.captures(token) {
        Some(caps) => caps,
        None => return token.to_string(),
    };

    let (open, number, close) = (&caps[1], &caps[2], &caps[3]);

    match to_words(number) {
        Ok(words) => format!("{}{}{}", open, words, close),
        Err(e) => {
            tracing::debug!(token, error = %e, "Leaving number token verbatim");
            token.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Token Tests =====

    #[test]
    fn test_plain_integer() {
        assert_eq!(spell_token("42"), "forty two");
        assert_eq!(spell_token("-42"), "minus forty two");
    }

    #[test]
    fn test_grouped_integer() {
        assert_eq!(spell_token("1,234"), "one thousand two hundred thirty four");
        assert_eq!(spell_token("1,000,000"), "one million");
    }

    #[test]
    fn test_punctuation_preserved() {
        assert_eq!(spell_token("(12)"), "(twelve)");
        assert_eq!(spell_token("7,"), "seven,");
        assert_eq!(spell_token("7."), "seven.");
        assert_eq!(spell_token("\"85\""), "\"eighty five\"");
        assert_eq!(spell_token("1,250."), "one thousand two hundred fifty.");
    }

    #[test]
    fn test_non_integers_unchanged() {
        assert_eq!(spell_token("3.14"), "3.14");
        assert_eq!(spell_token("3-2"), "3-2");
        assert_eq!(spell_token("30a"), "30a");
        assert_eq!(spell_token("hello"), "hello");
        assert_eq!(spell_token("12,34"), "12,34");
    }

    #[test]
    fn test_out_of_range_unchanged() {
        assert_eq!(spell_token("2147483648"), "2147483648");
        assert_eq!(spell_token("-2147483649"), "-2147483649");
    }

    // ===== Text Tests =====

    #[test]
    fn test_sentence() {
        assert_eq!(
            spell_numbers_in_text("I owe you 1,250 dollars and 7 cents."),
            "I owe you one thousand two hundred fifty dollars and seven cents."
        );
    }

    #[test]
    fn test_whitespace_preserved() {
        assert_eq!(spell_numbers_in_text("  5\t6\n"), "  five\tsix\n");
    }

    #[test]
    fn test_text_without_numbers() {
        let text = "Nothing to see here";
        assert_eq!(spell_numbers_in_text(text), text);
        assert_eq!(spell_numbers_in_text(""), "");
    }

    #[test]
    fn test_too_long_text_unchanged() {
        let text = "1 ".repeat(MAX_TEXT_LENGTH);
        assert_eq!(spell_numbers_in_text(&text), text);
    }
}
