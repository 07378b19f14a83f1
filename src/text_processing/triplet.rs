/// Three-digit group to English words
///
/// A triplet knows nothing about its place value: "007" renders as "seven"
/// whether it is the ones, thousands or millions group. Place labels are
/// attached by the number formatter.
use std::fmt;

/// Words for 0-9. Zero is empty so that "20" and "300" render without a
/// trailing "zero". Also used for the hundreds digit.
const ONES: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Words for 10-19, indexed by the ones digit
const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Words for the tens digit. No entry for 1, the teens table covers 10-19.
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const ZERO_GROUP: &str = "000";

/// The rendered form of one digit group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triplet {
    words: String,
    has_value: bool,
}

impl Triplet {
    /// Render a 1-3 digit group
    ///
    /// Callers must pass ASCII digits only; the group is not re-validated.
    pub fn new(group: &str) -> Self {
        debug_assert!(
            (1..=3).contains(&group.len()) && group.bytes().all(|b| b.is_ascii_digit()),
            "triplet expects 1-3 ASCII digits, got {:?}",
            group
        );

        Self {
            words: convert(group),
            has_value: group != ZERO_GROUP,
        }
    }

    /// English words for the group, empty when the group is all zeros
    pub fn words(&self) -> &str {
        &self.words
    }

    /// Whether the group contributes to the rendered number
    ///
    /// Only the exact group "000" has no value; it still occupies a place so
    /// the groups around it get the right labels.
    pub fn has_value(&self) -> bool {
        self.has_value
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words)
    }
}

fn convert(group: &str) -> String {
    let significant = group.trim_start_matches('0');

    // "000" contributes nothing here; the formatter decides when to say "zero"
    if significant.is_empty() {
        return String::new();
    }

    render(significant.as_bytes()).trim().to_string()
}

fn render(digits: &[u8]) -> String {
    match digits {
        [hundreds, rest @ ..] if digits.len() == 3 => {
            let tens = render_tens(rest);
            format!("{} hundred {}", ONES[digit(*hundreds)], tens)
                .trim()
                .to_string()
        }
        _ => render_tens(digits),
    }
}

fn render_tens(digits: &[u8]) -> String {
    match digits {
        [b'0', ones] => ONES[digit(*ones)].to_string(),
        [b'1', ones] => TEENS[digit(*ones)].to_string(),
        [tens, ones] => format!("{} {}", TENS[digit(*tens)], ONES[digit(*ones)])
            .trim()
            .to_string(),
        [ones] => ONES[digit(*ones)].to_string(),
        _ => String::new(),
    }
}

fn digit(byte: u8) -> usize {
    usize::from(byte.wrapping_sub(b'0')) % 10
}
