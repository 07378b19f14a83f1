/// Place-value labels, indexed from the least-significant group upward
///
/// The ones group carries no label. Four labels cover every value in the
/// signed 32-bit range (billions, millions, thousands, ones).
pub const PLACE_LABELS: [&str; 4] = ["", "thousand", "million", "billion"];

/// Number of digits in one place-value group
pub const GROUP_WIDTH: usize = 3;

/// Smallest accepted value
pub const MIN_VALUE: i64 = i32::MIN as i64;

/// Largest accepted value
pub const MAX_VALUE: i64 = i32::MAX as i64;

/// Maximum text length (in characters) handled by inline number spelling
///
/// Longer text is passed through untouched.
pub const MAX_TEXT_LENGTH: usize = 10_000;
