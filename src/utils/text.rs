//! Small string and collection helpers shared by the rewriter and the CLI.

use crate::utils::error::{Result, UtilsError};
use regex::Regex;
use std::sync::LazyLock;

static SNAKE_SEGMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_\w").unwrap());

/// `snake_case` -> `lowerCamelCase`.
///
/// Each `_x` pair becomes `X`; a trailing underscore has nothing to
/// capitalize and is kept.
pub fn snake_to_camel(s: &str) -> String {
    SNAKE_SEGMENT_RE
        .replace_all(s, |caps: &regex::Captures| {
            caps[0].chars().skip(1).flat_map(char::to_uppercase).collect::<String>()
        })
        .into_owned()
}

/// Returns what follows the last `.`, or an empty string.
pub fn get_extension(s: &str) -> &str {
    s.rfind('.').map_or("", |index| &s[index + 1..])
}

/// Membership test starting at `start_index` (0 when `None`).
pub fn includes<T: PartialEq>(items: &[T], value: &T, start_index: Option<usize>) -> bool {
    items
        .get(start_index.unwrap_or(0)..)
        .is_some_and(|rest| rest.contains(value))
}

/// `[f(0), f(1), ..., f(n - 1)]`
pub fn times<T, F>(n: usize, f: F) -> Vec<T>
where
    F: FnMut(usize) -> T,
{
    (0..n).map(f).collect()
}

pub fn ensure(condition: bool, message: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(UtilsError::AssertionFailed {
            message: message.to_string(),
        })
    }
}
