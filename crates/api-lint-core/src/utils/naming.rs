//! Naming convention predicates shared by rules.

use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static SNAKE_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("snake_case pattern"));

#[allow(clippy::expect_used)]
static KEBAB_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9.-]+$").expect("path segment pattern"));

#[allow(clippy::expect_used)]
static VERSION_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^v[0-9]+(\.[0-9]+)*([a-z]+[0-9]*)?$").expect("version segment pattern")
});

/// Returns true for names like `user_id`; camelCase, kebab-case and names
/// starting with a digit or underscore fail.
#[must_use]
pub fn is_snake_case(name: &str) -> bool {
    SNAKE_CASE.is_match(name)
}

/// Returns true for lowercase path segments separated by hyphens.
///
/// Dots are accepted so that `.well-known` and file-like segments pass.
#[must_use]
pub fn is_lowercase_hyphenated(segment: &str) -> bool {
    KEBAB_SEGMENT.is_match(segment)
}

/// Returns true for version markers such as `v1`, `V2`, `v1.2` or `v2beta1`.
#[must_use]
pub fn is_version_segment(segment: &str) -> bool {
    VERSION_SEGMENT.is_match(segment)
}

/// Converts a camelCase, PascalCase or kebab-case name to snake_case.
///
/// ```
/// use api_lint_core::utils::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("userId"), "user_id");
/// assert_eq!(to_snake_case("HTTPStatus"), "http_status");
/// assert_eq!(to_snake_case("first-name"), "first_name");
/// ```
#[must_use]
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == ' ' || c == '_' {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1);
            let starts_word = prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit())
                || (prev.is_some_and(char::is_uppercase) && next.is_some_and(|n| n.is_lowercase()));
            if starts_word && !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out.trim_end_matches('_').to_string()
}
