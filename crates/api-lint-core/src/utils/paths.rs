//! URL template utilities.

/// A segment of a URL template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text, e.g. `users` in `/users/{id}`.
    Static(&'a str),
    /// A segment containing a template expression, e.g. `{id}` or
    /// `{name}.json`.
    Template(&'a str),
}

/// Splits a URL template into its non-empty segments.
///
/// # Example
///
/// ```
/// use api_lint_core::utils::paths::{segments, Segment};
///
/// let parts = segments("/users/{id}/orders/");
/// assert_eq!(
///     parts,
///     vec![Segment::Static("users"), Segment::Template("{id}"), Segment::Static("orders")]
/// );
/// ```
#[must_use]
pub fn segments(path: &str) -> Vec<Segment<'_>> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|s| {
            if s.contains('{') {
                Segment::Template(s)
            } else {
                Segment::Static(s)
            }
        })
        .collect()
}

/// Static segments of a URL template, skipping template segments.
pub fn static_segments(path: &str) -> impl Iterator<Item = &str> {
    segments(path).into_iter().filter_map(|s| match s {
        Segment::Static(s) => Some(s),
        Segment::Template(_) => None,
    })
}

/// Returns true if the template ends with a path variable, e.g. `/users/{id}`.
#[must_use]
pub fn ends_with_variable(path: &str) -> bool {
    path.ends_with('}')
}

/// Returns the path portion of a server URL.
///
/// `https://api.example.com/v1/` yields `/v1/`; relative URLs are returned
/// as given.
#[must_use]
pub fn url_path(url: &str) -> &str {
    match url.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("", |i| &rest[i..]),
        None => url,
    }
}
