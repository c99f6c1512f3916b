//! Utility functions for rule implementations.

pub mod naming;
pub mod paths;

// Re-export commonly used utilities for rule implementations
#[doc(inline)]
pub use naming::{is_lowercase_hyphenated, is_snake_case, is_version_segment, to_snake_case};
#[doc(inline)]
pub use paths::{ends_with_variable, segments, static_segments, url_path, Segment};
