// src/filter/scan.rs

//! Fixed-prefix scanning for glob patterns.

use super::SEP;

/// Longest literal directory prefix of `pattern`.
///
/// Scanning stops at the first segment that contains glob syntax; the
/// prefix is everything before it, without the trailing separator. A pattern
/// with no glob syntax at all is its own prefix. The result is always a
/// slice from the start of `pattern`.
///
/// ```
/// use globwatch::filter::scan::fixed_prefix;
///
/// assert_eq!(fixed_prefix("/x/src/**/*.ts"), "/x/src");
/// assert_eq!(fixed_prefix("/x/foo/bar"), "/x/foo/bar");
/// assert_eq!(fixed_prefix("/*.js"), "/");
/// assert_eq!(fixed_prefix("*.js"), "");
/// ```
pub fn fixed_prefix(pattern: &str) -> &str {
    let mut offset = 0;
    for segment in pattern.split(SEP) {
        if is_glob_segment(segment) {
            return trim_trailing_sep(&pattern[..offset]);
        }
        offset += segment.len() + SEP.len_utf8();
    }
    trim_trailing_sep(pattern)
}

/// Whether a single path segment contains unescaped glob syntax.
pub fn is_glob_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    let mut prev = None;
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
                prev = None;
                continue;
            }
            '*' | '?' | '[' | '{' => return true,
            // extglob: !(..) @(..) +(..)
            '(' if matches!(prev, Some('!' | '@' | '+')) => return true,
            _ => {}
        }
        prev = Some(c);
    }
    false
}

/// Whether a segment opens an extglob group: `!(..)`, `@(..)`, `+(..)`,
/// `*(..)` or `?(..)`. The matcher has no extglob support.
pub fn is_extglob_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    let mut prev = None;
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
                prev = None;
                continue;
            }
            '(' if matches!(prev, Some('!' | '@' | '+' | '*' | '?')) => return true,
            _ => {}
        }
        prev = Some(c);
    }
    false
}

fn trim_trailing_sep(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEP);
    if trimmed.is_empty() && path.starts_with(SEP) {
        &path[..SEP.len_utf8()]
    } else {
        trimmed
    }
}
