// src/filter/pattern.rs

//! Shorthand expansion and lexical resolution of raw patterns.

use std::borrow::Cow;

use crate::errors::{GlobwatchError, Result};

use super::scan::is_extglob_segment;
use super::SEP;

/// Expand the `**.ext` shorthand in the final segment to `**/*.ext`.
///
/// Only the last segment is considered: `src/**.js` becomes `src/**/*.js`,
/// while `a/**.b/c` is left alone.
pub fn expand_shorthand(pattern: &str) -> Cow<'_, str> {
    let trimmed = pattern.trim_end_matches(SEP);
    let (dir, base) = match trimmed.rfind(SEP) {
        Some(idx) => (Some(&trimmed[..idx]), &trimmed[idx + 1..]),
        None => (None, trimmed),
    };

    match base.strip_prefix("**.") {
        Some(ext) => match dir {
            Some(dir) => Cow::Owned(format!("{dir}/**/*.{ext}")),
            None => Cow::Owned(format!("**/*.{ext}")),
        },
        None => Cow::Borrowed(pattern),
    }
}

/// Resolve a raw pattern against an absolute, `/`-separated `root`.
///
/// The shorthand is expanded first, then the pattern is joined onto `root`
/// and `.` / `..` segments are collapsed lexically. Patterns that already
/// start with a separator are rejected: absolute patterns are not supported.
/// So are extglob groups such as `!(foo)`, which would otherwise compile to
/// a glob that never matches.
pub fn resolve_pattern(pattern: &str, root: &str) -> Result<String> {
    if pattern.trim().is_empty() {
        return Err(GlobwatchError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: "pattern is empty".to_string(),
        });
    }
    if pattern.starts_with(SEP) || pattern.starts_with(std::path::MAIN_SEPARATOR) {
        return Err(GlobwatchError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: "patterns starting with a path separator are not supported; \
                     use a path relative to the root"
                .to_string(),
        });
    }
    if pattern.split(SEP).any(is_extglob_segment) {
        return Err(GlobwatchError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: "extglob groups like !(..) or @(..) are not supported; \
                     use {a,b} alternation or [..] classes instead"
                .to_string(),
        });
    }

    let expanded = expand_shorthand(pattern);
    Ok(normalize(&format!("{root}{SEP}{expanded}")))
}

/// Collapse empty, `.` and `..` segments of an absolute path.
///
/// `..` at the filesystem root stays at the root.
pub fn normalize(path: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    for segment in path.split(SEP) {
        match segment {
            "" | "." => {}
            ".." => {
                out.pop();
            }
            s => out.push(s),
        }
    }
    format!("{SEP}{}", out.join("/"))
}
