// src/filter/mod.rs

//! Glob → watch root resolution and path filtering.
//!
//! Given the user's glob patterns and a starting root, [`build`] works out
//! the single directory that has to be watched and a [`WatchFilter`] that
//! decides which relative paths below it are interesting.
//!
//! - [`ancestor`] folds fixed prefixes into a common directory.
//! - [`scan`] finds the literal (non-glob) prefix of a pattern.
//! - [`pattern`] expands the `**.ext` shorthand and resolves patterns to
//!   absolute form.
//! - [`matcher`] compiles the file and directory matchers.
//! - [`builder`] ties it all together.
//!
//! Everything in here is pure: no filesystem access, no global state.
//! Paths are handled as `/`-separated strings.

pub mod ancestor;
pub mod builder;
pub mod matcher;
pub mod pattern;
pub mod scan;

pub use ancestor::highest_common_ancestor;
pub use builder::{build, WatchFilter};
pub use matcher::PathMatcher;

/// Canonical separator used for every pattern and candidate path.
pub const SEP: char = '/';
