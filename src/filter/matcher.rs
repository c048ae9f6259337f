// src/filter/matcher.rs

use std::collections::BTreeSet;
use std::fmt;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use tracing::debug;

use crate::errors::Result;

use super::SEP;

/// Compiled file and directory matchers for a set of root-relative patterns.
///
/// Every pattern `p` is extended to also cover `p/**`, so naming a directory
/// matches everything inside it. The directory matcher is built from every
/// ancestor of every extended pattern and is deliberately loose: it may
/// accept directories that never lead to a matching file. Only the file
/// matcher is exact.
#[derive(Clone)]
pub struct PathMatcher {
    files: GlobSet,
    dirs: GlobSet,
    extended: Vec<String>,
    directory_set: BTreeSet<String>,
}

impl fmt::Debug for PathMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathMatcher")
            .field("extended", &self.extended)
            .field("directory_set", &self.directory_set)
            .finish_non_exhaustive()
    }
}

impl PathMatcher {
    /// Compile matchers from patterns already relative to the watch root.
    pub fn new<S: AsRef<str>>(relative: &[S]) -> Result<Self> {
        let extended: Vec<String> = relative
            .iter()
            .map(|p| extend_recursive(p.as_ref()))
            .collect();

        let mut files = GlobSetBuilder::new();
        for (rel, ext) in relative.iter().zip(&extended) {
            let rel = rel.as_ref();
            files.add(compile_glob(rel)?);
            files.add(compile_glob(ext)?);
            // globset's `p/**` never matches `p` itself.
            if let Some(base) = recursive_base(rel) {
                files.add(compile_glob(base)?);
            }
        }

        let directory_set = directory_set(&extended);
        let mut dirs = GlobSetBuilder::new();
        for dir in &directory_set {
            let dir = dir.trim_end_matches(SEP);
            // Cutting a pattern at a separator can leave an unbalanced
            // brace or class behind; such an ancestor just can't be probed.
            match compile_glob(dir) {
                Ok(glob) => {
                    dirs.add(glob);
                }
                Err(err) => debug!(dir, error = %err, "skipping uncompilable ancestor"),
            }
        }

        Ok(Self {
            files: files.build()?,
            dirs: dirs.build()?,
            extended,
            directory_set,
        })
    }

    /// Patterns after the `/**` extension, in input order.
    pub fn extended_patterns(&self) -> &[String] {
        &self.extended
    }

    /// Every ancestor directory implied by the patterns, each ending in `/`.
    pub fn directory_set(&self) -> &BTreeSet<String> {
        &self.directory_set
    }

    /// Match a root-relative candidate. A trailing separator marks a
    /// directory probe.
    pub fn is_match(&self, candidate: &str) -> bool {
        let candidate = to_canonical(candidate);
        if candidate.ends_with(SEP) {
            self.is_dir_match(&candidate)
        } else {
            self.files.is_match(&*candidate)
        }
    }

    fn is_dir_match(&self, dir: &str) -> bool {
        let trimmed = dir.trim_end_matches(SEP);
        !trimmed.is_empty() && self.dirs.is_match(trimmed)
    }
}

/// `p` → `p/**`.
fn extend_recursive(pattern: &str) -> String {
    format!("{}{SEP}**", pattern.trim_end_matches(SEP))
}

/// `src/**` → `src`. `None` when there is no trailing `/**` or nothing
/// is left before it.
fn recursive_base(pattern: &str) -> Option<&str> {
    let trimmed = pattern.trim_end_matches(SEP);
    let base = trimmed.trim_end_matches("/**");
    (base.len() != trimmed.len() && !base.is_empty()).then_some(base)
}

/// All ancestors of every pattern, the pattern itself included, each with a
/// trailing separator.
fn directory_set(extended: &[String]) -> BTreeSet<String> {
    let mut dirs = BTreeSet::new();
    for pattern in extended {
        let mut ancestor = String::new();
        for segment in pattern.split(SEP).filter(|s| !s.is_empty()) {
            ancestor.push_str(segment);
            ancestor.push(SEP);
            dirs.insert(ancestor.clone());
        }
    }
    dirs
}

fn compile_glob(pattern: &str) -> Result<globset::Glob> {
    // `*` must stay within one segment; dotfiles are matched like any
    // other name and filtered upstream by the watcher.
    Ok(GlobBuilder::new(pattern).literal_separator(true).build()?)
}

fn to_canonical(candidate: &str) -> std::borrow::Cow<'_, str> {
    if std::path::MAIN_SEPARATOR != SEP && candidate.contains(std::path::MAIN_SEPARATOR) {
        std::borrow::Cow::Owned(candidate.replace(std::path::MAIN_SEPARATOR, "/"))
    } else {
        std::borrow::Cow::Borrowed(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_pattern_matches_contents() {
        let m = PathMatcher::new(&["foo/bar"]).unwrap();
        assert!(m.is_match("foo/bar"));
        assert!(m.is_match("foo/bar/baz.txt"));
        assert!(m.is_match("foo/bar/deep/er.txt"));
        assert!(!m.is_match("foo/barn"));
        assert!(!m.is_match("foo/other.txt"));
    }

    #[test]
    fn directory_probes_accept_ancestors() {
        let m = PathMatcher::new(&["foo/bar"]).unwrap();
        assert!(m.is_match("foo/"));
        assert!(m.is_match("foo/bar/"));
        assert!(m.is_match("foo/bar/nested/"));
        assert!(!m.is_match("baz/"));
    }

    #[test]
    fn trailing_double_star_matches_the_directory_itself() {
        let m = PathMatcher::new(&["src/**"]).unwrap();
        assert!(m.is_match("src"));
        assert!(m.is_match("src/a/b.rs"));
        assert!(!m.is_match("srcs"));
        assert_eq!(recursive_base("a/**/**"), Some("a"));
        assert_eq!(recursive_base("**"), None);
        assert_eq!(recursive_base("a/*"), None);
    }

    #[test]
    fn star_does_not_cross_segments() {
        let m = PathMatcher::new(&["*.js"]).unwrap();
        assert!(m.is_match("a.js"));
        assert!(!m.is_match("lib/a.js"));
    }

    #[test]
    fn dotfiles_are_matched() {
        let m = PathMatcher::new(&["**/*.rc"]).unwrap();
        assert!(m.is_match(".hidden/.x.rc"));
    }

    #[test]
    fn directory_set_lists_every_ancestor() {
        let m = PathMatcher::new(&["src/**/*.ts"]).unwrap();
        let dirs: Vec<&str> = m.directory_set().iter().map(|s| s.as_str()).collect();
        assert_eq!(
            dirs,
            vec!["src/", "src/**/", "src/**/*.ts/", "src/**/*.ts/**/"]
        );
        assert_eq!(m.extended_patterns(), ["src/**/*.ts/**".to_string()]);
    }

    #[test]
    fn deep_pattern_directory_probe_over_approximates() {
        let m = PathMatcher::new(&["**/bar/zing/*.js"]).unwrap();
        // Accepted even though nothing under it can match.
        assert!(m.is_match("unrelated/"));
        // The file matcher stays exact.
        assert!(!m.is_match("unrelated/x.js"));
        assert!(m.is_match("a/bar/zing/x.js"));
    }
}
