// src/filter/builder.rs

use std::fmt;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::errors::{GlobwatchError, Result};

use super::ancestor::highest_common_ancestor;
use super::matcher::PathMatcher;
use super::pattern::{normalize, resolve_pattern};
use super::scan::fixed_prefix;
use super::SEP;

/// The directory to watch plus the predicate deciding which paths below it
/// are interesting.
///
/// Built once at startup by [`build`] and never mutated afterwards, so it can
/// be shared freely (`Arc<WatchFilter>`) and queried from any thread.
#[derive(Clone)]
pub struct WatchFilter {
    root: PathBuf,
    matcher: Option<PathMatcher>,
}

impl fmt::Debug for WatchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchFilter")
            .field("root", &self.root)
            .field("matcher", &self.matcher)
            .finish()
    }
}

impl WatchFilter {
    /// A filter that accepts every path below `root`.
    pub fn everything(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            matcher: None,
        }
    }

    /// Directory that has to be watched (recursively).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// True if no per-path filtering happens.
    pub fn is_everything(&self) -> bool {
        self.matcher.is_none()
    }

    /// Compiled matchers, if any filtering happens.
    pub fn matcher(&self) -> Option<&PathMatcher> {
        self.matcher.as_ref()
    }

    /// Decide whether `candidate`, relative to [`root`](Self::root), is
    /// interesting. A trailing separator marks a directory probe.
    ///
    /// Total over all inputs; never fails.
    pub fn matches(&self, candidate: &str) -> bool {
        match &self.matcher {
            Some(m) => m.is_match(candidate),
            None => true,
        }
    }
}

/// Resolve `patterns` against the absolute `root` into a watch root and a
/// path filter.
///
/// - No patterns: watch everything under `root`.
/// - `**.ext` in the last segment means `**/*.ext`.
/// - The watch root is the common ancestor of every pattern's fixed prefix.
///   It never narrows below `root`, but may climb above it when a pattern
///   does (`../*`).
/// - A pattern that resolves to the watch root itself turns filtering off.
///
/// Patterns starting with a separator are rejected.
pub fn build<S: AsRef<str>>(patterns: &[S], root: &Path) -> Result<WatchFilter> {
    let (base, root) = split_root(root)?;

    if patterns.is_empty() {
        debug!(%root, "no patterns; watching everything");
        return Ok(WatchFilter::everything(to_native(&base, &root)));
    }

    let mut resolved = patterns
        .iter()
        .map(|p| resolve_pattern(p.as_ref(), &root))
        .collect::<Result<Vec<_>>>()?;
    resolved.sort();
    resolved.dedup();

    let mut watch_root = String::new();
    for pattern in &resolved {
        let prefix = fixed_prefix(pattern);
        if !pattern.starts_with(prefix) {
            return Err(GlobwatchError::PrefixMismatch {
                resolved: pattern.clone(),
                prefix: prefix.to_string(),
            });
        }
        watch_root = highest_common_ancestor(&watch_root, prefix);
    }

    if is_strictly_inside(&watch_root, &root) {
        watch_root = root.clone();
    }

    let mut relative = Vec::with_capacity(resolved.len());
    for pattern in &resolved {
        let rel = relative_to(&watch_root, pattern).ok_or_else(|| {
            GlobwatchError::PrefixMismatch {
                resolved: pattern.clone(),
                prefix: watch_root.clone(),
            }
        })?;
        if rel.is_empty() {
            debug!(root = %watch_root, %pattern, "pattern is the watch root; watching everything");
            return Ok(WatchFilter::everything(to_native(&base, &watch_root)));
        }
        relative.push(rel.to_string());
    }

    let matcher = PathMatcher::new(&relative)?;
    debug!(
        root = %watch_root,
        patterns = ?matcher.extended_patterns(),
        dirs = ?matcher.directory_set(),
        "built watch filter"
    );

    Ok(WatchFilter {
        root: to_native(&base, &watch_root),
        matcher: Some(matcher),
    })
}

/// Split an absolute `root` into its native base (`/`, or `C:\` and
/// `\\?\C:\` on Windows) and a normalized `/`-separated body that the
/// pattern logic works on.
fn split_root(root: &Path) -> Result<(PathBuf, String)> {
    let mut components = root.components().peekable();
    let mut base = PathBuf::new();
    if let Some(Component::Prefix(prefix)) = components.peek() {
        base.push(prefix.as_os_str());
        components.next();
    }
    if components.next() != Some(Component::RootDir) {
        return Err(GlobwatchError::InvalidRoot(format!(
            "{root:?} must be an absolute path"
        )));
    }
    base.push(Component::RootDir);

    let mut body = String::new();
    for component in components {
        let segment = component
            .as_os_str()
            .to_str()
            .ok_or_else(|| GlobwatchError::InvalidRoot(format!("{root:?} is not valid UTF-8")))?;
        body.push(SEP);
        body.push_str(segment);
    }
    Ok((base, normalize(&body)))
}

/// Re-attach the native base to a `/`-separated body.
fn to_native(base: &Path, body: &str) -> PathBuf {
    let mut path = base.to_path_buf();
    path.extend(body.split(SEP).filter(|s| !s.is_empty()));
    path
}

/// `child` lies below `parent` and is not `parent` itself.
fn is_strictly_inside(child: &str, parent: &str) -> bool {
    child != parent && relative_to(parent, child).is_some()
}

/// `path` with the `base` directory stripped, or `None` when `path` is not
/// at or below `base`. Both are normalized absolute paths.
fn relative_to<'a>(base: &str, path: &'a str) -> Option<&'a str> {
    if base == "/" {
        return path.strip_prefix(SEP);
    }
    let rest = path.strip_prefix(base)?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix(SEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_to_respects_segment_boundaries() {
        assert_eq!(relative_to("/a", "/a/b"), Some("b"));
        assert_eq!(relative_to("/a", "/a"), Some(""));
        assert_eq!(relative_to("/a", "/ab"), None);
        assert_eq!(relative_to("/", "/a/b"), Some("a/b"));
    }

    #[test]
    fn strictly_inside() {
        assert!(is_strictly_inside("/x/src", "/x"));
        assert!(!is_strictly_inside("/x", "/x"));
        assert!(!is_strictly_inside("/", "/x"));
        assert!(!is_strictly_inside("/xy", "/x"));
        assert!(is_strictly_inside("/x", "/"));
    }

    #[test]
    fn relative_root_is_rejected() {
        let err = build(&["*.rs"], Path::new("relative/dir")).unwrap_err();
        assert!(matches!(err, GlobwatchError::InvalidRoot(_)));
    }

    #[test]
    fn root_is_normalized() {
        let f = build::<&str>(&[], Path::new("/x/./y/../z/")).unwrap();
        assert_eq!(f.root(), Path::new("/x/z"));
    }

    #[test]
    fn parent_segments_in_root_stop_at_the_base() {
        let f = build::<&str>(&[], Path::new("/../x/..")).unwrap();
        assert_eq!(f.root(), Path::new("/"));
    }

    #[cfg(windows)]
    #[test]
    fn windows_roots_keep_their_prefix() {
        for root in [r"C:\proj", r"\\?\C:\proj"] {
            let f = build(&["src/*.rs"], Path::new(root)).unwrap();
            assert_eq!(f.root(), Path::new(root));
            assert!(f.matches("src/a.rs"));
            assert!(f.matches(r"src\a.rs"));

            let up = build(&["../*.toml"], Path::new(root)).unwrap();
            assert_eq!(up.root(), Path::new(root).parent().unwrap());
        }
        let err = build(&["*.rs"], Path::new(r"C:proj")).unwrap_err();
        assert!(matches!(err, GlobwatchError::InvalidRoot(_)));
    }

    #[test]
    fn parent_pattern_climbs_above_root() {
        let f = build(&["../*.css"], Path::new("/x/y")).unwrap();
        assert_eq!(f.root(), Path::new("/x"));
        assert!(f.matches("a.css"));
        assert!(!f.matches("y/a.css"));
    }

    #[test]
    fn prefixes_in_different_subtrees_use_the_requested_root() {
        let f = build(&["a/**/*.rs", "b/c/*.toml"], Path::new("/x")).unwrap();
        assert_eq!(f.root(), Path::new("/x"));
        assert!(f.matches("a/z/m.rs"));
        assert!(f.matches("b/c/Cargo.toml"));
        assert!(!f.matches("b/Cargo.toml"));
        assert!(f.matches("b/"));
        assert!(!f.matches("d/"));
    }
}
