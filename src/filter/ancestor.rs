// src/filter/ancestor.rs

use super::SEP;

/// Deepest directory shared by `a` and `b`.
///
/// The empty string is the identity: `highest_common_ancestor("", p) == p`.
/// Paths are compared whole segment by whole segment, so `/a/foobar` and
/// `/a/foo` share `/a`, not `/a/foo`. Two absolute paths always share the
/// filesystem root and yield `"/"` at worst; relative paths with nothing in
/// common (or one absolute and one relative path) yield `""`.
///
/// Over absolute paths the operation is commutative and associative, so
/// folding it across a set of prefixes gives the same answer in any order.
pub fn highest_common_ancestor(a: &str, b: &str) -> String {
    if a.is_empty() {
        return b.to_string();
    }
    if b.is_empty() {
        return a.to_string();
    }

    let absolute = a.starts_with(SEP);
    if absolute != b.starts_with(SEP) {
        return String::new();
    }

    let common: Vec<&str> = segments(a)
        .zip(segments(b))
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x)
        .collect();

    let body = common.join("/");
    if absolute {
        format!("{SEP}{body}")
    } else {
        body
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEP).filter(|s| !s.is_empty())
}
