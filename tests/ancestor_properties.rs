use proptest::prelude::*;

use globwatch::filter::highest_common_ancestor;

// Absolute paths over a tiny alphabet so that shared prefixes, partial
// segment collisions ("a" vs "ab") and identical paths all show up often.
fn abs_path() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::sample::select(vec!["a", "ab", "b", "foo", "foobar"]), 0..5)
        .prop_map(|segs| format!("/{}", segs.join("/")))
}

fn is_ancestor_or_self(ancestor: &str, path: &str) -> bool {
    std::path::Path::new(path).starts_with(ancestor)
}

proptest! {
    #[test]
    fn commutative(a in abs_path(), b in abs_path()) {
        prop_assert_eq!(highest_common_ancestor(&a, &b), highest_common_ancestor(&b, &a));
    }

    #[test]
    fn empty_is_identity(p in abs_path()) {
        prop_assert_eq!(highest_common_ancestor("", &p), p.clone());
        prop_assert_eq!(highest_common_ancestor(&p, ""), p);
    }

    #[test]
    fn associative(a in abs_path(), b in abs_path(), c in abs_path()) {
        let left = highest_common_ancestor(&highest_common_ancestor(&a, &b), &c);
        let right = highest_common_ancestor(&a, &highest_common_ancestor(&b, &c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn fold_is_order_independent(paths in proptest::collection::vec(abs_path(), 1..6)) {
        let forward = paths.iter().fold(String::new(), |acc, p| highest_common_ancestor(&acc, p));
        let backward = paths.iter().rev().fold(String::new(), |acc, p| highest_common_ancestor(&acc, p));
        prop_assert_eq!(&forward, &backward);

        for p in &paths {
            prop_assert!(is_ancestor_or_self(&forward, p), "{} not above {}", forward, p);
        }
    }

    #[test]
    fn result_is_deepest_shared_directory(a in abs_path(), b in abs_path()) {
        let common = highest_common_ancestor(&a, &b);
        prop_assert!(is_ancestor_or_self(&common, &a));
        prop_assert!(is_ancestor_or_self(&common, &b));

        // One segment deeper would no longer cover both.
        let a_path = std::path::Path::new(&a);
        if let Ok(rest) = a_path.strip_prefix(&common) {
            if let Some(next) = rest.components().next() {
                let deeper = std::path::Path::new(&common).join(next);
                prop_assert!(!(std::path::Path::new(&b).starts_with(&deeper)));
            }
        }
    }
}

#[test]
fn partial_segment_collision() {
    assert_eq!(highest_common_ancestor("/a/foobar", "/a/foo"), "/a");
    assert_eq!(highest_common_ancestor("/a/foo", "/a/foobar"), "/a");
}
