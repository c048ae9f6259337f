// src/watch/event_handler.rs

//! Turning raw `notify` events into filtered [`WatchEvent`]s.

use std::collections::HashSet;
use std::path::Path;

use notify::Event;
use tracing::{debug, trace, warn};

use crate::filter::WatchFilter;
use crate::fs::FileSystem;
use crate::types::{is_folder_event, ChangeKind, WatchEvent};
use crate::watch::path_utils::{is_dotfile, relative_str};

/// Decide whether a single changed path should be reported.
///
/// Returns the root-relative candidate string (directories end with `/`)
/// when the path passes the dotfile policy and the filter.
pub fn classify_path(
    fs: &dyn FileSystem,
    filter: &WatchFilter,
    path: &Path,
    folder_hint: bool,
    dotfiles: bool,
) -> Option<String> {
    let root = filter.root();
    let mut rel = match relative_str(fs, root, path) {
        Some(s) => s,
        None => {
            warn!("could not relativize path {:?} against root {:?}", path, root);
            return None;
        }
    };

    // Events on the root directory itself carry no useful path.
    if rel.is_empty() {
        return None;
    }

    if !dotfiles && is_dotfile(&rel) {
        trace!(rel = %rel, "ignoring dotfile");
        return None;
    }

    if folder_hint || fs.is_dir(path) {
        rel.push('/');
    }

    if filter.matches(&rel) {
        Some(rel)
    } else {
        trace!(rel = %rel, "path filtered out");
        None
    }
}

/// Filter a batch of raw watcher results down to the events worth
/// reporting.
///
/// Errors are logged and skipped. Duplicate `(kind, path)` pairs within the
/// batch are collapsed, keeping first-seen order.
pub fn collect_matches<I>(
    fs: &dyn FileSystem,
    filter: &WatchFilter,
    dotfiles: bool,
    batch: I,
) -> Vec<WatchEvent>
where
    I: IntoIterator<Item = notify::Result<Event>>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for res in batch {
        let event = match res {
            Ok(event) => event,
            Err(err) => {
                warn!("file watch error: {err}");
                continue;
            }
        };
        debug!(?event, "received notify event");

        let Some(kind) = ChangeKind::from_event_kind(&event.kind) else {
            continue;
        };
        let folder_hint = is_folder_event(&event.kind);

        for path in &event.paths {
            if let Some(rel) = classify_path(fs, filter, path, folder_hint, dotfiles) {
                let ev = WatchEvent::new(kind, rel);
                if seen.insert(ev.clone()) {
                    out.push(ev);
                }
            }
        }
    }

    out
}
