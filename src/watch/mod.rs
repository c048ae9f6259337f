// src/watch/mod.rs

//! Filesystem watching.
//!
//! This module is responsible for:
//! - Running a recursive `notify` watcher on the filter's root directory.
//! - Turning raw `notify` events into root-relative paths, tagging
//!   directories with a trailing `/`, and applying the dotfile policy.
//! - Consulting the [`WatchFilter`](crate::filter::WatchFilter) and
//!   forwarding matches to the runtime as [`RuntimeEvent::Change`].
//!
//! It does **not** know about commands or debouncing.
//!
//! [`RuntimeEvent::Change`]: crate::engine::RuntimeEvent::Change

pub mod event_handler;
pub mod path_utils;
pub mod watcher;

pub use event_handler::collect_matches;
pub use watcher::{spawn_watcher, WatcherHandle, WatcherOptions};
