// src/watch/watcher.rs

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::engine::RuntimeEvent;
use crate::errors::{GlobwatchError, Result};
use crate::filter::WatchFilter;
use crate::fs::{FileSystem, RealFileSystem};
use crate::watch::event_handler::collect_matches;

/// How long registering the recursive watch may take before we warn.
pub const SLOW_START_WARNING: Duration = Duration::from_millis(1250);

/// Knobs for the watcher that are not part of the path filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct WatcherOptions {
    /// Report events for hidden files and directories.
    pub dotfiles: bool,
    /// Hold each burst of events this long before delivering it.
    pub delay: Option<Duration>,
}

/// Handle for the filesystem watcher.
///
/// This exists mainly so the underlying `RecommendedWatcher` is kept alive for
/// as long as needed. Dropping this handle will stop file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
    root: PathBuf,
}

impl WatcherHandle {
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

/// Spawn a filesystem watcher that observes `filter.root()` recursively and
/// sends `RuntimeEvent::Change` for every changed path the filter accepts.
///
/// Resolves once the recursive watch is registered.
pub async fn spawn_watcher(
    filter: Arc<WatchFilter>,
    options: WatcherOptions,
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) -> Result<WatcherHandle> {
    let root = filter.root().to_path_buf();

    // Channel from the blocking notify callback into the async world.
    let (event_tx, event_rx) = mpsc::unbounded_channel::<notify::Result<Event>>();

    let watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| {
            // The receiver only goes away on shutdown.
            let _ = event_tx.send(res);
        },
        Config::default(),
    )?;

    let watcher = register(watcher, root.clone()).await?;
    info!("file watcher started on {:?}", root);

    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    tokio::spawn(forward_events(event_rx, fs, filter, options, runtime_tx));

    Ok(WatcherHandle {
        _inner: watcher,
        root,
    })
}

/// Register the recursive watch on a blocking thread; a large tree can take
/// a while and the user deserves a hint when it does.
async fn register(mut watcher: RecommendedWatcher, root: PathBuf) -> Result<RecommendedWatcher> {
    let mut task = tokio::task::spawn_blocking(move || {
        watcher
            .watch(&root, RecursiveMode::Recursive)
            .map(|()| watcher)
    });

    let joined = match tokio::time::timeout(SLOW_START_WARNING, &mut task).await {
        Ok(joined) => joined,
        Err(_) => {
            warn!("taking a long time, did you specify too many files?");
            task.await
        }
    };

    let watcher = joined.map_err(|e| GlobwatchError::Other(e.into()))??;
    Ok(watcher)
}

async fn forward_events(
    mut event_rx: mpsc::UnboundedReceiver<notify::Result<Event>>,
    fs: Arc<dyn FileSystem>,
    filter: Arc<WatchFilter>,
    options: WatcherOptions,
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) {
    while let Some(first) = event_rx.recv().await {
        let mut batch = vec![first];

        if let Some(delay) = options.delay {
            tokio::time::sleep(delay).await;
            while let Ok(more) = event_rx.try_recv() {
                batch.push(more);
            }
            debug!(size = batch.len(), "delayed event batch");
        }

        for event in collect_matches(fs.as_ref(), &filter, options.dotfiles, batch) {
            if let Err(err) = runtime_tx.send(RuntimeEvent::Change(event)).await {
                // The runtime is gone; no point keeping the loop alive.
                warn!("failed to send RuntimeEvent::Change: {err}");
                return;
            }
        }
    }
    debug!("watcher event loop finished");
}
