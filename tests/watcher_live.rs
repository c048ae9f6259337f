//! End-to-end: real `notify` watcher on a temp directory.

use std::fs;
use std::sync::Arc;
use std::time::Duration;

use tempfile::tempdir;
use tokio::sync::mpsc;

use globwatch::engine::RuntimeEvent;
use globwatch::filter::build;
use globwatch::types::ChangeKind;
use globwatch::watch::{spawn_watcher, WatcherOptions};
use globwatch_test_utils::{init_tracing, with_timeout};

#[tokio::test]
async fn reports_only_matching_files() {
    init_tracing();

    let dir = tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();
    fs::create_dir_all(root.join("src")).unwrap();

    let filter = Arc::new(build(&["src/**.rs"], &root).unwrap());
    let (tx, mut rx) = mpsc::channel(64);
    let _handle = spawn_watcher(Arc::clone(&filter), WatcherOptions::default(), tx)
        .await
        .unwrap();

    fs::write(root.join("README.md"), "ignored").unwrap();
    fs::write(root.join("src/.hidden.rs"), "ignored").unwrap();
    fs::write(root.join("src/main.rs"), "fn main() {}").unwrap();

    let event = with_timeout(async {
        loop {
            match rx.recv().await {
                // Some platforms also report the parent directory.
                Some(RuntimeEvent::Change(ev)) if !ev.path.ends_with('/') => break ev,
                Some(_) => continue,
                None => panic!("watcher channel closed"),
            }
        }
    })
    .await;

    assert_eq!(event.path, "src/main.rs");
    assert!(matches!(event.kind, ChangeKind::Create | ChangeKind::Modify));
}

#[tokio::test]
async fn delay_coalesces_repeated_writes() {
    init_tracing();

    let dir = tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();

    let filter = Arc::new(build(&["*.txt"], &root).unwrap());
    let options = WatcherOptions {
        dotfiles: false,
        delay: Some(Duration::from_millis(200)),
    };
    let (tx, mut rx) = mpsc::channel(64);
    let _handle = spawn_watcher(filter, options, tx).await.unwrap();

    let file = root.join("a.txt");
    fs::write(&file, "1").unwrap();
    for i in 0..5 {
        fs::write(&file, format!("{i}")).unwrap();
    }

    tokio::time::sleep(Duration::from_millis(600)).await;

    let mut modifies = 0;
    while let Ok(RuntimeEvent::Change(ev)) = rx.try_recv() {
        assert_eq!(ev.path, "a.txt");
        if ev.kind == ChangeKind::Modify {
            modifies += 1;
        }
    }
    assert!(modifies <= 1, "expected coalesced modifies, got {modifies}");
}
