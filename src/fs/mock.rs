// src/fs/mock.rs

use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntry {
    File,
    Dir,
}

/// In-memory tree of absolute paths, with optional symlink-style aliases
/// that `canonicalize` resolves.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    entries: Arc<Mutex<HashMap<PathBuf, MockEntry>>>,
    aliases: Arc<Mutex<HashMap<PathBuf, PathBuf>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        let fs = Self::default();
        fs.add_dir("/");
        fs
    }

    pub fn add_file(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.lock_entries().insert(path.to_path_buf(), MockEntry::File);
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut entries = self.lock_entries();
        for ancestor in path.as_ref().ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            entries
                .entry(ancestor.to_path_buf())
                .or_insert(MockEntry::Dir);
        }
    }

    pub fn remove(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.lock_entries().retain(|p, _| !p.starts_with(path));
    }

    /// Make `alias` resolve to `target` (like a symlinked directory).
    pub fn add_alias(&self, alias: impl AsRef<Path>, target: impl AsRef<Path>) {
        self.aliases
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(alias.as_ref().to_path_buf(), target.as_ref().to_path_buf());
    }

    fn lock_entries(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, MockEntry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn resolve_aliases(&self, path: &Path) -> PathBuf {
        let aliases = self.aliases.lock().unwrap_or_else(|e| e.into_inner());
        for (alias, target) in aliases.iter() {
            if let Ok(rest) = path.strip_prefix(alias) {
                return target.join(rest);
            }
        }
        path.to_path_buf()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let path = self.resolve_aliases(path);
        self.lock_entries().contains_key(&path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let path = self.resolve_aliases(path);
        matches!(self.lock_entries().get(&path), Some(MockEntry::Dir))
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        if path.components().any(|c| matches!(c, Component::CurDir | Component::ParentDir)) {
            return Err(anyhow!("mock canonicalize expects a clean path: {:?}", path));
        }
        let resolved = self.resolve_aliases(path);
        if self.lock_entries().contains_key(&resolved) {
            Ok(resolved)
        } else {
            Err(anyhow!("File not found: {:?}", path))
        }
    }
}
