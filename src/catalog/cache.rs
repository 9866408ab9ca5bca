use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use tracing::debug;

use crate::error::LoadError;

use super::load::{LoadOptions, load_path};
use super::model::Table;

/// Identity of a source file: where it lives and which version of it was read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceKey {
    pub path: PathBuf,
    pub len: u64,
    pub modified: Option<SystemTime>,
}

impl SourceKey {
    /// Stat `path` and build its key. Fails if the file cannot be read.
    pub fn for_path(path: &Path) -> Result<Self, LoadError> {
        let open_err = |source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        };
        let canonical = fs::canonicalize(path).map_err(open_err)?;
        let meta = fs::metadata(&canonical).map_err(open_err)?;
        Ok(Self {
            path: canonical,
            len: meta.len(),
            modified: meta.modified().ok(),
        })
    }
}

/// Loaded tables, one per source path.
///
/// A table is parsed at most once per file version: repeated lookups of an
/// unchanged file share the same `Arc`, and a file whose size or
/// modification time changed is parsed again.
#[derive(Debug, Default)]
pub struct TableCache {
    entries: HashMap<PathBuf, (SourceKey, LoadOptions, Arc<Table>)>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load(&mut self, path: &Path, options: LoadOptions) -> Result<Arc<Table>, LoadError> {
        let key = SourceKey::for_path(path)?;

        if let Some((cached_key, cached_opts, table)) = self.entries.get(&key.path) {
            if *cached_key == key && *cached_opts == options {
                debug!(path = %key.path.display(), "catalog cache hit");
                return Ok(Arc::clone(table));
            }
        }

        debug!(path = %key.path.display(), "catalog cache miss");
        let table = Arc::new(load_path(&key.path, options)?);
        self.entries
            .insert(key.path.clone(), (key, options, Arc::clone(&table)));
        Ok(table)
    }

    /// Drop the cached table for `path`, if any.
    pub fn invalidate(&mut self, path: &Path) {
        let path = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        self.entries.remove(&path);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
