//! Directory of map files handed out in a cycle

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::common::{LoadError, MapSource, RawMap, SeaResult};

/// Cycles through the files of a map directory in name order
#[derive(Debug, Clone)]
pub struct MapCatalog {
    dir: PathBuf,
    files: Vec<PathBuf>,
    cursor: usize,
}

impl MapCatalog {
    /// Scan `dir` for regular files.
    ///
    /// An empty directory is accepted; `next_map` then reports `NoMaps`.
    pub fn open(dir: impl AsRef<Path>) -> SeaResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        let entries = fs::read_dir(&dir).map_err(|source| LoadError::Io {
            path: dir.clone(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| LoadError::Io {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        info!("Map catalog {}: {} file(s)", dir.display(), files.len());
        Ok(Self { dir, files, cursor: 0 })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Skip `n` maps without reading them
    pub fn skip(&mut self, n: usize) {
        if !self.files.is_empty() {
            self.cursor = (self.cursor + n) % self.files.len();
        }
    }
}

impl MapSource for MapCatalog {
    fn next_map(&mut self) -> SeaResult<RawMap> {
        if self.files.is_empty() {
            return Err(LoadError::NoMaps { dir: self.dir.clone() });
        }

        let path = self.files[self.cursor].clone();
        // the cursor moves on even if this file turns out to be unreadable
        self.cursor = (self.cursor + 1) % self.files.len();

        let data = fs::read(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
        debug!("Read {} ({} bytes)", path.display(), data.len());

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(RawMap::from_bytes(name, &data))
    }
}
