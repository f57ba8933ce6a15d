//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! services. This avoids reading process-wide environment variables during
//! request handling, which can lead to inconsistent behaviour in test
//! harnesses.

use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_DATA_DIR;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig` rooted at the given data directory.
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// The directory holding all persisted collections.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of a persisted collection file within the data directory.
    pub fn collection_path(&self, filename: &str) -> PathBuf {
        self.data_dir.join(filename)
    }
}

/// Resolve the data directory from an optional override, falling back to
/// [`DEFAULT_DATA_DIR`] relative to the working directory.
pub fn resolve_data_dir(override_dir: Option<PathBuf>) -> PathBuf {
    override_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}
