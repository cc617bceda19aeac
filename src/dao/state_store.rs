//! File-backed persistence for the scoreboard record.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{error, info};

use crate::state::scoreboard::ScoreboardState;

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures raised while bootstrapping or writing the state document.
///
/// Reads never fail: a missing or unparsable document falls back to the
/// default record inside [`StateStore::read`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The directory holding the state document could not be created.
    #[error("failed to create state directory for `{path}`")]
    CreateDir {
        /// Path of the state document whose parent could not be created.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The state document could not be written.
    #[error("failed to write state document `{path}`")]
    WriteDocument {
        /// Path of the state document.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The record could not be serialized to JSON.
    #[error("failed to serialize state document")]
    Serialize {
        /// Underlying serialization failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Owner of the persisted state document and its in-memory snapshot.
///
/// The document is a single pretty-printed JSON object holding the full
/// record; every write replaces it wholesale, so readers observe either the
/// old or the new content, never a torn record.
pub struct StateStore {
    path: PathBuf,
    cached: ScoreboardState,
}

impl StateStore {
    /// Open the store, creating the document with the default record when it
    /// does not exist yet.
    ///
    /// Bootstrap failure is fatal to startup; an existing-but-unreadable
    /// document is not (the read falls back to defaults, as at runtime).
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let mut store = Self {
            path,
            cached: ScoreboardState::default(),
        };

        if !store.path.exists() {
            info!(
                path = %store.path.display(),
                "state document not found; creating it with the default record"
            );
            store.persist(&ScoreboardState::default())?;
        }

        store.cached = store.read();
        Ok(store)
    }

    /// Re-read the record from disk, overlaying persisted values on defaults.
    ///
    /// Never fails: a read or parse error is logged and the full default
    /// record is returned instead. The cached snapshot is refreshed either
    /// way.
    pub fn read(&mut self) -> ScoreboardState {
        let record = match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str::<ScoreboardState>(&contents) {
                Ok(record) => record,
                Err(err) => {
                    error!(
                        path = %self.path.display(),
                        error = %err,
                        "failed to parse state document; falling back to defaults"
                    );
                    ScoreboardState::default()
                }
            },
            Err(err) => {
                error!(
                    path = %self.path.display(),
                    error = %err,
                    "failed to read state document; falling back to defaults"
                );
                ScoreboardState::default()
            }
        };

        self.cached = record.clone();
        record
    }

    /// Serialize the full record and replace the persisted document, then
    /// update the cached snapshot.
    pub fn write(&mut self, record: ScoreboardState) -> StoreResult<()> {
        self.persist(&record)?;
        self.cached = record;
        Ok(())
    }

    /// The last snapshot observed by a read or a write.
    pub fn cached(&self) -> &ScoreboardState {
        &self.cached
    }

    /// Path of the persisted document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, record: &ScoreboardState) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }

        let contents =
            serde_json::to_string_pretty(record).map_err(|source| StoreError::Serialize { source })?;

        fs::write(&self.path, contents).map_err(|source| StoreError::WriteDocument {
            path: self.path.clone(),
            source,
        })
    }
}
