//! Storage adapter — the only module that touches the placements file.
//!
//! Command handlers see the dataset through `PlacementStore` and never know
//! the backing format. `AppState` carries an `Arc<dyn PlacementStore>`.

pub mod csv_store;

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::placement::{EligibleCompany, Placement};

pub use csv_store::CsvPlacementStore;

#[derive(Debug, Error)]
pub enum StorageError {
    /// The resource exists but is not a placements table.
    #[error("cannot read {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("cannot write {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The blocking file task panicked or was cancelled.
    #[error("storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Whole-dataset persistence. There are no row-level operations: callers load
/// everything, act, and save everything back. Last successful save wins.
#[async_trait]
pub trait PlacementStore: Send + Sync {
    /// Creates the resource with the canonical header if it does not exist.
    async fn ensure_initialized(&self) -> Result<(), StorageError>;

    async fn load_all(&self) -> Result<Vec<Placement>, StorageError>;

    /// Replaces the resource contents with `placements`, in order.
    async fn save_all(&self, placements: &[Placement]) -> Result<(), StorageError>;

    /// Overwrites the eligibility export with `companies`.
    async fn write_eligible_export(&self, companies: &[EligibleCompany])
        -> Result<(), StorageError>;

    /// Raw CSV content of the last export, or `None` if none was written yet.
    async fn read_eligible_export(&self) -> Result<Option<String>, StorageError>;
}
