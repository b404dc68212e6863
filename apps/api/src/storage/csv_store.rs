use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info};

use crate::models::placement::{EligibleCompany, Placement, EXPORT_COLUMNS, PLACEMENT_COLUMNS};
use crate::storage::{PlacementStore, StorageError};

/// Placements kept in a flat CSV file, plus the eligibility export next to it.
#[derive(Debug, Clone)]
pub struct CsvPlacementStore {
    path: PathBuf,
    export_path: PathBuf,
}

impl CsvPlacementStore {
    pub fn new(path: impl Into<PathBuf>, export_path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            export_path: export_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PlacementStore for CsvPlacementStore {
    async fn ensure_initialized(&self) -> Result<(), StorageError> {
        let path = self.path.clone();
        blocking(move || {
            if path.exists() {
                return Ok(());
            }
            let bytes = encode::<Placement>(&PLACEMENT_COLUMNS, &[]).map_err(|reason| {
                StorageError::Write {
                    path: path.clone(),
                    reason,
                }
            })?;
            write_atomically(&path, &bytes)?;
            info!("Created placements file at {}", path.display());
            Ok(())
        })
        .await
    }

    async fn load_all(&self) -> Result<Vec<Placement>, StorageError> {
        let path = self.path.clone();
        blocking(move || {
            let bytes = std::fs::read(&path).map_err(|e| StorageError::Read {
                path: path.clone(),
                reason: e.to_string(),
            })?;
            let placements = decode_placements(&bytes).map_err(|reason| StorageError::Read {
                path: path.clone(),
                reason,
            })?;
            debug!("Loaded {} placements from {}", placements.len(), path.display());
            Ok(placements)
        })
        .await
    }

    async fn save_all(&self, placements: &[Placement]) -> Result<(), StorageError> {
        let bytes = encode(&PLACEMENT_COLUMNS, placements).map_err(|reason| {
            StorageError::Write {
                path: self.path.clone(),
                reason,
            }
        })?;
        let path = self.path.clone();
        let count = placements.len();
        blocking(move || {
            write_atomically(&path, &bytes)?;
            info!("Saved {count} placements to {}", path.display());
            Ok(())
        })
        .await
    }

    async fn write_eligible_export(
        &self,
        companies: &[EligibleCompany],
    ) -> Result<(), StorageError> {
        let bytes = encode(&EXPORT_COLUMNS, companies).map_err(|reason| StorageError::Write {
            path: self.export_path.clone(),
            reason,
        })?;
        let path = self.export_path.clone();
        let count = companies.len();
        blocking(move || {
            write_atomically(&path, &bytes)?;
            info!("Exported {count} eligible companies to {}", path.display());
            Ok(())
        })
        .await
    }

    async fn read_eligible_export(&self) -> Result<Option<String>, StorageError> {
        let path = self.export_path.clone();
        blocking(move || match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        })
        .await
    }
}

/// Runs file I/O off the async executor.
async fn blocking<T, F>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

/// Header first, then one record per row. The header is written explicitly so
/// an empty table still carries all its columns.
fn encode<T: Serialize>(columns: &[&str], rows: &[T]) -> Result<Vec<u8>, String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(columns).map_err(|e| e.to_string())?;
    for row in rows {
        writer.serialize(row).map_err(|e| e.to_string())?;
    }
    writer.into_inner().map_err(|e| e.to_string())
}

fn decode_placements(bytes: &[u8]) -> Result<Vec<Placement>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(bytes);

    let headers = reader.headers().map_err(|e| e.to_string())?.clone();
    let missing: Vec<&str> = PLACEMENT_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        return Err(format!("missing columns: {}", missing.join(", ")));
    }

    reader
        .deserialize::<Placement>()
        .map(|row| row.map_err(|e| e.to_string()))
        .collect()
}

/// Writes to a temporary sibling and renames it over `path`, so readers see
/// either the old file or the new one.
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| StorageError::Write {
        path: path.to_path_buf(),
        reason: e.error.to_string(),
    })?;
    Ok(())
}
