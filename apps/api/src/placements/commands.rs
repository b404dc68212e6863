//! The five placement actions plus their supporting lookups.
//!
//! Every command reloads the dataset from the store, so nothing is cached
//! between requests. Mutating commands save the whole dataset straight away
//! and return `reload: true` so the caller re-fetches its view.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::placement::{CandidateProfile, EligibleCompany, Placement, SortOrder};
use crate::placements::chart::{build_chart, ChartPayload};
use crate::placements::dedup::{check_for_duplicates, DuplicateWarning};
use crate::placements::query::{composite_label, filter_eligible, search, sort_by_package};
use crate::placements::validation::{describe, validate_new_placement, validate_profile};
use crate::placements::EXPORT_DOWNLOAD_PATH;
use crate::storage::PlacementStore;

// ────────────────────────────────────────────────────────────────────────────
// Inputs / outcomes
// ────────────────────────────────────────────────────────────────────────────

/// A placement as submitted by the add form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlacement {
    pub company: String,
    pub role: String,
    pub package: f64,
    pub eligibility_cgpa: f64,
    pub backlogs_allowed: u32,
    pub eligibility_10th: f64,
    pub eligibility_12th: f64,
}

impl From<NewPlacement> for Placement {
    fn from(new: NewPlacement) -> Self {
        Self {
            company: Some(new.company),
            role: Some(new.role),
            package: new.package,
            eligibility_cgpa: new.eligibility_cgpa,
            backlogs_allowed: new.backlogs_allowed,
            eligibility_10th: new.eligibility_10th,
            eligibility_12th: new.eligibility_12th,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ListOutcome {
    NoData { message: String },
    Rows { placements: Vec<Placement> },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AddOutcome {
    pub message: String,
    pub company: String,
    pub warnings: Vec<DuplicateWarning>,
    pub reload: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EligibilityOutcome {
    NoEligibleCompanies {
        message: String,
    },
    Eligible {
        message: String,
        companies: Vec<EligibleCompany>,
        download_path: String,
    },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChartOutcome {
    NothingToVisualize { message: String },
    Chart { chart: ChartPayload },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RemovalOptions {
    NothingToRemove { message: String },
    Options { labels: Vec<String> },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RemoveOutcome {
    pub message: String,
    pub removed_label: String,
    pub removed_count: usize,
    pub reload: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Commands
// ────────────────────────────────────────────────────────────────────────────

async fn load_fresh(store: &dyn PlacementStore) -> Result<Vec<Placement>, AppError> {
    store.ensure_initialized().await?;
    Ok(store.load_all().await?)
}

/// Searched and sorted view of every placement.
pub async fn list(
    store: &dyn PlacementStore,
    term: Option<&str>,
    order: SortOrder,
) -> Result<ListOutcome, AppError> {
    let placements = load_fresh(store).await?;
    if placements.is_empty() {
        return Ok(ListOutcome::NoData {
            message: "No companies added yet.".to_string(),
        });
    }

    let view = sort_by_package(search(placements, term), order);
    Ok(ListOutcome::Rows { placements: view })
}

/// Appends one placement and saves the dataset. Duplicates are allowed but
/// reported.
pub async fn add(store: &dyn PlacementStore, new: NewPlacement) -> Result<AddOutcome, AppError> {
    let violations = validate_new_placement(&new);
    if !violations.is_empty() {
        return Err(AppError::Validation(describe(&violations)));
    }

    let mut placements = load_fresh(store).await?;
    let company = new.company.clone();
    let placement = Placement::from(new);
    let warnings = check_for_duplicates(&placements, &placement);

    placements.push(placement);
    store.save_all(&placements).await?;
    info!("Added placement for {company} ({} total)", placements.len());

    Ok(AddOutcome {
        message: format!("{company} added successfully!"),
        company,
        warnings,
        reload: true,
    })
}

/// Placements the candidate qualifies for. A non-empty result is also written
/// to the eligibility export, replacing the previous one.
pub async fn check_eligibility(
    store: &dyn PlacementStore,
    profile: CandidateProfile,
) -> Result<EligibilityOutcome, AppError> {
    let violations = validate_profile(&profile);
    if !violations.is_empty() {
        return Err(AppError::Validation(describe(&violations)));
    }

    let placements = load_fresh(store).await?;
    let eligible = filter_eligible(&placements, &profile);
    if eligible.is_empty() {
        return Ok(EligibilityOutcome::NoEligibleCompanies {
            message: "No companies available for your profile.".to_string(),
        });
    }

    let companies: Vec<EligibleCompany> = eligible.iter().map(EligibleCompany::from).collect();
    store.write_eligible_export(&companies).await?;
    info!(
        "Candidate eligible for {} of {} placements",
        companies.len(),
        placements.len()
    );

    Ok(EligibilityOutcome::Eligible {
        message: "You are eligible for the following companies:".to_string(),
        companies,
        download_path: EXPORT_DOWNLOAD_PATH.to_string(),
    })
}

/// CSV content of the last eligibility export.
pub async fn eligible_export(store: &dyn PlacementStore) -> Result<String, AppError> {
    store.read_eligible_export().await?.ok_or_else(|| {
        AppError::NotFound("No eligibility check has been exported yet".to_string())
    })
}

pub async fn visualize(store: &dyn PlacementStore) -> Result<ChartOutcome, AppError> {
    let placements = load_fresh(store).await?;
    if placements.is_empty() {
        return Ok(ChartOutcome::NothingToVisualize {
            message: "No companies to visualize yet.".to_string(),
        });
    }
    Ok(ChartOutcome::Chart {
        chart: build_chart(placements),
    })
}

/// Distinct composite labels in dataset order, for the removal picker.
pub async fn removal_options(store: &dyn PlacementStore) -> Result<RemovalOptions, AppError> {
    let placements = load_fresh(store).await?;
    if placements.is_empty() {
        return Ok(RemovalOptions::NothingToRemove {
            message: "No companies to remove.".to_string(),
        });
    }

    let mut labels: Vec<String> = Vec::new();
    for label in placements.iter().map(composite_label) {
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    Ok(RemovalOptions::Options { labels })
}

/// Deletes every row whose composite label equals `label`, not just the first.
pub async fn remove(store: &dyn PlacementStore, label: &str) -> Result<RemoveOutcome, AppError> {
    let placements = load_fresh(store).await?;
    let before = placements.len();

    let remaining: Vec<Placement> = placements
        .into_iter()
        .filter(|p| composite_label(p) != label)
        .collect();
    let removed_count = before - remaining.len();

    if removed_count == 0 {
        return Err(AppError::NotFound(format!("Placement '{label}' not found")));
    }

    store.save_all(&remaining).await?;
    info!("Removed {removed_count} placement(s) labelled '{label}'");

    Ok(RemoveOutcome {
        message: format!("{label} removed successfully!"),
        removed_label: label.to_string(),
        removed_count,
        reload: true,
    })
}
