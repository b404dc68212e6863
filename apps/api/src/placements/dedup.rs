use serde::{Deserialize, Serialize};

use crate::models::placement::Placement;
use crate::placements::query::composite_label;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    DuplicateLabel,
}

/// Advisory, non-blocking. The record is still added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DuplicateWarning {
    pub kind: WarningKind,
    pub label: String,
    pub existing_count: usize,
    pub description: String,
}

/// Warns when `candidate` has exactly the same company/role label as rows
/// already in the dataset, since removal by label would delete them all.
/// Labels are compared the same way `remove` compares them: case matters.
pub fn check_for_duplicates(existing: &[Placement], candidate: &Placement) -> Vec<DuplicateWarning> {
    let label = composite_label(candidate);

    let existing_count = existing
        .iter()
        .map(composite_label)
        .filter(|other| *other == label)
        .count();

    if existing_count == 0 {
        return Vec::new();
    }

    vec![DuplicateWarning {
        kind: WarningKind::DuplicateLabel,
        label: label.clone(),
        existing_count,
        description: format!(
            "'{label}' already exists {existing_count} time(s). Removing it will remove every copy."
        ),
    }]
}
