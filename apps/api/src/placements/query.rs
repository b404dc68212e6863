//! Pure query functions over a loaded dataset. Nothing here touches storage.

use crate::models::placement::{CandidateProfile, Placement, SortOrder};

/// Case-insensitive substring match against company or role.
/// An absent or empty term returns the input unchanged.
pub fn search(placements: Vec<Placement>, term: Option<&str>) -> Vec<Placement> {
    let needle = match term {
        Some(t) if !t.is_empty() => t.to_lowercase(),
        _ => return placements,
    };
    placements
        .into_iter()
        .filter(|p| {
            field_contains(p.company.as_deref(), &needle) || field_contains(p.role.as_deref(), &needle)
        })
        .collect()
}

fn field_contains(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(needle))
}

/// Stable sort by package; ties keep their relative order.
pub fn sort_by_package(mut placements: Vec<Placement>, order: SortOrder) -> Vec<Placement> {
    match order {
        SortOrder::None => {}
        SortOrder::Ascending => placements.sort_by(|a, b| a.package.total_cmp(&b.package)),
        SortOrder::Descending => placements.sort_by(|a, b| b.package.total_cmp(&a.package)),
    }
    placements
}

/// Whether `profile` clears every threshold of `placement`.
///
/// CGPA and both percentages are floors the candidate must meet; the backlog
/// count is a ceiling the candidate must not exceed. All bounds are inclusive.
pub fn is_eligible(placement: &Placement, profile: &CandidateProfile) -> bool {
    placement.eligibility_cgpa <= profile.cgpa
        && placement.backlogs_allowed >= profile.backlogs
        && placement.eligibility_10th <= profile.pct_10th
        && placement.eligibility_12th <= profile.pct_12th
}

pub fn filter_eligible(placements: &[Placement], profile: &CandidateProfile) -> Vec<Placement> {
    placements
        .iter()
        .filter(|p| is_eligible(p, profile))
        .cloned()
        .collect()
}

/// "Company - Role", the selection key used for removal. A missing part
/// renders as an empty string so every row stays removable.
pub fn composite_label(placement: &Placement) -> String {
    format!(
        "{} - {}",
        placement.company.as_deref().unwrap_or_default(),
        placement.role.as_deref().unwrap_or_default()
    )
}
