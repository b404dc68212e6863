use serde::{Deserialize, Serialize};

/// Column header of the placements file, in on-disk order.
pub const PLACEMENT_COLUMNS: [&str; 7] = [
    "Company",
    "Role",
    "Package(LPA)",
    "Eligibility_CGPA",
    "Backlogs_Allowed",
    "Eligibility_10th",
    "Eligibility_12th",
];

/// Column header of the eligible-companies export.
pub const EXPORT_COLUMNS: [&str; 3] = ["Company", "Role", "Package(LPA)"];

/// One placement offer as stored in the placements file.
///
/// `company` and `role` are optional because an empty cell in the file reads
/// back as a missing value; such rows stay listable but never match a search
/// and cannot be selected for removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    #[serde(rename = "Company")]
    pub company: Option<String>,
    #[serde(rename = "Role")]
    pub role: Option<String>,
    #[serde(rename = "Package(LPA)")]
    pub package: f64,
    #[serde(rename = "Eligibility_CGPA")]
    pub eligibility_cgpa: f64,
    #[serde(rename = "Backlogs_Allowed")]
    pub backlogs_allowed: u32,
    #[serde(rename = "Eligibility_10th")]
    pub eligibility_10th: f64,
    #[serde(rename = "Eligibility_12th")]
    pub eligibility_12th: f64,
}

/// Projection of a placement written to the eligibility export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibleCompany {
    #[serde(rename = "Company")]
    pub company: Option<String>,
    #[serde(rename = "Role")]
    pub role: Option<String>,
    #[serde(rename = "Package(LPA)")]
    pub package: f64,
}

impl From<&Placement> for EligibleCompany {
    fn from(p: &Placement) -> Self {
        Self {
            company: p.company.clone(),
            role: p.role.clone(),
            package: p.package,
        }
    }
}

/// A candidate's academic record, checked against every placement's thresholds.
/// Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub cgpa: f64,
    pub backlogs: u32,
    pub pct_10th: f64,
    pub pct_12th: f64,
}

/// Ordering applied to the list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    None,
    #[serde(alias = "desc")]
    Descending,
    #[serde(alias = "asc")]
    Ascending,
}
