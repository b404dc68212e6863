//! Range checks applied at the input boundary, before any command runs.

use serde::{Deserialize, Serialize};

use crate::models::placement::CandidateProfile;
use crate::placements::commands::NewPlacement;

pub const MIN_PACKAGE_LPA: f64 = 1.0;
pub const CGPA_RANGE: (f64, f64) = (0.0, 10.0);
pub const PERCENTAGE_RANGE: (f64, f64) = (0.0, 100.0);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldViolation {
    pub field: String,
    pub reason: String,
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

fn check_range(field: &str, value: f64, (min, max): (f64, f64), out: &mut Vec<FieldViolation>) {
    if !(min..=max).contains(&value) {
        out.push(FieldViolation {
            field: field.to_string(),
            reason: format!("must be between {min} and {max}, got {value}"),
        });
    }
}

/// Returns every out-of-range field; empty means the record may be added.
/// Company and role are free text and are not checked.
pub fn validate_new_placement(new: &NewPlacement) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if !(new.package.is_finite() && new.package >= MIN_PACKAGE_LPA) {
        violations.push(FieldViolation {
            field: "package".to_string(),
            reason: format!("must be at least {MIN_PACKAGE_LPA} LPA, got {}", new.package),
        });
    }
    check_range("eligibility_cgpa", new.eligibility_cgpa, CGPA_RANGE, &mut violations);
    check_range("eligibility_10th", new.eligibility_10th, PERCENTAGE_RANGE, &mut violations);
    check_range("eligibility_12th", new.eligibility_12th, PERCENTAGE_RANGE, &mut violations);

    violations
}

pub fn validate_profile(profile: &CandidateProfile) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    check_range("cgpa", profile.cgpa, CGPA_RANGE, &mut violations);
    check_range("pct_10th", profile.pct_10th, PERCENTAGE_RANGE, &mut violations);
    check_range("pct_12th", profile.pct_12th, PERCENTAGE_RANGE, &mut violations);
    violations
}

/// Joins violations into the single message carried by a validation error.
pub fn describe(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
