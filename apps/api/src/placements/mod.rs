pub mod chart;
pub mod commands;
pub mod dedup;
pub mod handlers;
pub mod query;
pub mod validation;

/// Route serving the latest eligibility export as a file download.
pub const EXPORT_DOWNLOAD_PATH: &str = "/api/v1/eligibility/export";
