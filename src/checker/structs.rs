//! The structs
//!
/// The status of a check.
///
/// OK, WARNING and CRITICAL are ordered by severity.
/// UNKNOWN means the status could not be determined, and is not comparable with the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Critical,
    Unknown,
}
/// The outcome of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checker {
    /// Set by the caller after the check ran, for example `ORCHESTRATOR_STATUS`.
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
}
