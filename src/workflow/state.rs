//! Lifecycle of one order modal

use serde::{Deserialize, Serialize};

/// Where a workflow instance is in its lifecycle
///
/// ```text
/// Editing ──submit(invalid)──▶ EditingWithErrors ──submit(valid)──▶ Submitting
///    │                                                                 │
///    └────────────────────────submit(valid)────────────────────────────┤
///                                                                      ├─200──▶ Submitted
///                                                                      └─else─▶ SubmissionFailed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    #[default]
    Editing,
    /// Editable, with the aggregated validation message on display
    EditingWithErrors,
    /// Waiting for the order response
    Submitting,
    /// Order created; the caller has been sent to the confirmation view
    Submitted,
    /// The last request failed; editable and resubmittable
    SubmissionFailed,
}

impl WorkflowState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkflowState::Submitted)
    }
}
