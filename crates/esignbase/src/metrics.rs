//! Client-side metrics
//!
//! Emitted through the `metrics` facade; the embedding application decides
//! whether a recorder is installed and how it is exported.
//!
//! - `esignbase_requests_total` (counter): labels `operation`, `status`
//! - `esignbase_reauthentications_total` (counter): label `outcome`

/// Result of the token refresh triggered by a 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReauthOutcome {
    Success,
    Failure,
}

impl ReauthOutcome {
    fn label(self) -> &'static str {
        match self {
            ReauthOutcome::Success => "success",
            ReauthOutcome::Failure => "failure",
        }
    }
}

/// Record the final status of a resource operation.
pub fn record_response(operation: &'static str, status: u16) {
    metrics::counter!(
        "esignbase_requests_total",
        "operation" => operation,
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record one 401-triggered reauthentication attempt.
pub fn record_reauthentication(outcome: ReauthOutcome) {
    metrics::counter!("esignbase_reauthentications_total", "outcome" => outcome.label())
        .increment(1);
}
