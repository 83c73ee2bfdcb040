use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of one pipeline run as reported by the run-history API.
///
/// The wire value is a free-form string; statuses the monitor does not
/// aggregate specially are preserved in [`RunStatus::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RunStatus {
    Succeeded,
    Failed,
    InProgress,
    Cancelled,
    Other(String),
}

impl RunStatus {
    /// Returns `true` once the run can no longer change state.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InProgress)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
            Self::InProgress => "InProgress",
            Self::Cancelled => "Cancelled",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for RunStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Succeeded" => Self::Succeeded,
            "Failed" => Self::Failed,
            "InProgress" => Self::InProgress,
            "Cancelled" => Self::Cancelled,
            _ => Self::Other(raw),
        }
    }
}

impl From<RunStatus> for String {
    fn from(status: RunStatus) -> Self {
        status.as_str().to_string()
    }
}

/// One pipeline run record from the run-history API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineRun {
    pub run_id: String,
    pub pipeline_name: String,
    pub status: RunStatus,
    pub run_start: DateTime<Utc>,
    /// Absent while the run is still in flight.
    pub run_end: Option<DateTime<Utc>>,
    pub duration_ms: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_from_wire_strings() {
        assert_eq!(RunStatus::from("Succeeded".to_string()), RunStatus::Succeeded);
        assert_eq!(RunStatus::from("Failed".to_string()), RunStatus::Failed);
        assert_eq!(RunStatus::from("InProgress".to_string()), RunStatus::InProgress);
        assert_eq!(RunStatus::from("Cancelled".to_string()), RunStatus::Cancelled);
        assert_eq!(
            RunStatus::from("Queued".to_string()),
            RunStatus::Other("Queued".to_string())
        );
    }

    #[test]
    fn in_progress_is_not_terminal() {
        assert!(!RunStatus::InProgress.is_terminal());
        assert!(RunStatus::Succeeded.is_terminal());
        assert!(RunStatus::Failed.is_terminal());
    }

    #[test]
    fn status_serde_round_trip() {
        let encoded = serde_json::to_string(&RunStatus::Other("Queued".to_string())).unwrap();
        assert_eq!(encoded, "\"Queued\"");
        let decoded: RunStatus = serde_json::from_str("\"Succeeded\"").unwrap();
        assert_eq!(decoded, RunStatus::Succeeded);
    }
}
