//! JSON envelopes returned by the HTTP endpoints.
//!
//! Every body carries a `status` discriminator so clients can branch on it
//! without inspecting the HTTP status code.
use chrono::{DateTime, Utc};
use domain::{sessions::LeaderboardEntry, Id};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Status {
    Success,
    Error,
    Healthy,
    Unhealthy,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct LeaderboardResponse {
    pub(crate) status: Status,
    pub(crate) data: Vec<LeaderboardEntry>,
}

impl LeaderboardResponse {
    pub(crate) fn new(data: Vec<LeaderboardEntry>) -> Self {
        Self {
            status: Status::Success,
            data,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct SaveSessionResponse {
    pub(crate) status: Status,
    pub(crate) message: &'static str,
    pub(crate) id: Id,
    pub(crate) leaderboard: Vec<LeaderboardEntry>,
}

impl SaveSessionResponse {
    pub(crate) fn new(id: Id, leaderboard: Vec<LeaderboardEntry>) -> Self {
        Self {
            status: Status::Success,
            message: "Session saved successfully",
            id,
            leaderboard,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct HealthResponse {
    pub(crate) status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<&'static str>,
    #[schema(value_type = String, format = DateTime)]
    pub(crate) timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub(crate) fn healthy() -> Self {
        Self {
            status: Status::Healthy,
            error: None,
            timestamp: Utc::now(),
        }
    }

    pub(crate) fn unhealthy() -> Self {
        Self {
            status: Status::Unhealthy,
            error: Some("Database connection failed"),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ErrorResponse {
    pub(crate) status: Status,
    pub(crate) message: &'static str,
}

impl ErrorResponse {
    pub(crate) fn new(message: &'static str) -> Self {
        Self {
            status: Status::Error,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn leaderboard_response_serializes_entries_under_data() {
        let response = LeaderboardResponse::new(vec![LeaderboardEntry {
            username: "Auli".to_owned(),
            caught_butterflies: 12,
        }]);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "status": "success",
                "data": [{"username": "Auli", "caught_butterflies": 12}]
            })
        );
    }

    #[test]
    fn healthy_response_omits_the_error_field() {
        let value = serde_json::to_value(HealthResponse::healthy()).unwrap();

        assert_eq!(value["status"], "healthy");
        assert!(value.get("error").is_none());
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn error_response_carries_only_status_and_message() {
        assert_eq!(
            serde_json::to_value(ErrorResponse::new("Database error occurred")).unwrap(),
            json!({"status": "error", "message": "Database error occurred"})
        );
    }
}
