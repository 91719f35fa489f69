use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error payload returned for 4xx responses that carry a message.
///
/// Not-found and forbidden responses return an empty body instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorDto {
    pub message: String,
}

/// Response body for `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthDto {
    pub status: String,
    pub utc: DateTime<Utc>,
}
