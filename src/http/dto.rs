//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

/// Query parameters for message creation.
///
/// `description` is required; axum's query rejection is mapped to a 400
/// in the handler when it is absent.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMessageParams {
    pub description: String,
}

/// A message on the wire: `{"id":1,"description":"..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageDto {
    pub id: i64,
    pub description: String,
}

/// Response for the health check endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}
