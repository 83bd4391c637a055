//! Request/response bodies.
//!
//! The request body is [`rewards_core::ReceiptPayload`]; only responses are
//! defined here.

use rewards_store::ReceiptId;
use serde::{Deserialize, Serialize};

/// Body of a successful `POST /receipts/process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptIdResponse {
    pub id: ReceiptId,
}

/// Body of a successful `GET /receipts/{id}/points`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub receipts: usize,
}
