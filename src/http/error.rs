//! Mapping of domain errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::inventory::InventoryError;
use crate::uploads::UploadError;

/// Single-key JSON body: `{"message": ...}` or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyBody {
    Message(String),
    Error(String),
}

impl ReplyBody {
    pub fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::Error(text.into())
    }
}

/// Every way a request can fail.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Room body on create/update could not be decoded.
    #[error("invalid room body: {0}")]
    InvalidRoomJson(String),

    /// Reservation body could not be decoded.
    #[error("invalid reservation body: {0}")]
    InvalidReservationJson(String),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Upload(#[from] UploadError),
}

impl ApiError {
    fn status_and_body(&self) -> (StatusCode, ReplyBody) {
        match self {
            ApiError::InvalidRoomJson(_) => (
                StatusCode::BAD_REQUEST,
                ReplyBody::error("Invalid Json provided"),
            ),
            ApiError::InvalidReservationJson(_) => (
                StatusCode::BAD_REQUEST,
                ReplyBody::message("Invalid JSON provided"),
            ),
            ApiError::Inventory(e) => match e {
                InventoryError::NotFound(_) => {
                    (StatusCode::NOT_FOUND, ReplyBody::message("room not found"))
                }
                InventoryError::InvalidQuantity(_) => (
                    StatusCode::BAD_REQUEST,
                    ReplyBody::message("cant reserve room in 0 room"),
                ),
                InventoryError::OverCapacity { .. } => (
                    StatusCode::FORBIDDEN,
                    ReplyBody::message("cant reserve over the limit"),
                ),
            },
            ApiError::Upload(e) => match e {
                UploadError::BadForm(_) => (
                    StatusCode::BAD_REQUEST,
                    ReplyBody::error("Error parsing form"),
                ),
                UploadError::CreateDirectory(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ReplyBody::error("Error creating upload directory"),
                ),
                UploadError::CreateFile(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ReplyBody::error("Error creating file"),
                ),
                UploadError::Copy(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ReplyBody::error("Error copying file"),
                ),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %self, "Request rejected");
        }

        (status, Json(body)).into_response()
    }
}
