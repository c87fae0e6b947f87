//! Room inventory request handlers.
//!
//! Each handler decodes its path and body, calls one store or upload
//! operation, and maps the result onto a status code and JSON body.
//! JSON bodies go through [`decode_body`], so the request's
//! `Content-Type` is not consulted.

use axum::{
    body::Bytes,
    extract::{
        multipart::{Multipart, MultipartRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::http::error::{ApiError, ReplyBody};
use crate::http::json::decode_body;
use crate::http::server::AppState;
use crate::inventory::{InventoryError, ReservationRequest, Room};
use crate::observability::metrics;
use crate::uploads::UploadError;

/// Multipart field carrying the image.
pub const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub rooms: usize,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        rooms: state.store.len(),
    })
}

pub async fn get_rooms(State(state): State<AppState>) -> Json<Vec<Room>> {
    Json(state.store.list())
}

pub async fn get_room_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Room>, ApiError> {
    Ok(Json(state.store.find_by_id(&id)?))
}

pub async fn post_rooms(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Room>), ApiError> {
    let room: Room = decode_body(&body).map_err(|e| ApiError::InvalidRoomJson(e.to_string()))?;

    let room = state.store.append(room);
    tracing::info!(room_id = %room.id, class = %room.class, "Room created");
    Ok((StatusCode::CREATED, Json(room)))
}

pub async fn edit_room_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Room>, ApiError> {
    let fields: Room =
        decode_body(&body).map_err(|e| ApiError::InvalidRoomJson(e.to_string()))?;

    let room = state.store.replace(&id, fields)?;
    tracing::info!(room_id = %id, "Room updated");
    Ok(Json(room))
}

pub async fn delete_room_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ReplyBody>, ApiError> {
    state.store.remove_by_id(&id)?;
    tracing::info!(room_id = %id, "Room deleted");
    Ok(Json(ReplyBody::message("Room Deleted")))
}

pub async fn reserve_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<ReplyBody>, ApiError> {
    let request: ReservationRequest = decode_body(&body).map_err(|e| {
        metrics::record_reservation("invalid");
        ApiError::InvalidReservationJson(e.to_string())
    })?;

    match state.store.reserve(&id, request.room_reserved) {
        Ok(reservation) => {
            metrics::record_reservation("reserved");
            tracing::info!(
                room_id = %id,
                requested = reservation.reserved,
                remaining = reservation.remaining,
                "Rooms reserved"
            );
            Ok(Json(ReplyBody::message(format!(
                "Room reserved {}",
                reservation.reserved
            ))))
        }
        Err(e) => {
            metrics::record_reservation(match &e {
                InventoryError::NotFound(_) => "not_found",
                InventoryError::InvalidQuantity(_) => "invalid",
                InventoryError::OverCapacity { .. } => "over_capacity",
            });
            Err(e.into())
        }
    }
}

pub async fn upload_room_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ReplyBody>, ApiError> {
    let result = store_upload(&state, multipart).await;
    metrics::record_upload(if result.is_ok() { "stored" } else { "failed" });
    result?;
    Ok(Json(ReplyBody::message("File uploaded successfully")))
}

async fn store_upload(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(), UploadError> {
    let mut multipart = multipart.map_err(|e| UploadError::BadForm(e.body_text()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::BadForm(e.body_text()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        tracing::debug!(file_name = %file_name, "Received file");

        let contents = field
            .bytes()
            .await
            .map_err(|e| UploadError::BadForm(e.body_text()))?;
        let path = state.uploads.save(&file_name, &contents).await?;

        tracing::info!(path = ?path, bytes = contents.len(), "File saved");
        return Ok(());
    }

    Err(UploadError::BadForm(format!("missing '{}' field", UPLOAD_FIELD)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;
    use crate::http::server::HttpServer;
    use crate::inventory::RoomStore;
    use crate::uploads::UploadStore;
    use axum::{
        body::Body,
        http::{header, Request},
        Router,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> (Router, AppState) {
        let state = AppState {
            store: Arc::new(RoomStore::seeded()),
            uploads: Arc::new(UploadStore::new(
                std::env::temp_dir().join(format!("room-handlers-{}", uuid::Uuid::new_v4())),
            )),
        };
        let server = HttpServer::with_state(ServiceConfig::default(), state.clone());
        (server.router(), state)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        call(app, request).await
    }

    /// Send a raw body with an optional `Content-Type`.
    async fn send_raw(
        app: &Router,
        method: &str,
        uri: &str,
        content_type: Option<&str>,
        body: &str,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        call(app, builder.body(Body::from(body.to_string())).unwrap()).await
    }

    async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_list_and_get() {
        let (app, _) = app();

        let (status, body) = send(&app, "GET", "/rooms", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 5);

        let (status, first) = send(&app, "GET", "/rooms/3", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["class"], "Golde");
        assert_eq!(first["roomcount"], 40);

        let (_, second) = send(&app, "GET", "/rooms/3", None).await;
        assert_eq!(first, second);

        let (status, body) = send(&app, "GET", "/rooms/99", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "room not found" }));
    }

    #[tokio::test]
    async fn test_create_then_fetch() {
        let (app, state) = app();
        let room = json!({
            "id": "6",
            "class": "Suite",
            "capacity": 2,
            "facility": "Balcony",
            "price": 3500000.5,
            "roomcount": 3,
            "available": true
        });

        let (status, body) = send(&app, "POST", "/rooms", Some(room.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, room);

        let (status, body) = send(&app, "GET", "/rooms/6", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, room);
        assert_eq!(state.store.len(), 6);
    }

    #[tokio::test]
    async fn test_create_with_malformed_body() {
        let (app, state) = app();
        let request = Request::builder()
            .method("POST")
            .uri("/rooms")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"id\": "))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.store.len(), 5);
    }

    #[tokio::test]
    async fn test_json_bodies_ignore_content_type() {
        let (app, state) = app();

        let (status, body) =
            send_raw(&app, "POST", "/reserve/5", None, r#"{"roomreserved":10}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Room reserved 10" }));
        assert_eq!(state.store.find_by_id("5").unwrap().room_count, 50);

        let (status, body) = send_raw(
            &app,
            "POST",
            "/reserve/5",
            Some("application/x-www-form-urlencoded"),
            r#"{"roomreserved":5}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Room reserved 5");
        assert_eq!(state.store.find_by_id("5").unwrap().room_count, 45);

        let (status, body) = send_raw(
            &app,
            "POST",
            "/rooms",
            Some("text/plain"),
            r#"{"id":"7","class":"Loft","roomcount":2,"available":true}"#,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["class"], "Loft");
        assert_eq!(state.store.find_by_id("7").unwrap().room_count, 2);

        let (status, body) = send_raw(&app, "PUT", "/rooms/7", None, r#"{"class":"Attic"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["class"], "Attic");
    }

    #[tokio::test]
    async fn test_null_fields_decode_to_zero_values() {
        let (app, state) = app();

        let (status, body) = send(
            &app,
            "POST",
            "/rooms",
            Some(json!({ "id": "8", "class": "Dorm", "price": null, "roomcount": null })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["price"], 0.0);
        assert_eq!(body["roomcount"], 0);

        let (status, body) = send(&app, "POST", "/reserve/5", Some(json!({ "roomreserved": null }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Room reserved 0");
        assert_eq!(state.store.find_by_id("5").unwrap().room_count, 60);
    }

    #[tokio::test]
    async fn test_json_keys_match_case_insensitively() {
        let (app, state) = app();

        let (status, body) = send(&app, "POST", "/reserve/5", Some(json!({ "RoomReserved": 10 }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Room reserved 10");
        assert_eq!(state.store.find_by_id("5").unwrap().room_count, 50);

        let (status, body) = send(
            &app,
            "PUT",
            "/rooms/4",
            Some(json!({ "Class": "Penthouse", "RoomCount": 9, "Available": true })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "4");
        assert_eq!(body["class"], "Penthouse");
        assert_eq!(body["roomcount"], 9);
        assert_eq!(body["available"], true);
    }

    #[tokio::test]
    async fn test_update() {
        let (app, _) = app();
        let fields = json!({ "class": "Platinum", "capacity": 8, "roomcount": 12, "available": true });

        let (status, body) = send(&app, "PUT", "/rooms/4", Some(fields.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "4");
        assert_eq!(body["class"], "Platinum");
        assert_eq!(body["facility"], "");

        let (status, body) = send(&app, "PUT", "/rooms/42", Some(fields)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "room not found");

        let (status, body) = send(&app, "PUT", "/rooms/4", Some(json!({ "capacity": "many" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid Json provided" }));
    }

    #[tokio::test]
    async fn test_delete() {
        let (app, _) = app();

        let (status, body) = send(&app, "DELETE", "/rooms/2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Room Deleted" }));

        let (status, _) = send(&app, "GET", "/rooms/2", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, "DELETE", "/rooms/2", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_reservation_scenario() {
        let (app, state) = app();

        let (status, body) = send(&app, "POST", "/reserve/5", Some(json!({ "roomreserved": 10 }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Room reserved 10" }));
        assert_eq!(state.store.find_by_id("5").unwrap().room_count, 50);

        let (status, body) = send(&app, "POST", "/reserve/5", Some(json!({ "roomreserved": 100 }))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "cant reserve over the limit");
        let room = state.store.find_by_id("5").unwrap();
        assert_eq!(room.room_count, 50);
        assert!(!room.available);

        let (status, body) = send(&app, "POST", "/reserve/5", Some(json!({ "roomreserved": -1 }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "cant reserve room in 0 room");
        assert_eq!(state.store.find_by_id("5").unwrap().room_count, 50);

        let (status, _) = send(&app, "POST", "/reserve/99", Some(json!({ "roomreserved": 1 }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(&app, "POST", "/reserve/5", Some(json!({ "roomreserved": "ten" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": "Invalid JSON provided" }));
    }

    #[tokio::test]
    async fn test_upload_without_multipart_body() {
        let (app, state) = app();
        let (status, body) = send(&app, "POST", "/uploads-room", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Error parsing form" }));
        assert!(!state.uploads.directory().exists());
    }

    #[tokio::test]
    async fn test_upload_stores_file() {
        let (app, state) = app();
        let boundary = "room-boundary";
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"lobby.jpg\"\r\nContent-Type: image/jpeg\r\n\r\nJPEGDATA\r\n--{b}--\r\n",
            b = boundary
        );
        let request = Request::builder()
            .method("POST")
            .uri("/uploads-room")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let saved = std::fs::read(state.uploads.directory().join("lobby.jpg")).unwrap();
        assert_eq!(saved, b"JPEGDATA");
        std::fs::remove_dir_all(state.uploads.directory()).unwrap_or_default();
    }

    #[tokio::test]
    async fn test_health_and_request_id() {
        let (app, _) = app();
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }
}
