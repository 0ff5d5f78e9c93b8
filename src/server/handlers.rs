//! Request handlers for the configuration API.

use super::AppState;
use super::responses::{UNREADABLE_FILE, config_listing, file_json};
use crate::conf::ConfigEntry;
use crate::error::ConsoleError;
use crate::store::{self, ConfigFile};
use axum::{
    Json,
    extract::{Path as AxumPath, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::{Value, json};

/// An error response: status code plus JSON body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: Value,
}

impl ApiError {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<ConsoleError> for ApiError {
    fn from(err: ConsoleError) -> Self {
        let status = match err {
            ConsoleError::UserError(_) => StatusCode::BAD_REQUEST,
            ConsoleError::NotFound(_) => StatusCode::NOT_FOUND,
            ConsoleError::WriteError(_) | ConsoleError::ServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self::new(status, json!({ "error": err.to_string() }))
    }
}

/// Body of `POST /api/config/save`. Both fields are required; they are
/// optional here so their absence gets a specific message.
#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    pub items: Option<Vec<ConfigEntry>>,
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "hummingbird backend is running",
    }))
}

/// List every configured file with its entries.
pub async fn list_configs(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let files = store::load_all(&state.ctx, &state.settings).map_err(|e| match e {
        ConsoleError::NotFound(_) => ApiError::new(
            StatusCode::NOT_FOUND,
            json!({
                "error": "Recipe directory not found",
                "path": state.ctx.recipe_dir.display().to_string(),
            }),
        ),
        other => other.into(),
    })?;

    Ok(Json(config_listing(&state.ctx, &files)))
}

/// One file's entries.
pub async fn get_config(
    State(state): State<AppState>,
    AxumPath(file_name): AxumPath<String>,
) -> Result<Json<Value>, ApiError> {
    let path = state.ctx.config_path(&file_name)?;
    let document = store::read_document(&state.ctx, &state.settings, &file_name)?;

    if document.is_none() {
        return Err(ApiError::new(
            StatusCode::NOT_FOUND,
            json!({
                "error": UNREADABLE_FILE,
                "fileName": file_name,
                "path": path.display().to_string(),
            }),
        ));
    }

    Ok(Json(file_json(&ConfigFile {
        file_name,
        path,
        document,
    })))
}

/// Replace a file with the submitted entries.
pub async fn save_config(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            json!({
                "error": "Invalid request body",
                "details": rejection.body_text(),
            }),
        )
    })?;

    let (Some(file_name), Some(items)) = (request.file_name, request.items) else {
        return Err(missing_fields());
    };
    if file_name.trim().is_empty() {
        return Err(missing_fields());
    }

    store::save_document(&state.ctx, &state.settings, &file_name, items).map_err(|e| match e {
        ConsoleError::WriteError(_) => ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({
                "error": "Failed to save configuration file",
                "details": e.to_string(),
            }),
        ),
        other => other.into(),
    })?;

    Ok(Json(json!({
        "success": true,
        "message": format!("Configuration saved to {}", file_name),
    })))
}

fn missing_fields() -> ApiError {
    ApiError::new(
        StatusCode::BAD_REQUEST,
        json!({ "error": "Missing required fields: fileName and items" }),
    )
}
