//! API request handlers
//!
//! The upload form posts to `/upload` and gets redirected back with a
//! message key; `/api/v1/convert` returns the conversion result as JSON.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Multipart, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::PriceListConverter;
use crate::error::PriceListResult;
use crate::types::ConversionResult;

use super::messages::{redirect_for_error, ValidationMessage};
use super::server::AppState;

/// Name of the multipart field carrying the workbook
pub const UPLOAD_FIELD: &str = "file";

const UPLOAD_FORM: &str = include_str!("upload_form.html");

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            request_id: Uuid::new_v4().to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            request_id: Uuid::new_v4().to_string(),
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Query of the upload form page
#[derive(Debug, Default, Deserialize)]
pub struct FormQuery {
    pub msg: Option<String>,
    pub title: Option<String>,
}

/// Render the upload form with an optional message
pub fn render_form(query: &FormQuery) -> String {
    let message = query
        .msg
        .as_deref()
        .and_then(ValidationMessage::from_key)
        .map(|message| {
            let text = message.text(query.title.as_deref());
            format!(
                "        <div class=\"message\">\n            <p>{}</p>\n        </div>",
                ammonia::clean_text(&text)
            )
        })
        .unwrap_or_default();

    UPLOAD_FORM.replace("{{message}}", &message)
}

/// GET / - Upload form
pub async fn root(Query(query): Query<FormQuery>) -> Html<String> {
    Html(render_form(&query))
}

/// Health check response
#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_message: String,
}

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
        uptime_message: "Server is running".to_string(),
    }))
}

/// Version response
#[derive(Serialize, Deserialize)]
pub struct VersionResponse {
    pub version: String,
    pub features: Vec<String>,
}

/// GET /version - Server version
pub async fn version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(VersionResponse {
        version: state.version.clone(),
        features: vec!["upload".to_string(), "convert".to_string()],
    }))
}

/// Pull the workbook bytes out of a multipart body
async fn read_upload(multipart: &mut Multipart) -> Result<Option<Vec<u8>>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let bytes = field.bytes().await?;
        return Ok((!bytes.is_empty()).then(|| bytes.to_vec()));
    }
    Ok(None)
}

/// Load this run's image tables and convert off the async runtime
async fn run_conversion(images_dir: PathBuf, bytes: Vec<u8>) -> PriceListResult<ConversionResult> {
    tokio::task::spawn_blocking(move || {
        PriceListConverter::from_images_dir(&images_dir)?.convert_bytes(bytes)
    })
    .await
    .map_err(|e| std::io::Error::other(e.to_string()))?
}

/// POST /upload - Convert an uploaded workbook and redirect back to the form
pub async fn upload(State(state): State<Arc<AppState>>, mut multipart: Multipart) -> Redirect {
    let bytes = match read_upload(&mut multipart).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return Redirect::to(&ValidationMessage::MissingFile.redirect_to(None)),
        Err(e) => {
            warn!("Malformed upload: {}", e);
            return Redirect::to(&ValidationMessage::InvalidWorkbook.redirect_to(None));
        }
    };

    match run_conversion(state.images_dir.clone(), bytes).await {
        Ok(result) => {
            info!("Upload converted: {} products", result.product_count());
            Redirect::to(&ValidationMessage::Uploaded.redirect_to(None))
        }
        Err(e) => {
            if e.is_validation() {
                info!("Upload rejected: {}", e);
            } else {
                warn!("Upload failed: {}", e);
            }
            Redirect::to(&redirect_for_error(&e))
        }
    }
}

/// POST /api/v1/convert - Convert an uploaded workbook to JSON
pub async fn convert(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> (StatusCode, Json<ApiResponse<ConversionResult>>) {
    let bytes = match read_upload(&mut multipart).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::err(format!(
                    "Missing multipart field '{}'",
                    UPLOAD_FIELD
                ))),
            )
        }
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::err(format!("Malformed upload: {}", e))),
            )
        }
    };

    match run_conversion(state.images_dir.clone(), bytes).await {
        Ok(result) => (StatusCode::OK, Json(ApiResponse::ok(result))),
        Err(e) => {
            warn!("Conversion failed: {}", e);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiResponse::err(e.to_string())),
            )
        }
    }
}
