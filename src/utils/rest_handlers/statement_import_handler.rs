use crate::utils::access_token::access_token::Principal;
use crate::utils::appstate::appstate::SharedState;
use crate::utils::errors::import_errors::ImportError;
use crate::utils::statement_import::statement_import::{ImportReport, StatementImport};
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};

/// ----- Request -----
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementImportReq {
    /// The statement document, base64-encoded in JSON
    #[serde_as(as = "Base64")]
    pub file: Vec<u8>,

    pub file_name: String,

    #[serde(default = "default_media_type")]
    pub media_type: String,

    pub bank_type: String,

    #[serde(default = "default_detect_flag")]
    pub detect_duplicates: bool,
    #[serde(default = "default_detect_flag")]
    pub detect_transfers: bool,
}

fn default_media_type() -> String {
    "application/pdf".to_string()
}

fn default_detect_flag() -> bool {
    true
}

/// ----- Success Response -----
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementImportResponse {
    pub success: bool,
    pub message: String,
    pub data: ImportResultData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportResultData {
    pub total: u64,
    pub created: u64,
    pub duplicates: u64,
    pub transfers: u64,
    pub errors: u64,
    pub debug_output: String,
    pub debug_error: String,
}

impl From<ImportReport> for ImportResultData {
    fn from(report: ImportReport) -> Self {
        ImportResultData {
            total: report.total,
            created: report.created,
            duplicates: report.duplicates,
            transfers: report.transfers,
            errors: report.errors,
            debug_output: report.raw_output,
            debug_error: report.raw_error_output,
        }
    }
}

/// ----- Error Response -----
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementImportErrorResponse {
    pub success: bool,
    pub error_code: i32,
    pub error_msg: String,
}

impl From<&ImportError> for StatementImportErrorResponse {
    fn from(error: &ImportError) -> Self {
        StatementImportErrorResponse {
            success: false,
            error_code: error.error_code(),
            error_msg: error.to_string(), // Uses Display from thiserror
        }
    }
}

impl IntoResponse for ImportError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        let body = Json(StatementImportErrorResponse::from(&self));
        (status, body).into_response()
    }
}

/// The principal is established upstream; the proxy forwards it in headers.
pub fn principal_from_headers(headers: &HeaderMap) -> Option<Principal> {
    let id = headers
        .get("x-auth-user-id")?
        .to_str()
        .ok()?
        .parse::<i64>()
        .ok()?;
    let email = headers
        .get("x-auth-user-email")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    Some(Principal { id, email })
}

pub async fn statement_import_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(request): Json<StatementImportReq>,
) -> Result<(StatusCode, Json<StatementImportResponse>), ImportError> {
    // Fail fast when the worker-process cap is saturated.
    let _permit = state
        .import_limiter
        .clone()
        .try_acquire_owned()
        .map_err(|_| {
            ImportError::ServerBusy(
                "Server is handling the maximum number of imports. Please retry.".to_string(),
            )
        })?;

    let principal = principal_from_headers(&headers);
    println!(
        "📥 Statement import request: bank_type={}, file={}, size={} bytes, authenticated={}",
        request.bank_type,
        request.file_name,
        request.file.len(),
        principal.is_some()
    );

    let import = StatementImport::from(request);
    let report = import
        .do_process(&state.config, &state.minter, principal.as_ref())
        .await
        .inspect_err(|e| eprintln!("❌ Statement import failed: {}", e))?;

    Ok((
        StatusCode::OK,
        Json(StatementImportResponse {
            success: true,
            message: "Statement imported successfully".to_string(),
            data: report.into(),
        }),
    ))
}
