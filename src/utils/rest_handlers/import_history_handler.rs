use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ImportHistoryEntry {
    pub imported_at: String,
    pub bank_type: String,
    pub total: u64,
    pub created: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportHistoryResponse {
    pub data: Vec<ImportHistoryEntry>,
}

/// Stub: no import log is persisted in this core, so the history is always
/// empty.
pub async fn import_history_handler() -> Json<ImportHistoryResponse> {
    Json(ImportHistoryResponse { data: Vec::new() })
}
