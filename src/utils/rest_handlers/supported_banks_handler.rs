use crate::utils::bank_catalog::bank_catalog::{self, BankInfo};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SupportedBanksResponse {
    pub data: Vec<BankInfo>,
}

/// Full catalog listing. No side effects, no failure modes.
pub async fn supported_banks_handler() -> Json<SupportedBanksResponse> {
    Json(SupportedBanksResponse {
        data: bank_catalog::list().to_vec(),
    })
}
