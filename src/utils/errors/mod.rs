pub mod credential_errors;
pub mod import_errors;
pub mod upload_errors;
pub mod worker_errors;
