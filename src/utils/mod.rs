pub mod access_token;
pub mod appstate;
pub mod bank_catalog;
pub mod config;
pub mod errors;
pub mod import_worker;
pub mod rest_handlers;
pub mod statement_import;
pub mod statement_upload;
