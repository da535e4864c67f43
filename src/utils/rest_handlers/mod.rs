pub mod import_history_handler;
pub mod statement_import_handler;
pub mod supported_banks_handler;
