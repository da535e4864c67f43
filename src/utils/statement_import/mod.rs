pub mod statement_import;
