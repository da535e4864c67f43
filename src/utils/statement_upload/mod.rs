pub mod statement_upload;
