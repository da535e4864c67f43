pub mod bank_catalog;

#[cfg(test)]
mod bank_catalog_tests;
