pub mod worker_invocation;
pub mod worker_report;

#[cfg(test)]
mod worker_invocation_tests;
#[cfg(test)]
mod worker_report_tests;
