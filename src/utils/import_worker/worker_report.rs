use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Counters extracted from a worker report. Absent fields stay at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportCounters {
    pub total: u64,
    pub created: u64,
    pub duplicates: u64,
    pub transfers: u64,
    pub errors: u64,
}

/// Preferred path: a single schema-tagged record line, e.g.
/// `IMPORT-RESULT total=12 created=10 duplicates=2 transfers=0 errors=0`.
static RESULT_RECORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^IMPORT-RESULT\b(.*)$").unwrap());
static RECORD_PAIR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z_]+)=(\d+)").unwrap());

/// Compatibility fallback: case-insensitive `<field> : <integer>` anywhere in
/// the report. Each field is filled by its first occurrence only.
static COUNTER_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(total|created|duplicates|transfers|errors)\s*:\s*(\d+)").unwrap()
});

/// Scans the worker's textual report for the five counters. Never fails:
/// malformed or partial output yields zeros for whatever is missing. The
/// report format is a contract of convention, not a hard schema.
pub fn parse_worker_report(stdout: &str) -> ImportCounters {
    if let Some(record) = RESULT_RECORD_RE.captures(stdout) {
        return parse_record_line(&record[1]);
    }

    let mut counters = ImportCounters::default();
    let mut seen = [false; 5];
    for caps in COUNTER_LINE_RE.captures_iter(stdout) {
        let value: u64 = match caps[2].parse() {
            Ok(v) => v,
            Err(_) => continue,
        };
        let field = caps[1].to_ascii_lowercase();
        let idx = match field.as_str() {
            "total" => 0,
            "created" => 1,
            "duplicates" => 2,
            "transfers" => 3,
            "errors" => 4,
            _ => continue,
        };
        if !seen[idx] {
            seen[idx] = true;
            match idx {
                0 => counters.total = value,
                1 => counters.created = value,
                2 => counters.duplicates = value,
                3 => counters.transfers = value,
                _ => counters.errors = value,
            }
        }
    }
    counters
}

fn parse_record_line(rest: &str) -> ImportCounters {
    let mut counters = ImportCounters::default();
    for caps in RECORD_PAIR_RE.captures_iter(rest) {
        let value: u64 = match caps[2].parse() {
            Ok(v) => v,
            Err(_) => continue,
        };
        match &caps[1] {
            "total" => counters.total = value,
            "created" => counters.created = value,
            "duplicates" => counters.duplicates = value,
            "transfers" => counters.transfers = value,
            "errors" => counters.errors = value,
            _ => {}
        }
    }
    counters
}
