use crate::utils::import_worker::worker_report::{parse_worker_report, ImportCounters};

#[test]
fn parses_counters_with_loose_spacing() {
    let report = "total : 12\ncreated: 10\nduplicates:2\n";
    let counters = parse_worker_report(report);
    assert_eq!(
        counters,
        ImportCounters {
            total: 12,
            created: 10,
            duplicates: 2,
            transfers: 0,
            errors: 0,
        }
    );
}

#[test]
fn parses_the_aligned_worker_layout() {
    let report = "\n============================================================\n\
IMPORT RESULTS\n\
============================================================\n\
total               : 42\n\
created             : 40\n\
duplicates          : 1\n\
transfers           : 1\n\
errors              : 0\n";
    let counters = parse_worker_report(report);
    assert_eq!(counters.total, 42);
    assert_eq!(counters.created, 40);
    assert_eq!(counters.duplicates, 1);
    assert_eq!(counters.transfers, 1);
    assert_eq!(counters.errors, 0);
}

#[test]
fn field_names_match_case_insensitively() {
    let counters = parse_worker_report("Total : 5\nCREATED : 3\n");
    assert_eq!(counters.total, 5);
    assert_eq!(counters.created, 3);
}

#[test]
fn missing_fields_default_to_zero_without_affecting_siblings() {
    let counters = parse_worker_report("created: 7\nbananas: 9\n");
    assert_eq!(counters.created, 7);
    assert_eq!(counters.total, 0);
    assert_eq!(counters.duplicates, 0);
    assert_eq!(counters.transfers, 0);
    assert_eq!(counters.errors, 0);
}

#[test]
fn unrecognizable_output_yields_all_zeros() {
    let counters = parse_worker_report("Traceback (most recent call last):\n  boom\n");
    assert_eq!(counters, ImportCounters::default());

    assert_eq!(parse_worker_report(""), ImportCounters::default());
}

#[test]
fn first_occurrence_of_a_field_wins() {
    let counters = parse_worker_report("total : 1\ntotal : 99\n");
    assert_eq!(counters.total, 1);
}

#[test]
fn parsing_is_idempotent() {
    let report = "total : 3\nerrors : 1\nsome noise\n";
    assert_eq!(parse_worker_report(report), parse_worker_report(report));
}

#[test]
fn compound_keys_do_not_leak_into_counters() {
    // The worker also prints keys like accounts_created; those must not be
    // mistaken for the created counter.
    let counters = parse_worker_report("accounts_created    : 3\n");
    assert_eq!(counters.created, 0);
}

#[test]
fn structured_record_line_takes_precedence() {
    let report = "total : 9\nIMPORT-RESULT total=2 created=1\ncreated : 8\n";
    let counters = parse_worker_report(report);
    assert_eq!(counters.total, 2);
    assert_eq!(counters.created, 1);
    assert_eq!(counters.duplicates, 0);
}

#[test]
fn structured_record_defaults_missing_fields_to_zero() {
    let counters = parse_worker_report("IMPORT-RESULT transfers=4\n");
    assert_eq!(
        counters,
        ImportCounters {
            total: 0,
            created: 0,
            duplicates: 0,
            transfers: 4,
            errors: 0,
        }
    );
}
