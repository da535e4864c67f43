use crate::utils::bank_catalog::bank_catalog::{self, BankType};

#[test]
fn catalog_lists_all_banks_in_order() {
    let banks = bank_catalog::list();
    assert_eq!(banks.len(), 7);

    let codes: Vec<&str> = banks.iter().map(|b| b.value).collect();
    assert_eq!(
        codes,
        vec![
            "amex",
            "ing_orange",
            "ing_savings",
            "ubank",
            "commbank",
            "commbank_homeloan",
            "commbank_offset",
        ]
    );
}

#[test]
fn catalog_entries_carry_labels() {
    let banks = bank_catalog::list();
    assert_eq!(banks[0].label, "American Express (AMEX)");
    assert_eq!(banks[3].label, "uBank Spend");
    assert!(banks.iter().all(|b| !b.description.is_empty()));
}

#[test]
fn every_listed_code_is_supported() {
    for bank in bank_catalog::list() {
        assert!(bank_catalog::is_supported(bank.value), "{}", bank.value);
    }
}

#[test]
fn unknown_codes_are_rejected() {
    assert!(!bank_catalog::is_supported("chase"));
    assert!(!bank_catalog::is_supported(""));
    assert!(!bank_catalog::is_supported("AMEX"));
}

#[test]
fn code_round_trips_through_from_code() {
    for bank in bank_catalog::list() {
        let parsed = BankType::from_code(bank.value).unwrap();
        assert_eq!(parsed.code(), bank.value);
        assert_eq!(parsed.to_string(), bank.value);
    }
}

#[test]
fn bank_type_serializes_as_wire_code() {
    let json = serde_json::to_string(&BankType::CommbankHomeloan).unwrap();
    assert_eq!(json, "\"commbank_homeloan\"");

    let parsed: BankType = serde_json::from_str("\"ing_orange\"").unwrap();
    assert_eq!(parsed, BankType::IngOrange);
}
