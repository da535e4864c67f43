use serde::{Deserialize, Serialize};
use std::fmt;

/// Banks the import worker knows how to parse. The catalog is compiled in,
/// not loaded from mutable storage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BankType {
    Amex,
    IngOrange,
    IngSavings,
    Ubank,
    Commbank,
    CommbankHomeloan,
    CommbankOffset,
}

impl BankType {
    /// Wire code, as passed to the worker argv.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Amex => "amex",
            Self::IngOrange => "ing_orange",
            Self::IngSavings => "ing_savings",
            Self::Ubank => "ubank",
            Self::Commbank => "commbank",
            Self::CommbankHomeloan => "commbank_homeloan",
            Self::CommbankOffset => "commbank_offset",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "amex" => Some(Self::Amex),
            "ing_orange" => Some(Self::IngOrange),
            "ing_savings" => Some(Self::IngSavings),
            "ubank" => Some(Self::Ubank),
            "commbank" => Some(Self::Commbank),
            "commbank_homeloan" => Some(Self::CommbankHomeloan),
            "commbank_offset" => Some(Self::CommbankOffset),
            _ => None,
        }
    }
}

impl fmt::Display for BankType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Display metadata for one catalog entry.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct BankInfo {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

static BANK_CATALOG: [BankInfo; 7] = [
    BankInfo {
        value: "amex",
        label: "American Express (AMEX)",
        description: "American Express credit card statements",
    },
    BankInfo {
        value: "ing_orange",
        label: "ING Orange Everyday",
        description: "ING Orange Everyday transaction account",
    },
    BankInfo {
        value: "ing_savings",
        label: "ING Savings Maximiser",
        description: "ING Savings Maximiser savings account",
    },
    BankInfo {
        value: "ubank",
        label: "uBank Spend",
        description: "uBank Spend transaction account",
    },
    BankInfo {
        value: "commbank",
        label: "Commonwealth Bank (Credit Card)",
        description: "Commonwealth Bank credit card statements",
    },
    BankInfo {
        value: "commbank_homeloan",
        label: "Commonwealth Bank (Home Loan)",
        description: "Commonwealth Bank home loan statements",
    },
    BankInfo {
        value: "commbank_offset",
        label: "Commonwealth Bank (Everyday Offset)",
        description: "Commonwealth Bank Everyday Offset account statements",
    },
];

pub fn list() -> &'static [BankInfo] {
    &BANK_CATALOG
}

pub fn is_supported(code: &str) -> bool {
    BankType::from_code(code).is_some()
}
