// src/domain/drug.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// One catalog record as the backend serves it.
///
/// Field names follow the backend's camelCase JSON; the same shape is
/// persisted verbatim in the saved-drug blob. The container-level `default`
/// means a record with absent optional fields deserializes with `""` / `0`
/// instead of failing, so absent values are never carried as such.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Drug {
    /// Database surrogate key. Primary identifier for dedup, removal and
    /// the match request body.
    pub id: i64,
    /// KFDA item standard code (품목기준코드).
    pub item_seq: i64,
    pub item_name: String,
    /// Manufacturer code.
    pub entp_seq: String,
    /// Manufacturer name.
    pub entp_name: String,
    pub item_image: String,
    /// Long-axis length in millimeters.
    pub leng_long: f64,
    /// Short-axis length in millimeters.
    pub leng_short: f64,
    /// Thickness in millimeters.
    pub thick: f64,
    /// Insurance (EDI) billing code.
    pub edi_code: String,
    /// Dosage-form label (tablet, capsule, ...).
    pub form_code_name: String,
}

impl Drug {
    /// Case-insensitive substring test on the display name, the operation
    /// behind every free-text result filter.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.item_name
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }

    /// Whether this record shares a dosage form with `other`.
    pub fn same_form_as(&self, other: &Drug) -> bool {
        self.form_code_name == other.form_code_name
    }
}

/// Which catalog column a search keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    /// Item standard code (`itemSeq`).
    ItemSeq,
    /// Insurance (EDI) billing code (`ediCode`).
    EdiCode,
    /// Free-text drug name (`itemName`).
    ItemName,
}

impl SearchField {
    /// Query-parameter name on the search endpoint.
    pub fn query_param(self) -> &'static str {
        match self {
            SearchField::ItemSeq => "itemSeq",
            SearchField::EdiCode => "ediCode",
            SearchField::ItemName => "itemName",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SearchField::ItemSeq => "item code",
            SearchField::EdiCode => "insurance code",
            SearchField::ItemName => "name",
        };
        f.write_str(label)
    }
}

/// Allowed dimensional deviation for a compatibility match.
///
/// The backend accepts exactly these five percentages; keeping them as a
/// closed enum means an out-of-set tolerance cannot reach the wire at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tolerance {
    /// Exact dimensions only.
    #[default]
    Exact,
    Pct5,
    Pct10,
    Pct15,
    Pct20,
}

impl Tolerance {
    pub const ALL: [Tolerance; 5] = [
        Tolerance::Exact,
        Tolerance::Pct5,
        Tolerance::Pct10,
        Tolerance::Pct15,
        Tolerance::Pct20,
    ];

    /// The integer percentage carried in the match request body.
    pub fn percent(self) -> u8 {
        match self {
            Tolerance::Exact => 0,
            Tolerance::Pct5 => 5,
            Tolerance::Pct10 => 10,
            Tolerance::Pct15 => 15,
            Tolerance::Pct20 => 20,
        }
    }
}

impl FromStr for Tolerance {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Tolerance::Exact),
            "5" => Ok(Tolerance::Pct5),
            "10" => Ok(Tolerance::Pct10),
            "15" => Ok(Tolerance::Pct15),
            "20" => Ok(Tolerance::Pct20),
            other => Err(DomainError::InvalidTolerance(other.to_string())),
        }
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}
