//! Player records and the fixed vocabularies they are built from

mod collector;
pub mod export;
mod store;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use collector::collect;
pub use export::{
    download, export, parse, Download, ExportError, ExportSettings, COLUMNS, CSV_MIME,
};
pub use store::RecordStore;

/// Lowest accepted age, inclusive.
pub const AGE_MIN: u8 = 15;
/// Highest accepted age, inclusive.
pub const AGE_MAX: u8 = 50;
/// Upper bound for wage and market value sliders, in million euros.
pub const MONEY_MAX: u16 = 1000;

/// Raised when a vocabulary token does not name a known choice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownChoice {
    pub kind: &'static str,
    pub value: String,
}

/// Broad playing position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "ATT")]
    Attacker,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "GK")]
    Goalkeeper,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Attacker,
        Position::Midfielder,
        Position::Defender,
        Position::Goalkeeper,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Attacker => "ATT",
            Position::Midfielder => "MID",
            Position::Defender => "DEF",
            Position::Goalkeeper => "GK",
        }
    }
}

/// Detailed on-pitch role, picked as an ordered multi-selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionDetail {
    Gk,
    Cb,
    Lcb,
    Rcb,
    Lb,
    Lwb,
    Rb,
    Rwb,
    Cdm,
    Cm,
    Lm,
    Rm,
    Lw,
    Rw,
    St,
}

impl PositionDetail {
    /// Vocabulary in the order the form offers it.
    pub const ALL: [PositionDetail; 15] = [
        PositionDetail::Gk,
        PositionDetail::Cb,
        PositionDetail::Lcb,
        PositionDetail::Rcb,
        PositionDetail::Lb,
        PositionDetail::Lwb,
        PositionDetail::Rb,
        PositionDetail::Rwb,
        PositionDetail::Cdm,
        PositionDetail::Cm,
        PositionDetail::Lm,
        PositionDetail::Rm,
        PositionDetail::Lw,
        PositionDetail::Rw,
        PositionDetail::St,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PositionDetail::Gk => "GK",
            PositionDetail::Cb => "CB",
            PositionDetail::Lcb => "LCB",
            PositionDetail::Rcb => "RCB",
            PositionDetail::Lb => "LB",
            PositionDetail::Lwb => "LWB",
            PositionDetail::Rb => "RB",
            PositionDetail::Rwb => "RWB",
            PositionDetail::Cdm => "CDM",
            PositionDetail::Cm => "CM",
            PositionDetail::Lm => "LM",
            PositionDetail::Rm => "RM",
            PositionDetail::Lw => "LW",
            PositionDetail::Rw => "RW",
            PositionDetail::St => "ST",
        }
    }
}

/// Where the transfer negotiation stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransferStatus {
    #[serde(rename = "Accepted Deal")]
    AcceptedDeal,
    #[serde(rename = "Ongoing Talks")]
    OngoingTalks,
    #[serde(rename = "Rejected Offer")]
    RejectedOffer,
}

impl TransferStatus {
    pub const ALL: [TransferStatus; 3] = [
        TransferStatus::AcceptedDeal,
        TransferStatus::OngoingTalks,
        TransferStatus::RejectedOffer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransferStatus::AcceptedDeal => "Accepted Deal",
            TransferStatus::OngoingTalks => "Ongoing Talks",
            TransferStatus::RejectedOffer => "Rejected Offer",
        }
    }
}

macro_rules! vocabulary_str_impls {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownChoice;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let token = s.trim();
                <$ty>::ALL
                    .iter()
                    .copied()
                    .find(|choice| choice.as_str().eq_ignore_ascii_case(token))
                    .ok_or_else(|| UnknownChoice {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

vocabulary_str_impls!(Position, "position");
vocabulary_str_impls!(PositionDetail, "position detail");
vocabulary_str_impls!(TransferStatus, "status");

/// Field values of one filled-in form, already bounded by the input surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValues {
    pub name: String,
    pub jersey_number: String,
    pub position: Position,
    /// Selection order is preserved.
    pub position_detail: Vec<PositionDetail>,
    pub age: u8,
    pub date_of_birth: Option<NaiveDate>,
    pub previous_wage: u16,
    pub transfer_listed: bool,
    pub transfer_value: u16,
    pub status: TransferStatus,
}

/// One accumulated player entry as shown in the table and written to CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub name: String,
    pub jersey_number: String,
    pub position: Position,
    /// Details joined with `", "`.
    pub position_detail: String,
    pub age: u8,
    pub date_of_birth: Option<NaiveDate>,
    pub previous_wage: u16,
    pub transfer_listed: bool,
    pub transfer_value: u16,
    pub status: TransferStatus,
}
