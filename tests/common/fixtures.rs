//! Player fixtures shared by integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use tempfile::TempDir;
use transfer_desk::{FieldValues, Position, PositionDetail, TransferStatus};

/// The reference player used across scenario tests.
pub fn messi_values() -> FieldValues {
    FieldValues {
        name: "L. Messi".into(),
        jersey_number: "10".into(),
        position: Position::Attacker,
        position_detail: vec![PositionDetail::St, PositionDetail::Lw],
        age: 36,
        date_of_birth: None,
        previous_wage: 40,
        transfer_listed: true,
        transfer_value: 60,
        status: TransferStatus::AcceptedDeal,
    }
}

/// A second, differently shaped player.
pub fn keeper_values() -> FieldValues {
    FieldValues {
        name: "É. Mendy".into(),
        jersey_number: "16".into(),
        position: Position::Goalkeeper,
        position_detail: vec![PositionDetail::Gk],
        age: 31,
        date_of_birth: NaiveDate::from_ymd_opt(1992, 3, 1),
        previous_wage: 12,
        transfer_listed: false,
        transfer_value: 0,
        status: TransferStatus::OngoingTalks,
    }
}

/// JSON body equivalent to [`messi_values`].
pub fn messi_form_json() -> serde_json::Value {
    serde_json::json!({
        "name": "L. Messi",
        "jerseyNumber": "10",
        "position": "ATT",
        "positionDetail": ["ST", "LW"],
        "age": 36,
        "previousWage": 40,
        "transferListed": true,
        "transferValue": 60,
        "status": "Accepted Deal"
    })
}

/// Fresh data directory so CLI runs never touch the real home directory.
pub fn temp_data_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("transfer-desk-test-")
        .tempdir()
        .expect("Failed to create temp data dir")
}
