//! CSV export of a record store, and the download descriptor handed to hosts

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{PlayerRecord, RecordStore};

/// MIME type of every download produced here.
pub const CSV_MIME: &str = "text/csv";

/// Header row, in column order.
pub const COLUMNS: [&str; 10] = [
    "Player Name",
    "Jersey Number",
    "Position",
    "Position Detail",
    "Age",
    "DoB",
    "Previous Club Wage (Million €)",
    "Transfer Listed",
    "Transfer Market Value (Million €)",
    "Status",
];

/// Date of birth layout, in forms and in exported text.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("row {row}: column \"{column}\" contains a NUL character")]
    Unrepresentable { row: usize, column: &'static str },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("exported text is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("line {line}: {reason}")]
    Malformed { line: u64, reason: String },
}

/// Label and filename of the download; the MIME type is always [`CSV_MIME`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    pub label: String,
    pub filename: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            label: "Download Player Details".to_string(),
            filename: "player_info.csv".to_string(),
        }
    }
}

/// A ready-to-serve download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub label: String,
    pub mime: &'static str,
    pub filename: String,
    pub payload: String,
}

impl Download {
    pub fn size(&self) -> usize {
        self.payload.len()
    }
}

/// Serialize every record, in store order, under a header row.
///
/// Output is byte-for-byte stable for equal stores. The store is only read.
pub fn export(store: &RecordStore) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for (row, record) in store.iter().enumerate() {
        let fields = record_fields(record);
        if let Some(column) = fields
            .iter()
            .position(|field| field.contains('\0'))
            .map(|index| COLUMNS[index])
        {
            return Err(ExportError::Unrepresentable { row, column });
        }
        writer.write_record(&fields)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Export the store and wrap it as a download.
pub fn download(store: &RecordStore, settings: &ExportSettings) -> Result<Download, ExportError> {
    let payload = export(store)?;
    Ok(Download {
        label: settings.label.clone(),
        mime: CSV_MIME,
        filename: settings.filename.clone(),
        payload,
    })
}

/// Read text produced by [`export`] back into records.
pub fn parse(text: &str) -> Result<Vec<PlayerRecord>, ExportError> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let headers = reader.headers()?;
    if !headers.iter().eq(COLUMNS.iter().copied()) {
        return Err(ExportError::Malformed {
            line: 1,
            reason: format!("unexpected header row: {:?}", headers.iter().collect::<Vec<_>>()),
        });
    }

    reader
        .records()
        .map(|row| -> Result<PlayerRecord, ExportError> {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            parse_row(&row, line)
        })
        .collect()
}

fn record_fields(record: &PlayerRecord) -> [String; 10] {
    [
        record.name.clone(),
        record.jersey_number.clone(),
        record.position.as_str().to_string(),
        record.position_detail.clone(),
        record.age.to_string(),
        record
            .date_of_birth
            .map(|date| date.format(DATE_FORMAT).to_string())
            .unwrap_or_default(),
        record.previous_wage.to_string(),
        bool_label(record.transfer_listed).to_string(),
        record.transfer_value.to_string(),
        record.status.as_str().to_string(),
    ]
}

fn bool_label(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn parse_row(row: &csv::StringRecord, line: u64) -> Result<PlayerRecord, ExportError> {
    let malformed = |reason: String| ExportError::Malformed { line, reason };
    let field = |index: usize| -> Result<&str, ExportError> {
        row.get(index)
            .ok_or_else(|| malformed(format!("missing column \"{}\"", COLUMNS[index])))
    };
    let number = |index: usize| -> Result<u16, ExportError> {
        let raw = field(index)?;
        raw.parse::<u16>()
            .map_err(|e| malformed(format!("{}: {} ({})", COLUMNS[index], raw, e)))
    };

    let age = field(4)?;
    let age = age
        .parse::<u8>()
        .map_err(|e| malformed(format!("Age: {} ({})", age, e)))?;

    let dob = field(5)?;
    let date_of_birth = if dob.is_empty() {
        None
    } else {
        Some(
            NaiveDate::parse_from_str(dob, DATE_FORMAT)
                .map_err(|e| malformed(format!("DoB: {} ({})", dob, e)))?,
        )
    };

    let listed = field(7)?;
    let transfer_listed = match listed.to_ascii_lowercase().as_str() {
        "true" => true,
        "false" => false,
        _ => return Err(malformed(format!("Transfer Listed: {}", listed))),
    };

    Ok(PlayerRecord {
        name: field(0)?.to_string(),
        jersey_number: field(1)?.to_string(),
        position: field(2)?.parse().map_err(|e| malformed(format!("{}", e)))?,
        position_detail: field(3)?.to_string(),
        age,
        date_of_birth,
        previous_wage: number(6)?,
        transfer_listed,
        transfer_value: number(8)?,
        status: field(9)?.parse().map_err(|e| malformed(format!("{}", e)))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{collect, FieldValues, Position, PositionDetail, TransferStatus};
    use proptest::prelude::*;

    const HEADER: &str = "Player Name,Jersey Number,Position,Position Detail,Age,DoB,\
Previous Club Wage (Million €),Transfer Listed,Transfer Market Value (Million €),Status";

    fn messi_store() -> RecordStore {
        let mut store = RecordStore::new();
        store.append(collect(FieldValues {
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
        }));
        store
    }

    #[test]
    fn test_export_empty_store_is_header_only() {
        let text = export(&RecordStore::new()).unwrap();
        assert_eq!(text, format!("{}\n", HEADER));
    }

    #[test]
    fn test_export_scenario_row() {
        let text = export(&messi_store()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "L. Messi,10,ATT,\"ST, LW\",36,,40,True,60,Accepted Deal");
    }

    #[test]
    fn test_export_is_idempotent() {
        let store = messi_store();
        let first = export(&store).unwrap();
        let second = export(&store).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_export_formats_dates_and_false() {
        let mut store = messi_store();
        let mut record = store.records()[0].clone();
        record.date_of_birth = NaiveDate::from_ymd_opt(1987, 6, 24);
        record.transfer_listed = false;
        record.transfer_value = 0;
        store.append(record);

        let text = export(&store).unwrap();
        let last = text.lines().last().unwrap();
        assert_eq!(last, "L. Messi,10,ATT,\"ST, LW\",36,1987-06-24,40,False,0,Accepted Deal");
    }

    #[test]
    fn test_export_rejects_nul_and_leaves_store_intact() {
        let mut store = messi_store();
        let mut bad = store.records()[0].clone();
        bad.jersey_number = "1\00".into();
        store.append(bad);
        let before = store.clone();

        let err = export(&store).unwrap_err();
        match err {
            ExportError::Unrepresentable { row, column } => {
                assert_eq!(row, 1);
                assert_eq!(column, "Jersey Number");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(store, before);
    }

    #[test]
    fn test_download_uses_settings() {
        let settings = ExportSettings {
            label: "Grab it".into(),
            filename: "squad.csv".into(),
        };
        let download = download(&messi_store(), &settings).unwrap();

        assert_eq!(download.label, "Grab it");
        assert_eq!(download.filename, "squad.csv");
        assert_eq!(download.mime, "text/csv");
        assert_eq!(download.size(), download.payload.len());
        assert!(download.payload.starts_with("Player Name,"));
    }

    #[test]
    fn test_parse_round_trips_quoted_text() {
        let mut store = messi_store();
        let mut tricky = store.records()[0].clone();
        tricky.name = "O'Neil, \"Jr\"\nII".into();
        tricky.jersey_number = String::new();
        tricky.position_detail = String::new();
        store.append(tricky);

        let parsed = parse(&export(&store).unwrap()).unwrap();
        assert_eq!(parsed, store.records());
    }

    #[test]
    fn test_parse_rejects_foreign_header() {
        let err = parse("a,b,c\n1,2,3\n").unwrap_err();
        assert!(matches!(err, ExportError::Malformed { line: 1, .. }));
    }

    #[test]
    fn test_parse_reports_bad_boolean() {
        let text = format!("{}\nA,1,ATT,,20,,0,maybe,0,Ongoing Talks\n", HEADER);
        let err = parse(&text).unwrap_err();
        assert!(err.to_string().contains("Transfer Listed"), "{err}");
    }

    fn field_values() -> impl Strategy<Value = FieldValues> {
        (
            "\\PC{0,16}",
            "\\PC{0,4}",
            prop::sample::select(Position::ALL.to_vec()),
            prop::sample::subsequence(PositionDetail::ALL.to_vec(), 0..=4),
            15u8..=50,
            prop::option::of((1950i32..2010, 1u32..=12, 1u32..=28)),
            0u16..=1000,
            any::<bool>(),
            0u16..=1000,
            prop::sample::select(TransferStatus::ALL.to_vec()),
        )
            .prop_map(
                |(name, jersey, position, detail, age, dob, wage, listed, value, status)| {
                    FieldValues {
                        name,
                        jersey_number: jersey,
                        position,
                        position_detail: detail,
                        age,
                        date_of_birth: dob
                            .and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
                        previous_wage: wage,
                        transfer_listed: listed,
                        transfer_value: value,
                        status,
                    }
                },
            )
    }

    proptest! {
        #[test]
        fn prop_export_parse_round_trip(values in prop::collection::vec(field_values(), 0..8)) {
            let store: RecordStore = values.into_iter().map(collect).collect();
            let text = export(&store).unwrap();
            prop_assert_eq!(text.lines().next(), Some(HEADER));
            let parsed = parse(&text).unwrap();
            prop_assert_eq!(parsed.as_slice(), store.records());
        }
    }
}
