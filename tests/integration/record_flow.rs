//! Integration tests for the generate → table → export flow
//!
//! Drives the public library API the way a host would: validated form values
//! go through the action handlers, then the export is read back.

use super::common::fixtures::{keeper_values, messi_form_json, messi_values};
use transfer_desk::record::{download, COLUMNS};
use transfer_desk::{
    collect, export, on_export, on_generate, parse, Effect, ExportSettings, PlayerForm,
    RecordStore, Session, SessionRegistry,
};

/// The full reference scenario, from form JSON to downloaded CSV
#[test]
fn test_messi_scenario_end_to_end() {
    let form: PlayerForm = serde_json::from_value(messi_form_json()).unwrap();
    let values = form.validate().unwrap();
    assert_eq!(values, messi_values());

    let record = collect(values);
    assert_eq!(record.position_detail, "ST, LW");

    let (session, effect) = on_generate(Session::new(), messi_values());
    assert_eq!(session.store.len(), 1);
    assert_eq!(effect, Effect::ShowTable(vec![record]));

    let Effect::Download(download) = on_export(&session, &ExportSettings::default()).unwrap()
    else {
        panic!("export should produce a download");
    };
    assert_eq!(download.mime, "text/csv");
    assert_eq!(download.filename, "player_info.csv");

    let mut reader = csv::Reader::from_reader(download.payload.as_bytes());
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, COLUMNS);

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0].iter().collect::<Vec<_>>(),
        [
            "L. Messi",
            "10",
            "ATT",
            "ST, LW",
            "36",
            "",
            "40",
            "True",
            "60",
            "Accepted Deal"
        ]
    );
}

/// Splitting appends across actions does not change the resulting table
#[test]
fn test_append_batches_equal_single_pass() {
    let a = collect(messi_values());
    let b = collect(keeper_values());
    let c = collect(messi_values());

    let mut split = RecordStore::new();
    split.extend([a.clone(), b.clone()]);
    split.extend([c.clone()]);

    let single: RecordStore = [a, b, c].into_iter().collect();

    assert_eq!(split, single);
    assert_eq!(export(&split).unwrap(), export(&single).unwrap());
}

/// Exported text parses back into the same records
#[test]
fn test_export_round_trip() {
    let store: RecordStore = [messi_values(), keeper_values()]
        .into_iter()
        .map(collect)
        .collect();

    let text = export(&store).unwrap();
    assert_eq!(text, export(&store).unwrap());

    let parsed = parse(&text).unwrap();
    assert_eq!(parsed, store.records());
}

/// Each session gets its own table and its own download
#[test]
fn test_registry_sessions_export_independently() {
    let registry = SessionRegistry::new(4);
    let first = registry.create().unwrap().id;
    let second = registry.create().unwrap().id;

    registry.generate(first, messi_values()).unwrap();
    registry.generate(second, keeper_values()).unwrap();
    registry.generate(second, keeper_values()).unwrap();

    let settings = ExportSettings::default();
    let export_rows = |id| match registry.export(id, &settings).unwrap() {
        Effect::Download(download) => parse(&download.payload).unwrap(),
        other => panic!("unexpected effect: {other:?}"),
    };

    let first_rows = export_rows(first);
    let second_rows = export_rows(second);
    assert_eq!(first_rows.len(), 1);
    assert_eq!(first_rows[0].name, "L. Messi");
    assert_eq!(second_rows.len(), 2);
    assert!(second_rows.iter().all(|r| r.name == "É. Mendy"));
}

/// A failing export reports the problem and leaves the table usable
#[test]
fn test_failed_export_then_recovery() {
    let mut bad = messi_values();
    bad.name = "broken\0".into();

    let (session, _) = on_generate(Session::new(), bad);
    let before = session.clone();
    assert!(download(&session.store, &ExportSettings::default()).is_err());
    assert_eq!(session, before);

    let (session, _) = on_generate(session, keeper_values());
    assert_eq!(session.store.len(), 2);
}
