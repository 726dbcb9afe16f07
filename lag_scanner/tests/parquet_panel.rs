use chrono::NaiveDate;
use indexmap::IndexMap;
use lag_scanner::{
    Error,
    io::parquet::{read_panel, write_panel},
    models::panel::RawPanel,
    scan::filter::filter_complete,
};
use tempfile::TempDir;

#[test]
fn nulls_survive_a_round_trip_and_are_filtered() {
    let dates: Vec<NaiveDate> = ["2023-01-03", "2023-01-04", "2023-01-05"]
        .iter()
        .map(|d| d.parse().unwrap())
        .collect();
    let mut series = IndexMap::new();
    series.insert("AAPL".to_string(), vec![Some(125.07), Some(126.36), Some(125.02)]);
    series.insert("ZVZZT".to_string(), vec![Some(10.0), None, Some(10.0)]);
    let panel = RawPanel::new(dates, series).unwrap();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("close.parquet");
    write_panel(&path, &panel).unwrap();

    let back = read_panel(&path).unwrap();
    assert_eq!(back, panel);

    let complete = filter_complete(&back);
    assert_eq!(complete.tickers().collect::<Vec<_>>(), vec!["AAPL"]);
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = read_panel(dir.path().join("open.parquet")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
