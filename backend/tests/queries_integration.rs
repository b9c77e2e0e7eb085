mod support;

use std::sync::{Mutex, Once};

use presence_analyzer::config::DataConfig;
use presence_analyzer::services::{PresenceService, TotalTimeRow};
use presence_analyzer::store::StoreError;

fn service() -> (PresenceService, tempfile::NamedTempFile) {
    let fixture = support::presence_fixture();
    let config = DataConfig::new(fixture.path());
    (PresenceService::new(config), fixture)
}

#[test]
fn test_users_listing() -> anyhow::Result<()> {
    let (service, _fixture) = service();
    let listing = service.users()?;

    assert_eq!(listing.len(), 2);
    assert_eq!(listing[0].user_id, 10);
    assert_eq!(listing[0].name, "User 10");
    Ok(())
}

#[test]
fn test_mean_time_by_weekday() -> anyhow::Result<()> {
    let (service, _fixture) = service();
    let rows = service.mean_time_by_weekday(10)?;

    assert_eq!(rows.len(), 7);
    let non_zero: Vec<_> = rows.iter().filter(|(_, mean)| *mean != 0.0).collect();
    assert_eq!(non_zero.len(), 3);
    assert_eq!(*non_zero[0], ("Tue", 30047.0));
    Ok(())
}

#[test]
fn test_total_time_by_weekday() -> anyhow::Result<()> {
    let (service, _fixture) = service();
    let rows = service.total_time_by_weekday(10)?;

    let expected = vec![
        TotalTimeRow::Header("Weekday", "Presence (s)"),
        TotalTimeRow::Weekday("Mon", 0),
        TotalTimeRow::Weekday("Tue", 30047),
        TotalTimeRow::Weekday("Wed", 24465),
        TotalTimeRow::Weekday("Thu", 23705),
        TotalTimeRow::Weekday("Fri", 0),
        TotalTimeRow::Weekday("Sat", 0),
        TotalTimeRow::Weekday("Sun", 0),
    ];
    assert_eq!(rows, expected);
    Ok(())
}

#[test]
fn test_start_end_by_weekday() -> anyhow::Result<()> {
    let (service, _fixture) = service();
    let rows = service.start_end_by_weekday(10)?;

    let expected = vec![
        ("Mon", 0, 0),
        ("Tue", 34745, 64792),
        ("Wed", 33592, 58057),
        ("Thu", 38926, 62631),
        ("Fri", 0, 0),
        ("Sat", 0, 0),
        ("Sun", 0, 0),
    ];
    assert_eq!(rows, expected);
    Ok(())
}

/// The report rows serialize as the JSON array-of-arrays the frontend
/// charts consume.
#[test]
fn test_report_rows_serialize_as_json_arrays() -> anyhow::Result<()> {
    let (service, _fixture) = service();

    let total = serde_json::to_value(service.total_time_by_weekday(10)?)?;
    assert_eq!(total[0], serde_json::json!(["Weekday", "Presence (s)"]));
    assert_eq!(total[2], serde_json::json!(["Tue", 30047]));

    let start_end = serde_json::to_value(service.start_end_by_weekday(10)?)?;
    assert_eq!(start_end[1], serde_json::json!(["Tue", 34745, 64792]));

    let mean = serde_json::to_value(service.mean_time_by_weekday(10)?)?;
    assert_eq!(mean[1], serde_json::json!(["Tue", 30047.0]));
    Ok(())
}

#[test]
fn test_unknown_user_yields_empty_reports() -> anyhow::Result<()> {
    let (service, _fixture) = service();

    assert!(service.mean_time_by_weekday(99)?.is_empty());
    assert!(service.total_time_by_weekday(99)?.is_empty());
    assert!(service.start_end_by_weekday(99)?.is_empty());
    Ok(())
}

#[test]
fn test_unknown_user_logs_one_diagnostic() -> anyhow::Result<()> {
    install_capture();
    let (service, _fixture) = service();

    let rows = service.mean_time_by_weekday(1)?;
    assert!(rows.is_empty());

    // no other test in this binary queries user 1
    let messages = CAPTURE.messages.lock().unwrap();
    let hits = messages.iter().filter(|m| *m == "User 1 not found!").count();
    assert_eq!(hits, 1);
    Ok(())
}

#[test]
fn test_missing_source_fails_every_query() {
    let service = PresenceService::new(DataConfig::new("/no/such/presence.csv"));

    assert!(matches!(
        service.users(),
        Err(StoreError::SourceUnavailable { .. })
    ));
    assert!(matches!(
        service.mean_time_by_weekday(10),
        Err(StoreError::SourceUnavailable { .. })
    ));
}

struct CaptureLogger {
    messages: Mutex<Vec<String>>,
}

static CAPTURE: CaptureLogger = CaptureLogger {
    messages: Mutex::new(Vec::new()),
};

impl log::Log for CaptureLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        self.messages.lock().unwrap().push(record.args().to_string());
    }

    fn flush(&self) {}
}

fn install_capture() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        log::set_logger(&CAPTURE).expect("no other logger installed");
        log::set_max_level(log::LevelFilter::Debug);
    });
}
