use chrono::{NaiveDate, NaiveTime};
use importer::{CanonicalFormat, CanonicalTransformer, CanonicalValidator, ImportSummary};
use rust_decimal::Decimal;
use std::str::FromStr;
use storage::Database;
use storage::dto::schedule::ScheduleFilter;
use storage::services::{audit, catalog, results, schedule};
use tempfile::TempDir;

const FIXTURE: &str = include_str!("fixtures/spring_games.json");

async fn setup() -> (Database, TempDir) {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", dir.path().join("import.db").display());
    let db = Database::new(&url).await.unwrap();
    db.run_migrations().await.unwrap();
    (db, dir)
}

fn fixture() -> CanonicalFormat {
    serde_json::from_str(FIXTURE).unwrap()
}

#[tokio::test]
async fn fixture_imports_through_storage_services() {
    let (db, _dir) = setup().await;
    let canonical = fixture();
    CanonicalValidator::validate(&canonical).unwrap();

    let summary = CanonicalTransformer::new(db.pool())
        .import_to_database(canonical)
        .await
        .unwrap();

    assert_eq!(
        summary,
        ImportSummary {
            venues: 2,
            participants: 3,
            events: 2,
            entries: 4,
            reschedules: 1,
        }
    );

    let events = catalog::list_events(db.pool()).await.unwrap();
    assert_eq!(events.len(), 2);
    let boxing = &events[0];
    assert_eq!(boxing.sport_type, "Boxing");
    assert_eq!(boxing.event_date, NaiveDate::from_ymd_opt(2026, 3, 11).unwrap());

    let live = schedule::schedule_for_event(db.pool(), boxing.event_id)
        .await
        .unwrap();
    assert_eq!(live.scheduled_date, NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
    assert_eq!(live.scheduled_time, NaiveTime::from_hms_opt(17, 0, 0).unwrap());
    assert_ne!(live.venue_id, boxing.venue_id);

    let history = audit::schedule_history(db.pool(), live.schedule_id)
        .await
        .unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].old_venue_id, boxing.venue_id);

    let boxing_results = results::results_for_event(db.pool(), boxing.event_id)
        .await
        .unwrap();
    assert_eq!(boxing_results.len(), 2);
    assert_eq!(boxing_results[0].ranking, Some(1));
    assert_eq!(boxing_results[0].score, Some(Decimal::from_str("9.5").unwrap()));
    assert_eq!(boxing_results[1].score, None);
    assert_eq!(boxing_results[1].ranking, None);

    let on_the_15th = schedule::list_schedule(
        db.pool(),
        &ScheduleFilter {
            date: NaiveDate::from_ymd_opt(2026, 3, 15),
        },
    )
    .await
    .unwrap();
    assert_eq!(on_the_15th.len(), 1);
    assert_eq!(on_the_15th[0].venue_name, "South Arena");
}

#[tokio::test]
async fn ineligible_entry_is_rejected_by_validator_and_store() {
    let (db, _dir) = setup().await;
    let mut canonical = fixture();
    canonical.participants[1].age = 15;

    assert!(CanonicalValidator::validate(&canonical).is_err());

    let result = CanonicalTransformer::new(db.pool())
        .import_to_database(canonical)
        .await;
    assert!(matches!(
        result,
        Err(importer::ImporterError::StorageError(
            storage::error::StorageError::Validation(_)
        ))
    ));
}
