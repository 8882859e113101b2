#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use storage::{
    Database,
    dto::{
        event::{CreateEventRequest, EventResponse},
        participant::CreateParticipantRequest,
        venue::CreateVenueRequest,
    },
    models::{Gender, Participant, Venue},
    services::catalog,
};
use tempfile::TempDir;

/// Fresh migrated database in a temporary directory. Keep the `TempDir`
/// alive for as long as the database is used.
pub async fn setup() -> (Database, TempDir) {
    let dir = TempDir::new().expect("tmp");
    let url = format!("sqlite://{}", dir.path().join("tournament.db").display());

    let db = Database::new(&url).await.expect("open database");
    db.run_migrations().await.expect("run migrations");

    (db, dir)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

pub async fn venue(db: &Database, name: &str) -> Venue {
    catalog::create_venue(
        db.pool(),
        &CreateVenueRequest {
            name: name.to_string(),
            location: format!("{name} city"),
            capacity: 5_000,
        },
    )
    .await
    .expect("create venue")
}

/// Creates `count` venues so ids 1..=count exist.
pub async fn venues(db: &Database, count: usize) -> Vec<Venue> {
    let mut out = Vec::with_capacity(count);
    for i in 1..=count {
        out.push(venue(db, &format!("Venue {i}")).await);
    }
    out
}

pub fn participant_request(name: &str, nationality: &str, age: i32) -> CreateParticipantRequest {
    CreateParticipantRequest {
        name: name.to_string(),
        nationality: nationality.to_string(),
        age,
        gender: Gender::Female,
    }
}

pub async fn participant(db: &Database, name: &str, age: i32) -> Participant {
    catalog::create_participant(db.pool(), &participant_request(name, "FR", age))
        .await
        .expect("create participant")
}

pub async fn event(
    db: &Database,
    sport_type: &str,
    event_date: NaiveDate,
    event_time: NaiveTime,
    venue_id: i64,
) -> EventResponse {
    catalog::create_event(
        db.pool(),
        &CreateEventRequest {
            sport_type: sport_type.to_string(),
            event_date,
            event_time,
            venue_id,
        },
    )
    .await
    .expect("create event")
}

pub async fn count(db: &Database, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(db.pool())
        .await
        .expect("count rows")
}
