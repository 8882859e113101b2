use sqlx::{SqliteConnection, SqlitePool};

use crate::error::Result;
use crate::models::{NewScheduleChange, ScheduleChange};

/// Read access to the audit trail. There is deliberately no update or delete.
pub struct ScheduleChangeRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ScheduleChangeRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All changes of a schedule row, oldest first
    pub async fn list_for_schedule(&self, schedule_id: i64) -> Result<Vec<ScheduleChange>> {
        let changes = sqlx::query_as::<_, ScheduleChange>(
            r#"
            SELECT change_id, schedule_id, event_id, old_date, new_date, old_time, new_time,
                   old_venue_id, new_venue_id, changed_at
            FROM schedule_changes
            WHERE schedule_id = ?1
            ORDER BY change_id
            "#,
        )
        .bind(schedule_id)
        .fetch_all(self.pool)
        .await?;

        Ok(changes)
    }
}

pub(crate) async fn insert(
    conn: &mut SqliteConnection,
    change: &NewScheduleChange,
) -> Result<ScheduleChange> {
    let change = sqlx::query_as::<_, ScheduleChange>(
        r#"
        INSERT INTO schedule_changes (
            schedule_id, event_id, old_date, new_date, old_time, new_time,
            old_venue_id, new_venue_id, changed_at
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        RETURNING change_id, schedule_id, event_id, old_date, new_date, old_time, new_time,
                  old_venue_id, new_venue_id, changed_at
        "#,
    )
    .bind(change.schedule_id)
    .bind(change.event_id)
    .bind(change.old_date)
    .bind(change.new_date)
    .bind(change.old_time)
    .bind(change.new_time)
    .bind(change.old_venue_id)
    .bind(change.new_venue_id)
    .bind(change.changed_at)
    .fetch_one(&mut *conn)
    .await?;

    Ok(change)
}
