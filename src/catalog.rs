use chrono::{NaiveDateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use tracing::info;

use crate::models::ClassView;
use crate::timezone::to_timezone_string;

#[derive(Debug, FromRow)]
struct ClassRow {
    id: i64,
    name: String,
    instructor: String,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    capacity: i64,
    available_slots: i64,
}

/// Read side of the class schedule. Slot availability is recomputed on every
/// request by aggregating over active bookings; there is no cached counter.
#[derive(Clone)]
pub struct ClassCatalog {
    pool: SqlitePool,
}

impl ClassCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_classes(
        &self,
        target_tz: &str,
        upcoming_only: bool,
    ) -> Result<Vec<ClassView>, sqlx::Error> {
        let now = Utc::now().naive_utc();

        let rows = sqlx::query_as::<_, ClassRow>(
            r#"
            SELECT c.id, c.name, c.instructor, c.start_time, c.end_time, c.capacity,
                   c.capacity - COUNT(b.id) AS available_slots
            FROM fitness_classes c
            LEFT JOIN bookings b ON b.class_id = c.id AND b.is_cancelled = 0
            WHERE ?1 = 0 OR c.start_time > ?2
            GROUP BY c.id
            ORDER BY c.start_time
            "#,
        )
        .bind(upcoming_only)
        .bind(now)
        .fetch_all(&self.pool)
        .await?;

        let classes: Vec<ClassView> = rows
            .into_iter()
            .map(|row| ClassView {
                id: row.id,
                name: row.name,
                instructor: row.instructor,
                start_time: to_timezone_string(row.start_time, target_tz),
                end_time: to_timezone_string(row.end_time, target_tz),
                capacity: row.capacity,
                available_slots: row.available_slots,
            })
            .collect();

        info!("Retrieved {} classes", classes.len());
        Ok(classes)
    }
}
