use chrono::{NaiveDateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use tracing::info;

use crate::error::BookingError;
use crate::models::{BookingRequest, BookingView, FitnessClass};
use crate::timezone::{coerce_utc, to_timezone_string};

/// Validates and commits booking attempts. All checks and the insert run inside
/// one transaction; a failed check returns before anything is written and a
/// failed commit rolls back on drop.
#[derive(Clone)]
pub struct BookingEngine {
    pool: SqlitePool,
}

impl BookingEngine {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn book(&self, request: &BookingRequest) -> Result<BookingView, BookingError> {
        let mut tx = self.pool.begin().await?;

        let class = sqlx::query_as::<_, FitnessClass>(
            "SELECT id, name, instructor, start_time, end_time, capacity, created_at
             FROM fitness_classes WHERE id = ?",
        )
        .bind(request.class_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(BookingError::ClassNotFound)?;

        // Pure UTC instant comparison; the display timezone plays no part here.
        if class.start_time <= Utc::now().naive_utc() {
            return Err(BookingError::ClassInPast);
        }

        let duplicates = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM bookings
             WHERE class_id = ? AND user_email = ? AND is_cancelled = 0",
        )
        .bind(request.class_id)
        .bind(&request.user_email)
        .fetch_one(&mut *tx)
        .await?;
        if duplicates > 0 {
            return Err(BookingError::DuplicateBooking);
        }

        let active_bookings = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM bookings WHERE class_id = ? AND is_cancelled = 0",
        )
        .bind(request.class_id)
        .fetch_one(&mut *tx)
        .await?;
        if active_bookings >= class.capacity {
            return Err(BookingError::ClassFull);
        }

        let booking_time = Utc::now().naive_utc();
        let result = sqlx::query(
            "INSERT INTO bookings (class_id, user_email, user_name, booking_time, is_cancelled)
             VALUES (?, ?, ?, ?, 0)",
        )
        .bind(request.class_id)
        .bind(&request.user_email)
        .bind(&request.user_name)
        .bind(booking_time)
        .execute(&mut *tx)
        .await?;
        let booking_id = result.last_insert_rowid();

        tx.commit().await?;
        info!("Booking created: {booking_id} for user {}", request.user_email);

        Ok(BookingView {
            id: booking_id,
            class_id: request.class_id,
            user_email: request.user_email.clone(),
            user_name: request.user_name.clone(),
            booking_time: coerce_utc(booking_time).to_rfc3339(),
            class_name: class.name,
            class_start_time: coerce_utc(class.start_time).to_rfc3339(),
        })
    }
}

#[derive(Debug, FromRow)]
struct BookingRow {
    id: i64,
    class_id: i64,
    user_email: String,
    user_name: String,
    booking_time: NaiveDateTime,
    class_name: String,
    class_start_time: NaiveDateTime,
}

/// Per-user booking lookups, joined against the class schedule for display.
#[derive(Clone)]
pub struct BookingQuery {
    pool: SqlitePool,
}

impl BookingQuery {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_bookings(
        &self,
        email: &str,
        target_tz: &str,
        include_cancelled: bool,
    ) -> Result<Vec<BookingView>, sqlx::Error> {
        // Inner join: a booking whose class is gone drops out of the result.
        let rows = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT b.id, b.class_id, b.user_email, b.user_name, b.booking_time,
                   c.name AS class_name, c.start_time AS class_start_time
            FROM bookings b
            JOIN fitness_classes c ON c.id = b.class_id
            WHERE b.user_email = ?1 AND (?2 = 1 OR b.is_cancelled = 0)
            ORDER BY b.booking_time
            "#,
        )
        .bind(email)
        .bind(include_cancelled)
        .fetch_all(&self.pool)
        .await?;

        let bookings: Vec<BookingView> = rows
            .into_iter()
            .map(|row| BookingView {
                id: row.id,
                class_id: row.class_id,
                user_email: row.user_email,
                user_name: row.user_name,
                booking_time: to_timezone_string(row.booking_time, target_tz),
                class_name: row.class_name,
                class_start_time: to_timezone_string(row.class_start_time, target_tz),
            })
            .collect();

        info!("Retrieved {} bookings for {email}", bookings.len());
        Ok(bookings)
    }
}
