//! Seeds the database with sample fitness classes.
//!
//! Wall-clock times below are IST; they are converted to UTC before storage.

use chrono::{Duration, NaiveTime, TimeZone, Utc};
use chrono_tz::Asia::Kolkata;
use tracing::info;

use fitness_booking_api::db::Database;
use fitness_booking_api::settings::Settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = Settings::from_env()?;
    let db = Database::connect(&settings.database_url).await?;
    db.run_migrations().await?;

    // Clear existing schedule
    sqlx::query("DELETE FROM bookings").execute(&db.pool).await?;
    sqlx::query("DELETE FROM fitness_classes")
        .execute(&db.pool)
        .await?;

    let today = Utc::now().with_timezone(&Kolkata).date_naive();
    let classes: [(&str, &str, i64, u32, u32, i64, i64); 5] = [
        // (name, instructor, days ahead, start hour, start min, duration min, capacity)
        ("Morning Yoga", "Sarah Johnson", 1, 7, 0, 60, 20),
        ("HIIT Training", "Mike Chen", 1, 18, 0, 60, 30),
        ("Pilates", "Emma Wilson", 2, 10, 0, 60, 3),
        ("Strength Training", "David Kumar", 2, 16, 0, 90, 10),
        ("Zumba Dance", "Maria Rodriguez", 3, 19, 0, 60, 25),
    ];

    for (name, instructor, days_ahead, hour, minute, duration_min, capacity) in classes {
        let date = today + Duration::days(days_ahead);
        let start_local = Kolkata
            .from_local_datetime(&date.and_time(
                NaiveTime::from_hms_opt(hour, minute, 0).ok_or("invalid seed time")?,
            ))
            .single()
            .ok_or("ambiguous local time")?;

        let start_utc = start_local.with_timezone(&Utc).naive_utc();
        let end_utc = start_utc + Duration::minutes(duration_min);

        sqlx::query(
            "INSERT INTO fitness_classes (name, instructor, start_time, end_time, capacity, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(name)
        .bind(instructor)
        .bind(start_utc)
        .bind(end_utc)
        .bind(capacity)
        .bind(Utc::now().naive_utc())
        .execute(&db.pool)
        .await?;

        info!("Seeded class {name} with {instructor} at {start_local}");
    }

    info!("Database seeded successfully");
    Ok(())
}
