use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A scheduled class as stored. Instants are UTC, stored naive.
#[derive(Debug, Clone, FromRow)]
pub struct FitnessClass {
    pub id: i64,
    pub name: String,
    pub instructor: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub capacity: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, FromRow)]
pub struct Booking {
    pub id: i64,
    pub class_id: i64,
    pub user_email: String,
    pub user_name: String,
    pub booking_time: NaiveDateTime,
    pub is_cancelled: bool,
}

/// Class listing entry with per-request slot availability. Datetime fields are
/// ISO-8601 strings already converted to the requested display timezone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ClassView {
    pub id: i64,
    pub name: String,
    pub instructor: String,
    #[schema(example = "2025-07-16T07:00:00+05:30")]
    pub start_time: String,
    #[schema(example = "2025-07-16T08:00:00+05:30")]
    pub end_time: String,
    pub capacity: i64,
    pub available_slots: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct BookingRequest {
    pub class_id: i64,
    #[schema(example = "jane.doe@example.com")]
    pub user_email: String,
    #[schema(example = "Jane Doe")]
    pub user_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct BookingView {
    pub id: i64,
    pub class_id: i64,
    pub user_email: String,
    pub user_name: String,
    pub booking_time: String,
    pub class_name: String,
    pub class_start_time: String,
}
