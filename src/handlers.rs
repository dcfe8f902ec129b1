use axum::{Json, extract::Query, extract::State, response::IntoResponse};

use crate::{
    AppState,
    error::ApiError,
    models::{BookingRequest, BookingView, ClassView},
    validation::validate_booking_request,
};

#[derive(Debug, serde::Deserialize)]
pub struct ClassesQuery {
    pub timezone_param: Option<String>,
    #[serde(default = "default_upcoming_only")]
    pub upcoming_only: bool,
}

fn default_upcoming_only() -> bool {
    true
}

#[derive(Debug, serde::Deserialize)]
pub struct BookingsQuery {
    pub email: String,
    pub timezone_param: Option<String>,
    #[serde(default)]
    pub include_cancelled: bool,
}

#[utoipa::path(get, path = "/api/fitness_classes/", tag = "fitness_classes")]
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Fitness Studio Booking API",
        "version": "1.0.0"
    }))
}

#[utoipa::path(get, path = "/healthz/live", tag = "health")]
pub async fn healthz_live() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(get, path = "/healthz/ready", tag = "health")]
pub async fn healthz_ready() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(
    get,
    path = "/api/fitness_classes/classes",
    params(
        ("timezone_param" = Option<String>, Query, description = "Target IANA timezone for datetime display"),
        ("upcoming_only" = Option<bool>, Query, description = "Show only upcoming classes (default true)")
    ),
    responses(
        (status = 200, description = "List of classes with slot availability", body = [ClassView]),
        (status = 500, description = "Internal server error")
    ),
    tag = "fitness_classes"
)]
pub async fn get_classes(
    State(state): State<AppState>,
    Query(query): Query<ClassesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let target_tz = query
        .timezone_param
        .unwrap_or_else(|| state.settings.default_timezone.clone());

    let classes = state
        .catalog
        .list_classes(&target_tz, query.upcoming_only)
        .await?;
    Ok(Json(classes))
}

#[utoipa::path(
    post,
    path = "/api/fitness_classes/book",
    request_body = BookingRequest,
    responses(
        (status = 200, description = "Booking created", body = BookingView),
        (status = 400, description = "Class in the past, duplicate booking, or class full"),
        (status = 404, description = "Class not found"),
        (status = 422, description = "Malformed request body"),
        (status = 500, description = "Internal server error")
    ),
    tag = "fitness_classes"
)]
pub async fn book_class(
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_booking_request(&request)?;

    let booking = state.engine.book(&request).await?;
    Ok(Json(booking))
}

#[utoipa::path(
    get,
    path = "/api/fitness_classes/bookings",
    params(
        ("email" = String, Query, description = "User email to filter bookings"),
        ("timezone_param" = Option<String>, Query, description = "Target IANA timezone for datetime display"),
        ("include_cancelled" = Option<bool>, Query, description = "Include cancelled bookings (default false)")
    ),
    responses(
        (status = 200, description = "Bookings for the user", body = [BookingView]),
        (status = 500, description = "Internal server error")
    ),
    tag = "fitness_classes"
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    Query(query): Query<BookingsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let target_tz = query
        .timezone_param
        .unwrap_or_else(|| state.settings.default_timezone.clone());

    let bookings = state
        .bookings
        .list_bookings(&query.email, &target_tz, query.include_cancelled)
        .await?;
    Ok(Json(bookings))
}
