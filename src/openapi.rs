use utoipa::OpenApi;

use crate::models::{BookingRequest, BookingView, ClassView};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz_live,
        crate::handlers::healthz_ready,
        crate::handlers::get_classes,
        crate::handlers::book_class,
        crate::handlers::get_bookings
    ),
    components(schemas(ClassView, BookingRequest, BookingView)),
    tags(
        (name = "fitness_classes", description = "Fitness class listing and booking operations"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
