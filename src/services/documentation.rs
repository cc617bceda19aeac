use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the scoreboard server.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::state::get_state,
        crate::routes::state::update_state,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::state::StateUpdateRequest,
            crate::state::scoreboard::ScoreboardState,
            crate::state::scoreboard::StatMetric,
            crate::state::scoreboard::PlayerSlot,
            crate::state::scoreboard::TripleBarKind,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "state", description = "Scoreboard state read and write operations"),
    )
)]
pub struct ApiDoc;
