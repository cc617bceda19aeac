use std::path::Path;

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{services::documentation::ApiDoc, state::SharedState};

pub mod health;
pub mod state;
pub mod views;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(shared: SharedState, public_dir: &Path) -> Router<()> {
    let api = health::router()
        .merge(state::router())
        .merge(views::router(public_dir));

    let docs = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    api.with_state(shared).merge(docs)
}
