//! Static display pages for the bar-chart panels and the controller UI.

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::state::SharedState;

/// Pages served at `/<view>` from `<public_dir>/<view>.html`.
const VIEWS: [&str; 5] = [
    "controller",
    "singlebar",
    "doublebar",
    "singleplayer",
    "triplebar",
];

/// Configure the display page routes plus the static asset fallback.
///
/// Anything outside the named views (the index page, scripts, stylesheets)
/// is served straight out of the public directory.
pub fn router(public_dir: &Path) -> Router<SharedState> {
    let mut router = Router::<SharedState>::new();
    for view in VIEWS {
        let page = ServeFile::new(public_dir.join(format!("{view}.html")));
        router = router.route_service(&format!("/{view}"), page);
    }

    router.fallback_service(ServeDir::new(public_dir))
}
