/// OpenAPI documentation generation.
pub mod documentation;
/// Background sync against the remote scoreboard feed.
pub mod remote_sync;
/// Scoreboard state read and write operations.
pub mod state_service;
