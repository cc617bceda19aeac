/// File-backed state document storage.
pub mod state_store;
