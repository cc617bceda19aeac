//! Read and write operations over the persisted scoreboard record.

use crate::{
    dto::state::StateUpdateRequest,
    error::ServiceError,
    state::{ScoreboardState, SharedState},
};

/// Current record, re-read from disk so edits made outside the server are
/// picked up on the next request.
pub async fn fetch_state(state: &SharedState) -> ScoreboardState {
    state.store().await.read()
}

/// Parse a controller patch, merge it into the record, and persist the result.
///
/// An empty body counts as the empty patch; the merged record is written back
/// even when nothing changed, and returned either way.
pub async fn update_state(
    state: &SharedState,
    body: &[u8],
) -> Result<ScoreboardState, ServiceError> {
    let patch = parse_patch(body)?;

    let mut store = state.store().await;
    let mut record = store.read();
    patch.apply(&mut record);
    store.write(record.clone())?;

    Ok(record)
}

fn parse_patch(body: &[u8]) -> Result<StateUpdateRequest, ServiceError> {
    if body.is_empty() {
        return Ok(StateUpdateRequest::default());
    }

    serde_json::from_slice(body)
        .map_err(|err| ServiceError::InvalidInput(format!("malformed state update: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dao::state_store::StateStore, state::AppState};
    use tempfile::tempdir;

    fn shared_state(dir: &tempfile::TempDir) -> SharedState {
        let store = StateStore::open(dir.path().join("state.json")).unwrap();
        AppState::new(store)
    }

    #[tokio::test]
    async fn fetch_returns_the_persisted_record() {
        let dir = tempdir().unwrap();
        let state = shared_state(&dir);

        let record = fetch_state(&state).await;
        assert_eq!(record, ScoreboardState::default());
    }

    #[tokio::test]
    async fn update_merges_patch_and_persists() {
        let dir = tempdir().unwrap();
        let state = shared_state(&dir);

        let merged = update_state(&state, br#"{"player_a_name": "Ann", "rally_count": 3}"#)
            .await
            .unwrap();
        assert_eq!(merged.player_a_name, "Ann");
        assert_eq!(merged.rally_count, 3);

        // A later read observes the persisted merge.
        let record = fetch_state(&state).await;
        assert_eq!(record, merged);
    }

    #[tokio::test]
    async fn empty_body_is_a_no_op_update() {
        let dir = tempdir().unwrap();
        let state = shared_state(&dir);

        let record = update_state(&state, b"").await.unwrap();
        assert_eq!(record, ScoreboardState::default());
    }

    #[tokio::test]
    async fn malformed_body_is_rejected_without_writing() {
        let dir = tempdir().unwrap();
        let state = shared_state(&dir);
        update_state(&state, br#"{"rally_count": 7}"#).await.unwrap();

        let err = update_state(&state, b"{not json").await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));

        let record = fetch_state(&state).await;
        assert_eq!(record.rally_count, 7);
    }
}
