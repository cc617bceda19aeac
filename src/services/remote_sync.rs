//! Background loop mirroring the remote scoreboard feed into the state store.

use std::time::Duration;

use reqwest::{Client, header};
use serde_json::Value;
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::{config::RemoteSyncConfig, remote, state::ScoreboardState, state::SharedState};

/// Deadline for one remote fetch so a stalled upstream cannot wedge the loop.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Poll the remote feed until `shutdown` flips to true.
///
/// The first cycle runs immediately, then one cycle per poll interval. A
/// failed cycle is logged and skipped; the loop itself never dies on its own.
pub async fn run(
    state: SharedState,
    config: RemoteSyncConfig,
    mut shutdown: watch::Receiver<bool>,
) {
    let client = match Client::builder().timeout(FETCH_TIMEOUT).build() {
        Ok(client) => client,
        Err(err) => {
            warn!(error = %err, "failed to build remote sync HTTP client; sync disabled");
            return;
        }
    };

    info!(
        url = %config.url,
        interval_ms = config.poll_interval.as_millis() as u64,
        "remote sync started"
    );

    loop {
        run_cycle(&state, &client, &config.url).await;

        tokio::select! {
            _ = sleep(config.poll_interval) => {}
            changed = shutdown.changed() => {
                // A dropped sender means the server is gone; stop either way.
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    info!("remote sync stopped");
}

/// One fetch-normalize-merge-persist cycle.
async fn run_cycle(state: &SharedState, client: &Client, url: &str) {
    match fetch_payload(client, url).await {
        Ok(payload) => apply_payload(state, &payload).await,
        Err(err) => warn!(error = %err, "remote fetch failed; skipping sync cycle"),
    }
}

/// Fetch the remote feed, bypassing intermediary caches.
async fn fetch_payload(client: &Client, url: &str) -> Result<Value, reqwest::Error> {
    let response = client
        .get(url)
        .header(header::CACHE_CONTROL, "no-store")
        .send()
        .await?
        .error_for_status()?;

    response.json().await
}

/// Merge one fetched payload into the store, writing only when the merged
/// record differs from the persisted one.
pub async fn apply_payload(state: &SharedState, payload: &Value) {
    let mut store = state.store().await;
    let current = store.read();

    match merged_record(&current, payload) {
        Some(next) => {
            if let Err(err) = store.write(next) {
                warn!(error = %err, "failed to persist synced state");
            }
        }
        None => debug!("remote payload leaves the record unchanged; skipping write"),
    }
}

/// Compute the record a fetched payload should persist, if any.
///
/// `None` means either the payload holds nothing for the record's selected
/// game or the merge would change nothing.
fn merged_record(current: &ScoreboardState, payload: &Value) -> Option<ScoreboardState> {
    let snapshot = remote::normalize(payload, current.effective_selected_game())?;

    let mut next = current.clone();
    next.merge_remote(&snapshot);

    if next == *current {
        return None;
    }
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dao::state_store::StateStore, state::AppState};
    use serde_json::json;
    use tempfile::tempdir;

    fn feed(rallies: u64, smash_a: u64) -> Value {
        json!({
            "games": {
                "game_1": {
                    "players": {
                        "player_a": { "name": "Ann", "smash_wins": smash_a },
                        "player_b": { "name": "Bea" },
                    }
                }
            },
            "match_metadata": { "rally_count": rallies },
        })
    }

    #[test]
    fn first_payload_produces_a_merged_record() {
        let current = ScoreboardState::default();
        let next = merged_record(&current, &feed(4, 2)).unwrap();

        assert_eq!(next.rally_count, 4);
        assert_eq!(next.player_a_name, "Ann");
        assert_eq!(next.player_a_smash_wins, 2);
        assert_eq!(next.player_b_name, "Bea");
    }

    #[test]
    fn unchanged_payload_skips_the_write() {
        let current = ScoreboardState::default();
        let next = merged_record(&current, &feed(4, 2)).unwrap();

        assert_eq!(merged_record(&next, &feed(4, 2)), None);
        assert!(merged_record(&next, &feed(5, 2)).is_some());
    }

    #[test]
    fn payload_without_the_selected_game_is_ignored() {
        let mut current = ScoreboardState::default();
        current.selected_game = 2;

        assert_eq!(merged_record(&current, &feed(4, 2)), None);
    }

    #[test]
    fn zero_selected_game_follows_the_first_game() {
        let mut current = ScoreboardState::default();
        current.selected_game = 0;

        let next = merged_record(&current, &feed(4, 2)).unwrap();
        assert_eq!(next.player_a_name, "Ann");
        // The written record keeps the index exactly as stored.
        assert_eq!(next.selected_game, 0);
    }

    #[tokio::test]
    async fn apply_payload_persists_the_merge() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        let state = AppState::new(StateStore::open(&path).unwrap());

        apply_payload(&state, &feed(9, 3)).await;

        let persisted: ScoreboardState =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(persisted.rally_count, 9);
        assert_eq!(persisted.player_a_smash_wins, 3);
        assert_eq!(persisted.player_a_name, "Ann");
    }

    #[tokio::test]
    async fn apply_payload_preserves_local_display_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        let state = AppState::new(StateStore::open(&path).unwrap());

        {
            let mut store = state.store().await;
            let mut record = store.read();
            record.singlebar_visible = false;
            record.triplebar_player = crate::state::scoreboard::PlayerSlot::B;
            store.write(record).unwrap();
        }

        apply_payload(&state, &feed(2, 1)).await;

        let record = state.store().await.read();
        assert_eq!(record.rally_count, 2);
        assert!(!record.singlebar_visible);
        assert_eq!(
            record.triplebar_player,
            crate::state::scoreboard::PlayerSlot::B
        );
    }
}
