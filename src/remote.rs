//! Normalization of the externally-shaped scoreboard feed.
//!
//! The remote source publishes a nested document keyed by game identifier:
//!
//! ```json
//! {
//!   "games": { "game_1": { "players": { "player_a": {…}, "player_b": {…} } } },
//!   "match_metadata": { "rally_count": 12 }
//! }
//! ```
//!
//! [`normalize`] reshapes one selected game of that document into a
//! [`RemoteSnapshot`] of the flat record's remote-sourced fields. The payload
//! is treated as read-only; the snapshot is always a fresh value.

use serde_json::{Map, Value};

use crate::state::scoreboard::{PLAYER_A_NAME, PLAYER_B_NAME};

/// Raw counters extracted for one player slot.
///
/// Every field is always populated: a counter that is absent, null, or not
/// representable as an unsigned integer collapses to `0`, and a missing or
/// empty name collapses to the slot's default literal. A legitimate zero is
/// therefore indistinguishable from an absent counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCounters {
    /// Display name for the slot.
    pub name: String,
    /// Points won on serve.
    pub points_on_serve: u64,
    /// Forced errors.
    pub forced_errors: u64,
    /// Unforced errors.
    pub unforced_errors: u64,
    /// Winning smashes.
    pub smash_wins: u64,
    /// Winning lobs.
    pub lob_wins: u64,
    /// Winning drives.
    pub drive_wins: u64,
    /// Net errors (feed key `net`).
    pub net_errors: u64,
    /// Missed-ball errors (feed key `missed`).
    pub missed_errors: u64,
    /// Out errors (feed key `out`).
    pub out_errors: u64,
}

impl PlayerCounters {
    fn from_raw(raw: Option<&Map<String, Value>>, fallback_name: &str) -> Self {
        Self {
            name: name_or(raw, fallback_name),
            points_on_serve: counter(raw, "points_on_serve"),
            forced_errors: counter(raw, "forced_errors"),
            unforced_errors: counter(raw, "unforced_errors"),
            smash_wins: counter(raw, "smash_wins"),
            lob_wins: counter(raw, "lob_wins"),
            drive_wins: counter(raw, "drive_wins"),
            // The feed shortens the error counter keys.
            net_errors: counter(raw, "net"),
            missed_errors: counter(raw, "missed"),
            out_errors: counter(raw, "out"),
        }
    }
}

/// The remote-sourced slice of the scoreboard record for one game.
///
/// The type deliberately carries no selected-game index and no display
/// configuration, so merging a snapshot can never touch the local-only
/// fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSnapshot {
    /// Rally count from the match-level metadata.
    pub rally_count: u64,
    /// Counters for player A.
    pub player_a: PlayerCounters,
    /// Counters for player B.
    pub player_b: PlayerCounters,
}

/// Reshape the raw feed document into a [`RemoteSnapshot`] for the given
/// game index.
///
/// Returns `None` when the payload is not a JSON object, when
/// `games.game_<selected_game>` is absent, or when that game carries no
/// `players` mapping; `None` means there is nothing to sync this cycle.
/// Missing individual counters are not an error; they take their defaults
/// per [`PlayerCounters`].
pub fn normalize(payload: &Value, selected_game: u32) -> Option<RemoteSnapshot> {
    let root = payload.as_object()?;

    let game_key = format!("game_{selected_game}");
    let game = root.get("games")?.get(&game_key)?;
    let players = game.get("players").and_then(Value::as_object)?;

    let metadata = root.get("match_metadata").and_then(Value::as_object);

    Some(RemoteSnapshot {
        rally_count: counter(metadata, "rally_count"),
        player_a: PlayerCounters::from_raw(
            players.get("player_a").and_then(Value::as_object),
            PLAYER_A_NAME,
        ),
        player_b: PlayerCounters::from_raw(
            players.get("player_b").and_then(Value::as_object),
            PLAYER_B_NAME,
        ),
    })
}

fn counter(source: Option<&Map<String, Value>>, key: &str) -> u64 {
    source
        .and_then(|raw| raw.get(key))
        .and_then(Value::as_u64)
        .unwrap_or(0)
}

fn name_or(source: Option<&Map<String, Value>>, fallback: &str) -> String {
    source
        .and_then(|raw| raw.get("name"))
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .map_or_else(|| fallback.to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> Value {
        json!({
            "games": {
                "game_1": {
                    "players": {
                        "player_a": {
                            "name": "Ann",
                            "points_on_serve": 7,
                            "forced_errors": 2,
                            "unforced_errors": 1,
                            "smash_wins": 5,
                            "lob_wins": 3,
                            "drive_wins": 4,
                            "net": 2,
                            "missed": 1,
                            "out": 3
                        },
                        "player_b": {
                            "name": "Bea",
                            "points_on_serve": 6,
                            "forced_errors": 4,
                            "unforced_errors": 2,
                            "smash_wins": 3,
                            "lob_wins": 2,
                            "drive_wins": 1,
                            "net": 1,
                            "missed": 2,
                            "out": 0
                        }
                    }
                }
            },
            "match_metadata": { "rally_count": 42 }
        })
    }

    #[test]
    fn non_object_payload_yields_none() {
        assert_eq!(normalize(&json!(null), 1), None);
        assert_eq!(normalize(&json!(42), 1), None);
        assert_eq!(normalize(&json!("scoreboard"), 1), None);
        assert_eq!(normalize(&json!([1, 2, 3]), 1), None);
    }

    #[test]
    fn missing_game_yields_none() {
        assert_eq!(normalize(&json!({}), 1), None);
        assert_eq!(normalize(&json!({ "games": {} }), 1), None);
        // Only game_1 is present; game 2 is selected.
        assert_eq!(normalize(&full_payload(), 2), None);
    }

    #[test]
    fn missing_players_yields_none() {
        let payload = json!({ "games": { "game_1": {} } });
        assert_eq!(normalize(&payload, 1), None);

        let payload = json!({ "games": { "game_1": { "players": null } } });
        assert_eq!(normalize(&payload, 1), None);
    }

    #[test]
    fn full_payload_maps_exactly() {
        let snapshot = normalize(&full_payload(), 1).unwrap();

        assert_eq!(snapshot.rally_count, 42);
        assert_eq!(snapshot.player_a.name, "Ann");
        assert_eq!(snapshot.player_a.points_on_serve, 7);
        assert_eq!(snapshot.player_a.smash_wins, 5);
        assert_eq!(snapshot.player_a.net_errors, 2);
        assert_eq!(snapshot.player_a.missed_errors, 1);
        assert_eq!(snapshot.player_a.out_errors, 3);
        assert_eq!(snapshot.player_b.name, "Bea");
        assert_eq!(snapshot.player_b.forced_errors, 4);
        assert_eq!(snapshot.player_b.out_errors, 0);
    }

    #[test]
    fn explicit_zero_counter_stays_zero() {
        // A zero in the feed and an absent counter both normalize to 0; the
        // distinction is lost by the merge policy, not by this function.
        let payload = json!({
            "games": { "game_1": { "players": {
                "player_a": { "points_on_serve": 0 }
            } } }
        });
        let snapshot = normalize(&payload, 1).unwrap();
        assert_eq!(snapshot.player_a.points_on_serve, 0);
        assert_eq!(snapshot.player_a.forced_errors, 0);
    }

    #[test]
    fn absent_and_null_counters_default_to_zero() {
        let payload = json!({
            "games": { "game_1": { "players": {
                "player_a": { "name": "Ann", "smash_wins": null },
                "player_b": {}
            } } }
        });
        let snapshot = normalize(&payload, 1).unwrap();
        assert_eq!(snapshot.player_a.smash_wins, 0);
        assert_eq!(snapshot.player_b.points_on_serve, 0);
        assert_eq!(snapshot.player_b.name, "Player B");
    }

    #[test]
    fn empty_or_missing_name_takes_slot_literal() {
        let payload = json!({
            "games": { "game_1": { "players": {
                "player_a": { "name": "" },
                "player_b": { "points_on_serve": 1 }
            } } }
        });
        let snapshot = normalize(&payload, 1).unwrap();
        assert_eq!(snapshot.player_a.name, "Player A");
        assert_eq!(snapshot.player_b.name, "Player B");
    }

    #[test]
    fn selects_the_requested_game() {
        let payload = json!({
            "games": {
                "game_1": { "players": { "player_a": { "points_on_serve": 1 } } },
                "game_2": { "players": { "player_a": { "points_on_serve": 9 } } }
            }
        });
        let snapshot = normalize(&payload, 2).unwrap();
        assert_eq!(snapshot.player_a.points_on_serve, 9);
    }

    #[test]
    fn missing_metadata_defaults_rally_count() {
        let payload = json!({
            "games": { "game_1": { "players": { "player_a": {} } } }
        });
        let snapshot = normalize(&payload, 1).unwrap();
        assert_eq!(snapshot.rally_count, 0);
    }

    #[test]
    fn non_numeric_counters_coerce_to_zero() {
        let payload = json!({
            "games": { "game_1": { "players": {
                "player_a": { "points_on_serve": "7", "smash_wins": -3, "lob_wins": 2.5 }
            } } }
        });
        let snapshot = normalize(&payload, 1).unwrap();
        assert_eq!(snapshot.player_a.points_on_serve, 0);
        assert_eq!(snapshot.player_a.smash_wins, 0);
        assert_eq!(snapshot.player_a.lob_wins, 0);
    }
}
