//! Request body of the state write endpoint.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::state::scoreboard::{PlayerSlot, ScoreboardState, StatMetric, TripleBarKind};

/// Partial state update sent by the controller UI.
///
/// The field set is the allow-list: unknown JSON keys are dropped during
/// deserialization, while a known key carrying a value of the wrong type
/// rejects the whole request. Every field is optional, so `{}` is a valid
/// update that changes nothing.
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
pub struct StateUpdateRequest {
    selected_game: Option<u32>,
    rally_count: Option<u64>,

    player_a_name: Option<String>,
    player_a_points_on_serve: Option<u64>,
    player_a_forced_errors: Option<u64>,
    player_a_unforced_errors: Option<u64>,
    player_a_smash_wins: Option<u64>,
    player_a_lob_wins: Option<u64>,
    player_a_drive_wins: Option<u64>,
    player_a_net_errors: Option<u64>,
    player_a_missed_errors: Option<u64>,
    player_a_out_errors: Option<u64>,

    player_b_name: Option<String>,
    player_b_points_on_serve: Option<u64>,
    player_b_forced_errors: Option<u64>,
    player_b_unforced_errors: Option<u64>,
    player_b_smash_wins: Option<u64>,
    player_b_lob_wins: Option<u64>,
    player_b_drive_wins: Option<u64>,
    player_b_net_errors: Option<u64>,
    player_b_missed_errors: Option<u64>,
    player_b_out_errors: Option<u64>,

    singlebar_visible: Option<bool>,
    doublebar_visible: Option<bool>,
    doublebar_metric: Option<StatMetric>,
    singleplayer_visible: Option<bool>,
    singleplayer_player: Option<PlayerSlot>,
    singleplayer_metric: Option<StatMetric>,
    triplebar_visible: Option<bool>,
    triplebar_player: Option<PlayerSlot>,
    triplebar_type: Option<TripleBarKind>,
    errorscomparison_visible: Option<bool>,
    errorscomparison_player: Option<PlayerSlot>,
}

impl StateUpdateRequest {
    /// Assign every present field onto the record, leaving the rest alone.
    pub fn apply(&self, record: &mut ScoreboardState) {
        if let Some(value) = self.selected_game {
            record.selected_game = value;
        }
        if let Some(value) = self.rally_count {
            record.rally_count = value;
        }

        if let Some(name) = &self.player_a_name {
            record.player_a_name = name.clone();
        }
        if let Some(value) = self.player_a_points_on_serve {
            record.player_a_points_on_serve = value;
        }
        if let Some(value) = self.player_a_forced_errors {
            record.player_a_forced_errors = value;
        }
        if let Some(value) = self.player_a_unforced_errors {
            record.player_a_unforced_errors = value;
        }
        if let Some(value) = self.player_a_smash_wins {
            record.player_a_smash_wins = value;
        }
        if let Some(value) = self.player_a_lob_wins {
            record.player_a_lob_wins = value;
        }
        if let Some(value) = self.player_a_drive_wins {
            record.player_a_drive_wins = value;
        }
        if let Some(value) = self.player_a_net_errors {
            record.player_a_net_errors = value;
        }
        if let Some(value) = self.player_a_missed_errors {
            record.player_a_missed_errors = value;
        }
        if let Some(value) = self.player_a_out_errors {
            record.player_a_out_errors = value;
        }

        if let Some(name) = &self.player_b_name {
            record.player_b_name = name.clone();
        }
        if let Some(value) = self.player_b_points_on_serve {
            record.player_b_points_on_serve = value;
        }
        if let Some(value) = self.player_b_forced_errors {
            record.player_b_forced_errors = value;
        }
        if let Some(value) = self.player_b_unforced_errors {
            record.player_b_unforced_errors = value;
        }
        if let Some(value) = self.player_b_smash_wins {
            record.player_b_smash_wins = value;
        }
        if let Some(value) = self.player_b_lob_wins {
            record.player_b_lob_wins = value;
        }
        if let Some(value) = self.player_b_drive_wins {
            record.player_b_drive_wins = value;
        }
        if let Some(value) = self.player_b_net_errors {
            record.player_b_net_errors = value;
        }
        if let Some(value) = self.player_b_missed_errors {
            record.player_b_missed_errors = value;
        }
        if let Some(value) = self.player_b_out_errors {
            record.player_b_out_errors = value;
        }

        if let Some(value) = self.singlebar_visible {
            record.singlebar_visible = value;
        }
        if let Some(value) = self.doublebar_visible {
            record.doublebar_visible = value;
        }
        if let Some(value) = self.doublebar_metric {
            record.doublebar_metric = value;
        }
        if let Some(value) = self.singleplayer_visible {
            record.singleplayer_visible = value;
        }
        if let Some(value) = self.singleplayer_player {
            record.singleplayer_player = value;
        }
        if let Some(value) = self.singleplayer_metric {
            record.singleplayer_metric = value;
        }
        if let Some(value) = self.triplebar_visible {
            record.triplebar_visible = value;
        }
        if let Some(value) = self.triplebar_player {
            record.triplebar_player = value;
        }
        if let Some(value) = self.triplebar_type {
            record.triplebar_type = value;
        }
        if let Some(value) = self.errorscomparison_visible {
            record.errorscomparison_visible = value;
        }
        if let Some(value) = self.errorscomparison_player {
            record.errorscomparison_player = value;
        }
    }
}
