//! The flat scoreboard record shared by the controller, the display clients,
//! the persisted document, and the remote sync loop.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::remote::RemoteSnapshot;

/// Default name shown for player A until the remote feed or the controller
/// provides one.
pub const PLAYER_A_NAME: &str = "Player A";
/// Default name shown for player B until the remote feed or the controller
/// provides one.
pub const PLAYER_B_NAME: &str = "Player B";

/// Per-player statistic a display panel can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StatMetric {
    /// Points won while serving.
    PointsOnServe,
    /// Errors forced by the opponent.
    ForcedErrors,
    /// Unforced errors.
    UnforcedErrors,
    /// Winning smashes.
    SmashWins,
    /// Winning lobs.
    LobWins,
    /// Winning drives.
    DriveWins,
    /// Balls lost into the net.
    NetErrors,
    /// Missed balls.
    MissedErrors,
    /// Balls hit out.
    OutErrors,
}

/// Which of the two players a single-player panel renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PlayerSlot {
    /// Player A.
    #[serde(rename = "a")]
    A,
    /// Player B.
    #[serde(rename = "b")]
    B,
}

/// Which triple of bars the three-bar panel renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TripleBarKind {
    /// Smash / lob / drive winners.
    #[serde(rename = "shotwins")]
    ShotWins,
    /// Net / missed / out errors.
    #[serde(rename = "errors")]
    Errors,
}

/// The full application state: one flat record of match statistics plus the
/// display configuration driven by the controller UI.
///
/// The field names are the wire format, both in the persisted document and
/// over the HTTP API. Missing fields in a persisted document are filled from
/// [`ScoreboardState::default`], so a read always yields the complete field
/// set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ScoreboardState {
    /// Index of the remote game the sync loop follows (1-based).
    pub selected_game: u32,
    /// Number of rallies played in the match so far.
    pub rally_count: u64,

    /// Display name of player A.
    pub player_a_name: String,
    /// Points player A won on serve.
    pub player_a_points_on_serve: u64,
    /// Errors forced by player A.
    pub player_a_forced_errors: u64,
    /// Unforced errors by player A.
    pub player_a_unforced_errors: u64,
    /// Winning smashes by player A.
    pub player_a_smash_wins: u64,
    /// Winning lobs by player A.
    pub player_a_lob_wins: u64,
    /// Winning drives by player A.
    pub player_a_drive_wins: u64,
    /// Net errors by player A.
    pub player_a_net_errors: u64,
    /// Missed-ball errors by player A.
    pub player_a_missed_errors: u64,
    /// Out errors by player A.
    pub player_a_out_errors: u64,

    /// Display name of player B.
    pub player_b_name: String,
    /// Points player B won on serve.
    pub player_b_points_on_serve: u64,
    /// Errors forced by player B.
    pub player_b_forced_errors: u64,
    /// Unforced errors by player B.
    pub player_b_unforced_errors: u64,
    /// Winning smashes by player B.
    pub player_b_smash_wins: u64,
    /// Winning lobs by player B.
    pub player_b_lob_wins: u64,
    /// Winning drives by player B.
    pub player_b_drive_wins: u64,
    /// Net errors by player B.
    pub player_b_net_errors: u64,
    /// Missed-ball errors by player B.
    pub player_b_missed_errors: u64,
    /// Out errors by player B.
    pub player_b_out_errors: u64,

    /// Whether the single-bar panel is shown.
    pub singlebar_visible: bool,
    /// Whether the double-bar panel is shown.
    pub doublebar_visible: bool,
    /// Statistic the double-bar panel compares across players.
    pub doublebar_metric: StatMetric,
    /// Whether the single-player panel is shown.
    pub singleplayer_visible: bool,
    /// Player the single-player panel renders.
    pub singleplayer_player: PlayerSlot,
    /// Statistic the single-player panel renders.
    pub singleplayer_metric: StatMetric,
    /// Whether the triple-bar panel is shown.
    pub triplebar_visible: bool,
    /// Player the triple-bar panel renders.
    pub triplebar_player: PlayerSlot,
    /// Which bar triple the triple-bar panel renders.
    pub triplebar_type: TripleBarKind,
    /// Whether the error-comparison panel is shown.
    pub errorscomparison_visible: bool,
    /// Player the error-comparison panel renders.
    pub errorscomparison_player: PlayerSlot,
}

impl Default for ScoreboardState {
    fn default() -> Self {
        Self {
            selected_game: 1,
            rally_count: 0,
            player_a_name: PLAYER_A_NAME.to_string(),
            player_a_points_on_serve: 0,
            player_a_forced_errors: 0,
            player_a_unforced_errors: 0,
            player_a_smash_wins: 0,
            player_a_lob_wins: 0,
            player_a_drive_wins: 0,
            player_a_net_errors: 0,
            player_a_missed_errors: 0,
            player_a_out_errors: 0,
            player_b_name: PLAYER_B_NAME.to_string(),
            player_b_points_on_serve: 0,
            player_b_forced_errors: 0,
            player_b_unforced_errors: 0,
            player_b_smash_wins: 0,
            player_b_lob_wins: 0,
            player_b_drive_wins: 0,
            player_b_net_errors: 0,
            player_b_missed_errors: 0,
            player_b_out_errors: 0,
            singlebar_visible: true,
            doublebar_visible: true,
            doublebar_metric: StatMetric::PointsOnServe,
            singleplayer_visible: true,
            singleplayer_player: PlayerSlot::A,
            singleplayer_metric: StatMetric::PointsOnServe,
            triplebar_visible: true,
            triplebar_player: PlayerSlot::A,
            triplebar_type: TripleBarKind::ShotWins,
            errorscomparison_visible: true,
            errorscomparison_player: PlayerSlot::A,
        }
    }
}

impl ScoreboardState {
    /// Overlay a normalized remote snapshot onto this record, field by field.
    ///
    /// Only the remote-sourced fields (rally count, player names, player
    /// counters) are assigned. `selected_game` and the display configuration
    /// are not part of [`RemoteSnapshot`], so a remote merge can never change
    /// them.
    pub fn merge_remote(&mut self, snapshot: &RemoteSnapshot) {
        self.rally_count = snapshot.rally_count;

        self.player_a_name = snapshot.player_a.name.clone();
        self.player_a_points_on_serve = snapshot.player_a.points_on_serve;
        self.player_a_forced_errors = snapshot.player_a.forced_errors;
        self.player_a_unforced_errors = snapshot.player_a.unforced_errors;
        self.player_a_smash_wins = snapshot.player_a.smash_wins;
        self.player_a_lob_wins = snapshot.player_a.lob_wins;
        self.player_a_drive_wins = snapshot.player_a.drive_wins;
        self.player_a_net_errors = snapshot.player_a.net_errors;
        self.player_a_missed_errors = snapshot.player_a.missed_errors;
        self.player_a_out_errors = snapshot.player_a.out_errors;

        self.player_b_name = snapshot.player_b.name.clone();
        self.player_b_points_on_serve = snapshot.player_b.points_on_serve;
        self.player_b_forced_errors = snapshot.player_b.forced_errors;
        self.player_b_unforced_errors = snapshot.player_b.unforced_errors;
        self.player_b_smash_wins = snapshot.player_b.smash_wins;
        self.player_b_lob_wins = snapshot.player_b.lob_wins;
        self.player_b_drive_wins = snapshot.player_b.drive_wins;
        self.player_b_net_errors = snapshot.player_b.net_errors;
        self.player_b_missed_errors = snapshot.player_b.missed_errors;
        self.player_b_out_errors = snapshot.player_b.out_errors;
    }

    /// The game index the sync loop should follow.
    ///
    /// A stored `0` falls back to game 1; the feed keys games from 1.
    pub fn effective_selected_game(&self) -> u32 {
        if self.selected_game == 0 {
            1
        } else {
            self.selected_game
        }
    }
}
