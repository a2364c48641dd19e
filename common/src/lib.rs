pub mod match_stats;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TournamentSummary {
    pub id: i32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateTournament {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameSummary {
    pub id: i32,
    pub round: i32,
    pub team_a: String,
    pub team_b: String,
    /// Name of the winning team, `None` for a draw.
    pub winner: Option<String>,
    pub is_draw: bool,
    pub game_mode: String,
    pub map: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImportReport {
    pub games_imported: usize,
}
