#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Scoreboard {
    pub team_a: TeamScoreboard,
    pub team_b: TeamScoreboard,
    pub medals: Vec<MedalAward>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TeamScoreboard {
    pub name: String,
    pub players: Vec<ScoreboardPlayer>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScoreboardPlayer {
    pub gamertag: String,
    pub hero: String,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub final_hits: i32,
    pub damage: i32,
    pub damage_blocked: i32,
    pub healing: i32,
    pub accuracy_pct: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MedalAward {
    pub medal: String,
    pub gamertag: String,
}
