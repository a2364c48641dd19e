//! Typed game records built from the raw blocks of a result sheet.

use crate::segment::RawBlock;

/// Players per team half. Both rosters are listed back to back, Team A first.
pub const TEAM_SIZE: usize = 6;
pub const PLAYERS_PER_GAME: usize = TEAM_SIZE * 2;

// Header row field positions.
const HEADER_TEAM_A: usize = 1;
const HEADER_TEAM_B: usize = 2;
const HEADER_WINNER: usize = 3;
const HEADER_GAME_MODE: usize = 4;
const HEADER_MAP: usize = 5;
const HEADER_ROUND: usize = 6;

// Medal row field positions.
const MEDAL_NAME: usize = 1;
const MEDAL_PLAYER: usize = 2;

// Player row field positions.
const PLAYER_NAME: usize = 0;
const PLAYER_KILLS: usize = 1;
const PLAYER_DEATHS: usize = 2;
const PLAYER_ASSISTS: usize = 3;
const PLAYER_FINAL_HITS: usize = 4;
const PLAYER_DAMAGE: usize = 5;
const PLAYER_DAMAGE_BLOCKED: usize = 6;
const PLAYER_HEALING: usize = 7;
const PLAYER_ACCURACY: usize = 8;
const PLAYER_HERO: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Side {
    TeamA,
    TeamB,
}

/// The team half a player row at `index` belongs to.
pub fn side_of_row(index: usize) -> Side {
    if index < TEAM_SIZE {
        Side::TeamA
    } else {
        Side::TeamB
    }
}

/// One fully parsed game.
///
/// Team, mode and hero names are lower-cased here, everything else keeps its
/// case as written in the sheet.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameRecord {
    pub team_a: String,
    pub team_b: String,
    /// `None` marks a draw.
    pub winner: Option<Side>,
    pub game_mode: String,
    pub map: String,
    pub round: i32,
    pub medals: Vec<MedalLine>,
    pub players: Vec<PlayerLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MedalLine {
    pub medal: String,
    pub gamertag: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerLine {
    pub gamertag: String,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub final_hits: i32,
    pub damage: i32,
    pub damage_blocked: i32,
    pub healing: i32,
    pub accuracy_pct: i32,
    pub hero: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("player rows starting on line {line} have no game header")]
    MissingHeader { line: usize },
    #[error("row on line {line} is missing the '{field}' column")]
    MissingField { field: &'static str, line: usize },
    #[error("expected {expected} player rows for the game on line {line}, found {found}")]
    PlayerCount {
        expected: usize,
        found: usize,
        line: usize,
    },
    #[error("invalid {field} value '{value}' on line {line}")]
    InvalidStat {
        field: &'static str,
        value: String,
        line: usize,
    },
    #[error("invalid round number '{value}' on line {line}")]
    InvalidRound { value: String, line: usize },
}

/// Builds the typed record for one game block.
pub fn build_record(block: RawBlock) -> Result<GameRecord, RecordError> {
    let header_line = block.first_line;
    let header = block.header.as_deref().ok_or(RecordError::MissingHeader {
        line: header_line,
    })?;

    let team_a = field(header, HEADER_TEAM_A, "team a", header_line)?.to_lowercase();
    let team_b = field(header, HEADER_TEAM_B, "team b", header_line)?.to_lowercase();
    let winner_name = field(header, HEADER_WINNER, "winning team", header_line)?.to_lowercase();
    let game_mode = field(header, HEADER_GAME_MODE, "game mode", header_line)?.to_lowercase();
    let map = field(header, HEADER_MAP, "map", header_line)?.to_owned();
    let raw_round = field(header, HEADER_ROUND, "round", header_line)?;
    let round: i32 = raw_round.parse().map_err(|_| RecordError::InvalidRound {
        value: raw_round.to_owned(),
        line: header_line,
    })?;

    // A winner that is neither of the two teams marks the game as a draw.
    let winner = if winner_name == team_a {
        Some(Side::TeamA)
    } else if winner_name == team_b {
        Some(Side::TeamB)
    } else {
        None
    };

    if block.player_rows.len() != PLAYERS_PER_GAME {
        return Err(RecordError::PlayerCount {
            expected: PLAYERS_PER_GAME,
            found: block.player_rows.len(),
            line: header_line,
        });
    }

    let mut medals = Vec::with_capacity(block.medal_rows.len());
    for (offset, row) in block.medal_rows.iter().enumerate() {
        let line = header_line + 1 + offset;
        medals.push(MedalLine {
            medal: field(row, MEDAL_NAME, "medal", line)?.to_owned(),
            gamertag: field(row, MEDAL_PLAYER, "medal gamertag", line)?.to_owned(),
        });
    }

    // Medal rows always sit between the header and the first player row.
    let first_player_line = header_line + 1 + block.medal_rows.len();

    let mut players = Vec::with_capacity(block.player_rows.len());
    for (offset, row) in block.player_rows.iter().enumerate() {
        let line = first_player_line + offset;
        players.push(PlayerLine {
            gamertag: field(row, PLAYER_NAME, "gamertag", line)?.to_owned(),
            kills: stat(row, PLAYER_KILLS, "kills", line)?,
            deaths: stat(row, PLAYER_DEATHS, "deaths", line)?,
            assists: stat(row, PLAYER_ASSISTS, "assists", line)?,
            final_hits: stat(row, PLAYER_FINAL_HITS, "final hits", line)?,
            damage: stat(row, PLAYER_DAMAGE, "damage", line)?,
            damage_blocked: stat(row, PLAYER_DAMAGE_BLOCKED, "damage blocked", line)?,
            healing: stat(row, PLAYER_HEALING, "healing", line)?,
            accuracy_pct: stat(row, PLAYER_ACCURACY, "accuracy", line)?,
            hero: field(row, PLAYER_HERO, "hero", line)?.to_lowercase(),
        });
    }

    Ok(GameRecord {
        team_a,
        team_b,
        winner,
        game_mode,
        map,
        round,
        medals,
        players,
    })
}

fn field<'r>(
    row: &'r [String],
    index: usize,
    name: &'static str,
    line: usize,
) -> Result<&'r str, RecordError> {
    row.get(index)
        .map(String::as_str)
        .ok_or(RecordError::MissingField { field: name, line })
}

fn stat(row: &[String], index: usize, name: &'static str, line: usize) -> Result<i32, RecordError> {
    let raw = field(row, index, name, line)?;
    raw.parse().map_err(|_| RecordError::InvalidStat {
        field: name,
        value: raw.to_owned(),
        line,
    })
}
