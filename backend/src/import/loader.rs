//! Materializes one parsed game into its relational rows.

use diesel_async::{AsyncPgConnection, RunQueryDsl};

use importer::record::{side_of_row, GameRecord, Side};

use super::{resolve, ImportError};

/// Writes one game, its twelve player rows and its medal rows.
///
/// Reference entities are resolved before the game row so their ids exist,
/// and the game row before the join rows that point at it. The first six
/// player rows belong to team A, the rest to team B. The caller owns the
/// transaction, nothing is committed here.
#[tracing::instrument(skip(conn, record), fields(round = record.round))]
pub async fn load_game(
    conn: &mut AsyncPgConnection,
    tournament_id: i32,
    record: &GameRecord,
) -> Result<i32, ImportError> {
    let team_a_id = resolve::team(conn, &record.team_a).await?;
    let team_b_id = resolve::team(conn, &record.team_b).await?;
    let game_mode_id = resolve::game_mode(conn, &record.game_mode).await?;
    let map_id = resolve::map(conn, &record.map).await?;

    let winning_team = record.winner.map(|side| match side {
        Side::TeamA => team_a_id,
        Side::TeamB => team_b_id,
    });

    let game_id: i32 = diesel::dsl::insert_into(crate::schema::games::dsl::games)
        .values(crate::models::NewGame {
            tournament_id,
            round: record.round,
            team_a_id,
            team_b_id,
            winning_team,
            is_draw: winning_team.is_none(),
            game_mode_id,
            map_id,
        })
        .returning(crate::schema::games::dsl::id)
        .get_result(conn)
        .await?;

    for (index, line) in record.players.iter().enumerate() {
        let player_id = resolve::player(conn, &line.gamertag).await?;
        let hero_id = resolve::hero(conn, &line.hero).await?;

        let team_id = match side_of_row(index) {
            Side::TeamA => team_a_id,
            Side::TeamB => team_b_id,
        };

        diesel::dsl::insert_into(crate::schema::game_players::dsl::game_players)
            .values(crate::models::GamePlayer {
                game_id,
                player_id,
                team_id,
                hero_id,
                kills: line.kills,
                deaths: line.deaths,
                assists: line.assists,
                final_hits: line.final_hits,
                damage: line.damage,
                damage_blocked: line.damage_blocked,
                healing: line.healing,
                accuracy_pct: line.accuracy_pct,
            })
            .execute(conn)
            .await?;
    }

    for medal_line in record.medals.iter() {
        let player_id = resolve::player(conn, &medal_line.gamertag).await?;
        let medal_id = resolve::medal(conn, &medal_line.medal).await?;

        diesel::dsl::insert_into(crate::schema::game_medals::dsl::game_medals)
            .values(crate::models::GameMedal {
                game_id,
                medal_id,
                player_id,
            })
            .execute(conn)
            .await?;
    }

    Ok(game_id)
}
