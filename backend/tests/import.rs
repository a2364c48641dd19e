//! Pipeline tests against a real database.
//!
//! These need a reachable postgres instance via `DATABASE_URL` and are
//! therefore ignored by default: `cargo test -p backend -- --ignored`.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pretty_assertions::assert_eq;

use backend::import::{self, ImportError};

const MIGRATIONS: diesel_async_migrations::EmbeddedMigrations =
    diesel_async_migrations::embed_migrations!("../migrations/");

async fn connection() -> diesel_async::AsyncPgConnection {
    let mut conn = backend::db_connection().await;
    MIGRATIONS.run_pending_migrations(&mut conn).await.unwrap();
    conn
}

async fn create_tournament(conn: &mut diesel_async::AsyncPgConnection, title: &str) -> i32 {
    diesel::dsl::insert_into(backend::schema::tournaments::dsl::tournaments)
        .values(backend::models::NewTournament {
            title,
            description: "pipeline test",
        })
        .returning(backend::schema::tournaments::dsl::id)
        .get_result(conn)
        .await
        .unwrap()
}

async fn tournament_games(
    conn: &mut diesel_async::AsyncPgConnection,
    tournament_id: i32,
) -> Vec<backend::models::Game> {
    backend::schema::games::dsl::games
        .filter(backend::schema::games::dsl::tournament_id.eq(tournament_id))
        .order(backend::schema::games::dsl::id.asc())
        .select(backend::models::Game::as_select())
        .load(conn)
        .await
        .unwrap()
}

async fn team_id(conn: &mut diesel_async::AsyncPgConnection, name: &str) -> Option<i32> {
    backend::schema::teams::dsl::teams
        .filter(backend::schema::teams::dsl::team_name.eq(name))
        .select(backend::schema::teams::dsl::id)
        .first::<i32>(conn)
        .await
        .optional()
        .unwrap()
}

/// One complete game block. The twelve rostered players are named
/// `<tag>-a0..a5` and `<tag>-b6..b11`.
fn game_block(
    team_a: &str,
    team_b: &str,
    winner: &str,
    mode: &str,
    map: &str,
    round: i32,
    tag: &str,
) -> String {
    let heroes = [
        "Hulk", "Thor", "Venom", "Groot", "Magneto", "Storm", "Hela", "Loki", "Mantis",
        "Psylocke", "Namor", "Wolverine",
    ];

    let mut out = format!(
        ",{},{},{},{},{},{},,,\n",
        team_a, team_b, winner, mode, map, round
    );
    out.push_str(&format!(",MVP,{}-a0,,,,,,,\n", tag));
    for (i, hero) in heroes.iter().enumerate() {
        let side = if i < 6 { "a" } else { "b" };
        out.push_str(&format!(
            "{}-{}{},{},2,3,4,500,60,70,50,{}\n",
            tag,
            side,
            i,
            i + 1,
            hero
        ));
    }
    out
}

#[tokio::test]
#[ignore = "needs a postgres database via DATABASE_URL"]
async fn imports_a_sheet_and_splits_the_teams() {
    let mut conn = connection().await;
    let tournament_id = create_tournament(&mut conn, "import roundtrip").await;

    let sheet = format!(
        "{}{}",
        game_block("Kings", "Rooks", "Kings", "domination", "Krakoa", 1, "rt1"),
        game_block("Kings", "Rooks", "Rooks", "convoy", "Midtown", 2, "rt2"),
    );

    let imported = import::import_results(&mut conn, tournament_id, sheet.as_bytes())
        .await
        .unwrap();
    assert_eq!(2, imported);

    let games = tournament_games(&mut conn, tournament_id).await;
    assert_eq!(2, games.len());

    let kings = team_id(&mut conn, "kings").await.unwrap();
    let rooks = team_id(&mut conn, "rooks").await.unwrap();

    let first = &games[0];
    assert_eq!(1, first.round);
    assert_eq!(kings, first.team_a_id);
    assert_eq!(rooks, first.team_b_id);
    assert_eq!(Some(kings), first.winning_team);
    assert!(!first.is_draw);

    let second = &games[1];
    assert_eq!(Some(rooks), second.winning_team);

    // Position decides the team: the first six rows went to team A.
    let rows: Vec<(backend::models::GamePlayer, backend::models::Player)> =
        backend::schema::game_players::dsl::game_players
            .inner_join(backend::schema::players::dsl::players)
            .filter(backend::schema::game_players::dsl::game_id.eq(first.id))
            .select((
                backend::models::GamePlayer::as_select(),
                backend::models::Player::as_select(),
            ))
            .load(&mut conn)
            .await
            .unwrap();
    assert_eq!(12, rows.len());
    for (game_player, player) in rows {
        let expected = if player.gamertag.contains("-a") {
            kings
        } else {
            rooks
        };
        assert_eq!(expected, game_player.team_id, "for {}", player.gamertag);
    }

    let medal_count: i64 = backend::schema::game_medals::dsl::game_medals
        .filter(backend::schema::game_medals::dsl::game_id.eq(first.id))
        .count()
        .get_result(&mut conn)
        .await
        .unwrap();
    assert_eq!(1, medal_count);
}

#[tokio::test]
#[ignore = "needs a postgres database via DATABASE_URL"]
async fn unknown_winner_becomes_a_draw() {
    let mut conn = connection().await;
    let tournament_id = create_tournament(&mut conn, "draw handling").await;

    let sheet = game_block("Pawns", "Bishops", "Knights", "domination", "Krakoa", 1, "dr1");

    import::import_results(&mut conn, tournament_id, sheet.as_bytes())
        .await
        .unwrap();

    let games = tournament_games(&mut conn, tournament_id).await;
    assert_eq!(1, games.len());
    assert_eq!(None, games[0].winning_team);
    assert!(games[0].is_draw);
}

#[tokio::test]
#[ignore = "needs a postgres database via DATABASE_URL"]
async fn reference_entities_are_created_once() {
    let mut conn = connection().await;
    let tournament_id = create_tournament(&mut conn, "reference reuse").await;

    let first = game_block("Dukes", "Earls", "Dukes", "domination", "Krakoa", 1, "ref1");
    import::import_results(&mut conn, tournament_id, first.as_bytes())
        .await
        .unwrap();
    let dukes = team_id(&mut conn, "dukes").await.unwrap();

    // Different casing in the second sheet, same players and teams.
    let second = game_block("DUKES", "EARLS", "EARLS", "convoy", "Midtown", 2, "ref1");
    import::import_results(&mut conn, tournament_id, second.as_bytes())
        .await
        .unwrap();

    assert_eq!(Some(dukes), team_id(&mut conn, "dukes").await);

    let duke_count: i64 = backend::schema::teams::dsl::teams
        .filter(backend::schema::teams::dsl::team_name.ilike("dukes"))
        .count()
        .get_result(&mut conn)
        .await
        .unwrap();
    assert_eq!(1, duke_count);

    let player_count: i64 = backend::schema::players::dsl::players
        .filter(backend::schema::players::dsl::gamertag.eq("ref1-a0"))
        .count()
        .get_result(&mut conn)
        .await
        .unwrap();
    assert_eq!(1, player_count);
}

#[tokio::test]
#[ignore = "needs a postgres database via DATABASE_URL"]
async fn unknown_hero_rolls_back_the_whole_sheet() {
    let mut conn = connection().await;
    let tournament_id = create_tournament(&mut conn, "atomic rollback").await;

    let valid = game_block("Atoms", "Quarks", "Atoms", "domination", "Krakoa", 1, "at1");
    let broken = game_block("Atoms", "Quarks", "Quarks", "convoy", "Midtown", 2, "at2")
        .replace("Wolverine", "Dazzler");
    let sheet = format!("{}{}", valid, broken);

    let result = import::import_results(&mut conn, tournament_id, sheet.as_bytes()).await;

    match result {
        Err(ImportError::UnknownHero(name)) => assert_eq!("dazzler", name),
        other => panic!("expected an unknown hero error, got {:?}", other),
    }

    // The valid first game must not survive the failed import.
    assert_eq!(0, tournament_games(&mut conn, tournament_id).await.len());
    assert_eq!(None, team_id(&mut conn, "atoms").await);
}

#[tokio::test]
#[ignore = "needs a postgres database via DATABASE_URL"]
async fn unknown_game_mode_fails_the_import() {
    let mut conn = connection().await;
    let tournament_id = create_tournament(&mut conn, "mode check").await;

    let sheet = game_block("Reds", "Blues", "Reds", "payload", "Krakoa", 1, "md1");

    let result = import::import_results(&mut conn, tournament_id, sheet.as_bytes()).await;

    match result {
        Err(ImportError::UnknownGameMode(name)) => assert_eq!("payload", name),
        other => panic!("expected an unknown game mode error, got {:?}", other),
    }
    assert_eq!(0, tournament_games(&mut conn, tournament_id).await.len());
}
