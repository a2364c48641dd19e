pub mod tournaments {
    use axum::extract::Path;
    use diesel::prelude::*;
    use diesel_async::RunQueryDsl;

    pub fn router() -> axum::Router {
        axum::Router::new()
            .route("/", axum::routing::get(list).post(create))
            .route("/:id/games", axum::routing::get(games))
            .route(
                "/:id/results",
                axum::routing::post(upload_results)
                    .layer(axum::extract::DefaultBodyLimit::max(16 * 1024 * 1024)),
            )
    }

    #[tracing::instrument]
    async fn list()
    -> Result<axum::response::Json<Vec<common::TournamentSummary>>, axum::http::StatusCode> {
        let query = crate::schema::tournaments::dsl::tournaments
            .select(crate::models::Tournament::as_select())
            .order(crate::schema::tournaments::dsl::id.asc());

        let results: Vec<crate::models::Tournament> =
            match query.load(&mut crate::db_connection().await).await {
                Ok(r) => r,
                Err(e) => {
                    tracing::error!("Querying DB: {:?}", e);
                    return Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
                }
            };

        Ok(axum::response::Json(
            results
                .into_iter()
                .map(|tournament| common::TournamentSummary {
                    id: tournament.id,
                    title: tournament.title,
                    description: tournament.description,
                })
                .collect::<Vec<_>>(),
        ))
    }

    #[tracing::instrument]
    async fn create(
        axum::Json(request): axum::Json<common::CreateTournament>,
    ) -> Result<axum::response::Json<common::TournamentSummary>, axum::http::StatusCode> {
        let query = diesel::dsl::insert_into(crate::schema::tournaments::dsl::tournaments)
            .values(crate::models::NewTournament {
                title: &request.title,
                description: &request.description,
            })
            .returning(crate::models::Tournament::as_returning());

        let created: crate::models::Tournament =
            match query.get_result(&mut crate::db_connection().await).await {
                Ok(t) => t,
                Err(e) => {
                    tracing::error!("Creating tournament: {:?}", e);
                    return Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
                }
            };

        Ok(axum::response::Json(common::TournamentSummary {
            id: created.id,
            title: created.title,
            description: created.description,
        }))
    }

    #[tracing::instrument]
    async fn games(
        Path(tournament_id): Path<i32>,
    ) -> Result<axum::response::Json<Vec<common::GameSummary>>, axum::http::StatusCode> {
        let mut db_con = crate::db_connection().await;

        let query = crate::schema::games::dsl::games
            .filter(crate::schema::games::dsl::tournament_id.eq(tournament_id))
            .order(crate::schema::games::dsl::id.asc())
            .select(crate::models::Game::as_select());

        let game_rows: Vec<crate::models::Game> = match query.load(&mut db_con).await {
            Ok(g) => g,
            Err(e) => {
                tracing::error!("Querying DB: {:?}", e);
                return Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
            }
        };

        let mut summaries = Vec::with_capacity(game_rows.len());
        for game in game_rows {
            match game_summary(&mut db_con, game).await {
                Ok(summary) => summaries.push(summary),
                Err(e) => {
                    tracing::error!("Loading game references: {:?}", e);
                    return Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
                }
            }
        }

        Ok(axum::response::Json(summaries))
    }

    #[tracing::instrument(skip(form))]
    async fn upload_results(
        Path(tournament_id): Path<i32>,
        form: axum::extract::Multipart,
    ) -> Result<axum::response::Json<common::ImportReport>, (axum::http::StatusCode, String)>
    {
        tracing::info!("Result upload for tournament {:?}", tournament_id);

        let data = match crate::upload_field_bytes("results", form).await {
            Some(d) => d,
            None => {
                return Err((
                    axum::http::StatusCode::BAD_REQUEST,
                    "Missing 'results' file".to_owned(),
                ));
            }
        };

        let mut db_con = crate::db_connection().await;

        // Games can only be attached to a tournament that already exists.
        let known = crate::schema::tournaments::dsl::tournaments
            .filter(crate::schema::tournaments::dsl::id.eq(tournament_id))
            .select(crate::schema::tournaments::dsl::id)
            .first::<i32>(&mut db_con)
            .await
            .optional();
        match known {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Err((
                    axum::http::StatusCode::NOT_FOUND,
                    format!("Unknown tournament {}", tournament_id),
                ));
            }
            Err(e) => {
                tracing::error!("Querying DB: {:?}", e);
                return Err((
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage error".to_owned(),
                ));
            }
        }

        match crate::import::import_results(&mut db_con, tournament_id, &data).await {
            Ok(games_imported) => {
                Ok(axum::response::Json(common::ImportReport { games_imported }))
            }
            Err(crate::import::ImportError::Storage(e)) => {
                tracing::error!("Importing results: {:?}", e);
                Err((
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage error".to_owned(),
                ))
            }
            Err(e) => Err((axum::http::StatusCode::UNPROCESSABLE_ENTITY, e.to_string())),
        }
    }

    async fn game_summary(
        conn: &mut diesel_async::AsyncPgConnection,
        game: crate::models::Game,
    ) -> Result<common::GameSummary, diesel::result::Error> {
        let team_a = super::team_name(conn, game.team_a_id).await?;
        let team_b = super::team_name(conn, game.team_b_id).await?;
        let winner = match game.winning_team {
            Some(team_id) => Some(super::team_name(conn, team_id).await?),
            None => None,
        };

        let game_mode = crate::schema::game_modes::dsl::game_modes
            .filter(crate::schema::game_modes::dsl::id.eq(game.game_mode_id))
            .select(crate::schema::game_modes::dsl::game_mode_name)
            .first::<String>(conn)
            .await?;

        let map = crate::schema::maps::dsl::maps
            .filter(crate::schema::maps::dsl::id.eq(game.map_id))
            .select(crate::schema::maps::dsl::map_name)
            .first::<String>(conn)
            .await?;

        Ok(common::GameSummary {
            id: game.id,
            round: game.round,
            team_a,
            team_b,
            winner,
            is_draw: game.is_draw,
            game_mode,
            map,
        })
    }
}

pub mod games {
    use axum::extract::Path;
    use diesel::prelude::*;
    use diesel_async::RunQueryDsl;

    pub fn router() -> axum::Router {
        axum::Router::new().route("/:id/scoreboard", axum::routing::get(scoreboard))
    }

    #[tracing::instrument]
    async fn scoreboard(
        Path(game_id): Path<i32>,
    ) -> Result<axum::response::Json<common::match_stats::Scoreboard>, axum::http::StatusCode>
    {
        let mut db_con = crate::db_connection().await;

        let game: crate::models::Game = match crate::schema::games::dsl::games
            .filter(crate::schema::games::dsl::id.eq(game_id))
            .select(crate::models::Game::as_select())
            .first(&mut db_con)
            .await
            .optional()
        {
            Ok(Some(g)) => g,
            Ok(None) => return Err(axum::http::StatusCode::NOT_FOUND),
            Err(e) => {
                tracing::error!("Querying DB: {:?}", e);
                return Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
            }
        };

        let team_a_name = match super::team_name(&mut db_con, game.team_a_id).await {
            Ok(n) => n,
            Err(e) => {
                tracing::error!("Querying DB: {:?}", e);
                return Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
            }
        };
        let team_b_name = match super::team_name(&mut db_con, game.team_b_id).await {
            Ok(n) => n,
            Err(e) => {
                tracing::error!("Querying DB: {:?}", e);
                return Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
            }
        };

        let query = crate::schema::game_players::dsl::game_players
            .inner_join(crate::schema::players::dsl::players)
            .inner_join(crate::schema::heroes::dsl::heroes)
            .filter(crate::schema::game_players::dsl::game_id.eq(game_id))
            .select((
                crate::models::GamePlayer::as_select(),
                crate::models::Player::as_select(),
                crate::models::Hero::as_select(),
            ));

        let rows: Vec<(
            crate::models::GamePlayer,
            crate::models::Player,
            crate::models::Hero,
        )> = match query.load(&mut db_con).await {
            Ok(r) => r,
            Err(e) => {
                tracing::error!("Querying DB: {:?}", e);
                return Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
            }
        };

        let mut team_a_players = Vec::new();
        let mut team_b_players = Vec::new();
        for (game_player, player, hero) in rows {
            let entry = common::match_stats::ScoreboardPlayer {
                gamertag: player.gamertag,
                hero: hero.hero_name,
                kills: game_player.kills,
                deaths: game_player.deaths,
                assists: game_player.assists,
                final_hits: game_player.final_hits,
                damage: game_player.damage,
                damage_blocked: game_player.damage_blocked,
                healing: game_player.healing,
                accuracy_pct: game_player.accuracy_pct,
            };

            if game_player.team_id == game.team_a_id {
                team_a_players.push(entry);
            } else {
                team_b_players.push(entry);
            }
        }

        let medal_rows: Vec<(crate::models::Medal, crate::models::Player)> =
            match crate::schema::game_medals::dsl::game_medals
                .inner_join(crate::schema::medals::dsl::medals)
                .inner_join(crate::schema::players::dsl::players)
                .filter(crate::schema::game_medals::dsl::game_id.eq(game_id))
                .select((
                    crate::models::Medal::as_select(),
                    crate::models::Player::as_select(),
                ))
                .load(&mut db_con)
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    tracing::error!("Querying DB: {:?}", e);
                    return Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
                }
            };

        Ok(axum::response::Json(common::match_stats::Scoreboard {
            team_a: common::match_stats::TeamScoreboard {
                name: team_a_name,
                players: team_a_players,
            },
            team_b: common::match_stats::TeamScoreboard {
                name: team_b_name,
                players: team_b_players,
            },
            medals: medal_rows
                .into_iter()
                .map(|(medal, player)| common::match_stats::MedalAward {
                    medal: medal.medal_name,
                    gamertag: player.gamertag,
                })
                .collect::<Vec<_>>(),
        }))
    }
}

async fn team_name(
    conn: &mut diesel_async::AsyncPgConnection,
    team_id: i32,
) -> Result<String, diesel::result::Error> {
    use diesel::prelude::*;
    use diesel_async::RunQueryDsl;

    crate::schema::teams::dsl::teams
        .filter(crate::schema::teams::dsl::id.eq(team_id))
        .select(crate::schema::teams::dsl::team_name)
        .first(conn)
        .await
}

pub fn router() -> axum::Router {
    axum::Router::new()
        .nest("/tournaments/", tournaments::router())
        .nest("/games/", games::router())
}
