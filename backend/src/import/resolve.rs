//! Natural-key resolution of the reference vocabulary.
//!
//! Teams, players and medals are created the first time a sheet mentions
//! them. Heroes, game modes and maps are seeded by the migrations and only
//! ever looked up; an unknown name fails the import. All lookups run on the
//! import transaction, so entities created earlier in the same import are
//! visible here.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use super::ImportError;

pub async fn team(conn: &mut AsyncPgConnection, name: &str) -> Result<i32, ImportError> {
    let existing = crate::schema::teams::dsl::teams
        .filter(crate::schema::teams::dsl::team_name.eq(name))
        .select(crate::schema::teams::dsl::id)
        .first::<i32>(conn)
        .await
        .optional()?;

    match existing {
        Some(id) => Ok(id),
        None => {
            let id = diesel::dsl::insert_into(crate::schema::teams::dsl::teams)
                .values(crate::models::NewTeam { team_name: name })
                .returning(crate::schema::teams::dsl::id)
                .get_result(conn)
                .await?;
            tracing::debug!("Created team {:?}", name);
            Ok(id)
        }
    }
}

pub async fn player(conn: &mut AsyncPgConnection, gamertag: &str) -> Result<i32, ImportError> {
    let existing = crate::schema::players::dsl::players
        .filter(crate::schema::players::dsl::gamertag.eq(gamertag))
        .select(crate::schema::players::dsl::id)
        .first::<i32>(conn)
        .await
        .optional()?;

    match existing {
        Some(id) => Ok(id),
        None => {
            let id = diesel::dsl::insert_into(crate::schema::players::dsl::players)
                .values(crate::models::NewPlayer { gamertag })
                .returning(crate::schema::players::dsl::id)
                .get_result(conn)
                .await?;
            tracing::debug!("Created player {:?}", gamertag);
            Ok(id)
        }
    }
}

pub async fn medal(conn: &mut AsyncPgConnection, name: &str) -> Result<i32, ImportError> {
    let existing = crate::schema::medals::dsl::medals
        .filter(crate::schema::medals::dsl::medal_name.eq(name))
        .select(crate::schema::medals::dsl::id)
        .first::<i32>(conn)
        .await
        .optional()?;

    match existing {
        Some(id) => Ok(id),
        None => {
            let id = diesel::dsl::insert_into(crate::schema::medals::dsl::medals)
                .values(crate::models::NewMedal { medal_name: name })
                .returning(crate::schema::medals::dsl::id)
                .get_result(conn)
                .await?;
            tracing::debug!("Created medal {:?}", name);
            Ok(id)
        }
    }
}

pub async fn hero(conn: &mut AsyncPgConnection, name: &str) -> Result<i32, ImportError> {
    crate::schema::heroes::dsl::heroes
        .filter(crate::schema::heroes::dsl::hero_name.eq(name))
        .select(crate::schema::heroes::dsl::id)
        .first::<i32>(conn)
        .await
        .optional()?
        .ok_or_else(|| ImportError::UnknownHero(name.to_owned()))
}

pub async fn game_mode(conn: &mut AsyncPgConnection, name: &str) -> Result<i32, ImportError> {
    crate::schema::game_modes::dsl::game_modes
        .filter(crate::schema::game_modes::dsl::game_mode_name.eq(name))
        .select(crate::schema::game_modes::dsl::id)
        .first::<i32>(conn)
        .await
        .optional()?
        .ok_or_else(|| ImportError::UnknownGameMode(name.to_owned()))
}

pub async fn map(conn: &mut AsyncPgConnection, name: &str) -> Result<i32, ImportError> {
    crate::schema::maps::dsl::maps
        .filter(crate::schema::maps::dsl::map_name.eq(name))
        .select(crate::schema::maps::dsl::id)
        .first::<i32>(conn)
        .await
        .optional()?
        .ok_or_else(|| ImportError::UnknownMap(name.to_owned()))
}
