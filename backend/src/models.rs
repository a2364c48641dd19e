use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::tournaments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Tournament {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::tournaments)]
pub struct NewTournament<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::teams)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Team {
    pub id: i32,
    pub team_name: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::teams)]
pub struct NewTeam<'a> {
    pub team_name: &'a str,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::players)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Player {
    pub id: i32,
    pub gamertag: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::players)]
pub struct NewPlayer<'a> {
    pub gamertag: &'a str,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::hero_roles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct HeroRole {
    pub id: i32,
    pub role_name: String,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::heroes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Hero {
    pub id: i32,
    pub hero_name: String,
    pub hero_role_id: i32,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::game_modes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GameMode {
    pub id: i32,
    pub game_mode_name: String,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::maps)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Map {
    pub id: i32,
    pub map_name: String,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::medals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Medal {
    pub id: i32,
    pub medal_name: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::medals)]
pub struct NewMedal<'a> {
    pub medal_name: &'a str,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::games)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Game {
    pub id: i32,
    pub tournament_id: i32,
    pub round: i32,
    pub team_a_id: i32,
    pub team_b_id: i32,
    /// Id of the winning team, `None` when the game was a draw. Queries for
    /// draws should check `is_draw`, which is the source of truth.
    pub winning_team: Option<i32>,
    pub is_draw: bool,
    pub game_mode_id: i32,
    pub map_id: i32,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::games)]
pub struct NewGame {
    pub tournament_id: i32,
    pub round: i32,
    pub team_a_id: i32,
    pub team_b_id: i32,
    pub winning_team: Option<i32>,
    pub is_draw: bool,
    pub game_mode_id: i32,
    pub map_id: i32,
}

#[derive(Queryable, Selectable, Insertable, Debug)]
#[diesel(table_name = crate::schema::game_players)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GamePlayer {
    pub game_id: i32,
    pub player_id: i32,
    pub team_id: i32,
    pub hero_id: i32,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub final_hits: i32,
    pub damage: i32,
    pub damage_blocked: i32,
    pub healing: i32,
    pub accuracy_pct: i32,
}

#[derive(Queryable, Selectable, Insertable, Debug)]
#[diesel(table_name = crate::schema::game_medals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GameMedal {
    pub game_id: i32,
    pub medal_id: i32,
    pub player_id: i32,
}
