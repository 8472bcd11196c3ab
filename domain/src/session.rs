use crate::error::Error;
use crate::sessions::{LeaderboardEntry, Model};
use crate::{Id, LEADERBOARD_SIZE};
use entity_api::session;
use log::*;
use sea_orm::DatabaseConnection;

/// A newly stored session together with the leaderboard as it stands after the insert.
#[derive(Debug)]
pub struct SavedSession {
    pub session: Model,
    pub leaderboard: Vec<LeaderboardEntry>,
}

pub async fn leaderboard(db: &DatabaseConnection) -> Result<Vec<LeaderboardEntry>, Error> {
    Ok(session::find_top(db, LEADERBOARD_SIZE).await?)
}

/// Records a finished play. Input is taken as given: empty names, zero and
/// negative counts are all stored.
pub async fn save(
    db: &DatabaseConnection,
    username: String,
    caught_butterflies: i32,
) -> Result<SavedSession, Error> {
    let (session, leaderboard) =
        session::create_and_rank(db, username, caught_butterflies, LEADERBOARD_SIZE).await?;

    info!(
        "Saved session {} for {} ({} caught)",
        session.id, session.username, session.caught_butterflies
    );

    Ok(SavedSession {
        session,
        leaderboard,
    })
}

pub async fn find_by_id(db: &DatabaseConnection, id: Id) -> Result<Model, Error> {
    Ok(session::find_by_id(db, id).await?)
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, Error> {
    Ok(session::count(db).await?)
}
