use super::error::{EntityApiErrorKind, Error};
use entity::sessions::{ActiveModel, Column, Entity, LeaderboardEntry, Model};
use entity::Id;
use sea_orm::{
    entity::prelude::*, ActiveValue::Set, ConnectionTrait, QueryOrder, QuerySelect,
    TransactionTrait,
};

use log::*;

/// Number of sessions shown on the leaderboard.
pub const LEADERBOARD_SIZE: u64 = 10;

/// Inserts a new session stamped with the current time. The id is assigned by the store.
pub async fn create(
    db: &impl ConnectionTrait,
    username: String,
    caught_butterflies: i32,
) -> Result<Model, Error> {
    debug!("New session to be inserted: username={username}, caught_butterflies={caught_butterflies}");

    let session_active_model = ActiveModel {
        username: Set(username),
        caught_butterflies: Set(caught_butterflies),
        session_dt: Set(chrono::Utc::now().into()),
        ..Default::default()
    };

    Ok(session_active_model.insert(db).await?)
}

/// Returns the `limit` best sessions, highest catch count first.
///
/// Equal counts are ordered by the earlier `session_dt`, then by the lower id.
pub async fn find_top(db: &impl ConnectionTrait, limit: u64) -> Result<Vec<LeaderboardEntry>, Error> {
    let entries = Entity::find()
        .select_only()
        .column(Column::Username)
        .column(Column::CaughtButterflies)
        .order_by_desc(Column::CaughtButterflies)
        .order_by_asc(Column::SessionDt)
        .order_by_asc(Column::Id)
        .limit(limit)
        .into_model::<LeaderboardEntry>()
        .all(db)
        .await?;

    Ok(entries)
}

/// Inserts a session and reads the refreshed leaderboard in one transaction.
///
/// Nothing is committed unless both statements succeed; on any early return the
/// transaction is dropped and rolled back, releasing its connection.
pub async fn create_and_rank(
    db: &impl TransactionTrait,
    username: String,
    caught_butterflies: i32,
    limit: u64,
) -> Result<(Model, Vec<LeaderboardEntry>), Error> {
    let txn = db.begin().await?;

    let session = create(&txn, username, caught_butterflies).await?;
    let leaderboard = find_top(&txn, limit).await?;

    txn.commit().await?;

    debug!("Saved session {} and ranked {} entries", session.id, leaderboard.len());

    Ok((session, leaderboard))
}

pub async fn find_by_id(db: &impl ConnectionTrait, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id).one(db).await?.ok_or_else(|| Error {
        source: None,
        error_kind: EntityApiErrorKind::RecordNotFound,
    })
}

pub async fn count(db: &impl ConnectionTrait) -> Result<u64, Error> {
    Ok(Entity::find().count(db).await?)
}

/// Checks that the store is reachable.
pub async fn ping(db: &DatabaseConnection) -> Result<(), Error> {
    Ok(db.ping().await?)
}
