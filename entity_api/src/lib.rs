use chrono::{Duration, Utc};
use log::info;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

pub use entity::{sessions, Id};

pub mod error;
pub mod session;

/// Sample players inserted by `seed_database`, as (username, caught_butterflies).
const SEED_SESSIONS: &[(&str, i32)] = &[
    ("Raven", 2),
    ("Auli", 12),
    ("Milo", 7),
    ("Juniper", 7),
    ("Sol", 0),
];

/// Populates the `sessions` table with a few sample plays, spaced one minute
/// apart so tie-breaking on `session_dt` is visible on the leaderboard.
pub async fn seed_database(db: &DatabaseConnection) -> Result<(), error::Error> {
    let start = Utc::now() - Duration::minutes(SEED_SESSIONS.len() as i64);

    for (offset, (username, caught_butterflies)) in SEED_SESSIONS.iter().enumerate() {
        let session_dt = start + Duration::minutes(offset as i64);

        let session = sessions::ActiveModel {
            username: Set((*username).to_owned()),
            caught_butterflies: Set(*caught_butterflies),
            session_dt: Set(session_dt.into()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!(
            "Seeded session {} for {} ({} caught)",
            session.id, session.username, session.caught_butterflies
        );
    }

    Ok(())
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn seed_database_inserts_every_sample_session() -> Result<(), error::Error> {
        let now = Utc::now();
        let rows = SEED_SESSIONS
            .iter()
            .enumerate()
            .map(|(i, (username, caught_butterflies))| {
                vec![sessions::Model {
                    id: i as Id + 1,
                    username: (*username).to_owned(),
                    caught_butterflies: *caught_butterflies,
                    session_dt: now.into(),
                }]
            });

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(rows)
            .into_connection();

        seed_database(&db).await?;

        assert_eq!(db.into_transaction_log().len(), SEED_SESSIONS.len());

        Ok(())
    }
}
