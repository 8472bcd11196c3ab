use crate::Id;
use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One completed play session and its score.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, ToSchema, Serialize, Deserialize)]
#[schema(as = domain::sessions::Model)] // OpenAPI schema
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,
    pub username: String,
    pub caught_butterflies: i32,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)] // Applies to OpenAPI schema
    pub session_dt: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// The public projection of a session shown on the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, ToSchema, Serialize, Deserialize)]
#[schema(as = domain::sessions::LeaderboardEntry)]
pub struct LeaderboardEntry {
    pub username: String,
    pub caught_butterflies: i32,
}

impl From<Model> for LeaderboardEntry {
    fn from(model: Model) -> Self {
        Self {
            username: model.username,
            caught_butterflies: model.caught_butterflies,
        }
    }
}
