use serde::Deserialize;
use utoipa::ToSchema;

/// Body of `POST /save-session`.
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct SaveParams {
    #[schema(example = "Raven")]
    pub(crate) username: String,
    #[schema(example = 2)]
    pub(crate) caught_butterflies: i32,
}
