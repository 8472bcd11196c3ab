use crate::Error;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;

/// `Json<T>` whose rejection is rendered as the standard error envelope
/// rather than axum's plain-text rejection body.
pub(crate) struct JsonPayload<T>(pub(crate) T);

impl<S, T> FromRequest<S> for JsonPayload<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(Error::InvalidBody(rejection)),
        }
    }
}
