use std::error::Error as StdError;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use domain::error::{
    DomainErrorKind, EntityErrorKind, Error as DomainError, ExternalErrorKind, InternalErrorKind,
};
use log::*;

use crate::response::ErrorResponse;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Failure raised below the web layer, usually by the store.
    Domain(DomainError),
    /// The request body was missing, not JSON, or did not match the expected shape.
    InvalidBody(JsonRejection),
}

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl Error {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            Error::InvalidBody(_) => (StatusCode::UNPROCESSABLE_ENTITY, "Invalid request body"),
            Error::Domain(domain_error) => match &domain_error.error_kind {
                DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::NotFound)) => {
                    (StatusCode::NOT_FOUND, "Not found")
                }
                DomainErrorKind::Internal(_)
                | DomainErrorKind::External(ExternalErrorKind::Network)
                | DomainErrorKind::External(ExternalErrorKind::Other(_)) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "Database error occurred")
                }
            },
        }
    }
}

// The underlying error is only logged; clients receive the fixed message.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            error!("Request failed with {status}: {self:?}");
        } else {
            warn!("Request rejected with {status}: {self:?}");
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl<E> From<E> for Error
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self::Domain(err.into())
    }
}
