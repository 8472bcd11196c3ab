use crate::error::Error;
use entity_api::session;
use sea_orm::DatabaseConnection;

/// Verifies the store accepts connections.
pub async fn check(db: &DatabaseConnection) -> Result<(), Error> {
    Ok(session::ping(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainErrorKind, ExternalErrorKind};

    #[tokio::test]
    async fn check_reports_unreachable_store_as_network_error() {
        let db = DatabaseConnection::Disconnected;

        let err = check(&db).await.unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::External(ExternalErrorKind::Network)
        );
    }
}
