use sea_orm::DatabaseConnection;

/// State shared with every request handler
///
/// The connection is a pool handle; each handler borrows it for the duration of its request.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
