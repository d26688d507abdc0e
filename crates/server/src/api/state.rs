use sea_orm::DatabaseConnection;

/// Shared by every handler; the pool is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
