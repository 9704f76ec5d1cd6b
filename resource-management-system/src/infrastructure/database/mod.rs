pub mod model;
pub mod orm;
pub use orm::OrmRepo;

use sea_orm::{ConnectOptions, DatabaseConnection};

/// Owned database handle shared by every request-scoped repository.
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    pub async fn new(url: &str) -> anyhow::Result<Self> {
        let connection = sea_orm::Database::connect(ConnectOptions::new(url.to_string())).await?;
        Ok(Self { connection })
    }

    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.connection
    }
}
