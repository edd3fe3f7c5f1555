use infra::db::Db;

/// Store-access handle shared by the router and the GraphQL schema.
///
/// Built once in `main` from an opened pool; the pool is closed explicitly
/// when the server shuts down.
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
}

impl AppState {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    pub async fn close(&self) {
        self.db.close().await;
    }
}
