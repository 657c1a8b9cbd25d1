use sqlx::SqlitePool;

use crate::services::TodoService;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub todos: TodoService,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        let todos = TodoService::new(db.clone());
        Self { db, todos }
    }
}
