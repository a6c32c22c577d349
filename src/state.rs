use std::{path::PathBuf, sync::Arc};

use crate::db::{DbPool, OrmConn, create_orm_conn};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
    pub static_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(pool: DbPool, static_dir: impl Into<PathBuf>) -> Self {
        let orm = create_orm_conn(&pool);
        Self {
            pool,
            orm,
            static_dir: Arc::new(static_dir.into()),
        }
    }
}
