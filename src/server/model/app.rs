use sea_orm::DatabaseConnection;

use crate::server::service::short_code::ShortCodeStrategy;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub short_code_strategy: ShortCodeStrategy,
    pub secure_proxy_ssl: bool,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        short_code_strategy: ShortCodeStrategy,
        secure_proxy_ssl: bool,
    ) -> Self {
        Self {
            db,
            short_code_strategy,
            secure_proxy_ssl,
        }
    }
}
