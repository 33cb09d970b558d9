use mongodb::Database;
use std::time::Instant;

use crate::config::AppConfig;
use crate::db::contacts::ContactStore;
use crate::db::portfolio::PortfolioStore;
use crate::db::visitors::VisitorStore;

/// Shared application state. Stores are constructed once in `main` and
/// injected here; handlers never reach for ambient globals.
pub struct AppState {
    pub db: Database,
    pub config: AppConfig,
    pub visitors: VisitorStore,
    pub contacts: ContactStore,
    pub portfolio: PortfolioStore,
    pub started_at: Instant,
}
