use anyhow::Result;

use roster_config::{CorsConfig, JwtConfig, StoreConfig};
use roster_store::UserStore;

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: UserStore,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(store: UserStore, jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            store,
            jwt_config,
            cors_config,
        }
    }
}

/// Builds the state from the process environment. The store starts empty.
pub fn init_app_state() -> Result<AppState> {
    let store_config = StoreConfig::from_env()?;

    Ok(AppState::new(
        UserStore::new(store_config.id_allocation),
        JwtConfig::from_env()?,
        CorsConfig::from_env(),
    ))
}
