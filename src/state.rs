use std::sync::Arc;

use axum_extra::extract::cookie::CookieJar;

use crate::api::{HttpNutritionApi, NutritionApi};
use crate::config::AppConfig;
use crate::session::Session;
use crate::storage::CookieStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub api: Arc<dyn NutritionApi>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;
        Self::from_config(config)
    }

    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let api = Arc::new(HttpNutritionApi::new(&config.api)?) as Arc<dyn NutritionApi>;
        Ok(Self::from_parts(Arc::new(config), api))
    }

    pub fn from_parts(config: Arc<AppConfig>, api: Arc<dyn NutritionApi>) -> Self {
        Self { config, api }
    }

    /// A session whose storage is the visitor's cookie jar.
    pub fn session(&self, jar: CookieJar) -> Session<'_, CookieStore> {
        Session::new(
            self.api.as_ref(),
            CookieStore::new(jar, self.config.cookie_secure),
        )
    }
}
