use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use super::NutritionApi;
use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::menu::dto::{AnalyzeRequest, AnalyzeResponse, Recommendation};
use crate::profile::dto::{Profile, ProfileTargets};

const PROFILE_PATH: &str = "/api/v1/profile";
const ANALYZE_PATH: &str = "/api/v1/analyze";

#[derive(Clone)]
pub struct HttpNutritionApi {
    http: Client,
    base_url: String,
}

impl HttpNutritionApi {
    pub fn new(cfg: &ApiConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .user_agent(concat!("tara-web/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl NutritionApi for HttpNutritionApi {
    #[instrument(skip(self, profile), fields(meals_per_day = profile.meals_per_day))]
    async fn compute_profile(&self, profile: &Profile) -> Result<ProfileTargets, ClientError> {
        let res = self.http.post(self.url(PROFILE_PATH)).json(profile).send().await?;
        let status = res.status();
        if !status.is_success() {
            warn!(%status, "profile computation rejected");
            return Err(ClientError::ProfileRequest {
                status: status.as_u16(),
            });
        }
        let targets: ProfileTargets = res
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        debug!(target_calories = targets.target_calories, "profile computed");
        Ok(targets)
    }

    #[instrument(skip(self, request), fields(meal_type = request.meal_type.as_str()))]
    async fn analyze_menu(&self, request: &AnalyzeRequest) -> Result<Recommendation, ClientError> {
        let res = self.http.post(self.url(ANALYZE_PATH)).json(request).send().await?;
        let status = res.status();
        if !status.is_success() {
            warn!(%status, "menu analysis rejected");
            return Err(ClientError::AnalyzeRequest {
                status: status.as_u16(),
            });
        }
        let body: AnalyzeResponse = res
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        debug!(choices = body.recommendation.escolhas.len(), "menu analysed");
        Ok(body.recommendation)
    }
}

#[cfg(test)]
mod client_tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = HttpNutritionApi::new(&ApiConfig {
            base_url: "http://api.local/".into(),
            timeout_secs: 1,
        })
        .unwrap();
        assert_eq!(api.url(PROFILE_PATH), "http://api.local/api/v1/profile");
        assert_eq!(api.url(ANALYZE_PATH), "http://api.local/api/v1/analyze");
    }
}
