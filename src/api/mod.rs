mod client;

pub use client::HttpNutritionApi;

use async_trait::async_trait;

use crate::error::ClientError;
use crate::menu::dto::{AnalyzeRequest, Recommendation};
use crate::profile::dto::{Profile, ProfileTargets};

/// The remote nutrition service. All nutrition math lives behind it.
#[async_trait]
pub trait NutritionApi: Send + Sync {
    async fn compute_profile(&self, profile: &Profile) -> Result<ProfileTargets, ClientError>;
    async fn analyze_menu(&self, request: &AnalyzeRequest) -> Result<Recommendation, ClientError>;
}
