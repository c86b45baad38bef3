use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::menu::{MenuForm, Recommendation};
use crate::profile::{ComputedProfile, ProfileForm};
use crate::theme::Theme;

pub const CONFIGURE_LABEL: &str = "Configurar";

/// Shared flag behind the loading spinner. Clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator {
    visible: Arc<AtomicBool>,
}

impl LoadingIndicator {
    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    /// Shows the indicator until the returned guard is dropped.
    #[must_use = "the indicator hides as soon as the guard is dropped"]
    pub fn show(&self) -> LoadingGuard {
        self.visible.store(true, Ordering::SeqCst);
        LoadingGuard {
            visible: Arc::clone(&self.visible),
        }
    }
}

pub struct LoadingGuard {
    visible: Arc<AtomicBool>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.visible.store(false, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProfileStatus {
    #[default]
    Unconfigured,
    Configured { label: String },
}

impl ProfileStatus {
    pub fn is_configured(&self) -> bool {
        matches!(self, ProfileStatus::Configured { .. })
    }

    pub fn label(&self) -> &str {
        match self {
            ProfileStatus::Unconfigured => CONFIGURE_LABEL,
            ProfileStatus::Configured { label } => label,
        }
    }
}

/// Everything the planner page shows. Session operations mutate it; the
/// renderer reads it.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub theme: Theme,
    pub profile_form: ProfileForm,
    pub stats: Option<ComputedProfile>,
    pub status: ProfileStatus,
    pub sidebar_open: bool,
    pub loading: LoadingIndicator,
    pub alerts: Vec<String>,
    pub menu_form: MenuForm,
    pub recommendation: Option<Recommendation>,
}

impl Page {
    pub fn show_profile(&mut self, computed: &ComputedProfile) {
        self.stats = Some(computed.clone());
        self.status = ProfileStatus::Configured {
            label: computed.status_label(),
        };
    }

    pub fn alert(&mut self, message: impl Into<String>) {
        self.alerts.push(message.into());
    }

    pub fn show_recommendation(&mut self, rec: Recommendation) {
        self.recommendation = Some(rec);
    }

    pub fn results_visible(&self) -> bool {
        self.recommendation.is_some()
    }
}
