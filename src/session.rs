use tracing::{error, info, instrument, warn};

use crate::api::NutritionApi;
use crate::menu::{AnalyzeRequest, MenuForm};
use crate::profile::{ComputedProfile, Profile, ProfileForm, ProfileStore};
use crate::storage::KeyValueStore;
use crate::theme;
use crate::view::Page;

pub const CONFIGURE_FIRST: &str = "Configure seu perfil primeiro";

/// One visitor's planner state. Owns the page and the active computed
/// profile; every operation takes `&mut self`, so two requests can never
/// interleave on the same session.
pub struct Session<'a, S: KeyValueStore> {
    api: &'a dyn NutritionApi,
    store: S,
    current: Option<ComputedProfile>,
    page: Page,
}

impl<'a, S: KeyValueStore> Session<'a, S> {
    pub fn new(api: &'a dyn NutritionApi, store: S) -> Self {
        Self {
            api,
            store,
            current: None,
            page: Page::default(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn current(&self) -> Option<&ComputedProfile> {
        self.current.as_ref()
    }

    pub fn into_parts(self) -> (Page, S) {
        (self.page, self.store)
    }

    /// Page load: theme first, then the stored profile (form + stats).
    #[instrument(skip(self))]
    pub async fn initialize(&mut self, system_prefers_dark: bool) {
        self.restore_theme(system_prefers_dark);
        self.restore_profile().await;
    }

    pub fn restore_theme(&mut self, system_prefers_dark: bool) {
        self.page.theme = theme::initialize(&mut self.store, system_prefers_dark);
    }

    /// Refills the form from storage and activates the stored profile, from
    /// the cached targets when they still match, otherwise via the backend.
    pub async fn restore_profile(&mut self) {
        let stored = ProfileStore::new(&mut self.store).load();
        let profile = match stored {
            Ok(Some(p)) => p,
            Ok(None) => return,
            Err(e) => {
                warn!(error = %e, "discarding unreadable stored profile");
                ProfileStore::new(&mut self.store).clear();
                return;
            }
        };

        self.page.profile_form = ProfileForm::from_profile(&profile);
        let cached = ProfileStore::new(&mut self.store).cached_for(&profile);
        if let Some(cached) = cached {
            info!(target_calories = cached.targets.target_calories, "using cached profile targets");
            self.activate(cached);
            return;
        }
        if self.compute_and_display(profile).await {
            self.cache_current();
        }
    }

    pub fn toggle_theme(&mut self) {
        self.page.theme = theme::toggle(&mut self.store, self.page.theme);
    }

    /// Sends the profile to the backend and, on success, makes the result the
    /// active computed profile. Failures are logged and reported as `false`.
    #[instrument(skip(self, profile))]
    pub async fn compute_and_display(&mut self, profile: Profile) -> bool {
        match self.api.compute_profile(&profile).await {
            Ok(targets) => {
                self.activate(ComputedProfile::new(targets, profile));
                true
            }
            Err(e) => {
                error!(error = %e, "profile computation failed");
                false
            }
        }
    }

    fn cache_current(&mut self) {
        let Some(computed) = &self.current else {
            return;
        };
        if let Err(e) = ProfileStore::new(&mut self.store).save_computed(computed) {
            error!(error = %e, "could not cache computed profile");
        }
    }

    fn activate(&mut self, computed: ComputedProfile) {
        self.page.show_profile(&computed);
        self.current = Some(computed);
    }

    #[instrument(skip(self, form))]
    pub async fn submit_profile(&mut self, form: ProfileForm) -> bool {
        self.page.profile_form = form.clone();
        let profile = match form.to_profile() {
            Ok(p) => p,
            Err(e) => {
                warn!(error = %e, "profile form rejected");
                self.page.sidebar_open = true;
                return false;
            }
        };

        if !self.compute_and_display(profile.clone()).await {
            self.page.sidebar_open = true;
            return false;
        }

        if let Err(e) = ProfileStore::new(&mut self.store).save(&profile) {
            error!(error = %e, "could not persist profile");
        }
        self.cache_current();
        self.page.sidebar_open = false;
        info!("profile saved");
        true
    }

    #[instrument(skip(self, form), fields(meal_type = form.meal().as_str()))]
    pub async fn submit_menu(&mut self, form: MenuForm) {
        self.page.menu_form = form.clone();
        let meal_type = form.meal();

        let Some(current) = &self.current else {
            self.page.sidebar_open = true;
            self.page.alert(CONFIGURE_FIRST);
            return;
        };

        let request = AnalyzeRequest {
            profile: current.request.clone(),
            menu_text: form.menu,
            meal_type,
        };

        let _loading = self.page.loading.show();
        match self.api.analyze_menu(&request).await {
            Ok(rec) => {
                info!(choices = rec.escolhas.len(), "recommendation received");
                self.page.show_recommendation(rec);
            }
            Err(e) => {
                warn!(error = %e, "menu analysis failed");
                self.page.alert(e.to_string());
            }
        }
    }
}
