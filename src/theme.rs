use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

pub const THEME_KEY: &str = "tara_theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Stored preference first, then the system preference, then light.
pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Theme {
    match stored.and_then(Theme::parse) {
        Some(theme) => theme,
        None if system_prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Resolves from storage and persists the outcome.
pub fn initialize<S: KeyValueStore + ?Sized>(kv: &mut S, system_prefers_dark: bool) -> Theme {
    let theme = resolve(kv.get(THEME_KEY).as_deref(), system_prefers_dark);
    kv.set(THEME_KEY, theme.as_str().into());
    theme
}

pub fn toggle<S: KeyValueStore + ?Sized>(kv: &mut S, current: Theme) -> Theme {
    let next = current.toggled();
    kv.set(THEME_KEY, next.as_str().into());
    next
}
