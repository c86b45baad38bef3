use thiserror::Error;

use super::dto::{ComputedProfile, Profile};
use crate::storage::KeyValueStore;

pub const PROFILE_KEY: &str = "tara_profile";
pub const COMPUTED_KEY: &str = "tara_computed";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("stored value under '{key}' is malformed: {source}")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode value for '{key}': {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Persists the submitted profile and the last computed targets.
pub struct ProfileStore<'a, S: KeyValueStore + ?Sized> {
    kv: &'a mut S,
}

impl<'a, S: KeyValueStore + ?Sized> ProfileStore<'a, S> {
    pub fn new(kv: &'a mut S) -> Self {
        Self { kv }
    }

    pub fn save(&mut self, profile: &Profile) -> Result<(), StoreError> {
        let raw = serde_json::to_string(profile).map_err(|source| StoreError::Encode {
            key: PROFILE_KEY,
            source,
        })?;
        self.kv.set(PROFILE_KEY, raw);
        Ok(())
    }

    pub fn load(&self) -> Result<Option<Profile>, StoreError> {
        read(&*self.kv, PROFILE_KEY)
    }

    pub fn save_computed(&mut self, computed: &ComputedProfile) -> Result<(), StoreError> {
        let raw = serde_json::to_string(computed).map_err(|source| StoreError::Encode {
            key: COMPUTED_KEY,
            source,
        })?;
        self.kv.set(COMPUTED_KEY, raw);
        Ok(())
    }

    /// Cached targets, only when they were computed from `profile`.
    pub fn cached_for(&self, profile: &Profile) -> Option<ComputedProfile> {
        match read::<ComputedProfile, _>(&*self.kv, COMPUTED_KEY) {
            Ok(Some(c)) if c.request == *profile => Some(c),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.kv.remove(PROFILE_KEY);
        self.kv.remove(COMPUTED_KEY);
    }
}

fn read<T, S>(kv: &S, key: &'static str) -> Result<Option<T>, StoreError>
where
    T: serde::de::DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = kv.get(key) else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StoreError::Malformed { key, source })
}
