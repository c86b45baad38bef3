pub mod dto;
pub mod form;
pub mod store;

pub use dto::{ActivityLevel, ComputedProfile, Profile, ProfileTargets, Sex};
pub use form::ProfileForm;
pub use store::{ProfileStore, StoreError};
