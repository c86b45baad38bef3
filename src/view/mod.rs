pub mod page;
pub mod render;

pub use page::{LoadingGuard, LoadingIndicator, Page, ProfileStatus};
