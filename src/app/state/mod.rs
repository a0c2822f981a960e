//! Application State: zentrale Datenhaltung.

mod admin;
mod app_state;
mod site;
mod ui;

pub use admin::{AdminState, AdminTab, Draft};
pub use app_state::{AppState, ViewMode};
pub use site::{SitePage, SiteState};
pub use ui::UiState;
