//! Studio-Showcase Library.
//! Inhalte, Bogen-Sektion und Dashboard als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState};
pub use core::{
    BlogPost, BlogSection, ContentStore, Founder, KeyValueStore, MemoryKeyValueStore, Project,
    Repository, Review, Subscriber, TeamMember,
};
pub use shared::ShowcaseOptions;
pub use studio_arc_engine as arc;
