//! Core-Domänentypen: Inhalte, Repositories, Speicher, Gliederung, Seitenberechnung.

pub mod content;
pub mod content_store;
pub mod outline;
pub mod pagination;
/// Repository-Abstraktion
///
/// Ein Repository je Entitätsart (Blogs, Projekte, Team, Gründer, Reviews,
/// Abonnenten), zunächst In-Memory, später gegen eine Datenbank austauschbar.
pub mod repository;
pub mod seed;
pub mod storage;

pub use content::{
    is_valid_email, slugify, BlogPost, BlogSection, Entity, EntityId, Founder, Project, Review,
    Subscriber, TeamMember, ValidationIssue,
};
pub use content_store::{ContentSnapshot, ContentStore, LoadReport, LoadSource};
pub use pagination::Pagination;
pub use repository::{InMemoryRepository, Repository, RepositoryError};
pub use storage::{KeyValueStore, MemoryKeyValueStore, StorageError};
