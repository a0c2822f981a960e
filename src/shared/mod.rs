//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration, die von `app` und `ui` gleichermaßen gelesen wird.

pub mod options;

pub use options::ShowcaseOptions;
pub use options::{ARC_PATH_SEGMENTS, PAGINATION_MAX_BUTTONS};
