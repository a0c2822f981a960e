//! Use-Cases der Application-Layer-Orchestrierung.

pub mod arc_section;
pub mod blog_editor;
pub mod content;
pub mod file_io;
pub mod navigation;
pub mod options;
