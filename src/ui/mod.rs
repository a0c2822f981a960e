//! UI-Komponenten: Menü, Status-Bar, Website, Dashboard, Dialoge.

pub mod admin;
pub mod dialogs;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Menüs, Panels, Dialogs).
/// Jede Render-Funktion liest den State und gibt `AppIntent`s zurück.
pub mod menu;
pub mod options_dialog;
mod pagination;
pub mod site;
pub mod status;

pub use admin::render_admin;
pub use dialogs::{handle_file_dialogs, show_reset_confirm};
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use site::render_site;
pub use status::render_status_bar;
