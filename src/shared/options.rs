//! Zentrale Konfiguration für das Studio-Showcase.
//!
//! `ShowcaseOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use studio_arc_engine::ArcLayoutConfig;

// ── Listen ──────────────────────────────────────────────────────────

/// Projekte pro Portfolio-Seite.
pub const PORTFOLIO_PAGE_SIZE: usize = 6;
/// Posts pro Blog-Seite.
pub const BLOG_PAGE_SIZE: usize = 4;
/// Zeilen pro Admin-Tabellenseite.
pub const ADMIN_PAGE_SIZE: usize = 8;
/// Maximale Anzahl Seitenknöpfe in der Paginierung.
pub const PAGINATION_MAX_BUTTONS: usize = 5;

// ── Bogen-Sektion ──────────────────────────────────────────────────

/// Scroll-Strecke je Testimonial als Vielfaches der Viewport-Höhe.
pub const ARC_SCROLL_PER_ITEM: f32 = 0.8;
/// Stützstellen für die Darstellung der Bogenbahn.
pub const ARC_PATH_SEGMENTS: usize = 48;
/// Basis-Schriftgröße des Testimonial-Texts (px, bei Skalierung 1.0).
pub const ARC_TEXT_SIZE: f32 = 22.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Showcase-Optionen.
/// Wird als `studio_showcase.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowcaseOptions {
    // ── Listen ──────────────────────────────────────────────────
    /// Projekte pro Portfolio-Seite
    pub portfolio_page_size: usize,
    /// Posts pro Blog-Seite
    pub blog_page_size: usize,
    /// Zeilen pro Admin-Tabellenseite
    pub admin_page_size: usize,
    /// Maximale Seitenknöpfe
    #[serde(default = "default_pagination_max_buttons")]
    pub pagination_max_buttons: usize,

    // ── Bogen-Sektion ──────────────────────────────────────────
    /// Scroll-Strecke je Testimonial (Vielfaches der Viewport-Höhe)
    pub arc_scroll_per_item: f32,
    /// Basis-Schriftgröße des Testimonial-Texts
    pub arc_text_size: f32,
    /// Bogengeometrie (Breakpoints, Versätze, Scheitelhöhe)
    #[serde(default)]
    pub arc_layout: ArcLayoutConfig,
}

impl Default for ShowcaseOptions {
    fn default() -> Self {
        Self {
            portfolio_page_size: PORTFOLIO_PAGE_SIZE,
            blog_page_size: BLOG_PAGE_SIZE,
            admin_page_size: ADMIN_PAGE_SIZE,
            pagination_max_buttons: PAGINATION_MAX_BUTTONS,
            arc_scroll_per_item: ARC_SCROLL_PER_ITEM,
            arc_text_size: ARC_TEXT_SIZE,
            arc_layout: ArcLayoutConfig::default(),
        }
    }
}

/// Serde-Default für `pagination_max_buttons` (Abwärtskompatibilität).
fn default_pagination_max_buttons() -> usize {
    PAGINATION_MAX_BUTTONS
}

impl ShowcaseOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("studio_showcase"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("studio_showcase.toml")
    }

    /// Scroll-Höhe des Bogen-Containers für eine Viewport-Höhe.
    ///
    /// Mindestens eine Viewport-Höhe, damit auch ein einzelnes Element
    /// den vollen Bogen durchläuft.
    pub fn arc_container_height(&self, viewport_height: f32, item_count: usize) -> f32 {
        let per_item = self.arc_scroll_per_item.max(0.1);
        (viewport_height * per_item * item_count as f32).max(viewport_height)
    }
}
