use crate::core::EntityId;
use studio_arc_engine::{ArcEngine, ContainerMeasurement, SliderState};

/// Seiten der Studio-Website
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SitePage {
    /// Startseite mit Bogen-Testimonials und Vorher/Nachher-Slider
    #[default]
    Home,
    /// Portfolio-Raster (paginiert)
    Portfolio,
    /// Projekt-Detailseite
    Project(EntityId),
    /// Blog-Liste (paginiert)
    Blog,
    /// Einzelner Blogpost mit nummerierten Abschnitten
    BlogPost(EntityId),
    /// Team und Gründer
    Studio,
}

/// Zustand der öffentlichen Website
pub struct SiteState {
    /// Aktuelle Seite
    pub page: SitePage,
    /// Bogen-Sektion der Startseite (nur gemountet, solange sie sichtbar ist)
    pub arc: Option<ArcEngine>,
    /// Vorher/Nachher-Slider (Startseite und Projektseiten)
    pub slider: SliderState,
    /// Viewport-Größe des Seiteninhalts in Pixel
    pub viewport_size: [f32; 2],
    /// Letzte Container-Messung der Bogen-Sektion (Startwert beim erneuten Mounten)
    pub last_arc_measurement: Option<ContainerMeasurement>,
    /// Aktuelle Portfolio-Seite (1-basiert)
    pub portfolio_page: usize,
    /// Aktuelle Blog-Seite (1-basiert)
    pub blog_page: usize,
    /// Eingabefeld der Newsletter-Anmeldung
    pub newsletter_email: String,
}

impl Default for SiteState {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteState {
    /// Erstellt den Start-Zustand (Startseite, nichts gemountet).
    pub fn new() -> Self {
        Self {
            page: SitePage::Home,
            arc: None,
            slider: SliderState::default(),
            viewport_size: [0.0, 0.0],
            last_arc_measurement: None,
            portfolio_page: 1,
            blog_page: 1,
            newsletter_email: String::new(),
        }
    }
}
