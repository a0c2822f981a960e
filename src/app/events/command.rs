use crate::app::state::{AdminTab, SitePage, ViewMode};
use crate::core::EntityId;
use crate::shared::ShowcaseOptions;
use studio_arc_engine::ContainerMeasurement;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Anwendung beenden
    RequestExit,
    /// Ansicht setzen
    SetViewMode { mode: ViewMode },
    /// Website-Seite setzen
    Navigate { page: SitePage },
    /// Bogen-Sektion mounten (nur auf der Startseite wirksam)
    MountArcSection,
    /// Bogen-Sektion lösen
    UnmountArcSection,
    /// Viewport-Größe setzen und Kontrollpunkte neu berechnen
    ResizeViewport { size: [f32; 2] },
    /// Scroll-Fortschritt der Bogen-Sektion aktualisieren
    UpdateArcScroll {
        measurement: Option<ContainerMeasurement>,
    },
    /// Elementanzahl der Bogen-Sektion an die Reviews angleichen
    SyncArcItemCount,
    /// Slider-Position setzen
    SetSliderPercent { percent: f32 },
    /// Portfolio-Seite setzen
    SetPortfolioPage { page: usize },
    /// Blog-Seite setzen
    SetBlogPage { page: usize },
    /// E-Mail-Adresse als Abonnent eintragen
    Subscribe { email: String },
    /// Newsletter-Eingabefeld leeren
    ClearNewsletterInput,

    /// Dashboard-Reiter setzen
    SetAdminTab { tab: AdminTab },
    /// Dashboard-Tabellenseite setzen
    SetAdminPage { page: usize },
    /// Leeren Entwurf für den aktiven Reiter öffnen
    BeginNewDraft,
    /// Entwurf aus bestehendem Eintrag öffnen
    BeginEditDraft { id: EntityId },
    /// Entwurf verwerfen
    DiscardDraft,
    /// Entwurf ins Repository schreiben
    CommitDraft,
    /// Eintrag löschen
    DeleteRecord { tab: AdminTab, id: EntityId },

    /// Blog-Abschnitt einfügen
    AddSection { after: Option<usize>, level: u8 },
    /// Blog-Abschnitt entfernen
    RemoveSection { index: usize },
    /// Blog-Abschnitt verschieben
    MoveSection { index: usize, up: bool },
    /// Blog-Abschnitt ein-/ausrücken
    ShiftSectionLevel { index: usize, delta: i8 },
    /// Blog-Abschnitt markieren
    SelectSection { index: Option<usize> },

    /// Export-Dialog anfordern
    RequestExportDialog,
    /// Import-Dialog anfordern
    RequestImportDialog,
    /// Inhalte als JSON exportieren
    ExportContent { path: String },
    /// Inhalte aus JSON importieren
    ImportContent { path: String },
    /// Rückfrage zum Zurücksetzen anzeigen
    ShowResetConfirm,
    /// Rückfrage zum Zurücksetzen schließen
    HideResetConfirm,
    /// Inhalte auf Beispieldaten zurücksetzen
    ResetContent,

    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: Box<ShowcaseOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Statusmeldung löschen
    ClearStatus,
}
