use crate::app::state::{AdminTab, SitePage, ViewMode};
use crate::core::EntityId;
use crate::shared::ShowcaseOptions;
use studio_arc_engine::ContainerMeasurement;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Zwischen Website und Dashboard wechseln
    ViewModeSelected { mode: ViewMode },
    /// Website-Seite öffnen
    NavigateRequested { page: SitePage },
    /// Viewport-Größe des Seiteninhalts hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Lage des Bogen-Containers gemessen (`None` = Container nicht im Layout)
    ArcContainerMeasured {
        measurement: Option<ContainerMeasurement>,
    },
    /// Vorher/Nachher-Trennlinie gezogen
    SliderDragged { percent: f32 },
    /// Portfolio-Seite wechseln
    PortfolioPageRequested { page: usize },
    /// Blog-Seite wechseln
    BlogPageRequested { page: usize },
    /// Newsletter-Anmeldung auf der Website
    NewsletterSubscribeRequested { email: String },

    /// Dashboard-Reiter wechseln
    AdminTabSelected { tab: AdminTab },
    /// Dashboard-Tabellenseite wechseln
    AdminPageRequested { page: usize },
    /// Neuen Eintrag im aktiven Reiter anlegen
    NewRecordRequested,
    /// Bestehenden Eintrag im aktiven Reiter bearbeiten
    EditRecordRequested { id: EntityId },
    /// Entwurf verwerfen
    DraftCancelled,
    /// Entwurf speichern (anlegen oder aktualisieren)
    DraftSaveRequested,
    /// Eintrag löschen
    DeleteRecordRequested { tab: AdminTab, id: EntityId },
    /// Abonnent im Dashboard hinzufügen
    SubscriberAddRequested { email: String },

    /// Blog-Editor: Abschnitt einfügen (hinter `after` oder am Ende)
    SectionAddRequested { after: Option<usize>, level: u8 },
    /// Blog-Editor: Abschnitt entfernen
    SectionRemoveRequested { index: usize },
    /// Blog-Editor: Abschnitt nach oben/unten verschieben
    SectionMoveRequested { index: usize, up: bool },
    /// Blog-Editor: Abschnitt ein-/ausrücken
    SectionIndentRequested { index: usize, delta: i8 },
    /// Blog-Editor: Abschnitt markieren
    SectionSelected { index: Option<usize> },

    /// Export-Dialog öffnen
    ExportRequested,
    /// Exportpfad wurde im Dialog gewählt
    ExportPathSelected { path: String },
    /// Import-Dialog öffnen
    ImportRequested,
    /// Importdatei wurde im Dialog gewählt
    ImportPathSelected { path: String },
    /// Zurücksetzen auf Beispieldaten anfragen (mit Rückfrage)
    ResetContentRequested,
    /// Zurücksetzen bestätigt
    ResetContentConfirmed,
    /// Zurücksetzen abgebrochen
    ResetContentCancelled,

    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden im Dialog geändert
    OptionsChanged { options: Box<ShowcaseOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Statusmeldung ausblenden
    StatusDismissed,
}
