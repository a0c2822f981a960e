use crate::core::{BlogPost, EntityId, Founder, Project, Review, TeamMember};

/// Reiter des Admin-Dashboards (je Entitätsart einer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Blogs,
    Projects,
    Team,
    Founders,
    Reviews,
    Subscribers,
}

impl AdminTab {
    /// Alle Reiter in Anzeigereihenfolge.
    pub const ALL: [AdminTab; 6] = [
        AdminTab::Blogs,
        AdminTab::Projects,
        AdminTab::Team,
        AdminTab::Founders,
        AdminTab::Reviews,
        AdminTab::Subscribers,
    ];

    /// Beschriftung im Dashboard.
    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Blogs => "Blog",
            AdminTab::Projects => "Projects",
            AdminTab::Team => "Team",
            AdminTab::Founders => "Founders",
            AdminTab::Reviews => "Reviews",
            AdminTab::Subscribers => "Subscribers",
        }
    }
}

/// Bearbeitungsentwurf im Formular. `id == 0` = neuer Eintrag.
#[derive(Debug, Clone, PartialEq)]
pub enum Draft {
    Blog(BlogPost),
    Project(Project),
    Team(TeamMember),
    Founder(Founder),
    Review(Review),
}

impl Draft {
    /// Ob der Entwurf einen neuen Eintrag beschreibt.
    pub fn is_new(&self) -> bool {
        self.id() == 0
    }

    /// ID des bearbeiteten Eintrags.
    pub fn id(&self) -> EntityId {
        match self {
            Draft::Blog(d) => d.id,
            Draft::Project(d) => d.id,
            Draft::Team(d) => d.id,
            Draft::Founder(d) => d.id,
            Draft::Review(d) => d.id,
        }
    }

    /// Reiter, zu dem der Entwurf gehört.
    pub fn tab(&self) -> AdminTab {
        match self {
            Draft::Blog(_) => AdminTab::Blogs,
            Draft::Project(_) => AdminTab::Projects,
            Draft::Team(_) => AdminTab::Team,
            Draft::Founder(_) => AdminTab::Founders,
            Draft::Review(_) => AdminTab::Reviews,
        }
    }
}

/// Zustand des Admin-Dashboards
#[derive(Default)]
pub struct AdminState {
    /// Aktiver Reiter
    pub tab: AdminTab,
    /// Aktuelle Tabellenseite (1-basiert)
    pub page: usize,
    /// Offener Bearbeitungsentwurf
    pub draft: Option<Draft>,
    /// Im Blog-Editor markierter Abschnitt
    pub selected_section: Option<usize>,
    /// Eingabefeld für manuell hinzugefügte Abonnenten
    pub subscriber_email: String,
}

impl AdminState {
    /// Erstellt den Standard-Dashboard-Zustand (Blog-Reiter, Seite 1).
    pub fn new() -> Self {
        Self {
            tab: AdminTab::Blogs,
            page: 1,
            draft: None,
            selected_section: None,
            subscriber_email: String::new(),
        }
    }

    /// Blog-Entwurf, falls einer offen ist.
    pub fn blog_draft_mut(&mut self) -> Option<&mut BlogPost> {
        match self.draft.as_mut() {
            Some(Draft::Blog(post)) => Some(post),
            _ => None,
        }
    }
}
