//! Inhaltstypen des Studios: Blog, Projekte, Team, Gründer, Reviews, Abonnenten.

use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::outline::{self, MAX_SECTION_LEVEL};

/// Eindeutige ID innerhalb einer Entitätsart.
pub type EntityId = u64;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("E-Mail-Regex ist gültig")
});

static SLUG_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("Slug-Regex ist gültig"));

/// Prüft die E-Mail-Syntax (kein Zustellbarkeits-Check).
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// Erzeugt einen URL-Slug: Kleinbuchstaben, Trennzeichen-Läufe → `-`.
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    SLUG_SEPARATOR_RE
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

/// Verletzte Feldregel einer Entität.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationIssue> {
    if value.trim().is_empty() {
        Err(ValidationIssue::new(field, "darf nicht leer sein"))
    } else {
        Ok(())
    }
}

/// Gemeinsamer Vertrag aller speicherbaren Inhaltstypen.
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// Schlüssel im Key-Value-Store
    const STORAGE_KEY: &'static str;
    /// Anzeigename der Entitätsart
    const KIND_LABEL: &'static str;

    fn id(&self) -> EntityId;
    fn set_id(&mut self, id: EntityId);
    /// Kurzbezeichnung für Listen und Statusmeldungen
    fn label(&self) -> String;

    /// Feldregeln. Standard: keine.
    fn validate(&self) -> Result<(), ValidationIssue> {
        Ok(())
    }
}

// ── Blog ────────────────────────────────────────────────────────────

/// Abschnitt eines Blogposts mit automatisch vergebener Gliederungsnummer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlogSection {
    /// Gliederungsebene 1..=3
    pub level: u8,
    pub heading: String,
    /// Berechnet durch `outline::renumber`, z.B. "2.1"
    #[serde(default)]
    pub number: String,
    pub body: String,
}

impl BlogSection {
    pub fn new(level: u8, heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level,
            heading: heading.into(),
            number: String::new(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlogPost {
    pub id: EntityId,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub author: String,
    pub category: String,
    /// ISO-Datum (YYYY-MM-DD)
    pub published_on: String,
    pub cover_image: String,
    #[serde(default)]
    pub sections: Vec<BlogSection>,
}

impl BlogPost {
    /// Leerer Entwurf für den Editor.
    pub fn draft() -> Self {
        Self {
            id: 0,
            title: String::new(),
            slug: String::new(),
            excerpt: String::new(),
            author: String::new(),
            category: String::new(),
            published_on: String::new(),
            cover_image: String::new(),
            sections: vec![BlogSection::new(1, "", "")],
        }
    }

    /// Vergibt Slug (falls leer) und Gliederungsnummern neu.
    pub fn normalize(&mut self) {
        if self.slug.trim().is_empty() {
            self.slug = slugify(&self.title);
        }
        outline::renumber(&mut self.sections);
    }
}

impl Entity for BlogPost {
    const STORAGE_KEY: &'static str = "studio.blogs";
    const KIND_LABEL: &'static str = "Blogpost";

    fn id(&self) -> EntityId {
        self.id
    }
    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
    fn label(&self) -> String {
        self.title.clone()
    }

    fn validate(&self) -> Result<(), ValidationIssue> {
        require("title", &self.title)?;
        require("author", &self.author)?;
        if let Some(section) = self
            .sections
            .iter()
            .find(|s| s.level == 0 || s.level > MAX_SECTION_LEVEL)
        {
            return Err(ValidationIssue::new(
                "sections",
                format!("Ebene {} außerhalb 1..=3", section.level),
            ));
        }
        Ok(())
    }
}

// ── Projekte ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: EntityId,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub location: String,
    pub year: u16,
    pub summary: String,
    pub cover_image: String,
    /// Bildpaar für den Vorher/Nachher-Slider
    #[serde(default)]
    pub before_image: Option<String>,
    #[serde(default)]
    pub after_image: Option<String>,
}

impl Project {
    pub fn draft() -> Self {
        Self {
            id: 0,
            title: String::new(),
            slug: String::new(),
            category: String::new(),
            location: String::new(),
            year: 2024,
            summary: String::new(),
            cover_image: String::new(),
            before_image: None,
            after_image: None,
        }
    }

    /// Ob ein Vorher/Nachher-Vergleich angezeigt werden kann.
    pub fn has_comparison(&self) -> bool {
        self.before_image.is_some() && self.after_image.is_some()
    }
}

impl Entity for Project {
    const STORAGE_KEY: &'static str = "studio.projects";
    const KIND_LABEL: &'static str = "Projekt";

    fn id(&self) -> EntityId {
        self.id
    }
    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
    fn label(&self) -> String {
        self.title.clone()
    }

    fn validate(&self) -> Result<(), ValidationIssue> {
        require("title", &self.title)?;
        require("category", &self.category)
    }
}

// ── Team & Gründer ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamMember {
    pub id: EntityId,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub photo: String,
}

impl TeamMember {
    pub fn draft() -> Self {
        Self {
            id: 0,
            name: String::new(),
            role: String::new(),
            bio: String::new(),
            photo: String::new(),
        }
    }
}

impl Entity for TeamMember {
    const STORAGE_KEY: &'static str = "studio.team";
    const KIND_LABEL: &'static str = "Teammitglied";

    fn id(&self) -> EntityId {
        self.id
    }
    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
    fn label(&self) -> String {
        self.name.clone()
    }

    fn validate(&self) -> Result<(), ValidationIssue> {
        require("name", &self.name)?;
        require("role", &self.role)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Founder {
    pub id: EntityId,
    pub name: String,
    pub title: String,
    pub quote: String,
    pub photo: String,
}

impl Founder {
    pub fn draft() -> Self {
        Self {
            id: 0,
            name: String::new(),
            title: String::new(),
            quote: String::new(),
            photo: String::new(),
        }
    }
}

impl Entity for Founder {
    const STORAGE_KEY: &'static str = "studio.founders";
    const KIND_LABEL: &'static str = "Gründer";

    fn id(&self) -> EntityId {
        self.id
    }
    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
    fn label(&self) -> String {
        self.name.clone()
    }

    fn validate(&self) -> Result<(), ValidationIssue> {
        require("name", &self.name)
    }
}

// ── Reviews ─────────────────────────────────────────────────────────

/// Kundenstimme; speist die Bogen-Sektion (ein Element je Review).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: EntityId,
    pub author: String,
    pub company: String,
    /// Sterne 1..=5
    pub rating: u8,
    pub text: String,
}

impl Review {
    pub const MAX_RATING: u8 = 5;

    pub fn draft() -> Self {
        Self {
            id: 0,
            author: String::new(),
            company: String::new(),
            rating: Self::MAX_RATING,
            text: String::new(),
        }
    }
}

impl Entity for Review {
    const STORAGE_KEY: &'static str = "studio.reviews";
    const KIND_LABEL: &'static str = "Review";

    fn id(&self) -> EntityId {
        self.id
    }
    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
    fn label(&self) -> String {
        self.author.clone()
    }

    fn validate(&self) -> Result<(), ValidationIssue> {
        require("author", &self.author)?;
        require("text", &self.text)?;
        if !(1..=Self::MAX_RATING).contains(&self.rating) {
            return Err(ValidationIssue::new(
                "rating",
                format!("{} außerhalb 1..=5", self.rating),
            ));
        }
        Ok(())
    }
}

// ── Abonnenten ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subscriber {
    pub id: EntityId,
    pub email: String,
    /// Unix-Sekunden
    pub subscribed_at: u64,
}

impl Entity for Subscriber {
    const STORAGE_KEY: &'static str = "studio.subscribers";
    const KIND_LABEL: &'static str = "Abonnent";

    fn id(&self) -> EntityId {
        self.id
    }
    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
    fn label(&self) -> String {
        self.email.clone()
    }

    fn validate(&self) -> Result<(), ValidationIssue> {
        if is_valid_email(&self.email) {
            Ok(())
        } else {
            Err(ValidationIssue::new(
                "email",
                format!("'{}' ist keine gültige Adresse", self.email),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Casa Lumen — Lisbon 2023"), "casa-lumen-lisbon-2023");
        assert_eq!(slugify("  Light & Form  "), "light-form");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("hello@studio.design"));
        assert!(is_valid_email(" a.b+news@mail.co.uk "));
        assert!(!is_valid_email("hello@studio"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("two@@signs.com"));
    }

    #[test]
    fn test_review_rating_range() {
        let mut review = Review::draft();
        review.author = "Ana".into();
        review.text = "Great".into();
        assert!(review.validate().is_ok());

        review.rating = 0;
        assert_eq!(review.validate().unwrap_err().field, "rating");
        review.rating = 6;
        assert!(review.validate().is_err());
    }

    #[test]
    fn test_blog_post_rejects_bad_section_level() {
        let mut post = BlogPost::draft();
        post.title = "T".into();
        post.author = "A".into();
        post.sections.push(BlogSection::new(4, "Zu tief", ""));
        assert_eq!(post.validate().unwrap_err().field, "sections");
    }

    #[test]
    fn test_blog_post_normalize_fills_slug_and_numbers() {
        let mut post = BlogPost::draft();
        post.title = "Designing With Daylight".into();
        post.sections = vec![
            BlogSection::new(1, "Intro", ""),
            BlogSection::new(2, "Context", ""),
        ];
        post.normalize();
        assert_eq!(post.slug, "designing-with-daylight");
        assert_eq!(post.sections[1].number, "1.1");
    }
}
