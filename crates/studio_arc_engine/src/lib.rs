//! Scroll-getriebene Bogen-Positionierung für Testimonial-Sektionen.
//!
//! Reine Berechnungen ohne UI-Abhängigkeit: Bézier-Geometrie,
//! Scroll-Fortschritt, Auswahl des aktiven Elements und Deckkraft-Kurven.

pub mod active_item;
pub mod bezier;
pub mod engine;
pub mod layout;
pub mod opacity;
pub mod scroll;
pub mod slider;

pub use active_item::{select_active_item, ActiveItem};
pub use engine::{ArcEngine, ArcFrame, MarkerStyle, TextStyle};
pub use layout::{ArcLayoutConfig, Breakpoint, ControlPoints};
pub use scroll::{clamp01, scroll_progress, ContainerMeasurement, ScrollTracker};
pub use slider::SliderState;
