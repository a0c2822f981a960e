//! Scroll-getriebene Bogen-Engine.
//!
//! Verdrahtet die reinen Stufen Messung → Fortschritt → aktives Element →
//! Darstellungsparameter. Kontrollpunkte und Scroll-Fortschritt sind
//! voneinander unabhängig: Resize berührt den Fortschritt nicht, Scroll
//! berührt die Kontrollpunkte nicht.

use glam::Vec2;

use crate::active_item::{select_active_item, ActiveItem};
use crate::layout::{ArcLayoutConfig, ControlPoints};
use crate::opacity;
use crate::scroll::{ContainerMeasurement, ScrollTracker};

/// Darstellungsparameter des Markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    /// Position im Viewport (px)
    pub position: Vec2,
    /// Horizontaler Versatz in Prozent der Viewport-Breite
    pub left_percent: f32,
    /// Vertikaler Versatz in Prozent der Viewport-Höhe
    pub top_percent: f32,
    /// Rotation entlang der Kurventangente (Grad)
    pub rotation_degrees: f32,
    pub opacity: f32,
}

/// Darstellungsparameter des Textblocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub opacity: f32,
    pub scale: f32,
}

/// Ergebnis eines Frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcFrame {
    pub progress: f32,
    pub active: ActiveItem,
    pub marker: MarkerStyle,
    pub text: TextStyle,
}

/// Zustand einer gemounteten Bogen-Sektion.
///
/// Nicht `Clone`: `Drop` löst die Sektion, eine Kopie würde das zweimal tun.
#[derive(Debug)]
pub struct ArcEngine {
    config: ArcLayoutConfig,
    viewport: Vec2,
    control_points: ControlPoints,
    tracker: ScrollTracker,
    item_count: usize,
    mounted: bool,
}

impl ArcEngine {
    /// Mountet die Sektion: berechnet die Kontrollpunkte und misst einmal.
    ///
    /// Ohne Messung (Container noch nicht angehängt) startet der Fortschritt bei 0.
    pub fn mount(
        viewport: Vec2,
        item_count: usize,
        config: ArcLayoutConfig,
        measurement: Option<ContainerMeasurement>,
    ) -> Self {
        let mut tracker = ScrollTracker::new();
        tracker.update(measurement, viewport.y);
        log::debug!(
            "Arc-Sektion gemountet ({}×{}, {} Elemente, Fortschritt {:.3})",
            viewport.x,
            viewport.y,
            item_count,
            tracker.progress()
        );
        Self {
            control_points: ControlPoints::for_viewport(viewport, &config),
            config,
            viewport,
            tracker,
            item_count,
            mounted: true,
        }
    }

    /// Löst die Sektion. Danach werden Scroll- und Resize-Ereignisse ignoriert.
    pub fn unmount(&mut self) {
        if self.mounted {
            self.mounted = false;
            self.tracker.reset();
            log::debug!("Arc-Sektion gelöst");
        }
    }

    /// Ob die Sektion aktuell gemountet ist.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Viewport-Größe geändert: nur die Kontrollpunkte werden neu berechnet.
    pub fn resize(&mut self, viewport: Vec2) {
        if !self.mounted || viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.control_points = ControlPoints::for_viewport(viewport, &self.config);
    }

    /// Übernimmt eine neue Layout-Konfiguration (Options-Dialog).
    pub fn set_config(&mut self, config: ArcLayoutConfig) {
        self.control_points = ControlPoints::for_viewport(self.viewport, &config);
        self.config = config;
    }

    /// Scroll-Ereignis. `None` = Container noch nicht angehängt → No-op.
    pub fn scroll(&mut self, measurement: Option<ContainerMeasurement>) -> bool {
        if !self.mounted {
            return false;
        }
        self.tracker.update(measurement, self.viewport.y)
    }

    /// Setzt die Anzahl der Elemente (z.B. nach Änderung der Reviews).
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn progress(&self) -> f32 {
        self.tracker.progress()
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn control_points(&self) -> &ControlPoints {
        &self.control_points
    }

    /// Leitet alle Darstellungsparameter aus dem aktuellen Fortschritt ab.
    ///
    /// `None` ohne Elemente.
    pub fn frame(&self) -> Option<ArcFrame> {
        let progress = self.tracker.progress();
        let active = select_active_item(progress, self.item_count)?;
        let t = active.local_progress;

        let position = self.control_points.point(t);
        let width = self.viewport.x.max(1.0);
        let height = self.viewport.y.max(1.0);

        let marker = MarkerStyle {
            position,
            left_percent: position.x / width * 100.0,
            top_percent: position.y / height * 100.0,
            rotation_degrees: self.control_points.rotation_degrees(t),
            opacity: opacity::marker_opacity(t),
        };

        let text_opacity = opacity::text_opacity(t);
        Some(ArcFrame {
            progress,
            active,
            marker,
            text: TextStyle {
                opacity: text_opacity,
                scale: opacity::text_scale(text_opacity),
            },
        })
    }
}

impl Drop for ArcEngine {
    fn drop(&mut self) {
        self.unmount();
    }
}
