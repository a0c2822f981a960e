//! Scroll-Fortschritt eines Containers relativ zum Viewport.

/// Klemmt auf [0, 1]. NaN wird zu 0, damit nachgelagerte Stufen nie NaN sehen.
pub fn clamp01(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Gemessene Lage des verfolgten Containers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerMeasurement {
    /// Oberkante relativ zur Viewport-Oberkante (px, negativ = bereits hinausgescrollt)
    pub top: f32,
    /// Gesamthöhe des Containers (px)
    pub height: f32,
}

impl ContainerMeasurement {
    /// Erstellt eine Messung aus Oberkante und Höhe.
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }
}

/// progress = clamp01((vh - top) / (vh + height))
///
/// 0 solange die Oberkante unterhalb des Viewports liegt, 1 sobald der
/// Container vollständig oben hinausgescrollt ist.
pub fn scroll_progress(viewport_height: f32, measurement: ContainerMeasurement) -> f32 {
    let denominator = viewport_height + measurement.height;
    if denominator <= 0.0 {
        return 0.0;
    }
    clamp01((viewport_height - measurement.top) / denominator)
}

/// Hält den zuletzt berechneten Fortschritt eines Containers.
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    progress: f32,
}

impl ScrollTracker {
    /// Erstellt einen Tracker mit Fortschritt 0.
    pub fn new() -> Self {
        Self { progress: 0.0 }
    }

    /// Aktueller Fortschritt in [0, 1].
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Verarbeitet ein Scroll-Ereignis.
    ///
    /// Ohne Messung (Container noch nicht angehängt) bleibt der Fortschritt
    /// unverändert. Gibt zurück, ob sich der Wert geändert hat.
    pub fn update(
        &mut self,
        measurement: Option<ContainerMeasurement>,
        viewport_height: f32,
    ) -> bool {
        let Some(measurement) = measurement else {
            return false;
        };
        let next = scroll_progress(viewport_height, measurement);
        let changed = next != self.progress;
        self.progress = next;
        changed
    }

    /// Setzt den Fortschritt zurück (z.B. nach Unmount).
    pub fn reset(&mut self) {
        self.progress = 0.0;
    }
}
