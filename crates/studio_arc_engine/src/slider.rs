//! Vorher/Nachher-Slider: Trennlinie in Prozent und Clip-Breite.

/// Startposition der Trennlinie.
pub const SLIDER_DEFAULT_PERCENT: f32 = 50.0;

/// Prozentuale Position der Trennlinie aus einer Zeigerposition.
///
/// Ohne gültige Breite bleibt die Linie mittig.
pub fn percent_from_pointer(pointer_x: f32, left: f32, width: f32) -> f32 {
    if width <= 0.0 || pointer_x.is_nan() {
        return SLIDER_DEFAULT_PERCENT;
    }
    ((pointer_x - left) / width * 100.0).clamp(0.0, 100.0)
}

/// Zustand eines Vorher/Nachher-Vergleichs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderState {
    percent: f32,
}

impl Default for SliderState {
    fn default() -> Self {
        Self {
            percent: SLIDER_DEFAULT_PERCENT,
        }
    }
}

impl SliderState {
    /// Aktuelle Position in Prozent [0, 100].
    pub fn percent(&self) -> f32 {
        self.percent
    }

    /// Setzt die Position (geklemmt).
    pub fn set_percent(&mut self, percent: f32) {
        self.percent = if percent.is_nan() {
            SLIDER_DEFAULT_PERCENT
        } else {
            percent.clamp(0.0, 100.0)
        };
    }

    /// Sichtbare Breite des "Nachher"-Bilds, gemessen vom linken Rand.
    pub fn clip_width(&self, width: f32) -> f32 {
        width.max(0.0) * self.percent / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_percent_from_pointer() {
        assert_relative_eq!(percent_from_pointer(150.0, 100.0, 200.0), 25.0);
        assert_eq!(percent_from_pointer(50.0, 100.0, 200.0), 0.0);
        assert_eq!(percent_from_pointer(400.0, 100.0, 200.0), 100.0);
        assert_eq!(percent_from_pointer(150.0, 100.0, 0.0), 50.0);
    }

    #[test]
    fn test_clip_width() {
        let mut slider = SliderState::default();
        assert_relative_eq!(slider.clip_width(800.0), 400.0);
        slider.set_percent(130.0);
        assert_relative_eq!(slider.clip_width(800.0), 800.0);
        slider.set_percent(-5.0);
        assert_eq!(slider.clip_width(800.0), 0.0);
    }
}
