//! Deckkraft und Skalierung für Marker und Textblock.
//!
//! Die Schwellwerte sind handabgestimmt, nicht hergeleitet.

use std::f32::consts::PI;

/// Minimale Marker-Deckkraft an den Slot-Rändern.
pub const MARKER_MIN_OPACITY: f32 = 0.5;

/// Ab diesem Randabstand ist der Text im Ruhezustand.
pub const TEXT_FAR_DISTANCE: f32 = 0.8;
/// Grenze zwischen flacher und steiler Rampe.
pub const TEXT_NEAR_DISTANCE: f32 = 0.4;
/// Text-Deckkraft im Ruhezustand.
pub const TEXT_RESTING_OPACITY: f32 = 0.15;
/// Text-Deckkraft an der Rampengrenze.
pub const TEXT_RAMP_OPACITY: f32 = 0.65;
/// Minimale Text-Skalierung (bei Deckkraft 0).
pub const TEXT_MIN_SCALE: f32 = 0.65;

/// |cos((local - 0.5)·π)|·0.5 + 0.5
///
/// 0.5 an den Rändern, 1.0 in der Slot-Mitte.
pub fn marker_opacity(local_progress: f32) -> f32 {
    ((local_progress - 0.5) * PI).cos().abs() * (1.0 - MARKER_MIN_OPACITY) + MARKER_MIN_OPACITY
}

/// Abstand zur Slot-Mitte: 0 in der Mitte, 1 an den Rändern.
pub fn distance_from_center(local_progress: f32) -> f32 {
    (local_progress - 0.5).abs() * 2.0
}

/// Stückweise Text-Deckkraft über den Mittenabstand.
pub fn text_opacity_for_distance(distance: f32) -> f32 {
    if distance > TEXT_FAR_DISTANCE {
        TEXT_RESTING_OPACITY
    } else if distance > TEXT_NEAR_DISTANCE {
        TEXT_RESTING_OPACITY
            + ((TEXT_FAR_DISTANCE - distance) / TEXT_NEAR_DISTANCE)
                * (TEXT_RAMP_OPACITY - TEXT_RESTING_OPACITY)
    } else {
        TEXT_RAMP_OPACITY
            + ((TEXT_NEAR_DISTANCE - distance) / TEXT_NEAR_DISTANCE) * (1.0 - TEXT_RAMP_OPACITY)
    }
}

/// Text-Deckkraft für einen lokalen Fortschritt.
pub fn text_opacity(local_progress: f32) -> f32 {
    text_opacity_for_distance(distance_from_center(local_progress))
}

/// scale = 0.65 + opacity·0.35
pub fn text_scale(opacity: f32) -> f32 {
    TEXT_MIN_SCALE + opacity * (1.0 - TEXT_MIN_SCALE)
}
