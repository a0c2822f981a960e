//! Quadratische Bézier-Kurve: Punkt und Tangentenrichtung.
//!
//! Beide Funktionen klemmen `t` bewusst nicht, Aufrufer sind dafür zuständig.

use glam::Vec2;

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_point(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// B'(t) = 2(1-t)·(P1-P0) + 2t·(P2-P1)
pub fn quadratic_tangent(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    2.0 * (1.0 - t) * (p1 - p0) + 2.0 * t * (p2 - p1)
}

/// Rotationswinkel des Markers in Grad (atan2 der Ableitung).
///
/// Bildschirmkoordinaten: +y zeigt nach unten, positive Winkel drehen
/// also im Uhrzeigersinn.
pub fn rotation_degrees(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> f32 {
    let d = quadratic_tangent(p0, p1, p2, t);
    d.y.atan2(d.x).to_degrees()
}
