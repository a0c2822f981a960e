//! Kontrollpunkte des Bogens aus Viewport-Größe und Breakpoint.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Breakpoint-Klasse der aktuellen Viewport-Breite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

/// Konfiguration der Bogengeometrie (Teil der Options-Datei).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArcLayoutConfig {
    /// Maximale Viewport-Breite für Mobile (px)
    pub mobile_max_width: f32,
    /// Maximale Viewport-Breite für Tablet (px)
    pub tablet_max_width: f32,
    /// Abstand der Endpunkte vom unteren Viewport-Rand auf Mobile (px)
    pub mobile_offset: f32,
    /// Abstand der Endpunkte vom unteren Viewport-Rand auf Tablet (px)
    pub tablet_offset: f32,
    /// Abstand der Endpunkte vom unteren Viewport-Rand auf Desktop (px)
    pub desktop_offset: f32,
    /// Scheitelhöhe als Anteil der Viewport-Höhe
    pub apex_ratio: f32,
}

impl Default for ArcLayoutConfig {
    fn default() -> Self {
        Self {
            mobile_max_width: 640.0,
            tablet_max_width: 1024.0,
            mobile_offset: 80.0,
            tablet_offset: 140.0,
            desktop_offset: 200.0,
            apex_ratio: 0.12,
        }
    }
}

impl ArcLayoutConfig {
    /// Ordnet eine Viewport-Breite einem Breakpoint zu.
    pub fn breakpoint(&self, viewport_width: f32) -> Breakpoint {
        if viewport_width < self.mobile_max_width {
            Breakpoint::Mobile
        } else if viewport_width < self.tablet_max_width {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    /// Vertikaler Endpunkt-Abstand für einen Breakpoint.
    pub fn vertical_offset(&self, breakpoint: Breakpoint) -> f32 {
        match breakpoint {
            Breakpoint::Mobile => self.mobile_offset,
            Breakpoint::Tablet => self.tablet_offset,
            Breakpoint::Desktop => self.desktop_offset,
        }
    }
}

/// P0/P2 = Endpunkte, P1 = Scheitel. Unverändert bis zum nächsten Resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoints {
    pub p0: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
}

impl ControlPoints {
    /// Berechnet die Kontrollpunkte für eine Viewport-Größe `[w, h]`.
    pub fn for_viewport(viewport: Vec2, config: &ArcLayoutConfig) -> Self {
        let offset = config.vertical_offset(config.breakpoint(viewport.x));
        let base_y = (viewport.y - offset).max(0.0);
        Self {
            p0: Vec2::new(0.0, base_y),
            p1: Vec2::new(viewport.x * 0.5, viewport.y * config.apex_ratio),
            p2: Vec2::new(viewport.x, base_y),
        }
    }

    /// Punkt auf dem Bogen.
    pub fn point(&self, t: f32) -> Vec2 {
        crate::bezier::quadratic_point(self.p0, self.p1, self.p2, t)
    }

    /// Marker-Rotation in Grad.
    pub fn rotation_degrees(&self, t: f32) -> f32 {
        crate::bezier::rotation_degrees(self.p0, self.p1, self.p2, t)
    }

    /// Gleichmäßig in t abgetastete Polyline (für die Darstellung der Bahn).
    pub fn sample(&self, segments: usize) -> Vec<Vec2> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point(i as f32 / segments as f32))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_breakpoints() {
        let config = ArcLayoutConfig::default();
        assert_eq!(config.breakpoint(375.0), Breakpoint::Mobile);
        assert_eq!(config.breakpoint(640.0), Breakpoint::Tablet);
        assert_eq!(config.breakpoint(1023.9), Breakpoint::Tablet);
        assert_eq!(config.breakpoint(1920.0), Breakpoint::Desktop);
    }

    #[test]
    fn test_desktop_control_points() {
        let config = ArcLayoutConfig::default();
        let cps = ControlPoints::for_viewport(Vec2::new(1280.0, 800.0), &config);
        assert_eq!(cps.p0, Vec2::new(0.0, 600.0));
        assert_eq!(cps.p2, Vec2::new(1280.0, 600.0));
        assert_relative_eq!(cps.p1.x, 640.0);
        assert_relative_eq!(cps.p1.y, 96.0);
    }

    #[test]
    fn test_mobile_uses_smaller_offset() {
        let config = ArcLayoutConfig::default();
        let cps = ControlPoints::for_viewport(Vec2::new(390.0, 844.0), &config);
        assert_relative_eq!(cps.p0.y, 764.0);
        assert_relative_eq!(cps.p1.x, 195.0);
    }

    #[test]
    fn test_tiny_viewport_keeps_endpoints_inside() {
        let config = ArcLayoutConfig::default();
        let cps = ControlPoints::for_viewport(Vec2::new(300.0, 50.0), &config);
        assert_eq!(cps.p0.y, 0.0);
    }

    #[test]
    fn test_sample_includes_endpoints() {
        let config = ArcLayoutConfig::default();
        let cps = ControlPoints::for_viewport(Vec2::new(1280.0, 800.0), &config);
        let pts = cps.sample(32);
        assert_eq!(pts.len(), 33);
        assert_eq!(pts[0], cps.p0);
        assert_eq!(pts[32], cps.p2);
    }
}
