//! Abbildung des Gesamtfortschritts auf aktives Element und lokalen Fortschritt.

use crate::scroll::clamp01;

/// Aktives Element und Fortschritt innerhalb seines Slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveItem {
    /// Index in [0, item_count - 1]
    pub index: usize,
    /// Lokaler Fortschritt in [0, 1]
    pub local_progress: f32,
}

/// Wählt das aktive Element.
///
/// `total = progress × n`, `index = clamp(floor(total), 0, n-1)`,
/// `local = clamp01(total - index)`. Bei progress == 1.0 bleibt der Index auf
/// dem letzten Element und `local` wird 1.0 (kein Sprung zurück auf 0).
/// Ohne Elemente gibt es kein aktives Element.
pub fn select_active_item(progress: f32, item_count: usize) -> Option<ActiveItem> {
    if item_count == 0 {
        return None;
    }
    let total = clamp01(progress) * item_count as f32;
    let last = (item_count - 1) as f32;
    let index = total.floor().clamp(0.0, last);
    Some(ActiveItem {
        index: index as usize,
        local_progress: clamp01(total - index),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_start() {
        let item = select_active_item(0.0, 5).expect("Element erwartet");
        assert_eq!(item.index, 0);
        assert_eq!(item.local_progress, 0.0);
    }

    #[test]
    fn test_middle() {
        let item = select_active_item(0.5, 5).expect("Element erwartet");
        assert_eq!(item.index, 2);
        assert_relative_eq!(item.local_progress, 0.5);
    }

    #[test]
    fn test_end_clamps_to_last_item() {
        let item = select_active_item(1.0, 5).expect("Element erwartet");
        assert_eq!(item.index, 4);
        assert_eq!(item.local_progress, 1.0);
    }

    #[test]
    fn test_slot_boundary_switches_item() {
        // 0.4 × 5 = 2.0 → Beginn von Element 2
        let item = select_active_item(0.4, 5).expect("Element erwartet");
        assert_eq!(item.index, 2);
        assert_relative_eq!(item.local_progress, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_out_of_range_progress_is_absorbed() {
        let below = select_active_item(-0.3, 3).expect("Element erwartet");
        assert_eq!(below.index, 0);
        assert_eq!(below.local_progress, 0.0);

        let above = select_active_item(1.7, 3).expect("Element erwartet");
        assert_eq!(above.index, 2);
        assert_eq!(above.local_progress, 1.0);

        let nan = select_active_item(f32::NAN, 3).expect("Element erwartet");
        assert_eq!(nan.index, 0);
    }

    #[test]
    fn test_no_items() {
        assert!(select_active_item(0.5, 0).is_none());
    }

    #[test]
    fn test_single_item_uses_full_range() {
        let item = select_active_item(0.75, 1).expect("Element erwartet");
        assert_eq!(item.index, 0);
        assert_relative_eq!(item.local_progress, 0.75);
    }

    #[test]
    fn test_idempotent() {
        for step in 0..=100 {
            let p = step as f32 / 100.0;
            assert_eq!(select_active_item(p, 7), select_active_item(p, 7));
        }
    }

    #[test]
    fn test_reconstructs_total_progress() {
        for n in 1..=9usize {
            for step in 0..=200 {
                let p = step as f32 / 200.0;
                let item = select_active_item(p, n).expect("Element erwartet");
                assert!(item.index < n);
                assert!((0.0..=1.0).contains(&item.local_progress));
                assert_relative_eq!(
                    item.index as f32 + item.local_progress,
                    p * n as f32,
                    epsilon = 1e-4
                );
            }
        }
    }
}
