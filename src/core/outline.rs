//! Gliederungsnummern für Blog-Abschnitte (maximal drei Ebenen).
//!
//! Ein linearer Durchlauf mit festem Zähler-Array je Ebene. Erhöht eine Ebene
//! ihren Zähler, werden alle tieferen Zähler zurückgesetzt.

use super::content::BlogSection;

/// Tiefste erlaubte Gliederungsebene.
pub const MAX_SECTION_LEVEL: u8 = 3;

/// Klemmt eine Ebene auf 1..=3.
pub fn clamp_level(level: u8) -> u8 {
    level.clamp(1, MAX_SECTION_LEVEL)
}

/// Berechnet die Nummern einer Ebenenfolge, z.B. `[1, 2, 2, 1]` → `1, 1.1, 1.2, 2`.
///
/// Fehlen übergeordnete Zähler (Folge beginnt mit Ebene 2), bleiben sie 0.
pub fn numbers_for_levels(levels: &[u8]) -> Vec<String> {
    let mut counters = [0u32; MAX_SECTION_LEVEL as usize];
    levels
        .iter()
        .map(|&level| {
            let depth = clamp_level(level) as usize;
            counters[depth - 1] += 1;
            for deeper in counters.iter_mut().skip(depth) {
                *deeper = 0;
            }
            counters[..depth]
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(".")
        })
        .collect()
}

/// Vergibt Nummern neu und klemmt ungültige Ebenen.
pub fn renumber(sections: &mut [BlogSection]) {
    for section in sections.iter_mut() {
        section.level = clamp_level(section.level);
    }
    let levels: Vec<u8> = sections.iter().map(|s| s.level).collect();
    for (section, number) in sections.iter_mut().zip(numbers_for_levels(&levels)) {
        section.number = number;
    }
}

/// Fügt einen Abschnitt hinter `after` (oder am Ende) ein.
pub fn insert_section(sections: &mut Vec<BlogSection>, after: Option<usize>, level: u8) -> usize {
    let index = after
        .map(|i| (i + 1).min(sections.len()))
        .unwrap_or(sections.len());
    sections.insert(index, BlogSection::new(clamp_level(level), "", ""));
    renumber(sections);
    index
}

/// Entfernt einen Abschnitt. Ungültiger Index → `None`.
pub fn remove_section(sections: &mut Vec<BlogSection>, index: usize) -> Option<BlogSection> {
    if index >= sections.len() {
        return None;
    }
    let removed = sections.remove(index);
    renumber(sections);
    Some(removed)
}

/// Verschiebt einen Abschnitt um eine Position. Gibt den neuen Index zurück.
pub fn move_section(sections: &mut [BlogSection], index: usize, up: bool) -> Option<usize> {
    let target = if up {
        index.checked_sub(1)?
    } else {
        index + 1
    };
    if index >= sections.len() || target >= sections.len() {
        return None;
    }
    sections.swap(index, target);
    renumber(sections);
    Some(target)
}

/// Ändert die Ebene um `delta` (Einrücken +1, Ausrücken -1), geklemmt.
pub fn shift_level(sections: &mut [BlogSection], index: usize, delta: i8) -> bool {
    let Some(section) = sections.get_mut(index) else {
        return false;
    };
    let next = (section.level as i16 + delta as i16).clamp(1, MAX_SECTION_LEVEL as i16) as u8;
    let changed = next != section.level;
    section.level = next;
    renumber(sections);
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(levels: &[u8]) -> Vec<BlogSection> {
        levels
            .iter()
            .map(|&l| BlogSection::new(l, format!("H{l}"), ""))
            .collect()
    }

    fn numbers(sections: &[BlogSection]) -> Vec<&str> {
        sections.iter().map(|s| s.number.as_str()).collect()
    }

    #[test]
    fn test_numbers_for_levels() {
        assert_eq!(
            numbers_for_levels(&[1, 2, 2, 3, 1, 2, 3, 3]),
            vec!["1", "1.1", "1.2", "1.2.1", "2", "2.1", "2.1.1", "2.1.2"]
        );
    }

    #[test]
    fn test_shallower_increment_resets_deeper() {
        assert_eq!(
            numbers_for_levels(&[1, 2, 3, 2, 3]),
            vec!["1", "1.1", "1.1.1", "1.2", "1.2.1"]
        );
    }

    #[test]
    fn test_missing_parent_stays_zero() {
        assert_eq!(numbers_for_levels(&[2, 2, 1]), vec!["0.1", "0.2", "1"]);
    }

    #[test]
    fn test_out_of_range_levels_are_clamped() {
        let mut s = sections(&[0, 7]);
        renumber(&mut s);
        assert_eq!(s[0].level, 1);
        assert_eq!(s[1].level, 3);
        assert_eq!(numbers(&s), vec!["1", "1.0.1"]);
    }

    #[test]
    fn test_insert_and_remove_renumber() {
        let mut s = sections(&[1, 1]);
        renumber(&mut s);
        let idx = insert_section(&mut s, Some(0), 2);
        assert_eq!(idx, 1);
        assert_eq!(numbers(&s), vec!["1", "1.1", "2"]);

        remove_section(&mut s, 0);
        assert_eq!(numbers(&s), vec!["0.1", "1"]);
        assert!(remove_section(&mut s, 9).is_none());
    }

    #[test]
    fn test_move_section() {
        let mut s = sections(&[1, 2, 1]);
        renumber(&mut s);
        assert_eq!(move_section(&mut s, 2, true), Some(1));
        assert_eq!(numbers(&s), vec!["1", "2", "2.1"]);
        assert_eq!(move_section(&mut s, 0, true), None);
        assert_eq!(move_section(&mut s, 2, false), None);
    }

    #[test]
    fn test_shift_level() {
        let mut s = sections(&[1, 1]);
        assert!(shift_level(&mut s, 1, 1));
        assert_eq!(numbers(&s), vec!["1", "1.1"]);
        assert!(!shift_level(&mut s, 0, -1));
        assert!(!shift_level(&mut s, 5, 1));
    }
}
