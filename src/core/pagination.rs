//! Seitenberechnung für Listen (1-basierte Seiten).

use std::ops::Range;

/// Ergebnis einer Seitenberechnung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total_items: usize,
    page_size: usize,
    page: usize,
}

impl Pagination {
    /// Erstellt eine Seitenberechnung. `page_size == 0` zählt als 1,
    /// die angeforderte Seite wird in `[1, page_count]` geklemmt.
    pub fn new(total_items: usize, page_size: usize, requested_page: usize) -> Self {
        let page_size = page_size.max(1);
        let page_count = total_items.div_ceil(page_size).max(1);
        Self {
            total_items,
            page_size,
            page: requested_page.clamp(1, page_count),
        }
    }

    /// Aktuelle (geklemmte) Seite.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Anzahl Seiten, mindestens 1.
    pub fn page_count(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Index-Bereich der aktuellen Seite.
    pub fn item_range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    /// Schneidet die aktuelle Seite aus einer Liste.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.item_range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// Zusammenhängende Seitennummern um die aktuelle Seite, höchstens `max_buttons`.
    pub fn window(&self, max_buttons: usize) -> Vec<usize> {
        let count = self.page_count();
        let width = max_buttons.clamp(1, count);
        let half = width / 2;
        let start = self
            .page
            .saturating_sub(half)
            .max(1)
            .min(count + 1 - width);
        (start..start + width).collect()
    }
}
