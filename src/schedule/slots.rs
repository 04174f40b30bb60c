//! Time-slot list and pagination
//!
//! The slot list is fixed for a session; the paginator windows it into pages
//! of four and wraps at both ends.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Slots shown per page
pub const PAGE_SIZE: usize = 4;

/// A fixed appointment time option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: String,
    pub available: bool,
}

impl TimeSlot {
    fn new(time: &str, available: bool) -> Self {
        Self {
            time: time.to_string(),
            available,
        }
    }
}

/// Default appointment times offered by the booking screen
pub static DEFAULT_SLOTS: Lazy<Vec<TimeSlot>> = Lazy::new(|| {
    vec![
        TimeSlot::new("9:00 am", true),
        TimeSlot::new("11:00 am", true),
        TimeSlot::new("1:00 pm", false),
        TimeSlot::new("2:00 pm", true),
        TimeSlot::new("4:00 pm", true),
        TimeSlot::new("6:00 pm", false),
        TimeSlot::new("8:00 pm", true),
    ]
});

/// Pages a fixed, ordered slot list; navigation wraps modulo the page count.
#[derive(Debug, Clone)]
pub struct SlotPaginator {
    slots: Vec<TimeSlot>,
    page_index: usize,
}

impl SlotPaginator {
    pub fn new(slots: Vec<TimeSlot>) -> Self {
        Self {
            slots,
            page_index: 0,
        }
    }

    /// Paginator over the default slot list
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_SLOTS.clone())
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Number of pages (at least 1, even for an empty list)
    pub fn page_count(&self) -> usize {
        self.slots.len().div_ceil(PAGE_SIZE).max(1)
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Slots on page `index`; the last page may hold fewer than four.
    pub fn page(&self, index: usize) -> &[TimeSlot] {
        let start = (index * PAGE_SIZE).min(self.slots.len());
        let end = (start + PAGE_SIZE).min(self.slots.len());
        &self.slots[start..end]
    }

    /// Slots on the current page
    pub fn current_page(&self) -> &[TimeSlot] {
        self.page(self.page_index)
    }

    /// Advance one page, wrapping past the last page back to page 0
    pub fn next(&mut self) -> usize {
        self.page_index = (self.page_index + 1) % self.page_count();
        self.page_index
    }

    /// Go back one page, wrapping before page 0 to the last page
    pub fn previous(&mut self) -> usize {
        self.page_index = self
            .page_index
            .checked_sub(1)
            .unwrap_or(self.page_count() - 1);
        self.page_index
    }

    /// Look up a slot by its display time
    pub fn find(&self, time: &str) -> Option<&TimeSlot> {
        self.slots.iter().find(|s| s.time == time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seven_slots() -> Vec<TimeSlot> {
        DEFAULT_SLOTS.clone()
    }

    #[test]
    fn test_page_windows() {
        let p = SlotPaginator::new(seven_slots());
        assert_eq!(p.page_count(), 2);
        assert_eq!(p.page(0).len(), 4);
        assert_eq!(p.page(1).len(), 3);
        assert_eq!(p.page(0)[0].time, "9:00 am");
        assert_eq!(p.page(1)[0].time, "4:00 pm");
    }

    #[test]
    fn test_next_wraps_to_first_page() {
        let mut p = SlotPaginator::new(seven_slots());
        assert_eq!(p.next(), 1);
        assert_eq!(p.next(), 0);
    }

    #[test]
    fn test_previous_wraps_to_last_page() {
        let mut p = SlotPaginator::new(seven_slots());
        assert_eq!(p.previous(), 1);
        assert_eq!(p.previous(), 0);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let p = SlotPaginator::new(seven_slots());
        assert!(p.page(5).is_empty());
    }

    #[test]
    fn test_empty_list_has_one_empty_page() {
        let p = SlotPaginator::new(vec![]);
        assert_eq!(p.page_count(), 1);
        assert!(p.current_page().is_empty());
    }
}
