//! Room categories and the per-category selection set

use serde::{Deserialize, Serialize};

/// Room categories offered on the booking screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoomCategory {
    LivingRoom,
    Bedrooms,
    Bathrooms,
    Kitchen,
    Office,
}

impl RoomCategory {
    /// All categories, in display order
    pub const ALL: [RoomCategory; 5] = [
        RoomCategory::LivingRoom,
        RoomCategory::Bedrooms,
        RoomCategory::Bathrooms,
        RoomCategory::Kitchen,
        RoomCategory::Office,
    ];

    /// Singular label used when expanding counted categories into lists
    pub fn item_label(&self) -> &'static str {
        match self {
            RoomCategory::LivingRoom => "Living room",
            RoomCategory::Bedrooms => "Bedroom",
            RoomCategory::Bathrooms => "Bathroom",
            RoomCategory::Kitchen => "Kitchen",
            RoomCategory::Office => "Office",
        }
    }
}

impl std::fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RoomCategory::LivingRoom => "Living room",
            RoomCategory::Bedrooms => "Bedrooms",
            RoomCategory::Bathrooms => "Bathrooms",
            RoomCategory::Kitchen => "Kitchen",
            RoomCategory::Office => "Office",
        };
        write!(f, "{}", label)
    }
}

/// Selection state for one category; `count` only matters while selected
/// and never drops below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomState {
    pub selected: bool,
    pub count: u32,
}

impl RoomState {
    fn new(selected: bool, count: u32) -> Self {
        Self {
            selected,
            count: count.max(1),
        }
    }
}

/// The full per-category selection set.
///
/// Mutations are synchronous and there is a single logical writer (the UI
/// event loop), so the set is a plain value with copy-on-read snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSelection {
    living_room: RoomState,
    bedrooms: RoomState,
    bathrooms: RoomState,
    kitchen: RoomState,
    office: RoomState,
    /// Count a category resets to when it becomes selected
    default_count: u32,
}

impl RoomSelection {
    /// Selection matching the booking screen's initial state: living room
    /// and bedrooms pre-selected, bedrooms pre-counted at 3.
    pub fn with_defaults(default_count: u32) -> Self {
        let default_count = default_count.max(1);
        Self {
            living_room: RoomState::new(true, default_count),
            bedrooms: RoomState::new(true, 3),
            bathrooms: RoomState::new(false, default_count),
            kitchen: RoomState::new(false, default_count),
            office: RoomState::new(false, default_count),
            default_count,
        }
    }

    pub fn get(&self, category: RoomCategory) -> RoomState {
        *self.slot(category)
    }

    fn slot(&self, category: RoomCategory) -> &RoomState {
        match category {
            RoomCategory::LivingRoom => &self.living_room,
            RoomCategory::Bedrooms => &self.bedrooms,
            RoomCategory::Bathrooms => &self.bathrooms,
            RoomCategory::Kitchen => &self.kitchen,
            RoomCategory::Office => &self.office,
        }
    }

    fn slot_mut(&mut self, category: RoomCategory) -> &mut RoomState {
        match category {
            RoomCategory::LivingRoom => &mut self.living_room,
            RoomCategory::Bedrooms => &mut self.bedrooms,
            RoomCategory::Bathrooms => &mut self.bathrooms,
            RoomCategory::Kitchen => &mut self.kitchen,
            RoomCategory::Office => &mut self.office,
        }
    }

    /// Flip a category's selection. Becoming selected resets the count to
    /// the configured default; toggling off leaves the count as-is.
    pub fn toggle(&mut self, category: RoomCategory) {
        let default_count = self.default_count;
        let state = self.slot_mut(category);
        state.selected = !state.selected;
        if state.selected {
            state.count = default_count;
        }
    }

    /// Increase a category's count by one
    pub fn increment(&mut self, category: RoomCategory) {
        let state = self.slot_mut(category);
        state.count = state.count.saturating_add(1);
    }

    /// Decrease a category's count by one; a count of 1 is the floor and
    /// decrementing there is a no-op.
    pub fn decrement(&mut self, category: RoomCategory) {
        let state = self.slot_mut(category);
        if state.count > 1 {
            state.count -= 1;
        }
    }

    /// Categories currently selected, in display order
    pub fn selected(&self) -> impl Iterator<Item = RoomCategory> + '_ {
        RoomCategory::ALL
            .into_iter()
            .filter(|c| self.slot(*c).selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_booking_screen() {
        let rooms = RoomSelection::with_defaults(1);
        assert!(rooms.get(RoomCategory::LivingRoom).selected);
        assert!(rooms.get(RoomCategory::Bedrooms).selected);
        assert_eq!(rooms.get(RoomCategory::Bedrooms).count, 3);
        assert!(!rooms.get(RoomCategory::Kitchen).selected);
    }

    #[test]
    fn test_toggle_on_resets_count_to_default() {
        let mut rooms = RoomSelection::with_defaults(2);
        rooms.toggle(RoomCategory::Bathrooms);
        assert!(rooms.get(RoomCategory::Bathrooms).selected);
        assert_eq!(rooms.get(RoomCategory::Bathrooms).count, 2);
    }

    #[test]
    fn test_toggle_off_keeps_count() {
        let mut rooms = RoomSelection::with_defaults(1);
        rooms.increment(RoomCategory::Bedrooms);
        rooms.toggle(RoomCategory::Bedrooms);
        assert!(!rooms.get(RoomCategory::Bedrooms).selected);
        assert_eq!(rooms.get(RoomCategory::Bedrooms).count, 4);
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let mut rooms = RoomSelection::with_defaults(1);
        for _ in 0..10 {
            rooms.decrement(RoomCategory::LivingRoom);
        }
        assert_eq!(rooms.get(RoomCategory::LivingRoom).count, 1);
    }

    #[test]
    fn test_increment_then_decrement() {
        let mut rooms = RoomSelection::with_defaults(1);
        rooms.increment(RoomCategory::Office);
        rooms.increment(RoomCategory::Office);
        rooms.decrement(RoomCategory::Office);
        assert_eq!(rooms.get(RoomCategory::Office).count, 2);
    }

    #[test]
    fn test_selected_iterates_in_display_order() {
        let mut rooms = RoomSelection::with_defaults(1);
        rooms.toggle(RoomCategory::Office);
        let selected: Vec<_> = rooms.selected().collect();
        assert_eq!(
            selected,
            vec![
                RoomCategory::LivingRoom,
                RoomCategory::Bedrooms,
                RoomCategory::Office
            ]
        );
    }
}
