//! Booking configurator state machine
//!
//! Collects room selection, date, time and dirtiness level, then emits a
//! structured booking draft for the confirmation step. All state is owned by
//! the single UI event loop; every mutation is synchronous.

use chrono::{Datelike, NaiveDate};

use crate::config::BookingConfig;
use crate::error::{AppError, AppResult};
use crate::models::payload::RoomsPayload;
use crate::models::rooms::{RoomCategory, RoomSelection};
use crate::models::BookingDraft;
use crate::schedule::{days_in_month, month_grid, SlotPaginator, TimeSlot};

/// Calendar month being viewed plus the date picked in it.
///
/// `selected_date` is only ever a valid day of the viewed month; changing
/// months clears it when the day does not exist in the new month, and the
/// caller must re-prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    year: i32,
    /// 1-12
    month: u32,
    selected_date: Option<u32>,
}

impl CalendarState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            year: today.year(),
            month: today.month(),
            selected_date: Some(today.day()),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn selected_date(&self) -> Option<u32> {
        self.selected_date
    }

    /// Day grid for the viewed month
    pub fn grid(&self) -> Vec<Option<u32>> {
        // month is kept in 1-12 so the grid always exists
        month_grid(self.year, self.month).unwrap_or_default()
    }

    /// Move the view forward or back one month, wrapping across the
    /// December/January boundary. A selected date that does not exist in
    /// the new month is cleared.
    pub fn change_month(&mut self, forward: bool) {
        if forward {
            if self.month == 12 {
                self.month = 1;
                self.year += 1;
            } else {
                self.month += 1;
            }
        } else if self.month == 1 {
            self.month = 12;
            self.year -= 1;
        } else {
            self.month -= 1;
        }

        if let Some(day) = self.selected_date {
            let days = days_in_month(self.year, self.month).unwrap_or(0);
            if day > days {
                tracing::debug!(
                    year = self.year,
                    month = self.month,
                    day,
                    "Selected date invalid in new month, clearing"
                );
                self.selected_date = None;
            }
        }
    }

    /// Pick a day in the viewed month
    pub fn select_date(&mut self, day: u32) -> AppResult<()> {
        let days = days_in_month(self.year, self.month).unwrap_or(0);
        if day == 0 || day > days {
            return Err(AppError::Validation(format!(
                "Day {} does not exist in {}-{:02}",
                day, self.year, self.month
            )));
        }
        self.selected_date = Some(day);
        Ok(())
    }

    fn selected_naive_date(&self) -> Option<NaiveDate> {
        let day = self.selected_date?;
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

/// Continuous 0-100 severity rating driven by horizontal drag position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirtinessSlider {
    value: f32,
}

impl DirtinessSlider {
    pub fn new(value: f32) -> Self {
        Self {
            value: value.clamp(0.0, 100.0),
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Map a drag position to the slider value. Called on every drag-move
    /// event; idempotent per position, clamped at both edges. A
    /// non-positive track width is a no-op.
    pub fn drag_to(&mut self, drag_x: f32, track_width: f32) -> f32 {
        if track_width > 0.0 {
            self.value = (drag_x / track_width * 100.0).clamp(0.0, 100.0);
        }
        self.value
    }
}

/// The booking screen's state machine.
#[derive(Debug, Clone)]
pub struct BookingConfigurator {
    rooms: RoomSelection,
    calendar: CalendarState,
    slots: SlotPaginator,
    selected_time: Option<String>,
    dirtiness: DirtinessSlider,
}

impl BookingConfigurator {
    pub fn new(config: &BookingConfig, today: NaiveDate) -> Self {
        let slots = SlotPaginator::with_defaults();
        let selected_time = slots
            .find(&config.default_time)
            .filter(|s| s.available)
            .map(|s| s.time.clone());
        Self {
            rooms: RoomSelection::with_defaults(config.default_room_count),
            calendar: CalendarState::new(today),
            slots,
            selected_time,
            dirtiness: DirtinessSlider::new(config.default_dirtiness),
        }
    }

    pub fn rooms(&self) -> &RoomSelection {
        &self.rooms
    }

    pub fn calendar(&self) -> &CalendarState {
        &self.calendar
    }

    pub fn selected_time(&self) -> Option<&str> {
        self.selected_time.as_deref()
    }

    pub fn dirtiness_level(&self) -> f32 {
        self.dirtiness.value()
    }

    // --- room selection -----------------------------------------------------

    pub fn toggle_room(&mut self, category: RoomCategory) {
        self.rooms.toggle(category);
    }

    pub fn increment_room(&mut self, category: RoomCategory) {
        self.rooms.increment(category);
    }

    pub fn decrement_room(&mut self, category: RoomCategory) {
        self.rooms.decrement(category);
    }

    // --- calendar -----------------------------------------------------------

    pub fn next_month(&mut self) {
        self.calendar.change_month(true);
    }

    pub fn previous_month(&mut self) {
        self.calendar.change_month(false);
    }

    pub fn select_date(&mut self, day: u32) -> AppResult<()> {
        self.calendar.select_date(day)
    }

    // --- time slots ---------------------------------------------------------

    /// Slots on the currently visible page
    pub fn visible_slots(&self) -> &[TimeSlot] {
        self.slots.current_page()
    }

    pub fn next_slots(&mut self) {
        self.slots.next();
    }

    pub fn previous_slots(&mut self) {
        self.slots.previous();
    }

    /// Select an appointment time. Unknown or unavailable slots are a no-op.
    pub fn select_time(&mut self, time: &str) {
        if let Some(slot) = self.slots.find(time) {
            if slot.available {
                self.selected_time = Some(slot.time.clone());
            }
        }
    }

    // --- dirtiness ----------------------------------------------------------

    pub fn drag_dirtiness(&mut self, drag_x: f32, track_width: f32) -> f32 {
        self.dirtiness.drag_to(drag_x, track_width)
    }

    // --- draft --------------------------------------------------------------

    /// Expand the room selection for the confirmation step: bedrooms and
    /// bathrooms become labeled lists, the living room a bare count (0 when
    /// unselected), kitchen and office their selection flags.
    pub fn rooms_payload(&self) -> RoomsPayload {
        let expand = |category: RoomCategory| -> Vec<String> {
            let state = self.rooms.get(category);
            if state.selected {
                (1..=state.count)
                    .map(|i| format!("{} {}", category.item_label(), i))
                    .collect()
            } else {
                Vec::new()
            }
        };

        let living_room = self.rooms.get(RoomCategory::LivingRoom);
        RoomsPayload {
            living_room: if living_room.selected {
                living_room.count
            } else {
                0
            },
            bedrooms: expand(RoomCategory::Bedrooms),
            bathrooms: expand(RoomCategory::Bathrooms),
            kitchen: self.rooms.get(RoomCategory::Kitchen).selected,
            office: self.rooms.get(RoomCategory::Office).selected,
            ..Default::default()
        }
    }

    /// Build the booking draft handed to the confirmation step.
    ///
    /// Requires a date and a time; the calendar clears its date when a month
    /// change invalidates it, in which case the user must pick again.
    pub fn build_draft(&self) -> AppResult<BookingDraft> {
        let date = self.calendar.selected_naive_date().ok_or_else(|| {
            AppError::Validation("No date selected for the booking".to_string())
        })?;
        let time = self.selected_time.clone().ok_or_else(|| {
            AppError::Validation("No time selected for the booking".to_string())
        })?;

        Ok(BookingDraft {
            rooms: self.rooms_payload(),
            date,
            time,
            dirtiness_level: self.dirtiness.value(),
        })
    }
}
