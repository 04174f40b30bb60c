//! Scheduling primitives: calendar grid and time-slot pagination

pub mod grid;
pub mod slots;

pub use grid::{days_in_month, month_grid};
pub use slots::{SlotPaginator, TimeSlot, DEFAULT_SLOTS, PAGE_SIZE};
