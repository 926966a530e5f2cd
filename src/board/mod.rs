//! Board: card layout, shuffling, and click notification.

pub mod layout;
pub mod manager;

pub use layout::{column_count, MAX_COLUMNS, MIN_COLUMNS};
pub use manager::{Board, ClickHandler};
