//! Feature modules
//!
//! Helpers around the core engine:
//! - Collapsible-section artifact filtering
//! - Cell predicates for upstream extractors

pub mod cells;
pub mod hide_button;

pub use cells::is_unconvertible_cell;
pub use hide_button::is_hide_button_table;
