//! Chart Views
//!
//! Presentation-side state that consumes filter output without affecting it:
//! per-node expansion, display ordering of children, the visible-row
//! projection, and zoom.

pub mod expansion;
pub mod rows;
pub mod zoom;

pub use expansion::{default_expanded, ExpansionHandle, ExpansionState, ExpansionStore};
pub use rows::{ordered_children, visible_rows, RowStyle, VisibleRow};
pub use zoom::ZoomLevel;
