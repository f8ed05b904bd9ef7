//! Controller layer wiring the UI event contract to the selection core.

mod controller;
mod table_state;

pub use controller::PaginationController;
pub use table_state::TableState;
