//! Client-side board view model.
//!
//! Holds the selected project's task cards, partitions them into the
//! three fixed status lanes and drives drag-initiated status
//! transitions. Purely presentational state: every mutation goes to the
//! server and the card list is replaced wholesale after each reload.

pub mod forms;
pub mod state;

pub use state::{BoardError, BoardState, Card, DropAction, LANES};
