//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. They read squares only and never
//! look at whose turn it is.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};
