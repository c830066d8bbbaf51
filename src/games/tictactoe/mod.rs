//! Tic-tac-toe: board model, rules, and a uniform random AI.

mod action;
mod ai;
mod board;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use ai::RandomAi;
pub use board::{Board, BoardError};
pub use position::Position;
pub use types::{Outcome, Player, Square};
