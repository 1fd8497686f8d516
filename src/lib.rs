//! Ataxx game core: a bordered board with undoable moves, capture and end of
//! game rules, and an alpha - beta player.
#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod board;
pub mod color;
pub mod config;
pub mod error;
pub mod movement;
pub mod strategy;

pub use board::{Board, DiagramError, JUMP_LIMIT};
pub use color::PieceColor;
pub use config::{AiConfig, ConfigError};
pub use error::GameError;
pub use movement::{Move, ParseMoveError, Square, EXTENDED_SIDE, SIDE};
pub use strategy::{AlphaBeta, MinMax, Strategy};
