//! UCI protocol adapter for gambit.

pub mod command;
pub mod engine;
pub mod error;
pub mod position;

pub use command::{GoParams, UciOption};
pub use engine::UciEngine;
pub use error::UciError;
pub use position::Position;
