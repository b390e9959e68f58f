//! Error types

mod config;
mod field;
mod optimistic;
mod tree;

pub use config::*;
pub use field::*;
pub use optimistic::*;
pub use tree::*;
