//! Lectern admin toolkit library
//!
//! Presentation-layer building blocks for a records admin dashboard: dynamic
//! records, category tree reconstruction, a controlled data table with
//! sorting, tri-state selection and elided pagination, plus the small pieces
//! of shell state around them.

pub mod config;
pub mod error;
pub mod icons;
pub mod model;
pub mod optimistic;
pub mod state;
pub mod table;
pub mod tree;
