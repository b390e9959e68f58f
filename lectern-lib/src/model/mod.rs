//! Row models

mod category;
mod record;
mod record_serde;
mod value;

pub use category::*;
pub use record::*;
pub use value::*;
