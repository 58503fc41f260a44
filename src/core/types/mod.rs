pub mod config;
mod error;
mod query;
mod record;

pub use error::*;
pub use query::*;
pub use record::*;
