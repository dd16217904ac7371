//! Type definitions for leetlens

mod error;
mod profile;

pub use error::*;
pub use profile::*;
