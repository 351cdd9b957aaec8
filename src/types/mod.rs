//! Data types for color queries.

mod options;
mod token;

pub use options::*;
pub use token::*;
