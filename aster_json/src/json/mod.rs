mod error;
mod stringify;
mod types;

pub use error::JsonError;
pub use stringify::*;
pub use types::*;
