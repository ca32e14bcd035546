pub mod calculations;
pub mod models;

pub use calculations::{InvalidInputError, compute};
pub use models::*;
