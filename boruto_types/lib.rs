pub mod errors;
pub mod hero;

pub use errors::{ApiError, ApplicationError, Result};
pub use hero::Hero;
