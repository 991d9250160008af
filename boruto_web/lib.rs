pub mod handlers;
mod http;
mod responses;

pub use http::*;
pub use responses::ApiResponse;
