mod hero_handler;
mod home_handler;

pub use hero_handler::{get_all_heroes, search_heroes};
pub use home_handler::{home, page_not_found};
