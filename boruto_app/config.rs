use dotenvy::dotenv;
use std::env;

pub struct Config {
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let http_port = match env::var("BORUTO_HTTP_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(8080),
            Err(_) => 8080,
        };

        Self { http_port }
    }
}
