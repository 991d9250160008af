use serde::{Deserialize, Serialize};

/// A single catalog record. Heroes are built once from the static fixture
/// and never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub id: u32,
    pub name: String,
    /// Path of the portrait under the static `/images` prefix.
    pub image: String,
    pub about: String,
    pub rating: f64,
    pub power: u32,
    pub abilities: Vec<String>,
}

impl Hero {
    pub fn new(
        id: u32,
        name: &str,
        image: &str,
        about: &str,
        rating: f64,
        power: u32,
        abilities: &[&str],
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            image: image.to_string(),
            about: about.to_string(),
            rating,
            power,
            abilities: abilities.iter().map(|a| a.to_string()).collect(),
        }
    }
}
