use boruto_types::{ApiError, Hero};

/// One page of the catalog, with the links to its neighbours.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroPage {
    pub heroes: Vec<Hero>,
    pub prev_page: Option<i32>,
    pub next_page: Option<i32>,
}

#[async_trait::async_trait]
pub trait HeroRepository: Send + Sync {
    /// Returns the fixed slice of heroes assigned to `page` (1-based),
    /// together with the previous/next page indicators.
    async fn heroes_page(&self, page: i32) -> Result<HeroPage, ApiError>;

    /// Returns every hero whose name contains `name`, case-insensitively.
    /// An empty query returns the whole catalog.
    async fn search_heroes(&self, name: &str) -> Vec<Hero>;
}
