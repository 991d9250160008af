use boruto_types::{ApiError, Hero};

use crate::repository::{HeroPage, HeroRepository};

pub const PAGE_COUNT: i32 = 5;

/// The in-memory hero catalog. Built once at startup from the static
/// fixture and shared read-only for the whole process lifetime.
pub struct HeroCatalog {
    pages: Vec<Vec<Hero>>,
}

impl HeroCatalog {
    pub fn new() -> Self {
        Self { pages: fixture() }
    }

    fn all_heroes(&self) -> Vec<Hero> {
        self.pages.iter().flatten().cloned().collect()
    }
}

/// Previous/next indicators for a page already known to be in range.
fn page_links(page: i32) -> (Option<i32>, Option<i32>) {
    let prev = (page > 1).then_some(page - 1);
    let next = (page < PAGE_COUNT).then_some(page + 1);
    (prev, next)
}

#[async_trait::async_trait]
impl HeroRepository for HeroCatalog {
    async fn heroes_page(&self, page: i32) -> Result<HeroPage, ApiError> {
        if !(1..=PAGE_COUNT).contains(&page) {
            return Err(ApiError::PageOutOfRange { page });
        }

        let (prev_page, next_page) = page_links(page);
        Ok(HeroPage {
            heroes: self.pages[(page - 1) as usize].clone(),
            prev_page,
            next_page,
        })
    }

    async fn search_heroes(&self, name: &str) -> Vec<Hero> {
        if name.is_empty() {
            return self.all_heroes();
        }

        let query = name.to_lowercase();
        self.pages
            .iter()
            .flatten()
            .filter(|hero| hero.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

fn fixture() -> Vec<Vec<Hero>> {
    vec![
        vec![
            Hero::new(
                1,
                "Sasuke",
                "/images/sasuke.jpg",
                "Sasuke is Naruto's lifelong rival, the last survivor of the \
                 Uchiha clan and now the village's shadow protector.",
                5.0,
                98,
                &["Sharingan", "Rinnegan", "Sussano", "Amenotejikara"],
            ),
            Hero::new(
                2,
                "Naruto",
                "/images/naruto.jpg",
                "Naruto is the Seventh Hokage of the Hidden Leaf village and \
                 the jinchuriki of the Nine-Tails, Kurama.",
                5.0,
                98,
                &["Rasengan", "Rasen-Shuriken", "Shadow Clone", "Senin Mode"],
            ),
            Hero::new(
                3,
                "Sakura",
                "/images/sakura.jpg",
                "Sakura is a medical ninja trained by the Fifth Hokage, \
                 Tsunade, and one of the strongest kunoichi alive.",
                4.5,
                92,
                &["Chakra Control", "Medical Ninjutsu", "Strength", "Intelligence"],
            ),
        ],
        vec![
            Hero::new(
                4,
                "Kakashi",
                "/images/kakashi.jpg",
                "Kakashi, the Copy Ninja, was the Sixth Hokage and the \
                 teacher of Team 7.",
                4.5,
                92,
                &["Sharingan", "Raikiri", "Kamui", "Copy Technique"],
            ),
            Hero::new(
                5,
                "Konohamaru",
                "/images/konohamaru.jpg",
                "Konohamaru is the grandson of the Third Hokage and the \
                 leader of Team 7, Boruto's own squad.",
                4.0,
                88,
                &["Rasengan", "Shadow Clone", "Summoning"],
            ),
            Hero::new(
                6,
                "Boruto",
                "/images/boruto.jpg",
                "Boruto is the son of the Seventh Hokage and a prodigy who \
                 carries the mysterious Karma seal.",
                4.5,
                94,
                &["Jougan", "Karma", "Rasengan", "Vanishing Rasengan"],
            ),
        ],
        vec![
            Hero::new(
                7,
                "Sarada",
                "/images/sarada.jpg",
                "Sarada is Sasuke and Sakura's daughter. She dreams of \
                 becoming Hokage one day.",
                4.5,
                92,
                &["Sharingan", "Chakra Control", "Strength"],
            ),
            Hero::new(
                8,
                "Mitsuki",
                "/images/mitsuki.jpg",
                "Mitsuki is a synthetic human created by Orochimaru and \
                 Boruto's closest teammate.",
                4.5,
                91,
                &["Senin Mode", "Striking Shadow Snakes", "Wind Release"],
            ),
            Hero::new(
                9,
                "Orochimaru",
                "/images/orochimaru.jpg",
                "Orochimaru is a legendary Sannin, a scientist obsessed with \
                 immortality and the parent of Mitsuki.",
                4.0,
                95,
                &["Immortality", "Snake Techniques", "Forbidden Jutsu"],
            ),
        ],
        vec![
            Hero::new(
                10,
                "Shikadai",
                "/images/shikadai.jpg",
                "Shikadai is Shikamaru's son, a tactician of Team 10 who \
                 inherited his father's sharp mind.",
                4.0,
                88,
                &["Shadow Paralysis", "Tactics", "Wind Release"],
            ),
            Hero::new(
                11,
                "Inojin",
                "/images/inojin.jpg",
                "Inojin is the son of Sai and Ino, a member of the new \
                 Ino-Shika-Cho trio.",
                4.0,
                86,
                &["Super Beast Scroll", "Mind Transfer", "Calligraphy"],
            ),
            Hero::new(
                12,
                "Chocho",
                "/images/chocho.jpg",
                "Chocho is Choji's daughter, a confident kunoichi of Team 10 \
                 with her clan's expansion techniques.",
                4.0,
                85,
                &["Expansion", "Butterfly Mode", "Human Boulder"],
            ),
        ],
        vec![
            Hero::new(
                13,
                "Mirai",
                "/images/mirai.jpg",
                "Mirai is Asuma's daughter and an elite bodyguard of the \
                 Seventh Hokage.",
                4.0,
                87,
                &["Chakra Blades", "Genjutsu", "Fire Release"],
            ),
            Hero::new(
                14,
                "Iwabe",
                "/images/iwabe.jpg",
                "Iwabe is an older academy student with tremendous strength \
                 and an earth-shaping combat style.",
                3.5,
                83,
                &["Earth Release", "Weapon Crafting", "Strength"],
            ),
            Hero::new(
                15,
                "Metal Lee",
                "/images/metal_lee.jpg",
                "Metal Lee is Rock Lee's son, a taijutsu specialist who \
                 freezes up whenever anyone watches him.",
                4.0,
                86,
                &["Taijutsu", "Eight Gates", "Leaf Whirlwind"],
            ),
        ],
    ]
}
