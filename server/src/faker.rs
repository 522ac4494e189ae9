//! Fake blog generation.

use log::debug;
use rand::Rng;

use crate::model::Blog;
use crate::util::{new_opaque_id, BlogId};

/// Words in a generated title.
pub const TITLE_WORD_COUNT: usize = 10;

/// Inclusive bounds of the legacy numeric id scheme.
pub const NUMERIC_ID_RANGE: (u32, u32) = (1, 100);

const LOREM_WORDS: &[&str] = &[
    "alias", "consequatur", "aut", "perferendis", "sit", "voluptatem", "accusantium",
    "doloremque", "aperiam", "eaque", "ipsa", "quae", "ab", "illo", "inventore",
    "veritatis", "et", "quasi", "architecto", "beatae", "vitae", "dicta", "sunt",
    "explicabo", "aspernatur", "odit", "fugit", "sed", "quia", "consequuntur",
    "magni", "dolores", "eos", "qui", "ratione", "sequi", "nesciunt", "neque",
    "dolorem", "ipsum", "dolor", "amet", "consectetur", "adipisci", "velit",
    "numquam", "eius", "modi", "tempora", "incidunt", "ut", "labore", "dolore",
    "magnam", "aliquam", "quaerat", "enim", "ad", "minima", "veniam", "quis",
    "nostrum", "exercitationem", "ullam", "corporis", "nemo", "laboriosam",
    "nisi", "aliquid", "ex", "ea", "commodi", "autem", "vel", "eum", "iure",
    "reprehenderit", "voluptate", "esse", "quam", "nihil", "molestiae",
    "illum", "fugiat", "quo", "voluptas", "nulla", "pariatur",
];

/// How generated blogs get their id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdScheme {
    /// Fresh v4 UUID per record.
    Opaque,
    /// Random integer in [`NUMERIC_ID_RANGE`]. Ids can collide; only kept
    /// for clients that still expect numeric ids.
    LegacyNumeric,
}

impl IdScheme {
    /// Normalises an id taken from a request. Numeric ids match by value, so
    /// `07` names the same blog as `7`; anything else is used as given.
    pub fn canonical_id(&self, raw: &str) -> BlogId {
        match self {
            IdScheme::Opaque => raw.to_string(),
            IdScheme::LegacyNumeric => raw
                .parse::<u32>()
                .map(|n| n.to_string())
                .unwrap_or_else(|_| raw.to_string()),
        }
    }
}

impl Default for IdScheme {
    fn default() -> Self {
        IdScheme::Opaque
    }
}

#[derive(Debug, Clone, Default)]
pub struct BlogFaker {
    id_scheme: IdScheme,
}

impl BlogFaker {
    pub fn new(id_scheme: IdScheme) -> Self {
        Self { id_scheme }
    }

    pub fn id_scheme(&self) -> IdScheme {
        self.id_scheme
    }

    /// Generates `count` blogs using the thread-local rng.
    pub fn generate(&self, count: usize) -> Vec<Blog> {
        let mut rng = rand::rng();
        self.generate_with(count, &mut rng)
    }

    /// Generates `count` blogs drawing titles, content and numeric ids from
    /// `rng`. Opaque ids never come from `rng`.
    pub fn generate_with<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<Blog> {
        let blogs: Vec<Blog> = (0..count).map(|_| self.fake_blog(rng)).collect();
        debug!("generated {} blogs with {:?} ids", blogs.len(), self.id_scheme);
        blogs
    }

    fn fake_blog<R: Rng>(&self, rng: &mut R) -> Blog {
        let id = self.fake_id(rng);
        let title = sentence(rng, TITLE_WORD_COUNT);
        let content = word(rng).to_string();
        Blog::new(id, title, content)
    }

    fn fake_id<R: Rng>(&self, rng: &mut R) -> BlogId {
        match self.id_scheme {
            IdScheme::Opaque => new_opaque_id(),
            IdScheme::LegacyNumeric => {
                let (low, high) = NUMERIC_ID_RANGE;
                rng.random_range(low..=high).to_string()
            }
        }
    }
}

fn word<R: Rng>(rng: &mut R) -> &'static str {
    LOREM_WORDS[rng.random_range(0..LOREM_WORDS.len())]
}

/// `word_count` lorem words, capitalised, ending with a period.
fn sentence<R: Rng>(rng: &mut R, word_count: usize) -> String {
    let words: Vec<&str> = (0..word_count).map(|_| word(rng)).collect();
    let mut sentence = capitalize(&words.join(" "));
    sentence.push('.');
    sentence
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
