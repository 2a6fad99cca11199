use super::{round_to, RandomDataProvider};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use uuid::Uuid;

const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "labore", "dolore", "magna", "aliqua", "enim", "minim",
    "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip",
    "commodo", "consequat", "duis", "aute", "irure", "voluptate", "velit", "esse", "cillum",
    "fugiat", "nulla", "pariatur", "excepteur", "sint", "occaecat", "cupidatat", "proident",
    "sunt", "culpa", "officia", "deserunt", "mollit", "anim",
];

const PRODUCT_ADJECTIVES: &[&str] = &[
    "Small", "Ergonomic", "Rustic", "Intelligent", "Gorgeous", "Incredible", "Fantastic",
    "Practical", "Sleek", "Awesome", "Generic", "Handcrafted", "Handmade", "Licensed", "Refined",
    "Unbranded", "Tasty",
];

const PRODUCT_MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal", "Soft",
    "Fresh", "Frozen",
];

const PRODUCT_NOUNS: &[&str] = &[
    "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants", "Shirt",
    "Table", "Shoes", "Hat", "Towels", "Soap", "Tuna", "Chicken", "Fish", "Cheese", "Bacon",
    "Pizza", "Salad", "Sausages", "Chips",
];

const TLDS: &[&str] = &["com", "net", "org", "io", "info"];

const IMAGE_SIZES: &[(u32, u32)] = &[(640, 480), (1280, 720), (1080, 1080), (1080, 1920)];

/// Seedable faker-style provider.
///
/// The RNG sits behind a lock so one provider can be shared across request
/// handlers; each call holds it only while drawing its value.
pub struct FakerProvider {
    rng: Mutex<StdRng>,
}

impl FakerProvider {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn pick(&self, choices: &[&'static str]) -> &'static str {
        choices.choose(&mut *self.rng.lock()).copied().unwrap_or_default()
    }
}

impl Default for FakerProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FakerProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakerProvider").finish_non_exhaustive()
    }
}

impl RandomDataProvider for FakerProvider {
    fn word(&self) -> String {
        self.pick(LOREM).to_string()
    }

    fn product_name(&self) -> String {
        format!(
            "{} {} {}",
            self.pick(PRODUCT_ADJECTIVES),
            self.pick(PRODUCT_MATERIALS),
            self.pick(PRODUCT_NOUNS)
        )
    }

    fn integer(&self, range: RangeInclusive<u32>) -> u32 {
        if range.is_empty() {
            return *range.start();
        }
        self.rng.lock().gen_range(range)
    }

    fn decimal(&self, range: RangeInclusive<u32>, decimals: u32) -> f64 {
        let (lo, hi) = (*range.start() as f64, *range.end() as f64);
        if hi <= lo {
            return lo;
        }
        let value = self.rng.lock().gen_range(lo..=hi);
        round_to(value, decimals)
    }

    fn uuid(&self) -> Uuid {
        let bytes: [u8; 16] = self.rng.lock().gen();
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }

    fn url(&self) -> String {
        format!(
            "https://{}-{}.{}/{}",
            self.word(),
            self.word(),
            self.pick(TLDS),
            self.word()
        )
    }

    fn image_url(&self) -> String {
        let (width, height) = *IMAGE_SIZES
            .choose(&mut *self.rng.lock())
            .unwrap_or(&IMAGE_SIZES[0]);
        format!(
            "https://picsum.photos/seed/{}/{width}/{height}",
            self.uuid().simple()
        )
    }

    fn boolean(&self) -> bool {
        self.rng.lock().gen_bool(0.5)
    }
}
