use super::RandomDataProvider;
use std::ops::RangeInclusive;
use uuid::Uuid;

/// Provider that always returns the same values: the low end of every range,
/// a constant word and a constant v4 UUID. Used to pin payloads in tests.
#[derive(Debug, Clone)]
pub struct FixedProvider {
    pub word: String,
    pub product_name: String,
    pub uuid: Uuid,
    pub boolean: bool,
}

impl Default for FixedProvider {
    fn default() -> Self {
        Self {
            word: "lorem".to_string(),
            product_name: "Handcrafted Granite Chair".to_string(),
            uuid: Uuid::from_u128(0x67e5_5044_10b1_426f_9247_bb68_0e5f_e0c8),
            boolean: false,
        }
    }
}

impl RandomDataProvider for FixedProvider {
    fn word(&self) -> String {
        self.word.clone()
    }

    fn product_name(&self) -> String {
        self.product_name.clone()
    }

    fn integer(&self, range: RangeInclusive<u32>) -> u32 {
        *range.start()
    }

    fn decimal(&self, range: RangeInclusive<u32>, _decimals: u32) -> f64 {
        *range.start() as f64
    }

    fn uuid(&self) -> Uuid {
        self.uuid
    }

    fn url(&self) -> String {
        format!("https://mock.example.com/{}", self.word)
    }

    fn image_url(&self) -> String {
        format!("https://mock.example.com/{}.png", self.uuid.simple())
    }

    fn boolean(&self) -> bool {
        self.boolean
    }
}
