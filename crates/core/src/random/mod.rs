pub mod faker;
pub mod fixed;

use std::ops::RangeInclusive;
use uuid::Uuid;

pub use faker::FakerProvider;
pub use fixed::FixedProvider;

/// Source of the placeholder values that fill mock payloads.
pub trait RandomDataProvider: Send + Sync {
    /// A single lowercase lorem word.
    fn word(&self) -> String;

    /// `count` lorem words joined by spaces.
    ///
    /// No built-in payload uses this; it rounds out the faker surface for
    /// payloads that need multi-word labels.
    fn words(&self, count: usize) -> String {
        (0..count)
            .map(|_| self.word())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Something like "Handcrafted Granite Chair".
    fn product_name(&self) -> String;

    fn integer(&self, range: RangeInclusive<u32>) -> u32;

    /// Uniform value in `range`, rounded to `decimals` places.
    fn decimal(&self, range: RangeInclusive<u32>, decimals: u32) -> f64;

    fn uuid(&self) -> Uuid;

    fn url(&self) -> String;

    fn image_url(&self) -> String;

    /// Not drawn by the built-in payloads, whose flags are fixed so the UI
    /// layout stays stable; kept to complete the capability set.
    fn boolean(&self) -> bool;

    /// Percentage string in `range`, e.g. `"63%"` or `"4.17%"`.
    fn percentage(&self, range: RangeInclusive<u32>, decimals: u32) -> String {
        if decimals == 0 {
            return format!("{}%", self.integer(range));
        }
        format_percentage(self.decimal(range, decimals), decimals)
    }
}

pub fn format_percentage(value: f64, decimals: u32) -> String {
    format!("{value:.prec$}%", prec = decimals as usize)
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
