//! Builders for every mock response body.
//!
//! Static payloads take no input. Randomized ones draw all placeholder values
//! from a [`RandomDataProvider`](crate::random::RandomDataProvider) so tests can
//! pin them with a fixed provider.

pub mod assets;
pub mod concepts;
pub mod filters;
pub mod trends;

pub use assets::asset_breakdown;
pub use concepts::{concepts, CONCEPT_COUNT};
pub use filters::{asset_breakdown_filters, creative_filters};
pub use trends::{breakdowns, performance_trends, themes, top_elements, TOP_ELEMENT_COUNT};
