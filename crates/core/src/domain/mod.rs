pub mod asset;
pub mod concept;
pub mod filter;
pub mod request;
pub mod trend;

use serde::{Deserialize, Serialize};

/// Every payload is wrapped as `{"data": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
