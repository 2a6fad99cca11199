use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptRecord {
    pub concept_name: String,
    pub win_rate: String,
    pub asset_count: u32,
}
