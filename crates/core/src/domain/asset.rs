use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Video,
    Image,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub asset_name: String,
    pub asset_id: Uuid,
    pub asset_type: AssetType,
    pub thumbnail_link: String,
    pub creative_link: String,
    pub image_url: String,
    pub object: DetectedObject,
    pub performance_metrics: PerformanceMetrics,
}

/// Primary object detected in the creative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedObject {
    pub name: String,
    pub category: String,
    pub placement: String,
    pub screen_space_utilization: String,
    pub time_on_screen: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub impressions: u64,
    pub clicks: u64,
    pub installs: u64,
    pub spend: f64,
    pub ctr: String,
    pub ipm: f64,
}
