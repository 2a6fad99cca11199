use serde::{Deserialize, Serialize};

/// Category shown on the performance trends overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendCategory {
    Theme,
    Objects,
    Color,
    Message,
    Background,
    Logo,
    CallToAction,
}

impl TrendCategory {
    pub const ALL: [TrendCategory; 7] = [
        TrendCategory::Theme,
        TrendCategory::Objects,
        TrendCategory::Color,
        TrendCategory::Message,
        TrendCategory::Background,
        TrendCategory::Logo,
        TrendCategory::CallToAction,
    ];

    pub fn is_coming_soon(self) -> bool {
        !matches!(
            self,
            TrendCategory::Theme | TrendCategory::Objects | TrendCategory::Color
        )
    }
}

/// Coming-soon categories only carry `type`, `background_image` and the flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendRecord {
    #[serde(rename = "type")]
    pub category: TrendCategory,
    pub background_image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_assets: Option<u32>,
    pub is_coming_soon: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownList {
    pub trends: Vec<BreakdownRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRecord {
    pub label: String,
    pub is_coming_soon: bool,
    pub data: TrendSummary,
    pub breakdown: Breakdown,
}

/// Headline entry of a breakdown; mirrors its top-trend value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub assets: String,
    pub total_assets: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BreakdownKind {
    List,
    Chips,
    DataRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    #[serde(rename = "type")]
    pub kind: BreakdownKind,
    pub values: Vec<BreakdownValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownValue {
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub assets: String,
    pub total_assets: u32,
    pub is_top_trend: bool,
}

impl BreakdownValue {
    pub fn summary(&self) -> TrendSummary {
        TrendSummary {
            kind: self.kind.clone(),
            label: self.label.clone(),
            assets: self.assets.clone(),
            total_assets: self.total_assets,
        }
    }
}

impl BreakdownRecord {
    pub fn top_trend(&self) -> Option<&BreakdownValue> {
        self.breakdown.values.iter().find(|v| v.is_top_trend)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeTrends {
    pub trends: ThemeBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeBreakdown {
    pub theme: BreakdownRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopElements {
    pub label: String,
    pub top_recurring_elements: Vec<TopElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopElement {
    pub name: String,
    pub assets: String,
    pub total_assets: u32,
}
