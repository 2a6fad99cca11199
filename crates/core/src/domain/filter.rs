use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterList {
    pub filters: Vec<FilterDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterDescriptor {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FilterKind,
    pub key: String,
    pub properties: FilterProperties,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterKind {
    SingleSelectRadioDropdownFilter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterProperties {
    pub options: FilterOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub values: Vec<FilterOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub key: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_options: Vec<FilterOption>,
}

impl FilterOption {
    pub fn new(label: &str, key: &str) -> Self {
        Self {
            label: label.to_string(),
            key: key.to_string(),
            sub_options: Vec::new(),
        }
    }

    pub fn with_sub_options(mut self, sub_options: Vec<FilterOption>) -> Self {
        self.sub_options = sub_options;
        self
    }
}

impl FilterDescriptor {
    pub fn single_select(label: &str, key: &str, values: Vec<FilterOption>) -> Self {
        Self {
            label: label.to_string(),
            kind: FilterKind::SingleSelectRadioDropdownFilter,
            key: key.to_string(),
            properties: FilterProperties {
                options: FilterOptions { values },
            },
        }
    }
}
