use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TestApiResponse {
    #[serde(default)]
    pub content: Option<String>,
}

/// A named source of config properties.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PropertySource {
    pub name: String,
    #[serde(default)]
    pub source: HashMap<String, serde_json::Value>,
}

/// Spring cloud config environment.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDataResponse {
    pub name: String,
    #[serde(default)]
    pub profiles: Vec<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub property_sources: Vec<PropertySource>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl GetDataResponse {
    /// First value of `key` across property sources, in precedence order.
    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.property_sources.iter().find_map(|s| s.source.get(key))
    }
}
