use serde::{Deserialize, Serialize};

use crate::types::{ProviderKind, SortDirection, TimeRange, UsageField};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,
    pub provider: ProviderKind,
    /// JSON usage summary read by the snapshot provider
    pub snapshot_path: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { log_level: "info".to_string(), provider: ProviderKind::Mock, snapshot_path: None }
    }
}

/// Table defaults applied when the command line leaves an option out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub range: TimeRange,
    pub sort_field: UsageField,
    pub sort_direction: SortDirection,
    pub min_minutes: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory for generated CSV files; the working directory when unset
    pub directory: Option<String>,
    /// Double embedded quotes in exported cells
    pub rfc4180: bool,
}
