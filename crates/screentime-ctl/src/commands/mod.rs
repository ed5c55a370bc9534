pub mod export;
pub mod mock;
pub mod status;
pub mod table;
pub mod validate;

use anyhow::{Context, Result};
use clap::Args;
use screentime_common::config::DisplayConfig;
use screentime_common::{
    filter_usage_data, sort_usage_data, SortDirection, TimeRange, UsageField, UsageRow,
};
use screentime_provider::{SnapshotProvider, UsageBridge};
use std::path::Path;
use tracing::debug;

use crate::config::CtlConfig;

/// Filter and ordering options shared by `table` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    #[arg(short, long, help = "Usage window: today, 7d or 30d")]
    pub range: Option<TimeRange>,

    #[arg(short, long, help = "Case-insensitive match on app name or bundle id")]
    pub search: Option<String>,

    #[arg(short, long, help = "Hide apps below this many minutes in the selected range")]
    pub min_minutes: Option<u32>,

    #[arg(long, help = "Sort field: appName, bundleId, minutesToday, minutes7d, minutes30d, percentOfTotal")]
    pub sort: Option<UsageField>,

    #[arg(short, long, help = "Sort direction: asc or desc")]
    pub direction: Option<SortDirection>,
}

/// Fully resolved query: command-line values over configured defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageQuery {
    pub range: TimeRange,
    pub search: String,
    pub min_minutes: u32,
    pub sort_field: UsageField,
    pub direction: SortDirection,
}

impl UsageQuery {
    pub fn resolve(args: &QueryArgs, display: &DisplayConfig) -> Self {
        Self {
            range: args.range.unwrap_or(display.range),
            search: args.search.clone().unwrap_or_default(),
            min_minutes: args.min_minutes.unwrap_or(display.min_minutes),
            sort_field: args.sort.unwrap_or(display.sort_field),
            direction: args.direction.unwrap_or(display.sort_direction),
        }
    }

    /// Filter then sort, leaving `rows` untouched.
    pub fn apply(&self, rows: &[UsageRow]) -> Vec<UsageRow> {
        let filtered = filter_usage_data(rows, &self.search, self.min_minutes, self.range);
        debug!("{} of {} apps pass the current filters", filtered.len(), rows.len());
        sort_usage_data(&filtered, self.sort_field, self.direction)
    }
}

/// Bridge for the configured provider, or a snapshot reader when `input` is given.
pub fn build_bridge(config: &CtlConfig, input: Option<&Path>) -> Result<UsageBridge> {
    if let Some(path) = input {
        return Ok(UsageBridge::new(Box::new(SnapshotProvider::new(path))));
    }

    let snapshot_path = config.snapshot_path();
    UsageBridge::from_kind(config.general.provider, snapshot_path.as_deref())
        .with_context(|| format!("Failed to create {} provider", config.general.provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<UsageRow> {
        vec![
            UsageRow::new("com.apple.MobileSMS", "Messages", 45, 320, 1250),
            UsageRow::new("com.apple.mobilesafari", "Safari", 60, 420, 1680),
            UsageRow::new("com.spotify.client", "Spotify", 120, 840, 3360),
            UsageRow::new("com.apple.mobileslideshow", "Photos", 15, 105, 420),
        ]
    }

    #[test]
    fn test_resolve_prefers_arguments() {
        let display = DisplayConfig {
            range: TimeRange::SevenDays,
            sort_field: UsageField::AppName,
            sort_direction: SortDirection::Asc,
            min_minutes: 10,
        };
        let args = QueryArgs {
            range: Some(TimeRange::ThirtyDays),
            search: Some("apple".to_string()),
            min_minutes: None,
            sort: None,
            direction: Some(SortDirection::Desc),
        };

        let query = UsageQuery::resolve(&args, &display);
        assert_eq!(query.range, TimeRange::ThirtyDays);
        assert_eq!(query.search, "apple");
        assert_eq!(query.min_minutes, 10);
        assert_eq!(query.sort_field, UsageField::AppName);
        assert_eq!(query.direction, SortDirection::Desc);
    }

    #[test]
    fn test_resolve_defaults() {
        let query = UsageQuery::resolve(&QueryArgs::default(), &DisplayConfig::default());
        assert_eq!(query.range, TimeRange::Today);
        assert!(query.search.is_empty());
        assert_eq!(query.sort_field, UsageField::MinutesToday);
        assert_eq!(query.direction, SortDirection::Desc);
    }

    #[test]
    fn test_apply_filters_then_sorts() {
        let query = UsageQuery {
            range: TimeRange::Today,
            search: "apple".to_string(),
            min_minutes: 20,
            sort_field: UsageField::MinutesToday,
            direction: SortDirection::Desc,
        };

        let result = query.apply(&rows());
        let names: Vec<&str> = result.iter().map(|r| r.app_name.as_str()).collect();
        assert_eq!(names, vec!["Safari", "Messages"]);
    }

    #[test]
    fn test_apply_without_filters_keeps_everything() {
        let query = UsageQuery::resolve(&QueryArgs::default(), &DisplayConfig::default());
        assert_eq!(query.apply(&rows()).len(), 4);
    }

    #[test]
    fn test_build_bridge_with_input_uses_snapshot() {
        let bridge = build_bridge(&CtlConfig::default(), Some(Path::new("/tmp/usage.json"))).unwrap();
        assert_eq!(bridge.provider_name(), "Snapshot");

        let bridge = build_bridge(&CtlConfig::default(), None).unwrap();
        assert_eq!(bridge.provider_name(), "Mock");
    }
}
