use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One application's foreground usage as reported by a provider.
///
/// Minute counts are not cross-checked (`minutes_7d >= minutes_today` is the
/// provider's concern). `percent_of_total` stays `None` until a summary is
/// annotated for a particular range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRow {
    pub bundle_id: String,
    pub app_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_uri: Option<String>,
    pub minutes_today: u32,
    pub minutes_7d: u32,
    pub minutes_30d: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_of_total: Option<f64>,
}

impl UsageRow {
    pub fn new(
        bundle_id: impl Into<String>,
        app_name: impl Into<String>,
        minutes_today: u32,
        minutes_7d: u32,
        minutes_30d: u32,
    ) -> Self {
        Self {
            bundle_id: bundle_id.into(),
            app_name: app_name.into(),
            icon_uri: None,
            minutes_today,
            minutes_7d,
            minutes_30d,
            percent_of_total: None,
        }
    }

    pub fn with_percent(mut self, percent: f64) -> Self {
        self.percent_of_total = Some(percent);
        self
    }
}

/// Column sums over a summary's apps, one per usage window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UsageTotals {
    pub today: u32,
    pub week: u32,
    pub month: u32,
}

/// Snapshot of usage for every monitored app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSummary {
    pub apps: Vec<UsageRow>,
    pub totals: UsageTotals,
    /// ISO 8601 timestamp of when the provider produced the snapshot
    pub last_updated: String,
}

/// Usage window selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "today", alias = "day")]
    Today,
    #[serde(rename = "7d", alias = "week")]
    SevenDays,
    #[serde(rename = "30d", alias = "month")]
    ThirtyDays,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::Today, TimeRange::SevenDays, TimeRange::ThirtyDays];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Today => "today",
            TimeRange::SevenDays => "7d",
            TimeRange::ThirtyDays => "30d",
        }
    }

    /// Column heading used by the table view
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Today => "Today",
            TimeRange::SevenDays => "7 Days",
            TimeRange::ThirtyDays => "30 Days",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" | "day" => Ok(TimeRange::Today),
            "7d" | "week" => Ok(TimeRange::SevenDays),
            "30d" | "month" => Ok(TimeRange::ThirtyDays),
            other => Err(Error::InvalidTimeRange(other.to_string())),
        }
    }
}

/// Fields a usage table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UsageField {
    AppName,
    BundleId,
    #[default]
    MinutesToday,
    Minutes7d,
    Minutes30d,
    PercentOfTotal,
}

impl UsageField {
    pub fn as_str(&self) -> &'static str {
        match self {
            UsageField::AppName => "appName",
            UsageField::BundleId => "bundleId",
            UsageField::MinutesToday => "minutesToday",
            UsageField::Minutes7d => "minutes7d",
            UsageField::Minutes30d => "minutes30d",
            UsageField::PercentOfTotal => "percentOfTotal",
        }
    }

    /// The minutes column backing a time range
    pub fn for_range(range: TimeRange) -> Self {
        match range {
            TimeRange::Today => UsageField::MinutesToday,
            TimeRange::SevenDays => UsageField::Minutes7d,
            TimeRange::ThirtyDays => UsageField::Minutes30d,
        }
    }
}

impl fmt::Display for UsageField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UsageField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String =
            s.trim().chars().filter(|c| *c != '_' && *c != '-').collect::<String>().to_lowercase();

        match normalized.as_str() {
            "appname" | "name" | "app" => Ok(UsageField::AppName),
            "bundleid" | "bundle" => Ok(UsageField::BundleId),
            "minutestoday" | "today" => Ok(UsageField::MinutesToday),
            "minutes7d" | "7d" | "week" => Ok(UsageField::Minutes7d),
            "minutes30d" | "30d" | "month" => Ok(UsageField::Minutes30d),
            "percentoftotal" | "percent" => Ok(UsageField::PercentOfTotal),
            _ => Err(Error::InvalidSortField(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Direction after pressing the header of the column already sorted on
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(Error::InvalidSortDirection(other.to_string())),
        }
    }
}

/// A field value as seen by the generic sorter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Text(&'a str),
    Number(f64),
    Missing,
}

/// Records the generic sorter can order.
pub trait Sortable {
    fn sort_value(&self, field: UsageField) -> SortValue<'_>;
}

/// The fields read by filtering and CSV export.
pub trait UsageRecord {
    fn app_name(&self) -> &str;
    fn bundle_id(&self) -> &str;
    fn minutes_today(&self) -> u32;
    fn minutes_7d(&self) -> u32;
    fn minutes_30d(&self) -> u32;

    fn percent_of_total(&self) -> Option<f64> {
        None
    }

    fn minutes_for(&self, range: TimeRange) -> u32 {
        match range {
            TimeRange::Today => self.minutes_today(),
            TimeRange::SevenDays => self.minutes_7d(),
            TimeRange::ThirtyDays => self.minutes_30d(),
        }
    }
}

impl UsageRecord for UsageRow {
    fn app_name(&self) -> &str {
        &self.app_name
    }

    fn bundle_id(&self) -> &str {
        &self.bundle_id
    }

    fn minutes_today(&self) -> u32 {
        self.minutes_today
    }

    fn minutes_7d(&self) -> u32 {
        self.minutes_7d
    }

    fn minutes_30d(&self) -> u32 {
        self.minutes_30d
    }

    fn percent_of_total(&self) -> Option<f64> {
        self.percent_of_total
    }
}

impl Sortable for UsageRow {
    fn sort_value(&self, field: UsageField) -> SortValue<'_> {
        match field {
            UsageField::AppName => SortValue::Text(&self.app_name),
            UsageField::BundleId => SortValue::Text(&self.bundle_id),
            UsageField::MinutesToday => SortValue::Number(self.minutes_today.into()),
            UsageField::Minutes7d => SortValue::Number(self.minutes_7d.into()),
            UsageField::Minutes30d => SortValue::Number(self.minutes_30d.into()),
            UsageField::PercentOfTotal => {
                self.percent_of_total.map(SortValue::Number).unwrap_or(SortValue::Missing)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthorizationStatus {
    #[default]
    NotDetermined,
    Denied,
    Approved,
    Unknown,
}

impl fmt::Display for AuthorizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorizationStatus::NotDetermined => write!(f, "notDetermined"),
            AuthorizationStatus::Denied => write!(f, "denied"),
            AuthorizationStatus::Approved => write!(f, "approved"),
            AuthorizationStatus::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationResult {
    pub status: AuthorizationStatus,
    pub granted: bool,
}

impl AuthorizationResult {
    pub fn from_status(status: AuthorizationStatus) -> Self {
        Self { status, granted: status == AuthorizationStatus::Approved }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerResult {
    pub app_count: u32,
    pub category_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoringResult {
    pub success: bool,
}

/// Which provider backs the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Mock,
    Snapshot,
    Unsupported,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Mock => write!(f, "mock"),
            ProviderKind::Snapshot => write!(f, "snapshot"),
            ProviderKind::Unsupported => write!(f, "unsupported"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(ProviderKind::Mock),
            "snapshot" => Ok(ProviderKind::Snapshot),
            "unsupported" => Ok(ProviderKind::Unsupported),
            other => Err(Error::InvalidProviderKind(other.to_string())),
        }
    }
}
