use std::path::{Path, PathBuf};

use async_trait::async_trait;
use screentime_common::{
    AuthorizationResult, AuthorizationStatus, Error, MonitoringResult, PickerResult, Result,
    TimeRange, UsageSummary,
};
use tracing::{debug, info};

use crate::UsageProvider;

/// Serves a usage summary previously exported by a device as JSON.
///
/// The file carries all three usage windows, so the requested range only
/// affects how the caller annotates the result.
pub struct SnapshotProvider {
    path: PathBuf,
}

impl SnapshotProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl UsageProvider for SnapshotProvider {
    fn name(&self) -> &'static str {
        "Snapshot"
    }

    fn is_supported(&self) -> bool {
        true
    }

    async fn authorization_status(&self) -> Result<AuthorizationResult> {
        Ok(AuthorizationResult::from_status(AuthorizationStatus::Approved))
    }

    async fn request_authorization(&self) -> Result<AuthorizationResult> {
        Ok(AuthorizationResult::from_status(AuthorizationStatus::Approved))
    }

    async fn present_activity_picker(&self) -> Result<PickerResult> {
        Err(Error::NotSupported("app selection is fixed by the snapshot file".to_string()))
    }

    async fn usage_summary(&self, range: TimeRange) -> Result<UsageSummary> {
        debug!("Reading {} usage snapshot from {:?}", range, self.path);

        let content = tokio::fs::read_to_string(&self.path).await?;
        let summary: UsageSummary = serde_json::from_str(&content)?;

        info!("Read {} apps from snapshot {:?}", summary.apps.len(), self.path);
        Ok(summary)
    }

    async fn start_monitoring(&self) -> Result<MonitoringResult> {
        Err(Error::NotSupported("a snapshot cannot be monitored".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SNAPSHOT: &str = r#"{
        "apps": [
            {"bundleId": "com.apple.MobileSMS", "appName": "Messages",
             "minutesToday": 45, "minutes7d": 320, "minutes30d": 1250},
            {"bundleId": "com.apple.mobilesafari", "appName": "Safari",
             "iconUri": "file:///icons/safari.png",
             "minutesToday": 15, "minutes7d": 100, "minutes30d": 400}
        ],
        "totals": {"today": 60, "week": 420, "month": 1650},
        "lastUpdated": "2026-01-18T10:00:00.000Z"
    }"#;

    #[tokio::test]
    async fn test_reads_snapshot_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("usage.json");
        std::fs::write(&path, SNAPSHOT).unwrap();

        let provider = SnapshotProvider::new(&path);
        let summary = provider.usage_summary(TimeRange::Today).await.unwrap();

        assert_eq!(summary.apps.len(), 2);
        assert_eq!(summary.apps[1].icon_uri.as_deref(), Some("file:///icons/safari.png"));
        assert_eq!(summary.totals.month, 1650);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let provider = SnapshotProvider::new(dir.path().join("missing.json"));

        let result = provider.usage_summary(TimeRange::Today).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn test_malformed_file_is_json_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("usage.json");
        std::fs::write(&path, "{\"apps\": 3}").unwrap();

        let result = SnapshotProvider::new(&path).usage_summary(TimeRange::Today).await;
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[tokio::test]
    async fn test_picker_not_supported() {
        let provider = SnapshotProvider::new("/nonexistent/usage.json");
        assert!(matches!(provider.present_activity_picker().await, Err(Error::NotSupported(_))));
        assert!(matches!(provider.start_monitoring().await, Err(Error::NotSupported(_))));
    }
}
