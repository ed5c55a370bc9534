use async_trait::async_trait;
use screentime_common::{
    AuthorizationResult, AuthorizationStatus, Error, MonitoringResult, PickerResult, Result,
    TimeRange, UsageSummary,
};

use crate::UsageProvider;

/// Stand-in for platforms without a usage reporting API.
pub struct UnsupportedProvider;

impl UnsupportedProvider {
    pub fn new() -> Self {
        Self
    }

    fn unavailable(what: &str) -> Error {
        Error::NotSupported(format!("{} is not available on this platform", what))
    }
}

impl Default for UnsupportedProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UsageProvider for UnsupportedProvider {
    fn name(&self) -> &'static str {
        "Unsupported"
    }

    fn is_supported(&self) -> bool {
        false
    }

    async fn authorization_status(&self) -> Result<AuthorizationResult> {
        Ok(AuthorizationResult::from_status(AuthorizationStatus::Denied))
    }

    async fn request_authorization(&self) -> Result<AuthorizationResult> {
        Err(Self::unavailable("Screen time authorization"))
    }

    async fn present_activity_picker(&self) -> Result<PickerResult> {
        Err(Self::unavailable("The activity picker"))
    }

    async fn usage_summary(&self, _range: TimeRange) -> Result<UsageSummary> {
        Err(Self::unavailable("Usage data"))
    }

    async fn start_monitoring(&self) -> Result<MonitoringResult> {
        Err(Self::unavailable("Activity monitoring"))
    }
}
