pub mod providers;

pub use providers::*;

use std::path::Path;

use screentime_common::{
    annotate_percentages, AuthorizationResult, AuthorizationStatus, Error, MonitoringResult,
    PickerResult, ProviderKind, Result, TimeRange, UsageSummary,
};
use tokio::sync::broadcast;
use tracing::{debug, info, trace, warn};

const EVENT_CAPACITY: usize = 32;

/// A source of device usage data.
///
/// Implementations wrap whatever platform facility actually records usage;
/// the dashboard only ever sees finished [`UsageSummary`] values.
#[async_trait::async_trait]
pub trait UsageProvider {
    fn name(&self) -> &'static str;
    fn is_supported(&self) -> bool;
    async fn authorization_status(&self) -> Result<AuthorizationResult>;
    async fn request_authorization(&self) -> Result<AuthorizationResult>;
    async fn present_activity_picker(&self) -> Result<PickerResult>;
    async fn usage_summary(&self, range: TimeRange) -> Result<UsageSummary>;
    async fn start_monitoring(&self) -> Result<MonitoringResult>;
}

/// Change notifications published by [`UsageBridge`].
#[derive(Debug, Clone, PartialEq)]
pub enum UsageEvent {
    AuthorizationChanged { status: AuthorizationStatus },
    UsageUpdated { range: TimeRange, app_count: usize },
}

pub struct UsageBridge {
    provider: Box<dyn UsageProvider + Send + Sync>,
    events: broadcast::Sender<UsageEvent>,
}

impl UsageBridge {
    pub fn new(provider: Box<dyn UsageProvider + Send + Sync>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self { provider, events }
    }

    pub fn from_kind(kind: ProviderKind, snapshot_path: Option<&Path>) -> Result<Self> {
        Ok(Self::new(create_provider(kind, snapshot_path)?))
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub fn is_supported(&self) -> bool {
        self.provider.is_supported()
    }

    pub async fn authorization_status(&self) -> Result<AuthorizationResult> {
        self.provider.authorization_status().await
    }

    /// Receive authorization changes and usage reloads. Dropping the
    /// receiver unsubscribes.
    pub fn subscribe(&self) -> broadcast::Receiver<UsageEvent> {
        self.events.subscribe()
    }

    fn publish(&self, event: UsageEvent) {
        match self.events.send(event) {
            Ok(receivers) => trace!("Published usage event to {} subscribers", receivers),
            Err(_) => trace!("Usage event dropped, no subscribers"),
        }
    }

    pub async fn authorize(&self) -> Result<AuthorizationResult> {
        if !self.provider.is_supported() {
            return Err(Error::NotSupported(format!(
                "{} provider cannot access usage data on this platform",
                self.provider.name()
            )));
        }

        let before = self.provider.authorization_status().await?.status;
        let result = self.provider.request_authorization().await?;
        if result.status != before {
            self.publish(UsageEvent::AuthorizationChanged { status: result.status });
        }
        if !result.granted {
            warn!("Authorization not granted by {} provider: {}", self.provider.name(), result.status);
        }
        Ok(result)
    }

    /// Let the user pick which apps to monitor. Requires prior authorization.
    pub async fn select_apps(&self) -> Result<PickerResult> {
        let status = self.provider.authorization_status().await?;
        if !status.granted {
            return Err(Error::NotAuthorized(format!(
                "authorize screen time access first (status: {})",
                status.status
            )));
        }

        let result = self.provider.present_activity_picker().await?;
        info!(
            "Selected {} apps and {} categories for monitoring",
            result.app_count, result.category_count
        );
        Ok(result)
    }

    /// Fetch a summary and annotate each app's share of the `range` total.
    pub async fn load_usage(&self, range: TimeRange) -> Result<UsageSummary> {
        debug!("Loading {} usage from {} provider", range, self.provider.name());

        let summary = self.provider.usage_summary(range).await?;
        let annotated = annotate_percentages(&summary, range);

        info!(
            "Loaded {} apps ({} minutes {}) from {} provider",
            annotated.apps.len(),
            annotated.totals.for_range(range),
            range,
            self.provider.name()
        );
        self.publish(UsageEvent::UsageUpdated { range, app_count: annotated.apps.len() });
        Ok(annotated)
    }

    pub async fn start_monitoring(&self) -> Result<MonitoringResult> {
        self.provider.start_monitoring().await
    }
}

pub fn create_provider(
    kind: ProviderKind,
    snapshot_path: Option<&Path>,
) -> Result<Box<dyn UsageProvider + Send + Sync>> {
    match kind {
        ProviderKind::Mock => Ok(Box::new(MockProvider::new())),
        ProviderKind::Snapshot => {
            let path = snapshot_path.ok_or_else(|| {
                Error::Provider("snapshot provider requires a snapshot_path".to_string())
            })?;
            Ok(Box::new(SnapshotProvider::new(path)))
        }
        ProviderKind::Unsupported => Ok(Box::new(UnsupportedProvider::new())),
    }
}
