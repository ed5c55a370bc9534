use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use screentime_common::{
    AuthorizationResult, AuthorizationStatus, MonitoringResult, PickerResult, Result, TimeRange,
    UsageRow, UsageSummary,
};
use tracing::debug;

use crate::UsageProvider;

/// Baseline `(bundle_id, app_name, today, 7d, 30d)` minutes before jitter.
const BASELINE_APPS: [(&str, &str, u32, u32, u32); 6] = [
    ("com.apple.MobileSMS", "Messages", 45, 320, 1250),
    ("com.apple.mobilemail", "Mail", 25, 180, 720),
    ("com.apple.mobilesafari", "Safari", 60, 420, 1680),
    ("com.instagram.ios", "Instagram", 35, 245, 980),
    ("com.spotify.client", "Spotify", 120, 840, 3360),
    ("com.apple.mobileslideshow", "Photos", 15, 105, 420),
];

/// Demo provider for environments without access to real usage data.
///
/// Every summary is the baseline catalog with each minute count scaled by a
/// random factor in `[0.8, 1.2)`.
pub struct MockProvider {
    seed: Option<u64>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Every summary from a seeded provider carries the same minutes.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn jitter<R: Rng>(rng: &mut R, minutes: u32) -> u32 {
    (f64::from(minutes) * rng.gen_range(0.8..1.2)).floor() as u32
}

#[async_trait]
impl UsageProvider for MockProvider {
    fn name(&self) -> &'static str {
        "Mock"
    }

    fn is_supported(&self) -> bool {
        true
    }

    async fn authorization_status(&self) -> Result<AuthorizationResult> {
        Ok(AuthorizationResult::from_status(AuthorizationStatus::Approved))
    }

    async fn request_authorization(&self) -> Result<AuthorizationResult> {
        debug!("Mock provider grants authorization without prompting");
        Ok(AuthorizationResult::from_status(AuthorizationStatus::Approved))
    }

    async fn present_activity_picker(&self) -> Result<PickerResult> {
        debug!("Mock provider uses its predefined app set");
        Ok(PickerResult { app_count: BASELINE_APPS.len() as u32, category_count: 0 })
    }

    async fn usage_summary(&self, range: TimeRange) -> Result<UsageSummary> {
        debug!("Generating mock usage summary for {}", range);

        let mut rng = self.rng();
        let apps = BASELINE_APPS
            .iter()
            .map(|(bundle_id, app_name, today, week, month)| {
                UsageRow::new(
                    *bundle_id,
                    *app_name,
                    jitter(&mut rng, *today),
                    jitter(&mut rng, *week),
                    jitter(&mut rng, *month),
                )
            })
            .collect();

        Ok(UsageSummary::from_apps(apps, Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)))
    }

    async fn start_monitoring(&self) -> Result<MonitoringResult> {
        debug!("Mock provider has nothing to monitor");
        Ok(MonitoringResult { success: false })
    }
}
