use rand::Rng;

use crate::types::UsageRow;

pub const DEFAULT_MOCK_APP_COUNT: usize = 10;

/// Well-known apps the generator draws from, as `(bundle_id, app_name)`.
pub const SAMPLE_APPS: [(&str, &str); 10] = [
    ("com.apple.MobileSMS", "Messages"),
    ("com.apple.mobilemail", "Mail"),
    ("com.apple.mobilesafari", "Safari"),
    ("com.instagram.ios", "Instagram"),
    ("com.spotify.client", "Spotify"),
    ("com.apple.mobileslideshow", "Photos"),
    ("com.twitter.twitter", "Twitter"),
    ("com.facebook.Facebook", "Facebook"),
    ("com.google.Gmail", "Gmail"),
    ("com.netflix.Netflix", "Netflix"),
];

/// Synthetic rows for demos and tests, using the thread-local RNG.
///
/// Returns at most [`SAMPLE_APPS`]`.len()` rows.
pub fn generate_mock_data(count: usize) -> Vec<UsageRow> {
    generate_mock_data_with_rng(count, &mut rand::thread_rng())
}

/// Like [`generate_mock_data`] with a caller-supplied RNG.
pub fn generate_mock_data_with_rng<R: Rng>(count: usize, rng: &mut R) -> Vec<UsageRow> {
    SAMPLE_APPS
        .iter()
        .take(count)
        .map(|(bundle_id, app_name)| {
            UsageRow::new(
                *bundle_id,
                *app_name,
                rng.gen_range(5..185),
                rng.gen_range(50..1250),
                rng.gen_range(200..5000),
            )
        })
        .collect()
}
