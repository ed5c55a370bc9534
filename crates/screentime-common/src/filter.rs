use crate::types::{TimeRange, UsageRecord};

/// Keep the records that match `search_text` and reach `min_minutes` in `range`.
///
/// The search is a case-insensitive substring match on the app name or the
/// bundle id; an empty search matches everything. Input order is preserved.
pub fn filter_usage_data<T>(
    data: &[T],
    search_text: &str,
    min_minutes: u32,
    range: TimeRange,
) -> Vec<T>
where
    T: UsageRecord + Clone,
{
    let needle = search_text.to_lowercase();

    data.iter()
        .filter(|record| {
            matches_search(*record, &needle) && record.minutes_for(range) >= min_minutes
        })
        .cloned()
        .collect()
}

fn matches_search<T: UsageRecord>(record: &T, needle: &str) -> bool {
    needle.is_empty()
        || record.app_name().to_lowercase().contains(needle)
        || record.bundle_id().to_lowercase().contains(needle)
}
