/// Render a minute count as a compact duration: `45m`, `2h`, `2h 5m`.
pub fn format_minutes(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{}m", minutes);
    }

    let hours = minutes / 60;
    let remaining = minutes % 60;

    if remaining == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, remaining)
    }
}

/// Share of `total` taken by `value`, in percent and unrounded.
///
/// A zero total yields `0.0` rather than a division error.
pub fn calculate_percentage(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    (value / total) * 100.0
}

/// Round a percentage to one decimal place, halves away from zero.
pub fn round_percent(percent: f64) -> f64 {
    (percent * 10.0).round() / 10.0
}
