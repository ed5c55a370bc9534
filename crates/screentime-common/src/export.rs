use chrono::NaiveDate;
use tracing::debug;

use crate::format::round_percent;
use crate::types::{TimeRange, UsageRecord};

pub const CSV_HEADERS: [&str; 6] = [
    "App Name",
    "Bundle ID",
    "Today (minutes)",
    "7 Days (minutes)",
    "30 Days (minutes)",
    "% of Total",
];

/// Serialize usage records to CSV, every cell wrapped in double quotes.
///
/// Cell text is not escaped: an `app_name` containing `"` produces a line
/// that strict CSV readers will reject. Use [`generate_csv_escaped`] when the
/// output must be RFC 4180 compliant.
pub fn generate_csv<T: UsageRecord>(data: &[T]) -> String {
    render(data, |cell| format!("\"{}\"", cell))
}

/// Same layout as [`generate_csv`], with embedded quotes doubled.
pub fn generate_csv_escaped<T: UsageRecord>(data: &[T]) -> String {
    render(data, |cell| format!("\"{}\"", cell.replace('"', "\"\"")))
}

/// Default file name for an export, e.g. `screen-time-7d-2026-01-18.csv`.
pub fn export_file_name(range: TimeRange, date: NaiveDate) -> String {
    format!("screen-time-{}-{}.csv", range, date.format("%Y-%m-%d"))
}

fn render<T, F>(data: &[T], quote: F) -> String
where
    T: UsageRecord,
    F: Fn(&str) -> String,
{
    let mut lines = Vec::with_capacity(data.len() + 1);
    lines.push(join_cells(CSV_HEADERS.iter().map(|h| quote(h))));

    for record in data {
        let cells = [
            record.app_name().to_string(),
            record.bundle_id().to_string(),
            record.minutes_today().to_string(),
            record.minutes_7d().to_string(),
            record.minutes_30d().to_string(),
            format_percent_cell(record.percent_of_total()),
        ];
        lines.push(join_cells(cells.iter().map(|c| quote(c))));
    }

    debug!("Generated CSV with {} data rows", data.len());
    lines.join("\n")
}

fn join_cells(cells: impl Iterator<Item = String>) -> String {
    cells.collect::<Vec<_>>().join(",")
}

fn format_percent_cell(percent: Option<f64>) -> String {
    match percent {
        Some(p) => format!("{:.1}%", round_percent(p)),
        None => "0%".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::calculate_percentage;
    use crate::types::UsageRow;

    const HEADER: &str = "\"App Name\",\"Bundle ID\",\"Today (minutes)\",\"7 Days (minutes)\",\"30 Days (minutes)\",\"% of Total\"";

    #[test]
    fn test_generate_csv_format() {
        let data = vec![UsageRow::new("com.test.app", "Test App", 30, 210, 900).with_percent(15.5)];

        let csv = generate_csv(&data);
        let lines: Vec<&str> = csv.split('\n').collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "\"Test App\",\"com.test.app\",\"30\",\"210\",\"900\",\"15.5%\"");
    }

    #[test]
    fn test_generate_csv_empty_input_is_header_only() {
        let csv = generate_csv::<UsageRow>(&[]);
        assert_eq!(csv, HEADER);
        assert_eq!(csv.split('\n').count(), 1);
    }

    #[test]
    fn test_missing_percent_renders_zero() {
        let data = vec![UsageRow::new("com.apple.mobilemail", "Mail", 25, 180, 720)];
        let csv = generate_csv(&data);
        assert!(csv.ends_with("\"0%\""));
    }

    #[test]
    fn test_zero_percent_keeps_decimal() {
        let data = vec![UsageRow::new("com.apple.mobilemail", "Mail", 0, 0, 0).with_percent(0.0)];
        let csv = generate_csv(&data);
        assert!(csv.ends_with("\"0.0%\""));
    }

    #[test]
    fn test_percent_halves_round_up() {
        let data = vec![
            UsageRow::new("com.a.b", "A", 1, 1, 1).with_percent(calculate_percentage(1.0, 400.0)),
            UsageRow::new("com.c.d", "C", 5, 5, 5).with_percent(calculate_percentage(5.0, 400.0)),
            UsageRow::new("com.e.f", "E", 1, 1, 1).with_percent(12.34),
        ];
        let csv = generate_csv(&data);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[1], "\"A\",\"com.a.b\",\"1\",\"1\",\"1\",\"0.3%\"");
        assert!(lines[2].ends_with("\"1.3%\""));
        assert!(lines[3].ends_with("\"12.3%\""));
    }

    #[test]
    fn test_rows_keep_input_order() {
        let data = vec![
            UsageRow::new("com.b.app", "Beta", 1, 2, 3),
            UsageRow::new("com.a.app", "Alpha", 4, 5, 6),
        ];
        let csv = generate_csv(&data);
        let lines: Vec<&str> = csv.lines().collect();
        assert!(lines[1].starts_with("\"Beta\""));
        assert!(lines[2].starts_with("\"Alpha\""));
    }

    #[test]
    fn test_plain_export_does_not_escape_quotes() {
        let data = vec![UsageRow::new("com.test.app", "Say \"Hi\", World", 1, 1, 1)];
        let csv = generate_csv(&data);
        assert!(csv.contains("\"Say \"Hi\", World\""));
    }

    #[test]
    fn test_escaped_export_doubles_quotes() {
        let data = vec![UsageRow::new("com.test.app", "Say \"Hi\"", 1, 1, 1).with_percent(100.0)];
        let csv = generate_csv_escaped(&data);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "\"Say \"\"Hi\"\"\",\"com.test.app\",\"1\",\"1\",\"1\",\"100.0%\"");
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 18).unwrap();
        assert_eq!(export_file_name(TimeRange::SevenDays, date), "screen-time-7d-2026-01-18.csv");
        assert_eq!(export_file_name(TimeRange::Today, date), "screen-time-today-2026-01-18.csv");
    }
}
