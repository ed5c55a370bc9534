use anyhow::Result;
use screentime_common::{
    format_minutes, round_percent, SortDirection, UsageField, UsageRow, UsageTotals,
};
use screentime_provider::UsageBridge;

use super::UsageQuery;

const NAME_WIDTH: usize = 28;

pub async fn show(bridge: &UsageBridge, query: &UsageQuery) -> Result<()> {
    let summary = bridge.load_usage(query.range).await?;
    let rows = query.apply(&summary.apps);

    println!("Screen Time ({})", query.range.label());
    println!("{}", "=".repeat(66));
    print!("{}", render_table(&rows, query.sort_field, query.direction));
    println!("{}", "-".repeat(66));
    println!("{}", render_totals(&summary.totals));
    println!();
    println!(
        "{} of {} apps shown. Last updated: {}",
        rows.len(),
        summary.apps.len(),
        summary.last_updated
    );

    Ok(())
}

/// Header plus one line per row, each terminated by a newline.
pub fn render_table(rows: &[UsageRow], sort_field: UsageField, direction: SortDirection) -> String {
    let heading = |label: &str, field: UsageField| {
        if field == sort_field {
            format!("{} {}", label, direction.arrow())
        } else {
            label.to_string()
        }
    };

    let mut out = format!(
        "{:<width$} {:>8} {:>8} {:>8} {:>8}\n",
        heading("App", UsageField::AppName),
        heading("Today", UsageField::MinutesToday),
        heading("7d", UsageField::Minutes7d),
        heading("30d", UsageField::Minutes30d),
        heading("%", UsageField::PercentOfTotal),
        width = NAME_WIDTH
    );

    if rows.is_empty() {
        out.push_str("No apps match your current filters.\n");
        return out;
    }

    for row in rows {
        out.push_str(&format!(
            "{:<width$} {:>8} {:>8} {:>8} {:>7.1}%\n",
            truncate_str(&row.app_name, NAME_WIDTH),
            format_minutes(row.minutes_today),
            format_minutes(row.minutes_7d),
            format_minutes(row.minutes_30d),
            round_percent(row.percent_of_total.unwrap_or(0.0)),
            width = NAME_WIDTH
        ));
    }

    out
}

pub fn render_totals(totals: &UsageTotals) -> String {
    format!(
        "{:<width$} {:>8} {:>8} {:>8}",
        "Total",
        format_minutes(totals.today),
        format_minutes(totals.week),
        format_minutes(totals.month),
        width = NAME_WIDTH
    )
}

fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_rows() {
        let rows = vec![
            UsageRow::new("com.spotify.client", "Spotify", 120, 840, 3360).with_percent(66.666),
            UsageRow::new("com.apple.mobilemail", "Mail", 25, 180, 720),
        ];

        let table = render_table(&rows, UsageField::MinutesToday, SortDirection::Desc);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Today ↓"));
        assert!(!lines[0].contains("App ↓"));
        assert!(lines[1].starts_with("Spotify"));
        assert!(lines[1].contains("2h"));
        assert!(lines[1].contains("14h"));
        assert!(lines[1].contains("56h"));
        assert!(lines[1].ends_with("66.7%"));
        assert!(lines[2].contains("25m"));
        assert!(lines[2].contains("3h"));
        assert!(lines[2].ends_with("0.0%"));
    }

    #[test]
    fn test_render_rounds_half_percent_up() {
        let rows = vec![UsageRow::new("com.apple.Maps", "Maps", 1, 1, 1).with_percent(0.25)];
        let table = render_table(&rows, UsageField::AppName, SortDirection::Asc);
        assert!(table.lines().nth(1).unwrap().ends_with("0.3%"));
    }

    #[test]
    fn test_render_empty() {
        let table = render_table(&[], UsageField::AppName, SortDirection::Asc);
        assert!(table.contains("App ↑"));
        assert!(table.contains("No apps match your current filters."));
    }

    #[test]
    fn test_render_totals() {
        let totals = UsageTotals { today: 90, week: 600, month: 2405 };
        let line = render_totals(&totals);
        assert!(line.starts_with("Total"));
        assert!(line.contains("1h 30m"));
        assert!(line.contains("10h"));
        assert!(line.contains("40h 5m"));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Safari", 10), "Safari");
        assert_eq!(truncate_str("A very long application name", 10), "A very lo…");
    }
}
