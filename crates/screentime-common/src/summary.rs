use tracing::debug;

use crate::format::calculate_percentage;
use crate::types::{TimeRange, UsageRecord, UsageRow, UsageSummary, UsageTotals};

impl UsageTotals {
    pub fn from_rows(rows: &[UsageRow]) -> Self {
        rows.iter().fold(UsageTotals::default(), |acc, row| UsageTotals {
            today: acc.today.saturating_add(row.minutes_today),
            week: acc.week.saturating_add(row.minutes_7d),
            month: acc.month.saturating_add(row.minutes_30d),
        })
    }

    pub fn for_range(&self, range: TimeRange) -> u32 {
        match range {
            TimeRange::Today => self.today,
            TimeRange::SevenDays => self.week,
            TimeRange::ThirtyDays => self.month,
        }
    }
}

impl UsageSummary {
    /// Build a summary whose totals are the column sums of `apps`.
    pub fn from_apps(apps: Vec<UsageRow>, last_updated: impl Into<String>) -> Self {
        let totals = UsageTotals::from_rows(&apps);
        Self { apps, totals, last_updated: last_updated.into() }
    }
}

/// Copy of `summary` with every row's share of the `range` total filled in.
///
/// Uses the provider's totals as the denominator; a zero total gives every
/// row `0.0`.
pub fn annotate_percentages(summary: &UsageSummary, range: TimeRange) -> UsageSummary {
    let total = summary.totals.for_range(range);
    debug!("Annotating {} apps against {} total of {} minutes", summary.apps.len(), range, total);

    let apps = summary
        .apps
        .iter()
        .map(|row| UsageRow {
            percent_of_total: Some(calculate_percentage(
                row.minutes_for(range).into(),
                total.into(),
            )),
            ..row.clone()
        })
        .collect();

    UsageSummary { apps, totals: summary.totals, last_updated: summary.last_updated.clone() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> UsageSummary {
        UsageSummary::from_apps(
            vec![
                UsageRow::new("com.apple.MobileSMS", "Messages", 30, 100, 600),
                UsageRow::new("com.apple.mobilesafari", "Safari", 90, 300, 400),
            ],
            "2026-01-18T10:00:00Z",
        )
    }

    #[test]
    fn test_totals_from_rows() {
        let totals = summary().totals;
        assert_eq!(totals, UsageTotals { today: 120, week: 400, month: 1000 });
        assert_eq!(totals.for_range(TimeRange::SevenDays), 400);
    }

    #[test]
    fn test_annotate_today() {
        let annotated = annotate_percentages(&summary(), TimeRange::Today);
        assert_eq!(annotated.apps[0].percent_of_total, Some(25.0));
        assert_eq!(annotated.apps[1].percent_of_total, Some(75.0));
    }

    #[test]
    fn test_annotate_month() {
        let annotated = annotate_percentages(&summary(), TimeRange::ThirtyDays);
        let shares: Vec<f64> =
            annotated.apps.iter().map(|row| row.percent_of_total.unwrap()).collect();
        assert!((shares[0] - 60.0).abs() < 1e-9);
        assert!((shares[1] - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_annotate_leaves_input_untouched() {
        let original = summary();
        let annotated = annotate_percentages(&original, TimeRange::Today);
        assert!(original.apps.iter().all(|row| row.percent_of_total.is_none()));
        assert_eq!(annotated.totals, original.totals);
        assert_eq!(annotated.last_updated, original.last_updated);
    }

    #[test]
    fn test_annotate_zero_total() {
        let empty = UsageSummary::from_apps(
            vec![UsageRow::new("com.test.app", "Test", 0, 0, 0)],
            "2026-01-18T10:00:00Z",
        );
        let annotated = annotate_percentages(&empty, TimeRange::Today);
        assert_eq!(annotated.apps[0].percent_of_total, Some(0.0));
    }

    #[test]
    fn test_annotate_empty_summary() {
        let empty = UsageSummary::from_apps(vec![], "2026-01-18T10:00:00Z");
        let annotated = annotate_percentages(&empty, TimeRange::SevenDays);
        assert!(annotated.apps.is_empty());
    }
}
