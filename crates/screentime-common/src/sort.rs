use std::cmp::Ordering;

use feruca::Collator;

use crate::types::{SortDirection, SortValue, Sortable, UsageField};

/// Return a copy of `data` ordered by `field`.
///
/// Strings compare by root-locale collation (accents and case are secondary
/// to the base letters, lowercase before uppercase), numbers numerically. Pairs of
/// mismatched or missing values compare equal. The sort is stable, so ties
/// keep their input order.
pub fn sort_usage_data<T>(data: &[T], field: UsageField, direction: SortDirection) -> Vec<T>
where
    T: Sortable + Clone,
{
    let mut sorted = data.to_vec();
    let mut collator = Collator::default();
    let compare = |a: &T, b: &T| {
        let ordering = compare_values(&mut collator, a.sort_value(field), b.sort_value(field));
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    };

    if is_totally_ordered(data, field) {
        sorted.sort_by(compare);
    } else {
        // "Equal" for mixed values is not transitive, which slice::sort_by
        // does not tolerate.
        insertion_sort_by(&mut sorted, compare);
    }

    sorted
}

fn compare_values(collator: &mut Collator, a: SortValue<'_>, b: SortValue<'_>) -> Ordering {
    match (a, b) {
        (SortValue::Text(a), SortValue::Text(b)) => collator.collate(a, b),
        (SortValue::Number(a), SortValue::Number(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

fn is_totally_ordered<T: Sortable>(data: &[T], field: UsageField) -> bool {
    let mut values = data.iter().map(|item| item.sort_value(field));
    match values.next() {
        None => true,
        Some(SortValue::Text(_)) => values.all(|v| matches!(v, SortValue::Text(_))),
        Some(SortValue::Number(n)) if !n.is_nan() => {
            values.all(|v| matches!(v, SortValue::Number(n) if !n.is_nan()))
        }
        Some(_) => false,
    }
}

fn insertion_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}
