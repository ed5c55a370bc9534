use anyhow::{bail, Result};
use screentime_common::is_valid_bundle_id;

/// Print a verdict per identifier; fails when any is malformed.
pub fn bundle_ids(ids: &[String]) -> Result<()> {
    let invalid = report(ids);
    for line in &invalid.lines {
        println!("{}", line);
    }

    if invalid.count > 0 {
        bail!("{} of {} bundle identifiers are invalid", invalid.count, ids.len());
    }
    Ok(())
}

struct Report {
    lines: Vec<String>,
    count: usize,
}

fn report(ids: &[String]) -> Report {
    let mut count = 0;
    let lines = ids
        .iter()
        .map(|id| {
            if is_valid_bundle_id(id) {
                format!("valid    {}", id)
            } else {
                count += 1;
                format!("invalid  {}", id)
            }
        })
        .collect();

    Report { lines, count }
}
