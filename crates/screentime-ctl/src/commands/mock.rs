use anyhow::{Context, Result};
use screentime_common::generate_mock_data;

pub fn print(count: usize) -> Result<()> {
    let rows = generate_mock_data(count);
    let json = serde_json::to_string_pretty(&rows).context("Failed to serialize mock data")?;
    println!("{}", json);
    Ok(())
}
