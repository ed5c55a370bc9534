use anyhow::{bail, Context, Result};
use chrono::Local;
use screentime_common::{export_file_name, generate_csv, generate_csv_escaped, UsageRow};
use screentime_provider::UsageBridge;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::UsageQuery;
use crate::config::CtlConfig;

/// Where the CSV goes.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportTarget {
    Stdout,
    File(PathBuf),
    /// Generated file name inside this directory
    Directory(PathBuf),
}

pub async fn run(
    bridge: &UsageBridge,
    query: &UsageQuery,
    config: &CtlConfig,
    target: ExportTarget,
) -> Result<()> {
    let summary = bridge.load_usage(query.range).await?;
    if summary.apps.is_empty() {
        bail!("No usage data available to export");
    }

    let rows = query.apply(&summary.apps);
    let content = render_csv(&rows, config.export.rfc4180);

    match target {
        ExportTarget::Stdout => println!("{}", content),
        ExportTarget::File(path) => {
            write_csv(&path, &content)?;
            println!("Exported {} apps to: {}", rows.len(), path.display());
        }
        ExportTarget::Directory(dir) => {
            let path = dir.join(export_file_name(query.range, Local::now().date_naive()));
            write_csv(&path, &content)?;
            println!("Exported {} apps to: {}", rows.len(), path.display());
        }
    }

    Ok(())
}

pub fn render_csv(rows: &[UsageRow], rfc4180: bool) -> String {
    if rfc4180 {
        generate_csv_escaped(rows)
    } else {
        generate_csv(rows)
    }
}

fn write_csv(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create export directory: {:?}", parent))?;
    }

    fs::write(path, content).with_context(|| format!("Failed to write export file: {:?}", path))?;
    info!("Wrote {} bytes of CSV to {:?}", content.len(), path);
    Ok(())
}
