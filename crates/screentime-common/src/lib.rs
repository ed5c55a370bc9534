pub mod bundle_id;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod format;
pub mod mock;
pub mod sort;
pub mod summary;
pub mod types;

pub use bundle_id::is_valid_bundle_id;
pub use error::{Error, Result};
pub use export::{export_file_name, generate_csv, generate_csv_escaped};
pub use filter::filter_usage_data;
pub use format::{calculate_percentage, format_minutes, round_percent};
pub use mock::{generate_mock_data, generate_mock_data_with_rng, DEFAULT_MOCK_APP_COUNT};
pub use sort::sort_usage_data;
pub use summary::annotate_percentages;
pub use types::*;
