pub mod mock;
pub mod snapshot;
pub mod unsupported;

pub use mock::MockProvider;
pub use snapshot::SnapshotProvider;
pub use unsupported::UnsupportedProvider;
