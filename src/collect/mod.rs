pub mod collector;
pub mod search;
pub mod archive;

pub use collector::{collect_to_csv, Collector};
pub use search::{SearchCollector, SearchPlan};
pub use archive::{ArchiveCollector, ArchivePlan};
