pub mod config;
pub mod error;
pub mod models;
pub mod reddit;
pub mod collect;
pub mod cleaning;
pub mod generator;
pub mod dashboard;
pub mod storage;

pub use config::{CleanConfig, Config, StudyWindow};
pub use error::{Error, Result};
pub use reddit::{ArchiveClient, RedditClient};
pub use collect::{ArchiveCollector, ArchivePlan, Collector, SearchCollector, SearchPlan};
pub use cleaning::{CleaningPipeline, CleaningReport, LexiconSentiment, SentimentModel};
pub use generator::{DatasetGenerator, GeneratorConfig};
pub use dashboard::{Dashboard, DashboardFilters, DashboardVariant};
