pub mod pipeline;
pub mod sentiment;

pub use pipeline::{CleaningPipeline, CleaningReport};
pub use sentiment::{LexiconSentiment, SentimentModel};
