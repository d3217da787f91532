pub mod models;

pub use models::{AnalysisResult, BrokenLink, LinkStatus, ResultId};
