//! The catalogqa library provides two pipelines: extracting course entries from
//! a catalog page into a CSV file, and answering questions about an uploaded
//! CSV file with an LLM model.

pub mod ask;
pub mod catalog;
pub mod clause;
pub mod compose;
pub mod config;
pub mod constants;
pub mod error;
pub mod locate;
pub mod parse;
pub mod scrape;

/// A question about an uploaded document. Lives for one interaction.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct QueryRequest {
    /// Decoded file content, passed to the model in full.
    pub document_text: String,
    /// The user's free-text question.
    pub user_question: String,
}

/// The model's answer, displayed once.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct QueryResponse {
    pub answer_text: String,
}

pub use ask::{answer_query, decode_upload, read_upload};
pub use catalog::{CatalogTable, CourseRecord};
pub use compose::compose_prompt;
pub use config::InferenceConfig;
pub use error::CatalogError;
pub use parse::extract_courses;
pub use scrape::{ScrapeReport, persist_catalog, scrape_catalog};
