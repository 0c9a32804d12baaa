//! The ask module answers a question about an uploaded CSV file using an LLM model.

use std::fs;
use std::path::Path;

use llm::chat::{ChatMessage, ChatProvider};
use log::{debug, info};

use crate::compose::compose_prompt;
use crate::error::{CatalogError, Result};
use crate::{QueryRequest, QueryResponse};

/// Shared data for answering questions
pub struct AskContext<'a> {
    /// LLM model that generates the answer
    pub model: &'a dyn ChatProvider,
}

/// Decodes uploaded bytes as UTF-8 text. No other encoding is tried.
///
/// # Errors
///
/// Returns [`CatalogError::Decode`] if the bytes are not valid UTF-8.
pub fn decode_upload(bytes: Vec<u8>) -> Result<String> {
    Ok(String::from_utf8(bytes)?)
}

/// Reads an uploaded file and decodes it. Only `.csv` files are accepted; the
/// content itself is treated as opaque text.
///
/// # Errors
///
/// Returns an error if:
/// * The file does not have a `.csv` extension
/// * The file cannot be read
/// * The content is not valid UTF-8
pub fn read_upload(path: &Path) -> Result<String> {
    let is_csv = path
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(CatalogError::UnsupportedUpload {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|e| CatalogError::io(path, e))?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    decode_upload(bytes)
}

/// Sends the composed prompt to the model and returns its answer as is.
///
/// # Arguments
///
/// * `request` - The decoded document and the user's question
/// * `ctx` - Context containing the model
///
/// # Errors
///
/// Returns [`CatalogError::Inference`] if the chat request fails.
pub async fn answer_query(request: &QueryRequest, ctx: &AskContext<'_>) -> Result<QueryResponse> {
    let prompt = compose_prompt(request);
    info!(
        "Asking model about {} bytes of data",
        request.document_text.len()
    );

    let messages = vec![ChatMessage::user().content(prompt).build()];

    let response = ctx
        .model
        .chat(&messages)
        .await
        .map_err(|err| CatalogError::Inference(format!("LLM error: {err}.")))?;

    let answer_text = response.text().unwrap_or_else(|| response.to_string());
    debug!("Received {} bytes of answer", answer_text.len());

    Ok(QueryResponse { answer_text })
}

/// Reads `upload`, then answers `question` about its content.
///
/// # Errors
///
/// Returns an error if the upload cannot be read or decoded, or the model fails.
pub async fn ask(upload: &Path, question: &str, ctx: &AskContext<'_>) -> Result<QueryResponse> {
    let request = QueryRequest {
        document_text: read_upload(upload)?,
        user_question: question.to_string(),
    };

    answer_query(&request, ctx).await
}
