//! The compose module builds the prompt sent to the inference service.

use crate::QueryRequest;
use crate::constants::{PROMPT_CONNECTIVE, PROMPT_INSTRUCTION};

/// Composes the request string for a question about an uploaded document.
///
/// The instruction, question, connective and the full document text are
/// joined with single spaces. The document is never truncated, so the only
/// size limit is the one the inference service enforces.
///
/// # Arguments
///
/// * `request` - The question and the decoded document text
///
/// # Returns
///
/// Returns the prompt, e.g.
/// `Answer the following question What is the max credits? given the following data A,B\n1,2`
pub fn compose_prompt(request: &QueryRequest) -> String {
    format!(
        "{PROMPT_INSTRUCTION} {} {PROMPT_CONNECTIVE} {}",
        request.user_question, request.document_text
    )
}
