//! Browser fetch of the quiz document.
use matchquiz_core::{DataLoadError, QuizDocument};

use crate::dom;

/// Fetch and validate the quiz document from the static assets.
///
/// Each screen calls this on mount; nothing is cached beyond what the browser does.
///
/// # Errors
///
/// Returns [`DataLoadError::Fetch`] on network or HTTP failures and the parse or
/// validation variants when the payload is not a valid quiz document.
#[allow(clippy::future_not_send)]
pub async fn fetch_document() -> Result<QuizDocument, DataLoadError> {
    let url = crate::paths::data_url();
    let response = dom::fetch_response(&url)
        .await
        .map_err(|err| DataLoadError::Fetch(dom::js_error_message(&err)))?;

    if !response.ok() {
        return Err(DataLoadError::Fetch(format!(
            "HTTP {status}: {status_text}",
            status = response.status(),
            status_text = response.status_text()
        )));
    }

    let text = dom::response_text(&response)
        .await
        .map_err(|err| DataLoadError::Fetch(dom::js_error_message(&err)))?;

    let document = QuizDocument::from_json(&text)?;
    log::debug!(
        "loaded quiz document: {} questions, {} sites",
        document.quiz.questions.len(),
        document.sites.len()
    );
    Ok(document)
}
