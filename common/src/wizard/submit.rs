//! Interpretation of the submission response, kept pure so the flow can be
//! exercised without a browser. The actual POST lives in the frontend.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::model::CreatedProject;

/// Fallback shown when the server gave no usable message (or no response).
pub const GENERIC_SUBMIT_ERROR: &str =
    "Something went wrong while submitting your project. Please try again.";

/// What a finished submission attempt means for the wizard.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 2xx: the draft is done; clear it and navigate to the listing.
    Created(CreatedProject),
    /// The server answered with an error body; the draft is kept for retry.
    Rejected(String),
    /// No usable response at all (network failure); the draft is kept.
    Failed,
}

impl SubmitOutcome {
    /// User-facing error text, or `None` on success.
    pub fn error_text(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Created(_) => None,
            SubmitOutcome::Rejected(message) => Some(message),
            SubmitOutcome::Failed => Some(GENERIC_SUBMIT_ERROR),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    /// `{"errors": {"field": ["msg", ...]}}` shape of 4xx validation bodies.
    #[serde(default)]
    errors: Option<BTreeMap<String, Vec<String>>>,
}

/// Maps an HTTP status and body into a [`SubmitOutcome`]. A 2xx with an
/// unparseable body still counts as created (the server accepted the
/// project); any other status falls back to the generic message when the
/// body carries neither `message` nor `errors`.
pub fn interpret_response(status: u16, body: &str) -> SubmitOutcome {
    if (200..300).contains(&status) {
        let created = serde_json::from_str::<CreatedProject>(body).unwrap_or_default();
        return SubmitOutcome::Created(created);
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message.filter(|m| !m.trim().is_empty()) {
            return SubmitOutcome::Rejected(message);
        }
        if let Some(errors) = parsed.errors {
            let joined: Vec<String> = errors.into_values().flatten().collect();
            if !joined.is_empty() {
                return SubmitOutcome::Rejected(joined.join("; "));
            }
        }
    }
    SubmitOutcome::Rejected(GENERIC_SUBMIT_ERROR.to_string())
}
