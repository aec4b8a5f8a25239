//! Per-step validation, run on every forward transition.

use regex::Regex;

use super::draft::Draft;
use super::file::FileHandle;
use super::steps::Step;

/// Knobs for behavior the product deliberately left soft.
///
/// Defaults match the shipped behavior: an ill-shaped video URL only warns,
/// and incomplete team member rows are allowed through to the server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationPolicy {
    /// Make a non-YouTube video URL block the detail step instead of warning.
    pub strict_video_url: bool,
    /// Require every team member row to have all three fields filled.
    pub require_complete_team: bool,
}

/// Result of validating one step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepCheck {
    pub ok: bool,
    /// Blocking message shown when `ok` is false.
    pub message: Option<String>,
    /// Non-blocking warning rendered inline (currently only the video URL).
    pub warning: Option<String>,
}

impl StepCheck {
    fn pass() -> Self {
        Self {
            ok: true,
            message: None,
            warning: None,
        }
    }

    fn fail(message: &str) -> Self {
        Self {
            ok: false,
            message: Some(message.to_string()),
            warning: None,
        }
    }
}

/// Returns whether `url` has one of the accepted YouTube shapes: a marker
/// (`youtu.be/`, `/v/`, `/u/<word>/`, `/embed/`, `watch?v=`, `&v=`) followed
/// by exactly an 11-character video id.
pub fn is_youtube_url(url: &str) -> bool {
    let re = Regex::new(
        r"(youtu\.be/|/v/|/u/\w+/|/embed/|watch\?v=|&v=)[A-Za-z0-9_-]{11}([^A-Za-z0-9_-]|$)",
    )
    .unwrap();
    re.is_match(url)
}

/// Inline warning for a present but ill-shaped video URL, or `None`.
pub fn video_url_warning(url: &str) -> Option<String> {
    if url.trim().is_empty() || is_youtube_url(url) {
        None
    } else {
        Some("This does not look like a YouTube link; the video may not play.".to_string())
    }
}

/// Validates `step` against the draft. Stateless; safe to call from the view
/// on every render as well as from the sequencer.
pub fn validate<F: FileHandle>(
    draft: &Draft<F>,
    step: Step,
    policy: &ValidationPolicy,
) -> StepCheck {
    match step {
        Step::Detail => {
            if draft.title.trim().is_empty()
                || draft.description.trim().is_empty()
                || draft.video_url.trim().is_empty()
                || draft.technology.is_empty()
                || draft.category_id.trim().is_empty()
            {
                return StepCheck::fail(
                    "Please fill in the title, description, video link, technologies and category.",
                );
            }
            let warning = video_url_warning(&draft.video_url);
            if policy.strict_video_url {
                if let Some(text) = warning {
                    return StepCheck::fail(&text);
                }
            }
            StepCheck {
                warning,
                ..StepCheck::pass()
            }
        }
        Step::Images => {
            if draft.images.is_empty() {
                return StepCheck::fail("Add at least one screenshot of your project.");
            }
            if draft.images.iter().any(|e| e.name.trim().is_empty()) {
                return StepCheck::fail("Give every image a name before continuing.");
            }
            StepCheck::pass()
        }
        Step::Team => {
            if policy.require_complete_team
                && draft.team_members.iter().any(|m| !m.is_complete())
            {
                return StepCheck::fail(
                    "Every team member needs a name, a class and a position.",
                );
            }
            StepCheck::pass()
        }
    }
}
