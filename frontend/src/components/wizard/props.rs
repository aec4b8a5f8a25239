//! Properties for the upload wizard component.

use yew::prelude::*;

use crate::session::SessionProvider;

/// Configuration passed by the hosting page.
#[derive(Properties, PartialEq, Clone)]
pub struct UploadWizardProps {
    /// Session capability the wizard reads the actor and bearer token from.
    /// Injected here instead of read ambiently so hosts (and tests) control it.
    pub session: SessionProvider,

    /// When `Some(id)`, the wizard edits an existing project: the draft is
    /// pre-populated from `GET /api/projects/{id}` on first render. Stored
    /// images cannot be turned back into browser file handles, so the images
    /// step starts empty and newly selected files replace them on submit.
    ///
    /// When `None` (the default) the wizard starts from an empty draft.
    #[prop_or_default]
    pub project_id: Option<String>,
}
