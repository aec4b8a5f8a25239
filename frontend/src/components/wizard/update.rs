//! Update function for the upload wizard, Elm-style: receives the current
//! state, the `Context` and a `Msg`, mutates the state, and returns whether
//! the view should re-render.
//!
//! Key behaviors
//! - Scalar and collection edits go straight to the draft in `common`;
//!   validation only runs on forward transitions.
//! - Selected files are size/count checked by the draft at add time and read
//!   asynchronously into base64 thumbnails.
//! - The terminal `Next` assembles the multipart payload and POSTs it with
//!   the bearer token from the injected session; success clears the draft
//!   and navigates to the listing, failure opens the error modal and keeps
//!   the draft for a manual retry.

use common::wizard::{assemble, interpret_response, Advance, SubmitOutcome};
use gloo_console::error;
use gloo_file::futures::read_as_bytes;
use gloo_file::Blob;
use gloo_net::http::Request;
use uuid::Uuid;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::sheets::modal_sheet::{close_modal, open_modal};

use super::helpers::{data_url_from_bytes, form_data_from_parts, show_toast, API_BASE};
use super::messages::Msg;
use super::state::UploadWizardComponent;
use super::webfile::WebFile;

/// Central update function for the wizard component.
pub fn update(
    component: &mut UploadWizardComponent,
    ctx: &Context<UploadWizardComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::CategoriesLoaded(categories) => {
            component.categories = categories;
            true
        }
        Msg::CategoriesFailed => {
            show_toast("Could not load categories. Reload the page to try again.");
            true
        }
        Msg::ProjectLoaded(detail) => {
            component.wizard.draft_mut().populate_from(&detail);
            component.rebase_dirty_tracking();
            true
        }
        Msg::UpdateScalar(field, value) => {
            component.wizard.draft_mut().set_scalar(field, &value);
            component.sync_dirty_flag();
            true
        }
        Msg::SetDescriptionTab(tab) => {
            component.description_tab = tab;
            true
        }
        Msg::TechnologyInput(value) => {
            // Typing the separator commits the tag and empties the buffer.
            if value.ends_with(',') {
                if component.wizard.draft_mut().commit_technology(&value) {
                    component.sync_dirty_flag();
                }
                component.tech_input.clear();
            } else {
                component.tech_input = value;
            }
            true
        }
        Msg::CommitTechnology => {
            let raw = component.tech_input.clone();
            if component.wizard.draft_mut().commit_technology(&raw) {
                component.sync_dirty_flag();
            }
            component.tech_input.clear();
            true
        }
        Msg::RemoveTechnology(index) => {
            component.wizard.draft_mut().remove_technology(index);
            component.sync_dirty_flag();
            true
        }
        Msg::OpenFileDialog => {
            if let Some(input) = component.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FilesSelected(files) => {
            for file in files {
                match component.wizard.draft_mut().add_image(WebFile(file.clone())) {
                    Ok(()) => {
                        let image_id = Uuid::new_v4().to_string();
                        component.image_ids.push(image_id.clone());
                        read_thumbnail(ctx, image_id, file);
                    }
                    Err(err) => show_toast(&err.to_string()),
                }
            }
            component.sync_dirty_flag();
            true
        }
        Msg::ThumbnailReady { image_id, data_url } => {
            // A read finishing after the image was removed is dropped.
            if component.image_ids.contains(&image_id) {
                component.thumbnails.insert(image_id, data_url);
                return true;
            }
            false
        }
        Msg::SetImageName(index, name) => {
            component.wizard.draft_mut().set_image_name(index, &name);
            component.sync_dirty_flag();
            true
        }
        Msg::RemoveImage(index) => {
            component.wizard.draft_mut().remove_image(index);
            if index < component.image_ids.len() {
                let image_id = component.image_ids.remove(index);
                component.thumbnails.remove(&image_id);
            }
            component.sync_dirty_flag();
            true
        }
        Msg::AddTeamMember => {
            component.wizard.draft_mut().add_team_member();
            true
        }
        Msg::RemoveTeamMember(index) => {
            component.wizard.draft_mut().remove_team_member(index);
            component.sync_dirty_flag();
            true
        }
        Msg::SetTeamMemberField(index, field, value) => {
            component
                .wizard
                .draft_mut()
                .set_team_member_field(index, field, &value);
            component.sync_dirty_flag();
            true
        }
        Msg::ToggleIncludeUploader(on) => {
            component.wizard.draft_mut().include_uploader = on;
            component.sync_dirty_flag();
            true
        }
        Msg::Next => {
            component.blocked = None;
            match component.wizard.next() {
                Advance::Moved(_) => {}
                Advance::Blocked(message) => component.blocked = Some(message),
                Advance::Submit => begin_submit(component, ctx),
            }
            true
        }
        Msg::Prev => {
            component.blocked = None;
            component.wizard.prev();
            true
        }
        Msg::SubmitFinished(outcome) => {
            component.submitting = false;
            match outcome {
                SubmitOutcome::Created(_) => {
                    component.wizard.reset();
                    component.image_ids.clear();
                    component.thumbnails.clear();
                    component.rebase_dirty_tracking();
                    show_toast("Your project has been published.");
                    if let Some(window) = web_sys::window() {
                        window.location().set_href("/projects").ok();
                    }
                }
                outcome => {
                    component.error = outcome.error_text().map(str::to_string);
                    open_modal(&component.error_dialog_ref);
                }
            }
            true
        }
        Msg::DismissError => {
            component.error = None;
            close_modal(&component.error_dialog_ref);
            true
        }
    }
}

/// Reads a staged file into a base64 data URL for the preview list.
fn read_thumbnail(ctx: &Context<UploadWizardComponent>, image_id: String, file: web_sys::File) {
    let link = ctx.link().clone();
    let mime = file.type_();
    spawn_local(async move {
        let blob = Blob::from(file);
        match read_as_bytes(&blob).await {
            Ok(bytes) => link.send_message(Msg::ThumbnailReady {
                image_id,
                data_url: data_url_from_bytes(&mime, &bytes),
            }),
            Err(err) => error!("thumbnail read failed:", err.to_string()),
        }
    });
}

/// Assembles the draft and performs the one multipart POST of the wizard.
fn begin_submit(component: &mut UploadWizardComponent, ctx: &Context<UploadWizardComponent>) {
    let session = match ctx.props().session.current() {
        Some(session) => session,
        None => {
            component.error = Some("You need to sign in before submitting a project.".to_string());
            open_modal(&component.error_dialog_ref);
            return;
        }
    };

    let parts = assemble(component.wizard.draft(), Some(&session.user));
    let form = match form_data_from_parts(&parts) {
        Some(form) => form,
        None => {
            component.error = Some(common::wizard::GENERIC_SUBMIT_ERROR.to_string());
            open_modal(&component.error_dialog_ref);
            return;
        }
    };

    component.submitting = true;
    let link = ctx.link().clone();
    let cancelled = component.cancelled.clone();
    spawn_local(async move {
        let outcome = send_submission(form, &session.token).await;
        // The wizard may have been torn down while the request was in
        // flight; its response is then abandoned.
        if !cancelled.get() {
            link.send_message(Msg::SubmitFinished(outcome));
        }
    });
}

async fn send_submission(form: web_sys::FormData, token: &str) -> SubmitOutcome {
    let request = match Request::post(&format!("{}/projects", API_BASE))
        .header("Authorization", &format!("Bearer {}", token))
        .body(form)
    {
        Ok(request) => request,
        Err(err) => {
            error!("building submission request failed:", err.to_string());
            return SubmitOutcome::Failed;
        }
    };

    match request.send().await {
        Ok(response) => {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            interpret_response(status, &body)
        }
        Err(err) => {
            error!("submission request failed:", err.to_string());
            SubmitOutcome::Failed
        }
    }
}
