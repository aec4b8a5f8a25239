//! Upload wizard: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering and helpers.
//!
//! Responsibilities
//! - Re-export the component, its props and message type.
//! - Delegate `update`/`view` to the `update` and `view` modules.
//! - On first render, fetch the category list and, in the edit variant, the
//!   existing project used to pre-populate the draft.
//! - Trip the cancellation token on teardown so an in-flight submission
//!   cannot drive a destroyed component.

use common::model::{Category, ProjectDetail};
use gloo_console::error;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;
mod webfile;

use helpers::API_BASE;
pub use messages::Msg;
pub use props::UploadWizardProps;
pub use state::UploadWizardComponent;

impl Component for UploadWizardComponent {
    type Message = Msg;
    type Properties = UploadWizardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        UploadWizardComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            fetch_categories(ctx.link().clone());
            if let Some(project_id) = &ctx.props().project_id {
                fetch_project(ctx.link().clone(), project_id.clone());
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.cancelled.set(true);
    }
}

fn fetch_categories(link: yew::html::Scope<UploadWizardComponent>) {
    spawn_local(async move {
        let response = Request::get(&format!("{}/categories", API_BASE)).send().await;
        match response {
            Ok(resp) if resp.status() == 200 => match resp.json::<Vec<Category>>().await {
                Ok(categories) => link.send_message(Msg::CategoriesLoaded(categories)),
                Err(err) => {
                    error!("decoding categories failed:", err.to_string());
                    link.send_message(Msg::CategoriesFailed);
                }
            },
            _ => link.send_message(Msg::CategoriesFailed),
        }
    });
}

fn fetch_project(link: yew::html::Scope<UploadWizardComponent>, project_id: String) {
    spawn_local(async move {
        let response = Request::get(&format!("{}/projects/{}", API_BASE, project_id))
            .send()
            .await;
        match response {
            Ok(resp) if resp.status() == 200 => match resp.json::<ProjectDetail>().await {
                Ok(detail) => link.send_message(Msg::ProjectLoaded(Box::new(detail))),
                Err(err) => {
                    error!("decoding project failed:", err.to_string());
                    helpers::show_toast("Could not load the project for editing.");
                }
            },
            _ => helpers::show_toast("Could not load the project for editing."),
        }
    });
}
