//! View rendering for the upload wizard.
//!
//! One builder function per region: the step header, the three step panels,
//! the navigation row and the error modal. All state lives in the component;
//! the builders only read it and forward events via `link`.

use common::wizard::{MemberField, ScalarField, Step, MAX_IMAGES};
use pulldown_cmark::Parser;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, InputEvent, KeyboardEvent};
use yew::html::Scope;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::sheets::modal_sheet::ModalSheet;

use super::messages::Msg;
use super::state::UploadWizardComponent;

/// Main view function: header, active panel, navigation and error modal.
pub fn view(component: &UploadWizardComponent, ctx: &Context<UploadWizardComponent>) -> Html {
    let link = ctx.link();

    let panel = match component.wizard.step() {
        Step::Detail => build_detail_panel(component, link),
        Step::Images => build_images_panel(component, link),
        Step::Team => build_team_panel(component, ctx),
    };

    html! {
        <div class="wizard-root">
            { build_step_header(component) }
            { panel }
            {
                if let Some(message) = &component.blocked {
                    html! { <p class="step-blocked">{ message.clone() }</p> }
                } else {
                    html! {}
                }
            }
            { build_nav(component, link) }
            { error_dialog(component, link) }
        </div>
    }
}

/// Step indicator row; past steps are marked done, the current one active.
fn build_step_header(component: &UploadWizardComponent) -> Html {
    let current = component.wizard.index();
    html! {
        <ol class="wizard-steps">
            {
                for Step::ALL.iter().enumerate().map(|(i, step)| {
                    let class = if i == current {
                        "wizard-step active"
                    } else if i < current {
                        "wizard-step done"
                    } else {
                        "wizard-step"
                    };
                    html! { <li class={class}>{ step.title() }</li> }
                })
            }
        </ol>
    }
}

fn scalar_input(
    link: &Scope<UploadWizardComponent>,
    label: &str,
    field: ScalarField,
    value: &str,
) -> Html {
    html! {
        <label class="field">
            <span>{ label }</span>
            <input
                type="text"
                value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    Msg::UpdateScalar(field, value)
                })}
            />
        </label>
    }
}

/// Detail step: scalar fields, category select, technology tags and the
/// description editor/preview tabs.
fn build_detail_panel(component: &UploadWizardComponent, link: &Scope<UploadWizardComponent>) -> Html {
    let draft = component.wizard.draft();
    let video_warning = common::wizard::validate::video_url_warning(&draft.video_url);

    html! {
        <div class="panel detail-panel">
            { scalar_input(link, "Title", ScalarField::Title, &draft.title) }
            { scalar_input(link, "Repository link", ScalarField::RepositoryUrl, &draft.repository_url) }
            { scalar_input(link, "Video link (YouTube)", ScalarField::VideoUrl, &draft.video_url) }
            {
                if let Some(text) = video_warning {
                    html! { <p class="field-warning">{ text }</p> }
                } else {
                    html! {}
                }
            }
            { build_category_select(component, link) }
            { build_technology_editor(component, link) }
            { build_description_editor(component, link) }
        </div>
    }
}

fn build_category_select(
    component: &UploadWizardComponent,
    link: &Scope<UploadWizardComponent>,
) -> Html {
    let selected = component.wizard.draft().category_id.clone();
    html! {
        <label class="field">
            <span>{"Category"}</span>
            <select
                onchange={link.callback(|e: Event| {
                    let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                    Msg::UpdateScalar(ScalarField::CategoryId, value)
                })}
            >
                <option value="" selected={selected.is_empty()}>{"Choose a category"}</option>
                {
                    for component.categories.iter().map(|category| {
                        html! {
                            <option
                                value={category.id.clone()}
                                selected={category.id == selected}
                            >
                                { category.name.clone() }
                            </option>
                        }
                    })
                }
            </select>
        </label>
    }
}

/// Tag input committing on comma or Enter, plus the removable chip list.
fn build_technology_editor(
    component: &UploadWizardComponent,
    link: &Scope<UploadWizardComponent>,
) -> Html {
    html! {
        <div class="field technology-editor">
            <span>{"Technologies"}</span>
            <input
                type="text"
                placeholder="Type a technology and press comma"
                value={component.tech_input.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    Msg::TechnologyInput(value)
                })}
                onkeydown={link.batch_callback(|e: KeyboardEvent| {
                    if e.key() == "Enter" {
                        e.prevent_default();
                        vec![Msg::CommitTechnology]
                    } else {
                        vec![]
                    }
                })}
            />
            <ul class="tag-list">
                {
                    for component.wizard.draft().technology.iter().enumerate().map(|(i, tag)| {
                        html! {
                            <li class="tag">
                                { tag.clone() }
                                <button onclick={link.callback(move |_| Msg::RemoveTechnology(i))}>
                                    {"✕"}
                                </button>
                            </li>
                        }
                    })
                }
            </ul>
        </div>
    }
}

fn build_description_editor(
    component: &UploadWizardComponent,
    link: &Scope<UploadWizardComponent>,
) -> Html {
    let draft = component.wizard.draft();
    html! {
        <div class="field description-editor">
            <div class="tab-bar">
                <button
                    class={classes!("tab-btn", if component.description_tab == "editor" { "active" } else { "" })}
                    onclick={link.callback(|_| Msg::SetDescriptionTab("editor".to_string()))}
                >
                    {"Description"}
                </button>
                <button
                    class={classes!("tab-btn", if component.description_tab == "preview" { "active" } else { "" })}
                    onclick={link.callback(|_| Msg::SetDescriptionTab("preview".to_string()))}
                >
                    {"Preview"}
                </button>
            </div>
            {
                if component.description_tab == "editor" {
                    html! {
                        <textarea
                            value={draft.description.clone()}
                            rows={8}
                            oninput={link.callback(|e: InputEvent| {
                                let value = e.target_unchecked_into::<web_sys::HtmlTextAreaElement>().value();
                                Msg::UpdateScalar(ScalarField::Description, value)
                            })}
                        />
                    }
                } else {
                    html! {
                        <div class="markdown-preview">
                            { markdown_preview(&draft.description) }
                        </div>
                    }
                }
            }
        </div>
    }
}

/// Renders the description as markdown for the preview tab.
fn markdown_preview(text: &str) -> Html {
    let parser = Parser::new(text);
    let mut out = String::new();
    pulldown_cmark::html::push_html(&mut out, parser);
    Html::from_html_unchecked(AttrValue::from(out))
}

/// Images step: hidden multi-file input, staged image list with thumbnails
/// and per-image name fields.
fn build_images_panel(component: &UploadWizardComponent, link: &Scope<UploadWizardComponent>) -> Html {
    let draft = component.wizard.draft();
    html! {
        <div class="panel images-panel">
            <input
                type="file"
                accept="image/*"
                multiple=true
                ref={component.file_input_ref.clone()}
                style="display:none;"
                onchange={link.callback(|e: Event| {
                    let input = e.target_unchecked_into::<HtmlInputElement>();
                    let mut files = Vec::new();
                    if let Some(list) = input.files() {
                        for i in 0..list.length() {
                            if let Some(file) = list.item(i) {
                                files.push(file);
                            }
                        }
                    }
                    // Reset so picking the same file again re-fires change.
                    input.set_value("");
                    Msg::FilesSelected(files)
                })}
            />
            <button class="add-image-btn" onclick={link.callback(|_| Msg::OpenFileDialog)}>
                {"Add screenshot"}
            </button>
            <p class="hint">{ format!("Up to {} images, 2 MiB each.", MAX_IMAGES) }</p>
            <ul class="image-list">
                {
                    for draft.images.iter().enumerate().map(|(i, entry)| {
                        let thumbnail = component
                            .image_ids
                            .get(i)
                            .and_then(|id| component.thumbnails.get(id));
                        html! {
                            <li class="image-entry">
                                {
                                    match thumbnail {
                                        Some(data_url) => html! {
                                            <img src={data_url.clone()} class="image-thumb" />
                                        },
                                        None => html! { <div class="image-thumb placeholder" /> },
                                    }
                                }
                                <input
                                    type="text"
                                    placeholder="Image name"
                                    value={entry.name.clone()}
                                    oninput={link.callback(move |e: InputEvent| {
                                        let value = e.target_unchecked_into::<HtmlInputElement>().value();
                                        Msg::SetImageName(i, value)
                                    })}
                                />
                                <button onclick={link.callback(move |_| Msg::RemoveImage(i))}>
                                    {"Remove"}
                                </button>
                            </li>
                        }
                    })
                }
            </ul>
        </div>
    }
}

/// Team step: editable member rows plus the include-uploader toggle.
fn build_team_panel(component: &UploadWizardComponent, ctx: &Context<UploadWizardComponent>) -> Html {
    let link = ctx.link();
    let draft = component.wizard.draft();
    let uploader_name = ctx
        .props()
        .session
        .current()
        .map(|s| s.user.name)
        .unwrap_or_else(|| "you".to_string());

    html! {
        <div class="panel team-panel">
            <label class="field include-uploader">
                <input
                    type="checkbox"
                    checked={draft.include_uploader}
                    onchange={link.callback(|e: Event| {
                        let checked = e.target_unchecked_into::<HtmlInputElement>().checked();
                        Msg::ToggleIncludeUploader(checked)
                    })}
                />
                <span>{ format!("List {} as the team leader", uploader_name) }</span>
            </label>
            <ul class="member-list">
                {
                    for draft.team_members.iter().enumerate().map(|(i, member)| {
                        html! {
                            <li class="member-row">
                                { member_input(link, i, MemberField::Name, "Name", &member.name) }
                                { member_input(link, i, MemberField::Class, "Class", &member.class) }
                                { member_input(link, i, MemberField::Position, "Position", &member.position) }
                                <button onclick={link.callback(move |_| Msg::RemoveTeamMember(i))}>
                                    {"Remove"}
                                </button>
                            </li>
                        }
                    })
                }
            </ul>
            <button class="add-member-btn" onclick={link.callback(|_| Msg::AddTeamMember)}>
                {"Add team member"}
            </button>
        </div>
    }
}

fn member_input(
    link: &Scope<UploadWizardComponent>,
    index: usize,
    field: MemberField,
    placeholder: &str,
    value: &str,
) -> Html {
    html! {
        <input
            type="text"
            placeholder={placeholder.to_string()}
            value={value.to_string()}
            oninput={link.callback(move |e: InputEvent| {
                let value = e.target_unchecked_into::<HtmlInputElement>().value();
                Msg::SetTeamMemberField(index, field, value)
            })}
        />
    }
}

/// Navigation row: back (floored at the first step) and next/submit.
fn build_nav(component: &UploadWizardComponent, link: &Scope<UploadWizardComponent>) -> Html {
    let on_last = component.wizard.is_last();
    html! {
        <div class="wizard-nav">
            <button
                disabled={component.wizard.index() == 0 || component.submitting}
                onclick={link.callback(|_| Msg::Prev)}
            >
                {"Back"}
            </button>
            <button
                class="primary"
                disabled={component.submitting}
                onclick={link.callback(|_| Msg::Next)}
            >
                {
                    if component.submitting {
                        "Submitting…"
                    } else if on_last {
                        "Submit project"
                    } else {
                        "Next"
                    }
                }
            </button>
        </div>
    }
}

/// Modal error notification; the draft stays intact behind it.
fn error_dialog(component: &UploadWizardComponent, link: &Scope<UploadWizardComponent>) -> Html {
    html! {
        <ModalSheet node_ref={component.error_dialog_ref.clone()}>
            <div class="error-dialog">
                <h3>{"Submission failed"}</h3>
                <p>
                    {
                        component
                            .error
                            .clone()
                            .unwrap_or_default()
                    }
                </p>
                <button onclick={link.callback(|_| Msg::DismissError)}>
                    {"Close"}
                </button>
            </div>
        </ModalSheet>
    }
}
