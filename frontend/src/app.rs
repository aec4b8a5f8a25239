use common::model::Session;
use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::BeforeUnloadEvent;
use yew::{html, Component, Context, Html};

use crate::components::wizard::UploadWizardComponent;
use crate::session::{SessionListener, SessionProvider};

pub enum Msg {
    SessionChanged(Option<Session>),
    SignOut,
}

/// Root shell: shows who is signed in and hosts the upload wizard, passing
/// the session provider in explicitly.
pub struct App {
    session: SessionProvider,
    current: Option<Session>,
    _listener: SessionListener,
    _unload_guard: Closure<dyn FnMut(BeforeUnloadEvent)>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let session = SessionProvider::default();
        let listener = session.subscribe(ctx.link().callback(Msg::SessionChanged));
        let current = session.current();
        Self {
            session,
            current,
            _listener: listener,
            _unload_guard: install_unload_guard(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SessionChanged(current) => {
                self.current = current;
                true
            }
            Msg::SignOut => {
                self.session.clear();
                self.current = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let who = self
            .current
            .as_ref()
            .map(|s| s.user.name.clone())
            .unwrap_or_else(|| "Guest".to_string());

        html! {
            <div class="app-shell">
                <header class="app-header">
                    <span class="app-title">{"Student Project Portfolio"}</span>
                    <span class="app-user">{ who }</span>
                    {
                        if self.current.is_some() {
                            html! {
                                <button onclick={ctx.link().callback(|_| Msg::SignOut)}>
                                    {"Sign out"}
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                </header>
                <UploadWizardComponent session={self.session.clone()} />
            </div>
        }
    }
}

/// Warns before the tab unloads while the wizard has unsaved draft content.
/// The wizard publishes the `app_dirty` flag on every draft mutation.
fn install_unload_guard() -> Closure<dyn FnMut(BeforeUnloadEvent)> {
    let closure = Closure::wrap(Box::new(|event: BeforeUnloadEvent| {
        if let Some(window) = web_sys::window() {
            let dirty = Reflect::get(&window, &JsValue::from_str("app_dirty"))
                .ok()
                .and_then(|value| value.as_bool())
                .unwrap_or(false);
            if dirty {
                event.prevent_default();
                event.set_return_value("You have unsaved changes.");
            }
        }
    }) as Box<dyn FnMut(BeforeUnloadEvent)>);

    if let Some(window) = web_sys::window() {
        window
            .add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref())
            .ok();
    }
    closure
}
