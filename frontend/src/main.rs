use crate::app::App;

mod app;
mod components;
mod session;
mod sheets;

fn main() {
    yew::Renderer::<App>::new().render();
}
