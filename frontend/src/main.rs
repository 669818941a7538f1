use crate::app::App;

mod app;
mod components;
mod export;
mod helpers;
mod settings;
mod store;
mod top_sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
