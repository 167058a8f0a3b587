mod app;
mod assist;
mod bitmap;
mod config;
mod inference;
mod output_panel;
mod sketch_pad;
mod stroke;
mod submission;
mod surface;
mod tool_panel;
mod types;
mod utils;

use app::App;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
