use wasm_bindgen::prelude::*;
mod app;
mod components;

pub mod bridge;
pub mod campaign;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod factory;
pub mod submission;
pub mod units;
pub mod utils;

pub use error::{CrowdfundError, CrowdfundResult};

#[wasm_bindgen(start)]
pub fn run_app() -> Result<(), JsValue> {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<app::App>::new().render();
    Ok(())
}
