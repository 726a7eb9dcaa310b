#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🍃 Tea Factory UI starting...");

    yew::Renderer::<tea_factory_ui::views::App>::new().render();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // The app only runs in the browser; native builds exist for the test suite.
}
