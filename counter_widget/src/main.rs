#[cfg(target_arch = "wasm32")]
fn main() {
    use counter_widget::{start, WidgetConfig};

    if let Err(err) = start(&WidgetConfig::default()) {
        log::error!("unable to start counter widget: {err}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("counter_widget runs in the browser, build it with `--target wasm32-unknown-unknown`");
}
