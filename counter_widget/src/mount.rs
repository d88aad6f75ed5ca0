use log::info;

use crate::app::CounterApp;
use crate::config::WidgetConfig;
use crate::error::MountError;

/// Installs the panic hook and console logger, then mounts the widget.
pub fn start(config: &WidgetConfig) -> Result<(), MountError> {
    #[cfg(feature = "panic_hook")]
    console_error_panic_hook::set_once();

    // Fails only if a logger is already installed, which is fine.
    _ = console_log::init_with_level(config.log_level);

    mount(&config.container_id)
}

/// Renders [`CounterApp`] into the element with id `container_id`.
pub fn mount(container_id: &str) -> Result<(), MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| MountError::MissingContainer(container_id.to_string()))?;

    yew::Renderer::<CounterApp>::with_root(container).render();
    info!("counter widget mounted on #{container_id}");
    Ok(())
}
