mod app;
mod config;
mod error;
#[cfg(target_arch = "wasm32")]
mod mount;

pub use counter_widget_core::*;

pub use app::{CounterApp, Msg};
pub use config::{WidgetConfig, DEFAULT_CONTAINER_ID};
pub use error::MountError;

#[cfg(target_arch = "wasm32")]
pub use mount::{mount, start};

#[cfg(all(target_arch = "wasm32", feature = "panic_hook"))]
pub use console_error_panic_hook;
