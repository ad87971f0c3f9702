use leptos::*;

mod components;
pub mod config;
pub mod model;
mod pages;
#[cfg(test)]
mod test_support;

pub use components::empty_state::{render, EmptyState, IconContent, NodeKind, VisualNode};
pub use model::{EmptyStateAction, EmptyStateConfig, ParseVariantError, Variant};
pub use pages::GalleryPage;

/// Installs the panic hook and logger, reads the runtime config and mounts
/// the gallery page.
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    web_sys::console::log_1(&"Starting empty-state gallery (wasm)".into());

    let runtime_config = config::load();
    log::debug!("runtime config: {:?}", runtime_config);

    mount_to_body(move || {
        config::provide_runtime_config(runtime_config);
        view! { <GalleryPage /> }
    });
}
