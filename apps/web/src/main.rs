//! FlickFind: Dioxus-powered movie recommendation search widget.

use std::sync::Mutex;

use dioxus::prelude::*;
use flickfind_core::WidgetConfig;

mod app;
mod host;
mod results;
mod search;
mod state;
mod toast;
mod toolbar;

use app::App;

static EMBEDDED_CONFIG: &str = include_str!("../assets/widget.toml");

/// Pre-runtime storage: loaded before Dioxus launches, consumed on first render.
pub static INITIAL_CONFIG: Mutex<Option<WidgetConfig>> = Mutex::new(None);

fn main() {
    init_logging();

    let config = load_config();
    if let Ok(mut slot) = INITIAL_CONFIG.lock() {
        *slot = Some(config);
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((11, 13, 18, 255))
                    .with_window(
                        WindowBuilder::new()
                            .with_title("FlickFind")
                            .with_inner_size(LogicalSize::new(960.0, 820.0))
                            .with_min_inner_size(LogicalSize::new(480.0, 480.0))
                            .with_resizable(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}

fn load_config() -> WidgetConfig {
    #[cfg(not(target_arch = "wasm32"))]
    if let Ok(path) = std::env::var("FLICKFIND_CONFIG") {
        return flickfind_core::load_widget_config(std::path::Path::new(&path));
    }
    WidgetConfig::from_toml_str(EMBEDDED_CONFIG)
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    let _ = dioxus::logger::init(dioxus::logger::tracing::Level::INFO);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("flickfind=info".parse().unwrap()),
        )
        .with_target(false)
        .init();
}
