//! Top bar: brand, theme toggle and copy-link control.

use dioxus::prelude::*;

use crate::state::{copy_share_link, toggle_theme, use_widget};

#[component]
pub fn Toolbar() -> Element {
    let widget = use_widget();
    let (show_theme, show_copy) = {
        let config = widget.config.read();
        (config.theme_toggle, config.copy_link)
    };
    let icon = widget.theme.read().icon();

    rsx! {
        header {
            class: "toolbar",
            span { class: "brand", "FlickFind" }

            div {
                class: "toolbar-actions",

                if show_copy {
                    button {
                        id: "copy-link",
                        class: "toolbar-btn",
                        title: "Copy a link to this search",
                        onclick: move |_| copy_share_link(widget),
                        "Copy link"
                    }
                }

                if show_theme {
                    button {
                        id: "theme-toggle",
                        class: "toolbar-btn icon",
                        title: "Toggle theme",
                        onclick: move |_| toggle_theme(widget),
                        "{icon}"
                    }
                }
            }
        }
    }
}
