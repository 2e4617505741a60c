//! Hero search input with debounced auto-search, Enter, clear and search button.

use dioxus::prelude::*;

use crate::state::{clear_input, handle_input, trigger_search, use_widget};

#[component]
pub fn SearchInput() -> Element {
    let mut widget = use_widget();
    let (value, busy, has_query) = {
        let session = widget.session.read();
        (session.input().to_string(), session.is_busy(), session.clear_visible())
    };
    let show_clear = widget.config.read().clear_button;

    rsx! {
        div {
            class: if has_query { "search-field has-query" } else { "search-field" },

            // Search icon
            svg {
                class: "search-icon",
                width: "18",
                height: "18",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "11", cy: "11", r: "8" }
                line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
            }

            input {
                id: "movie-input",
                class: "search-input",
                r#type: "text",
                placeholder: "Name a movie you love...",
                value: "{value}",
                autofocus: true,
                onmounted: move |e: MountedEvent| widget.input_el.set(Some(e.data())),
                oninput: move |e: Event<FormData>| handle_input(widget, e.value()),
                onkeyup: move |e: KeyboardEvent| {
                    // Enter behaves like a click on the (possibly disabled) search button.
                    if e.key() == Key::Enter && !widget.session.read().is_busy() {
                        trigger_search(widget);
                    }
                },
            }

            if show_clear {
                button {
                    id: "clear-btn",
                    class: if has_query { "search-clear show" } else { "search-clear" },
                    title: "Clear",
                    onclick: move |_| clear_input(widget),
                    "\u{00D7}"
                }
            }

            button {
                id: "search-btn",
                class: if busy { "search-btn loading" } else { "search-btn" },
                disabled: busy,
                onclick: move |_| trigger_search(widget),
                if busy { "Searching\u{2026}" } else { "Search" }
            }
        }
    }
}
