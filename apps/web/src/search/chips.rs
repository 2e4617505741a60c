//! Quick-search chips. Hidden when no suggestions are configured.

use dioxus::prelude::*;

use crate::state::{select_chip, use_widget};

#[component]
pub fn Chips() -> Element {
    let widget = use_widget();
    let chips = widget.config.read().chips.clone();
    let active = widget.session.read().active_chip();

    if chips.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "chips",
            class: "chips",
            for (i, chip) in chips.into_iter().enumerate() {
                button {
                    key: "{i}",
                    class: if active == Some(i) { "chip active" } else { "chip" },
                    onclick: {
                        let text = chip.clone();
                        move |_| select_chip(widget, i, &text)
                    },
                    "{chip}"
                }
            }
        }
    }
}
