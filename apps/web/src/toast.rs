//! Toast area: one transient message at a time.

use dioxus::prelude::*;

use crate::state::use_widget;

#[component]
pub fn ToastBanner() -> Element {
    let widget = use_widget();
    let (class, message) = {
        let area = widget.toast.read();
        let message = area.current().map(|t| t.message.clone()).unwrap_or_default();
        (area.class(), message)
    };

    rsx! {
        div {
            id: "toast",
            class: "{class}",
            role: "status",
            "{message}"
        }
    }
}
