//! One result entry and its loading placeholder.

use dioxus::prelude::*;
use flickfind_core::ResultEntry;

/// Ranked entry. The fragment escapes every server-supplied string.
#[component]
pub fn ResultRow(entry: ResultEntry) -> Element {
    let class = entry.class();
    let html = entry.inner_html();

    rsx! {
        li {
            class: class,
            dangerous_inner_html: html,
        }
    }
}

#[component]
pub fn SkeletonRow() -> Element {
    rsx! {
        li {
            class: "result",
            div { class: "ring skeleton" }
            div {
                class: "content",
                div { class: "skeleton", style: "height:14px;width:60%" }
                div { class: "skeleton", style: "height:10px;width:40%;margin-top:8px" }
            }
        }
    }
}
