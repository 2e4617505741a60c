//! Results card: header, ranked entries or skeleton placeholders.

mod result_row;

use dioxus::prelude::*;
use flickfind_core::ResultsList;

use crate::state::use_widget;
use result_row::{ResultRow, SkeletonRow};

#[component]
pub fn ResultsCard() -> Element {
    let mut widget = use_widget();
    let (header, list) = {
        let session = widget.session.read();
        (session.header().to_string(), session.list().clone())
    };

    let rows = match list {
        ResultsList::Empty => rsx! {},
        ResultsList::Skeleton(count) => rsx! {
            for i in 0..count {
                SkeletonRow { key: "{i}" }
            }
        },
        ResultsList::Entries(entries) => rsx! {
            for (i, entry) in entries.into_iter().enumerate() {
                ResultRow { key: "{i}", entry }
            }
        },
    };

    rsx! {
        section {
            id: "results-card",
            class: "results-card",
            onmounted: move |e: MountedEvent| widget.results_card.set(Some(e.data())),

            h2 { id: "results-title", class: "results-title", "{header}" }

            ul {
                id: "results",
                class: "results",
                {rows}
            }
        }
    }
}
