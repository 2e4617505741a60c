//! Search panel: input row + quick-search chips.

mod chips;
mod search_input;

use dioxus::prelude::*;
use chips::Chips;
use search_input::SearchInput;

#[component]
pub fn SearchPanel() -> Element {
    rsx! {
        div {
            class: "search-panel",
            SearchInput {}
            Chips {}
        }
    }
}
