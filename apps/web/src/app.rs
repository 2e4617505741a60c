//! Root application component: toolbar, search panel, results card, toast.

use dioxus::prelude::*;

use crate::results::ResultsCard;
use crate::search::SearchPanel;
use crate::state::{bootstrap_from_location, Widget};
use crate::toast::ToastBanner;
use crate::toolbar::Toolbar;
use crate::INITIAL_CONFIG;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    let widget = use_context_provider(|| {
        let config = INITIAL_CONFIG
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
            .unwrap_or_default();
        Widget::new(config)
    });

    // Deep links run their search once, on first render.
    use_hook(move || bootstrap_from_location(widget));

    let theme = *widget.theme.read();
    let scheme = theme.as_str();

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",
            "data-theme": scheme,
            style: "color-scheme: {scheme};",

            Toolbar {}

            main {
                class: "page",
                SearchPanel {}
                ResultsCard {}
            }

            ToastBanner {}
        }
    }
}
