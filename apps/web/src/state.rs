//! The widget object: every signal the search widget renders from, plus the
//! actions that drive them.
//!
//! Created once by [`crate::app::App`] and shared through context.

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use flickfind_core::share::share_url;
use flickfind_core::{
    RecommendClient, SearchError, SearchRequest, SearchSession, Theme, Toast, ToastArea,
    WidgetConfig,
};
use tracing::{error, warn};

use crate::host;

#[derive(Clone, Copy)]
pub struct Widget {
    pub config: Signal<WidgetConfig>,
    /// `None` when the page location could not be resolved.
    pub client: Signal<Option<RecommendClient>>,
    pub session: Signal<SearchSession>,
    pub toast: Signal<ToastArea>,
    pub theme: Signal<Theme>,
    /// Mounted handles, set once their elements render.
    pub input_el: Signal<Option<Rc<MountedData>>>,
    pub results_card: Signal<Option<Rc<MountedData>>>,
}

impl Widget {
    pub fn new(config: WidgetConfig) -> Self {
        let client = host::page_location(&config).and_then(|page| {
            match RecommendClient::for_page(&page, &config.api_root) {
                Ok(client) => Some(client),
                Err(e) => {
                    error!(error = %e, "Cannot resolve recommend endpoint");
                    None
                }
            }
        });
        let session = SearchSession::new(config.min_query_len, config.result_count as usize);

        Self {
            config: Signal::new(config),
            client: Signal::new(client),
            session: Signal::new(session),
            toast: Signal::new(ToastArea::new()),
            theme: Signal::new(Theme::default()),
            input_el: Signal::new(None),
            results_card: Signal::new(None),
        }
    }
}

pub fn use_widget() -> Widget {
    use_context::<Widget>()
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Manual trigger (search button, Enter).
pub fn trigger_search(mut widget: Widget) {
    let request = widget.session.write().begin_search();
    if let Some(request) = request {
        dispatch(widget, request);
    }
}

/// Run `request` and apply its completion unless a newer search superseded it.
pub fn dispatch(widget: Widget, request: SearchRequest) {
    spawn(async move {
        let mut widget = widget;
        let client = widget.client.read().clone();
        let count = widget.config.read().result_count;
        let outcome = match client {
            Some(client) => client.recommend(&request.query, count).await,
            None => Err(SearchError::InvalidUrl("page location unavailable".into())),
        };

        let completion = widget.session.write().complete(&request, outcome);
        if let Some(done) = completion {
            show_toast(widget, done.toast);
            if done.reveal {
                reveal_results(widget).await;
            }
        }
    });
}

/// Keystroke: refresh the session and (re)arm the debounced auto-search.
pub fn handle_input(mut widget: Widget, value: String) {
    let ticket = widget.session.write().on_input(value);
    let Some(ticket) = ticket else {
        return;
    };
    let delay = Duration::from_millis(widget.config.read().debounce_ms);
    spawn(async move {
        host::sleep(delay).await;
        let mut widget = widget;
        let request = widget.session.write().on_debounce_elapsed(ticket);
        if let Some(request) = request {
            dispatch(widget, request);
        }
    });
}

pub fn clear_input(mut widget: Widget) {
    widget.session.write().clear();
    let input = widget.input_el.read().clone();
    if let Some(input) = input {
        spawn(async move {
            let _ = input.set_focus(true).await;
        });
    }
}

pub fn select_chip(mut widget: Widget, index: usize, text: &str) {
    let request = widget.session.write().select_chip(index, text);
    if let Some(request) = request {
        dispatch(widget, request);
    }
}

/// Deep link: rerun the search named by the page's `q` parameter.
pub fn bootstrap_from_location(mut widget: Widget) {
    let page = host::page_location(&widget.config.read());
    let request = page.and_then(|page| widget.session.write().bootstrap(&page));
    if let Some(request) = request {
        dispatch(widget, request);
    }
}

async fn reveal_results(widget: Widget) {
    let card = widget.results_card.read().clone();
    if let Some(card) = card {
        let _ = card.scroll_to(ScrollBehavior::Smooth).await;
    }
}

// ---------------------------------------------------------------------------
// Presentation
// ---------------------------------------------------------------------------

pub fn show_toast(mut widget: Widget, toast: Toast) {
    let ticket = widget.toast.write().show(toast);
    let delay = Duration::from_millis(widget.config.read().toast_ms);
    spawn(async move {
        host::sleep(delay).await;
        let mut widget = widget;
        widget.toast.write().expire(ticket);
    });
}

pub fn toggle_theme(mut widget: Widget) {
    let next = widget.theme.read().toggled();
    widget.theme.set(next);
    show_toast(widget, Toast::info(next.announcement()));
}

/// Copy a link that reruns the current search. Falls back to a manual copy
/// when the clipboard API refuses; both paths report success.
pub fn copy_share_link(widget: Widget) {
    spawn(async move {
        let link = {
            let config = widget.config.read();
            let query = widget.session.read().query().to_string();
            host::page_location(&config).map(|page| share_url(&page, &query, config.result_count))
        };
        let Some(link) = link else {
            warn!("No page location to share");
            return;
        };

        match host::write_clipboard(&link).await {
            Ok(()) => show_toast(widget, Toast::success("Link copied to clipboard")),
            Err(e) => {
                warn!(error = %e, "Clipboard write failed, using manual copy");
                host::fallback_copy(&link);
                show_toast(widget, Toast::success("Link copied"));
            }
        }
    });
}
