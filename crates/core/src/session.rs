//! Search session: the state behind the input, the results card and the
//! trigger control.
//!
//! Every transition is a plain method so the widget's behaviour can be
//! exercised without a renderer. The UI owns the clock and the network; it
//! feeds elapsed tickets and completed responses back in.

use reqwest::Url;
use tracing::debug;

use crate::client::SearchError;
use crate::markup::{results_header, ResultEntry};
use crate::presentation::Toast;
use crate::schedule::{Generation, RequestGate, SlotTicket, TimerSlot};
use crate::share::query_from_location;
use crate::types::RecommendResponse;

pub const HEADER_INITIAL: &str = "Recommendations";
pub const HEADER_EMPTY: &str = "No results found";
pub const HEADER_ERROR: &str = "Error";

/// Contents of the results list.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultsList {
    #[default]
    Empty,
    /// Inert placeholder rows shown while a search is in flight.
    Skeleton(usize),
    Entries(Vec<ResultEntry>),
}

/// A search the UI should dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub generation: Generation,
    pub query: String,
}

/// What the UI should do after a completion was applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub toast: Toast,
    /// Scroll the results card into view.
    pub reveal: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchSession {
    input: String,
    header: String,
    list: ResultsList,
    active_chip: Option<usize>,
    requests: RequestGate,
    debounce: TimerSlot,
    min_query_len: usize,
    skeleton_rows: usize,
}

impl SearchSession {
    pub fn new(min_query_len: usize, skeleton_rows: usize) -> Self {
        Self {
            input: String::new(),
            header: HEADER_INITIAL.to_string(),
            list: ResultsList::Empty,
            active_chip: None,
            requests: RequestGate::new(),
            debounce: TimerSlot::new(),
            min_query_len,
            skeleton_rows,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn query(&self) -> &str {
        self.input.trim()
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn list(&self) -> &ResultsList {
        &self.list
    }

    pub fn active_chip(&self) -> Option<usize> {
        self.active_chip
    }

    /// The trigger control is disabled while the latest search is outstanding.
    pub fn is_busy(&self) -> bool {
        self.requests.is_busy()
    }

    pub fn clear_visible(&self) -> bool {
        !self.query().is_empty()
    }

    pub fn debounce_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Keystroke. Cancels any pending auto-search and, when the trimmed input
    /// is long enough, schedules a new one.
    pub fn on_input(&mut self, value: impl Into<String>) -> Option<SlotTicket> {
        self.input = value.into();
        self.debounce.cancel();
        if self.query().chars().count() >= self.min_query_len {
            Some(self.debounce.schedule())
        } else {
            None
        }
    }

    /// The quiet period for `ticket` elapsed. Returns the search to run if the
    /// ticket was not superseded.
    pub fn on_debounce_elapsed(&mut self, ticket: SlotTicket) -> Option<SearchRequest> {
        if self.debounce.fire(ticket) {
            self.begin_search()
        } else {
            None
        }
    }

    /// Manual trigger: search button, Enter, chip or deep link. Shows the
    /// skeleton and takes a new generation. `None` for a blank query.
    pub fn begin_search(&mut self) -> Option<SearchRequest> {
        let query = self.query().to_string();
        if query.is_empty() {
            return None;
        }
        self.list = ResultsList::Skeleton(self.skeleton_rows);
        let generation = self.requests.begin();
        debug!(query = query.as_str(), generation = generation.get(), "Search issued");
        Some(SearchRequest { generation, query })
    }

    /// Apply a finished search. Completions of superseded searches are
    /// dropped and return `None`.
    pub fn complete(
        &mut self,
        request: &SearchRequest,
        outcome: Result<RecommendResponse, SearchError>,
    ) -> Option<Completion> {
        if !self.requests.settle(request.generation) {
            debug!(
                generation = request.generation.get(),
                latest = self.requests.latest().get(),
                "Dropping stale search response"
            );
            return None;
        }

        match outcome {
            Ok(response) => {
                let entries: Vec<ResultEntry> = response
                    .results
                    .as_deref()
                    .unwrap_or_default()
                    .iter()
                    .map(ResultEntry::from_item)
                    .collect();
                let count = entries.len();
                let reveal = !entries.is_empty();
                if entries.is_empty() {
                    self.header = HEADER_EMPTY.to_string();
                    self.list = ResultsList::Empty;
                } else {
                    self.header = results_header(count, &request.query);
                    self.list = ResultsList::Entries(entries);
                }
                Some(Completion {
                    toast: Toast::success(format!("Found {count} recommendations")),
                    reveal,
                })
            }
            Err(err) => {
                self.header = HEADER_ERROR.to_string();
                self.list = ResultsList::Empty;
                Some(Completion { toast: Toast::error(err.to_string()), reveal: false })
            }
        }
    }

    /// Clear action: empty input, no pending auto-search, initial header.
    pub fn clear(&mut self) {
        self.input.clear();
        self.debounce.cancel();
        self.header = HEADER_INITIAL.to_string();
        self.list = ResultsList::Empty;
    }

    /// Quick-search chip: fill the input, mark the chip active, search.
    pub fn select_chip(&mut self, index: usize, text: &str) -> Option<SearchRequest> {
        self.input = text.trim().to_string();
        self.active_chip = Some(index);
        self.debounce.cancel();
        self.begin_search()
    }

    /// Deep link bootstrap, run once at load.
    pub fn bootstrap(&mut self, page: &Url) -> Option<SearchRequest> {
        let query = query_from_location(page)?;
        debug!(query = query.as_str(), "Bootstrapping search from URL");
        self.input = query;
        self.begin_search()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScoredItem;

    fn session() -> SearchSession {
        SearchSession::new(3, 10)
    }

    fn response(titles: &[&str]) -> RecommendResponse {
        RecommendResponse {
            query: None,
            results: Some(
                titles
                    .iter()
                    .enumerate()
                    .map(|(i, t)| ScoredItem::new(i as u64, *t, 0.1 * i as f64))
                    .collect(),
            ),
        }
    }

    #[test]
    fn short_input_does_not_schedule() {
        let mut s = session();
        assert!(s.on_input("ab").is_none());
        assert!(!s.debounce_pending());
        assert!(s.on_input("  ab  ").is_none());
        assert!(s.clear_visible());
    }

    #[test]
    fn debounce_reschedules_on_each_keystroke() {
        let mut s = session();
        let abc = s.on_input("abc").unwrap();
        let abcd = s.on_input("abcd").unwrap();

        assert!(s.on_debounce_elapsed(abc).is_none());
        let req = s.on_debounce_elapsed(abcd).unwrap();
        assert_eq!(req.query, "abcd");
        assert!(s.is_busy());
        assert_eq!(s.list(), &ResultsList::Skeleton(10));
    }

    #[test]
    fn shrinking_input_cancels_pending_search() {
        let mut s = session();
        let t = s.on_input("abc").unwrap();
        assert!(s.on_input("ab").is_none());
        assert!(s.on_debounce_elapsed(t).is_none());
    }

    #[test]
    fn blank_manual_trigger_is_ignored() {
        let mut s = session();
        s.on_input("   ");
        assert!(s.begin_search().is_none());
        assert!(!s.is_busy());
        assert_eq!(s.list(), &ResultsList::Empty);
    }

    #[test]
    fn results_replace_skeleton_in_order() {
        let mut s = session();
        s.on_input("matrix");
        let req = s.begin_search().unwrap();
        let done = s.complete(&req, Ok(response(&["Alpha (1999)", "Beta"]))).unwrap();

        assert!(!s.is_busy());
        assert!(done.reveal);
        assert_eq!(done.toast, Toast::success("Found 2 recommendations"));
        assert_eq!(s.header(), "2 recommendations for \"matrix\"");
        match s.list() {
            ResultsList::Entries(entries) => {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries[0].title_html, "Alpha");
                assert_eq!(entries[1].title_html, "Beta");
            }
            other => panic!("expected entries, got {other:?}"),
        }
    }

    #[test]
    fn empty_or_missing_results_show_no_results() {
        let mut s = session();
        s.on_input("zzz");
        let req = s.begin_search().unwrap();
        s.complete(&req, Ok(response(&[]))).unwrap();
        assert_eq!(s.header(), HEADER_EMPTY);
        assert_eq!(s.list(), &ResultsList::Empty);

        let req = s.begin_search().unwrap();
        let done = s.complete(&req, Ok(RecommendResponse::default())).unwrap();
        assert_eq!(s.header(), HEADER_EMPTY);
        assert_eq!(s.list(), &ResultsList::Empty);
        assert!(!done.reveal);
        assert_eq!(done.toast.message, "Found 0 recommendations");
    }

    #[test]
    fn failure_clears_previous_results_and_unblocks() {
        let mut s = session();
        s.on_input("heat");
        let req = s.begin_search().unwrap();
        s.complete(&req, Ok(response(&["Ronin"]))).unwrap();

        let req = s.begin_search().unwrap();
        assert!(s.is_busy());
        let err = SearchError::Server { status: 404, message: "Movie not found".into() };
        let done = s.complete(&req, Err(err)).unwrap();

        assert!(!s.is_busy());
        assert_eq!(s.header(), HEADER_ERROR);
        assert_eq!(s.list(), &ResultsList::Empty);
        assert_eq!(done.toast, Toast::error("Movie not found"));
    }

    #[test]
    fn stale_response_does_not_overwrite_newer() {
        let mut s = session();
        s.on_input("alien");
        let older = s.begin_search().unwrap();
        s.on_input("aliens");
        let newer = s.begin_search().unwrap();

        assert!(s.complete(&newer, Ok(response(&["Predator"]))).is_some());
        assert!(s.complete(&older, Ok(response(&["Wrong", "Answer"]))).is_none());
        assert_eq!(s.header(), "1 recommendations for \"aliens\"");
        assert!(!s.is_busy());
    }

    #[test]
    fn clear_resets_to_initial_state() {
        let mut s = session();
        s.on_input("jaws");
        let req = s.begin_search().unwrap();
        s.complete(&req, Ok(response(&["Orca"]))).unwrap();
        s.on_input("jaws 2");

        s.clear();
        assert_eq!(s.input(), "");
        assert!(!s.clear_visible());
        assert!(!s.debounce_pending());
        assert_eq!(s.header(), HEADER_INITIAL);
        assert_eq!(s.list(), &ResultsList::Empty);
    }

    #[test]
    fn chip_fills_input_and_searches() {
        let mut s = session();
        let req = s.select_chip(2, " Inception ").unwrap();
        assert_eq!(req.query, "Inception");
        assert_eq!(s.input(), "Inception");
        assert_eq!(s.active_chip(), Some(2));
    }

    #[test]
    fn bootstrap_reads_q_only() {
        let mut s = session();
        let page = Url::parse("https://x/y?q=Up&n=3").unwrap();
        let req = s.bootstrap(&page).unwrap();
        assert_eq!(req.query, "Up");
        assert_eq!(s.list(), &ResultsList::Skeleton(10));

        let mut s = session();
        assert!(s.bootstrap(&Url::parse("https://x/y?n=3").unwrap()).is_none());
    }
}
