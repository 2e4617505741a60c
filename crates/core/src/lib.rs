//! FlickFind core. Everything behind the recommendation search widget that
//! does not touch a renderer: wire types, similarity scoring, result markup,
//! the `/recommend` dispatcher, share links, single-slot timers, the search
//! session state machine, theme/toast state and configuration.

pub mod client;
pub mod config;
pub mod markup;
pub mod presentation;
pub mod schedule;
pub mod score;
pub mod session;
pub mod share;
pub mod types;

pub use client::{RecommendClient, SearchError};
pub use config::{load_widget_config, WidgetConfig};
pub use markup::ResultEntry;
pub use presentation::{Theme, Toast, ToastArea, ToastKind};
pub use session::{ResultsList, SearchRequest, SearchSession};
pub use types::{MovieId, RecommendResponse, ScoredItem};

/// Re-exported so front ends can parse page locations without their own URL crate.
pub use reqwest::Url;
