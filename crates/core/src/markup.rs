//! Result entry view-model and its HTML fragment.
//!
//! Every server-supplied string is escaped before it is placed in markup.
//! The fragment is injected as inner HTML of the `li.result` element.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use crate::score::{percent, similarity, Tier};
use crate::types::ScoredItem;

static YEAR_RE: OnceLock<Regex> = OnceLock::new();

fn year_re() -> &'static Regex {
    YEAR_RE.get_or_init(|| Regex::new(r"\s*\((\d{4})\)\s*$").expect("valid year regex"))
}

/// Escape `& < > " '` for safe embedding in HTML text or attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Trailing `(YYYY)` year of a title, or `""` when there is none.
pub fn parse_year(title: &str) -> &str {
    year_re()
        .captures(title)
        .and_then(|c| c.get(1))
        .map_or("", |m| m.as_str())
}

/// Split a title into its display name and trailing year.
pub fn split_title(title: &str) -> (&str, &str) {
    match year_re().captures(title) {
        Some(caps) => {
            let whole = caps.get(0).map_or(title.len(), |m| m.start());
            let year = caps.get(1).map_or("", |m| m.as_str());
            (&title[..whole], year)
        }
        None => (title, ""),
    }
}

/// One-character badge: the upper-cased first character of the escaped
/// title, `#` for an empty title.
pub fn initial(escaped_title: &str) -> String {
    match escaped_title.chars().next() {
        Some(c) => c.to_uppercase().collect(),
        None => "#".to_string(),
    }
}

/// Everything needed to paint one result entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultEntry {
    pub movie_id: String,
    /// Title without its trailing year, already escaped.
    pub title_html: String,
    pub year: String,
    pub initial: String,
    pub distance: f64,
    pub similarity: f64,
    pub percent: u32,
    pub tier: Tier,
}

impl ResultEntry {
    pub fn from_item(item: &ScoredItem) -> Self {
        let sim = similarity(item.distance);
        let safe_title = escape_html(&item.title);
        let (name, year) = split_title(&safe_title);
        Self {
            movie_id: item.movie_id.to_string(),
            initial: initial(&safe_title),
            title_html: name.to_string(),
            year: year.to_string(),
            distance: item.distance,
            similarity: sim,
            percent: percent(sim),
            tier: Tier::from_similarity(sim),
        }
    }

    /// `movieId: 42 • distance: 0.120`
    pub fn meta(&self) -> String {
        format!("movieId: {} \u{2022} distance: {:.3}", self.movie_id, self.distance)
    }

    /// Class list of the enclosing `li`.
    pub fn class(&self) -> String {
        format!("result {}", self.tier.as_str())
    }

    /// Inner HTML of the entry: similarity ring, title row and meta line.
    pub fn inner_html(&self) -> String {
        let year = if self.year.is_empty() {
            String::new()
        } else {
            format!(" <span class=\"year\">({})</span>", self.year)
        };
        format!(
            concat!(
                "<div class=\"ring\" style=\"--p:{p}%\"><div class=\"initial\">{initial}</div></div>",
                "<div class=\"content\">",
                "<div class=\"title-row\">",
                "<div class=\"movie-title\">{title}{year}</div>",
                "<div class=\"percent\">{p}%</div>",
                "</div>",
                "<div class=\"movie-meta\">{meta}</div>",
                "</div>"
            ),
            p = self.percent,
            initial = escape_html(&self.initial),
            title = self.title_html,
            year = year,
            meta = escape_html(&self.meta()),
        )
    }
}

/// Header shown above a non-empty list.
pub fn results_header(count: usize, query: &str) -> String {
    format!("{count} recommendations for \"{query}\"")
}
