//! Shareable deep links: the page URL with `q` and `n` set.

use reqwest::Url;

/// Result count written into a share link when none is known.
pub const DEFAULT_SHARE_COUNT: u32 = 8;

/// Read the `q` parameter a deep link was opened with. Blank values count as
/// absent. `n` is not read back.
pub fn query_from_location(page: &Url) -> Option<String> {
    page.query_pairs()
        .find(|(k, _)| k == "q")
        .map(|(_, v)| v.into_owned())
        .filter(|q| !q.is_empty())
}

/// Set (or replace in place) query parameters, keeping every other pair.
pub fn set_query_params(page: &Url, params: &[(&str, &str)]) -> Url {
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (k, v) in page.query_pairs() {
        match params.iter().find(|(name, _)| *name == k) {
            Some((name, value)) => {
                // The first occurrence takes the new value; later duplicates are dropped.
                if !pairs.iter().any(|(existing, _)| existing == *name) {
                    pairs.push((name.to_string(), value.to_string()));
                }
            }
            None => pairs.push((k.into_owned(), v.into_owned())),
        }
    }
    for (name, value) in params {
        if !pairs.iter().any(|(existing, _)| existing == *name) {
            pairs.push((name.to_string(), value.to_string()));
        }
    }

    let mut url = page.clone();
    url.query_pairs_mut().clear().extend_pairs(pairs);
    url
}

/// Link to the current page that reruns `query` with `count` results. An
/// empty query yields the page URL unchanged; a zero count falls back to
/// [`DEFAULT_SHARE_COUNT`].
pub fn share_url(page: &Url, query: &str, count: u32) -> String {
    let query = query.trim();
    if query.is_empty() {
        return page.to_string();
    }
    let count = if count == 0 { DEFAULT_SHARE_COUNT } else { count };
    set_query_params(page, &[("q", query), ("n", &count.to_string())]).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn builds_link_with_q_and_n() {
        assert_eq!(share_url(&url("https://x/y"), "matrix", 8), "https://x/y?q=matrix&n=8");
    }

    #[test]
    fn empty_query_returns_location() {
        let page = url("https://x/y?theme=dark");
        assert_eq!(share_url(&page, "", 8), "https://x/y?theme=dark");
        assert_eq!(share_url(&page, "   ", 8), "https://x/y?theme=dark");
    }

    #[test]
    fn zero_count_falls_back_to_default() {
        assert_eq!(share_url(&url("https://x/y"), "up", 0), "https://x/y?q=up&n=8");
    }

    #[test]
    fn existing_params_replaced_in_place() {
        let page = url("https://x/y?n=3&lang=en&q=old&q=older#top");
        assert_eq!(
            share_url(&page, "toy story", 10),
            "https://x/y?n=10&lang=en&q=toy+story#top"
        );
    }

    #[test]
    fn reads_q_from_location() {
        assert_eq!(query_from_location(&url("https://x/y?q=Heat&n=4")).as_deref(), Some("Heat"));
        assert_eq!(query_from_location(&url("https://x/y?q=")), None);
        assert_eq!(query_from_location(&url("https://x/y")), None);
    }
}
