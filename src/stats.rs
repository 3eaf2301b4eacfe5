use crate::dataset::{Dataset, UserFilter};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;

// Scheme-prefixed or www-prefixed links; quotes and whitespace terminate.
static RE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\b(?:[a-zA-Z][a-zA-Z0-9+.-]*://|www\.)[^\s"']+"#).unwrap()
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopStats {
    pub messages: usize,
    pub words: usize,
    pub media: usize,
    pub links: usize,
}

/// Message / word / media / link counts for the filtered subset.
/// Media placeholders count as media, and their tokens stay out of the
/// word tally.
pub fn fetch_stats(filter: &UserFilter, ds: &Dataset) -> TopStats {
    let mut out = TopStats::default();
    for rec in ds.filtered(filter) {
        out.messages += 1;
        if rec.is_media() {
            out.media += 1;
            continue;
        }
        out.words += rec.body.split_whitespace().count();
        out.links += RE_URL.find_iter(&rec.body).count();
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserCount {
    pub user: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    pub user: String,
    pub percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusyUsers {
    pub top: Vec<UserCount>,
    pub shares: Vec<UserShare>,
}

/// Ranks participants by message count (group view only). Notification
/// rows never appear. `top` holds the first `top_n`; `shares` covers every
/// participant with their percentage of the total, rounded to 2 decimals.
pub fn most_busy_users(ds: &Dataset, top_n: usize) -> BusyUsers {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for rec in ds.filtered(&UserFilter::Overall) {
        let name = rec.author.name();
        if !counts.contains_key(name) {
            order.push(name);
        }
        *counts.entry(name).or_insert(0) += 1;
    }
    let total: usize = counts.values().sum();
    if total == 0 {
        return BusyUsers::default();
    }
    // stable sort keeps first-encounter order among ties
    let mut ranked: Vec<(&str, usize)> =
        order.iter().map(|&name| (name, counts[name])).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let top = ranked
        .iter()
        .take(top_n)
        .map(|(user, count)| UserCount { user: user.to_string(), count: *count })
        .collect();
    let shares = ranked
        .iter()
        .map(|(user, count)| UserShare {
            user: user.to_string(),
            percent: round2(*count as f64 / total as f64 * 100.0),
        })
        .collect();
    BusyUsers { top, shares }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
