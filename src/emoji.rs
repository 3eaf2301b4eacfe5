use crate::dataset::{Dataset, UserFilter};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;

// Pictographic characters only; Emoji_Presentation alone would still admit
// keycap digits via the broader Emoji property.
static RE_EMOJI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{Emoji_Presentation}\p{Extended_Pictographic}]").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

/// Ranked emoji frequency table for the filtered subset. Each occurrence
/// counts; ties keep first-encounter order.
pub fn emoji_counts(filter: &UserFilter, ds: &Dataset) -> Vec<EmojiCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    for rec in ds.filtered(filter) {
        for m in RE_EMOJI.find_iter(&rec.body) {
            let e = m.as_str().to_string();
            if !counts.contains_key(&e) {
                order.push(e.clone());
            }
            *counts.entry(e).or_insert(0) += 1;
        }
    }
    let mut ranked: Vec<EmojiCount> = order
        .into_iter()
        .map(|emoji| {
            let count = counts[&emoji];
            EmojiCount { emoji, count }
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}
