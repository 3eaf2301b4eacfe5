use crate::dataset::{period_label, Dataset, UserFilter};
use serde::Serialize;
use std::collections::HashMap;

pub const WEEKDAYS: [&str; 7] =
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityCount {
    pub label: String,
    pub count: usize,
}

fn frequency_series<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<ActivityCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for label in labels {
        if !counts.contains_key(label) {
            order.push(label);
        }
        *counts.entry(label).or_insert(0) += 1;
    }
    let mut out: Vec<ActivityCount> = order
        .into_iter()
        .map(|label| ActivityCount { label: label.to_string(), count: counts[label] })
        .collect();
    // descending count, first-encounter order among ties; calendar order is
    // deliberately not imposed here
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

/// Message counts per weekday name, busiest first.
pub fn week_activity_map(filter: &UserFilter, ds: &Dataset) -> Vec<ActivityCount> {
    frequency_series(ds.filtered(filter).map(|r| r.day_name.as_str()))
}

/// Message counts per month name, busiest first.
pub fn month_activity_map(filter: &UserFilter, ds: &Dataset) -> Vec<ActivityCount> {
    frequency_series(ds.filtered(filter).map(|r| r.month_name.as_str()))
}

/// Weekday × hour pivot. Always a full 7×24 grid: rows Monday..Sunday,
/// columns the fixed 0-23 hour periods, absent combinations zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    pub days: Vec<String>,
    pub periods: Vec<String>,
    /// counts[day][hour]
    pub counts: Vec<Vec<usize>>,
}

impl Heatmap {
    fn empty() -> Self {
        Heatmap {
            days: WEEKDAYS.iter().map(|d| d.to_string()).collect(),
            periods: (0..24).map(period_label).collect(),
            counts: vec![vec![0; 24]; 7],
        }
    }
}

pub fn activity_heatmap(filter: &UserFilter, ds: &Dataset) -> Heatmap {
    let mut hm = Heatmap::empty();
    for rec in ds.filtered(filter) {
        if let Some(row) = WEEKDAYS.iter().position(|d| *d == rec.day_name) {
            hm.counts[row][rec.hour as usize] += 1;
        }
    }
    hm
}
