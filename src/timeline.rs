use crate::dataset::{Dataset, UserFilter};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineBucket {
    /// "January-2024" style label.
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub count: usize,
}

/// Messages per month-year, strictly chronological. Buckets are keyed on
/// (year, month number) so ordering never depends on the label text.
pub fn monthly_timeline(filter: &UserFilter, ds: &Dataset) -> Vec<TimelineBucket> {
    let mut counts: BTreeMap<(i32, u32), (String, usize)> = BTreeMap::new();
    for rec in ds.filtered(filter) {
        let entry = counts
            .entry((rec.year, rec.month_num))
            .or_insert_with(|| (rec.month_year.clone(), 0));
        entry.1 += 1;
    }
    counts
        .into_values()
        .map(|(label, count)| TimelineBucket { label, count })
        .collect()
}

/// Messages per calendar date, in date order.
pub fn daily_timeline(filter: &UserFilter, ds: &Dataset) -> Vec<DailyBucket> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for rec in ds.filtered(filter) {
        *counts.entry(rec.date).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(date, count)| DailyBucket { date, count })
        .collect()
}
