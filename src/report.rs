use crate::activity::{self, ActivityCount, Heatmap};
use crate::dataset::{Dataset, UserFilter};
use crate::emoji::{self, EmojiCount};
use crate::stats::{self, BusyUsers, TopStats};
use crate::timeline::{self, DailyBucket, TimelineBucket};
use crate::words::{self, StopWords, WordCount};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct ReportOpts {
    pub top_words: usize,
    pub top_users: usize,
}

impl Default for ReportOpts {
    fn default() -> Self {
        ReportOpts { top_words: 20, top_users: 5 }
    }
}

/// Every aggregation for one selected participant (or the whole group),
/// ready for a chart/table layer to consume.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub user: String,
    pub stats: TopStats,
    pub monthly_timeline: Vec<TimelineBucket>,
    pub daily_timeline: Vec<DailyBucket>,
    pub week_activity: Vec<ActivityCount>,
    pub month_activity: Vec<ActivityCount>,
    pub heatmap: Heatmap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy_users: Option<BusyUsers>,
    pub common_words: Vec<WordCount>,
    pub emoji: Vec<EmojiCount>,
    pub skipped_lines: usize,
}

pub fn build_report(
    filter: &UserFilter,
    ds: &Dataset,
    stop: &StopWords,
    opts: &ReportOpts,
    skipped_lines: usize,
) -> AnalysisReport {
    let busy_users = match filter {
        UserFilter::Overall => Some(stats::most_busy_users(ds, opts.top_users)),
        UserFilter::User(_) => None,
    };
    AnalysisReport {
        user: filter.label().to_string(),
        stats: stats::fetch_stats(filter, ds),
        monthly_timeline: timeline::monthly_timeline(filter, ds),
        daily_timeline: timeline::daily_timeline(filter, ds),
        week_activity: activity::week_activity_map(filter, ds),
        month_activity: activity::month_activity_map(filter, ds),
        heatmap: activity::activity_heatmap(filter, ds),
        busy_users,
        common_words: words::most_common_words(filter, ds, stop, opts.top_words),
        emoji: emoji::emoji_counts(filter, ds),
        skipped_lines,
    }
}
