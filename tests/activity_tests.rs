use chatmetrics::activity::{activity_heatmap, month_activity_map, week_activity_map};
use chatmetrics::dataset::{Dataset, UserFilter};
use chatmetrics::parser::parse_transcript;

fn dataset(text: &str) -> Dataset {
    Dataset::from_messages(parse_transcript(text).messages)
}

#[test]
fn week_activity_is_ordered_by_count_descending() {
    // 01/01/24 Monday, 02/01/24 Tuesday
    let text = "01/01/24, 10:00 - A: a\n\
                02/01/24, 10:00 - A: b\n\
                02/01/24, 11:00 - A: c";
    let ds = dataset(text);
    let days = week_activity_map(&UserFilter::Overall, &ds);
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].label, "Tuesday");
    assert_eq!(days[0].count, 2);
    assert_eq!(days[1].label, "Monday");
    assert_eq!(days[1].count, 1);
}

#[test]
fn week_activity_ties_keep_first_encounter_order() {
    let text = "03/01/24, 10:00 - A: a\n01/01/24, 10:00 - A: b";
    let ds = dataset(text);
    let days = week_activity_map(&UserFilter::Overall, &ds);
    assert_eq!(days[0].label, "Wednesday");
    assert_eq!(days[1].label, "Monday");
}

#[test]
fn month_activity_counts_by_month_name() {
    let text = "01/01/24, 10:00 - A: a\n01/02/24, 10:00 - A: b\n02/02/24, 10:00 - A: c";
    let ds = dataset(text);
    let months = month_activity_map(&UserFilter::Overall, &ds);
    assert_eq!(months[0].label, "February");
    assert_eq!(months[0].count, 2);
    assert_eq!(months[1].label, "January");
    assert_eq!(months[1].count, 1);
}

#[test]
fn heatmap_is_full_grid_with_zero_fill() {
    let ds = dataset("01/01/24, 22:15 - A: late one");
    let hm = activity_heatmap(&UserFilter::Overall, &ds);
    assert_eq!(hm.days.len(), 7);
    assert_eq!(hm.periods.len(), 24);
    assert_eq!(hm.days[0], "Monday");
    assert_eq!(hm.periods[0], "00-1");
    assert_eq!(hm.periods[22], "22-23");
    assert_eq!(hm.periods[23], "23-00");
    // 01/01/24 is a Monday
    assert_eq!(hm.counts[0][22], 1);
    let total: usize = hm.counts.iter().flatten().sum();
    assert_eq!(total, 1);
}

#[test]
fn heatmap_accumulates_per_cell() {
    let text = "01/01/24, 09:00 - A: a\n08/01/24, 09:30 - B: b\n01/01/24, 10:00 - A: c";
    let ds = dataset(text);
    let hm = activity_heatmap(&UserFilter::Overall, &ds);
    // both 9-o'clock messages fall on Mondays
    assert_eq!(hm.counts[0][9], 2);
    assert_eq!(hm.counts[0][10], 1);
}

#[test]
fn empty_dataset_yields_empty_series_and_zero_grid() {
    let ds = dataset("");
    assert!(week_activity_map(&UserFilter::Overall, &ds).is_empty());
    assert!(month_activity_map(&UserFilter::Overall, &ds).is_empty());
    let hm = activity_heatmap(&UserFilter::Overall, &ds);
    assert_eq!(hm.counts.iter().flatten().sum::<usize>(), 0);
}
