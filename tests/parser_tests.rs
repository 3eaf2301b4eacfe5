use chatmetrics::parser::{parse_transcript, Author};
use chrono::NaiveDate;

#[test]
fn parses_single_message_line() {
    let out = parse_transcript("01/01/24, 10:00 - Alice: hello there");
    assert_eq!(out.messages.len(), 1);
    assert_eq!(out.skipped_lines, 0);
    let m = &out.messages[0];
    assert_eq!(m.author, Author::Participant("Alice".to_string()));
    assert_eq!(m.body, "hello there");
    assert_eq!(
        m.timestamp,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(10, 0, 0).unwrap()
    );
}

#[test]
fn classifies_authorless_line_as_notification() {
    let out = parse_transcript("01/01/24, 09:58 - Bob joined using this group's invite link");
    assert_eq!(out.messages.len(), 1);
    let m = &out.messages[0];
    assert_eq!(m.author, Author::System);
    assert_eq!(m.author.name(), "group_notification");
    assert_eq!(m.body, "Bob joined using this group's invite link");
}

#[test]
fn continuation_lines_keep_embedded_newlines() {
    let text = "01/01/24, 10:00 - Alice: first line\nsecond line\nthird line\n01/01/24, 10:01 - Bob: ok";
    let out = parse_transcript(text);
    assert_eq!(out.messages.len(), 2);
    assert_eq!(out.messages[0].body, "first line\nsecond line\nthird line");
    assert_eq!(out.messages[1].body, "ok");
}

#[test]
fn four_digit_year_and_twelve_hour_clock_parse() {
    let out = parse_transcript("05/03/2023, 9:07 PM - Carol: evening");
    assert_eq!(out.messages.len(), 1);
    let ts = out.messages[0].timestamp;
    assert_eq!(
        ts,
        NaiveDate::from_ymd_opt(2023, 3, 5).unwrap().and_hms_opt(21, 7, 0).unwrap()
    );
}

#[test]
fn garbage_before_first_header_is_skipped_and_counted() {
    let text = "exported by someone\n\n01/01/24, 10:00 - Alice: hi";
    let out = parse_transcript(text);
    assert_eq!(out.messages.len(), 1);
    assert_eq!(out.skipped_lines, 1);
}

#[test]
fn unparseable_timestamp_drops_segment_silently() {
    // header shape matches but 31/02 is not a real date
    let text = "31/02/24, 10:00 - Alice: ghost\n01/01/24, 10:00 - Bob: real";
    let out = parse_transcript(text);
    assert_eq!(out.messages.len(), 1);
    assert_eq!(out.messages[0].body, "real");
    assert_eq!(out.skipped_lines, 1);
}

#[test]
fn empty_transcript_yields_empty_result() {
    let out = parse_transcript("");
    assert!(out.messages.is_empty());
    assert_eq!(out.skipped_lines, 0);
}

#[test]
fn body_may_contain_colons() {
    let out = parse_transcript("01/01/24, 10:00 - Alice: note: remember this");
    assert_eq!(out.messages[0].author, Author::Participant("Alice".to_string()));
    assert_eq!(out.messages[0].body, "note: remember this");
}

#[test]
fn preserves_chronological_input_order() {
    let text = "02/01/24, 08:00 - Alice: a\n01/01/24, 09:00 - Bob: b";
    let out = parse_transcript(text);
    // parser keeps transcript order, it never re-sorts
    assert_eq!(out.messages[0].body, "a");
    assert_eq!(out.messages[1].body, "b");
}
