use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Synthetic author assigned to system lines ("X joined the group" etc.).
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Placeholder body the export tool writes for attachments.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("failed to read transcript: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Author {
    Participant(String),
    System,
}

impl Author {
    pub fn is_system(&self) -> bool {
        matches!(self, Author::System)
    }

    pub fn name(&self) -> &str {
        match self {
            Author::Participant(name) => name,
            Author::System => GROUP_NOTIFICATION,
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub timestamp: NaiveDateTime,
    pub author: Author,
    pub body: String,
}

#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub messages: Vec<Message>,
    /// Lines dropped because the header matched but the timestamp did not
    /// parse, or because they preceded the first message header.
    pub skipped_lines: usize,
}

// Header: `<date>, <time> - <rest>`. Day-first dates, 2- or 4-digit year,
// optional 12-hour clock suffix emitted by some locales.
static RE_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2}/\d{1,2}/\d{2,4}, \d{1,2}:\d{2}(?:\s?[AaPp][Mm])?) - (.*)$").unwrap()
});

fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    // two-digit-year formats first: %Y would happily parse "24" as year 24
    let fmts = [
        "%d/%m/%y, %H:%M",
        "%d/%m/%Y, %H:%M",
        "%d/%m/%y, %I:%M %p",
        "%d/%m/%Y, %I:%M %p",
    ];
    for f in fmts.iter() {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, f) {
            return Some(ndt);
        }
    }
    None
}

/// Splits the remainder of a header line on the first `": "` author
/// boundary; lines without one are system notifications.
fn split_author(rest: &str) -> (Author, String) {
    match rest.split_once(": ") {
        Some((author, body)) => (Author::Participant(author.to_string()), body.to_string()),
        None => (Author::System, rest.to_string()),
    }
}

/// Accumulates header + continuation lines into whole messages.
/// Continuation lines (no timestamp header) keep embedded newlines.
#[derive(Default)]
struct LineAggregator {
    current: Option<Message>,
    skipped: usize,
}

impl LineAggregator {
    fn push(&mut self, line: &str) -> Option<Message> {
        if let Some(caps) = RE_HEADER.captures(line) {
            let done = self.current.take();
            match parse_timestamp(&caps[1]) {
                Some(ts) => {
                    let (author, body) = split_author(&caps[2]);
                    self.current = Some(Message { timestamp: ts, author, body });
                }
                None => self.skipped += 1,
            }
            return done;
        }
        match self.current.as_mut() {
            Some(msg) => {
                msg.body.push('\n');
                msg.body.push_str(line);
            }
            // text before the first header has no message to attach to
            None => {
                if !line.trim().is_empty() {
                    self.skipped += 1;
                }
            }
        }
        None
    }

    fn finish(&mut self) -> Option<Message> {
        self.current.take()
    }
}

/// Parses a full transcript into ordered messages. Malformed segments are
/// dropped and counted, never surfaced as errors.
pub fn parse_transcript(text: &str) -> ParseOutcome {
    let mut agg = LineAggregator::default();
    let mut messages = Vec::new();
    for line in text.lines() {
        if let Some(msg) = agg.push(line) {
            messages.push(finalize(msg));
        }
    }
    if let Some(msg) = agg.finish() {
        messages.push(finalize(msg));
    }
    ParseOutcome { messages, skipped_lines: agg.skipped }
}

fn finalize(mut msg: Message) -> Message {
    msg.body = msg.body.trim().to_string();
    msg
}

pub fn parse_file(path: impl AsRef<Path>) -> Result<ParseOutcome, TranscriptError> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_transcript(&text))
}
