use crate::parser::{Author, Message};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use itertools::Itertools;

/// One transcript message plus derived calendar fields. The derived fields
/// are pure functions of the timestamp.
#[derive(Debug, Clone)]
pub struct Record {
    pub timestamp: NaiveDateTime,
    pub author: Author,
    pub body: String,
    pub year: i32,
    pub month_num: u32,
    pub month_name: String,
    pub day: u32,
    pub day_name: String,
    pub hour: u32,
    pub minute: u32,
    pub date: NaiveDate,
    /// Composite label for monthly bucketing, e.g. "January-2024".
    pub month_year: String,
    /// Heatmap hour label, e.g. "9-10".
    pub period: String,
}

/// Hour label used on the heatmap axis. The midnight-adjacent labels keep
/// their wrap-around forms.
pub fn period_label(hour: u32) -> String {
    match hour {
        23 => "23-00".to_string(),
        0 => "00-1".to_string(),
        h => format!("{}-{}", h, h + 1),
    }
}

impl Record {
    pub fn is_media(&self) -> bool {
        self.body == crate::parser::MEDIA_PLACEHOLDER
    }

    fn from_message(msg: Message) -> Self {
        let ts = msg.timestamp;
        Record {
            year: ts.year(),
            month_num: ts.month(),
            month_name: ts.format("%B").to_string(),
            day: ts.day(),
            day_name: ts.format("%A").to_string(),
            hour: ts.hour(),
            minute: ts.minute(),
            date: ts.date(),
            month_year: ts.format("%B-%Y").to_string(),
            period: period_label(ts.hour()),
            timestamp: ts,
            author: msg.author,
            body: msg.body,
        }
    }
}

/// Selects which rows an aggregation sees. `Overall` covers every
/// participant but never the synthetic notification author, so that
/// per-participant counts sum to the Overall count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserFilter {
    Overall,
    User(String),
}

impl UserFilter {
    pub fn matches(&self, author: &Author) -> bool {
        match self {
            UserFilter::Overall => !author.is_system(),
            UserFilter::User(name) => author.name() == name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            UserFilter::Overall => "Overall",
            UserFilter::User(name) => name,
        }
    }
}

/// The enriched table: one `Record` per message, in transcript order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Dataset { records: messages.into_iter().map(Record::from_message).collect() }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Rows visible to the given filter, in transcript order.
    pub fn filtered<'a>(&'a self, filter: &'a UserFilter) -> impl Iterator<Item = &'a Record> {
        self.records.iter().filter(move |r| filter.matches(&r.author))
    }

    /// Sorted unique participant names, notification author excluded.
    pub fn participants(&self) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| !r.author.is_system())
            .map(|r| r.author.name().to_string())
            .unique()
            .sorted()
            .collect()
    }
}
