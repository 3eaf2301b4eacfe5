use crate::dataset::{Dataset, Record, UserFilter};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::io::{BufRead, BufReader, Read};

/// Built-in stop list: common English plus the Hinglish fillers that
/// dominate the chat exports this tool was written for.
const DEFAULT_STOP_WORDS: &[&str] = &[
    // English
    "a", "about", "after", "all", "also", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "but", "by", "can", "could", "did",
    "do", "does", "for", "from", "get", "got", "had", "has", "have", "he",
    "her", "here", "him", "his", "how", "i", "if", "in", "is", "it", "its",
    "just", "like", "me", "my", "no", "not", "now", "of", "ok", "okay",
    "on", "one", "only", "or", "our", "out", "she", "so", "some", "than",
    "that", "the", "their", "them", "then", "there", "they", "this", "to",
    "too", "up", "us", "was", "we", "were", "what", "when", "which", "who",
    "why", "will", "with", "would", "yeah", "yes", "you", "your",
    // Hinglish
    "aap", "ab", "apna", "aur", "bhai", "bhi", "bas", "ek", "gaya", "hai",
    "hain", "haan", "ho", "hoga", "hua", "hi", "hum", "ka", "kar", "karo",
    "ke", "ki", "koi", "ko", "kya", "kyu", "liye", "main", "mai", "mein",
    "na", "nahi", "nhi", "par", "pe", "phir", "raha", "rahe", "rhe", "sab",
    "se", "tha", "the", "thi", "toh", "tu", "tum", "wala", "wo", "woh",
];

/// Words excluded from word-frequency views. Defaults to the built-in
/// list; a custom list can be loaded one word per line.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        StopWords { words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect() }
    }
}

impl StopWords {
    pub fn from_reader(reader: impl Read) -> std::io::Result<Self> {
        let mut words = HashSet::new();
        for line in BufReader::new(reader).lines() {
            let w = line?.trim().to_lowercase();
            if !w.is_empty() {
                words.insert(w);
            }
        }
        Ok(StopWords { words })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

/// Rows that contribute words: no notifications, no media placeholders.
fn wordy_rows<'a>(
    filter: &'a UserFilter,
    ds: &'a Dataset,
) -> impl Iterator<Item = &'a Record> {
    ds.filtered(filter)
        .filter(|r| !r.author.is_system() && !r.is_media())
}

fn tokens<'a>(
    filter: &'a UserFilter,
    ds: &'a Dataset,
    stop: &'a StopWords,
) -> impl Iterator<Item = String> + 'a {
    wordy_rows(filter, ds).flat_map(move |r| {
        r.body
            .split_whitespace()
            .map(|w| w.to_lowercase())
            .filter(|w| !stop.contains(w))
            .collect::<Vec<_>>()
    })
}

/// Stop-word-filtered lowercase text, single-space separated. This is the
/// input handed to an external word-cloud renderer.
pub fn wordcloud_text(filter: &UserFilter, ds: &Dataset, stop: &StopWords) -> String {
    tokens(filter, ds, stop).collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Top `top_n` words by frequency, ties broken by first encounter.
pub fn most_common_words(
    filter: &UserFilter,
    ds: &Dataset,
    stop: &StopWords,
    top_n: usize,
) -> Vec<WordCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    for word in tokens(filter, ds, stop) {
        if !counts.contains_key(&word) {
            order.push(word.clone());
        }
        *counts.entry(word).or_insert(0) += 1;
    }
    let mut ranked: Vec<WordCount> = order
        .into_iter()
        .map(|word| {
            let count = counts[&word];
            WordCount { word, count }
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(top_n);
    ranked
}
