use anyhow::{bail, Context};
use chatmetrics::dataset::{Dataset, UserFilter};
use chatmetrics::report::{build_report, AnalysisReport, ReportOpts};
use chatmetrics::parser;
use chatmetrics::words::StopWords;
use clap::Parser;
use std::fs::File;
use std::io::{self, Read};

#[derive(Parser, Debug)]
#[command(name = "chatmetrics", version, about = "Chat export analytics")]
struct Cli {
    /// Transcript file (`-` for stdin)
    input: String,

    /// Analyse a single participant instead of the whole group
    #[arg(long = "user")]
    user: Option<String>,

    /// List participants found in the transcript and exit
    #[arg(long = "list-users", default_value_t = false)]
    list_users: bool,

    /// Print only a specific section: stats | monthly | daily | activity | heatmap | users | words | emoji
    #[arg(long = "only")]
    only: Option<String>,

    #[arg(long = "top-words", default_value_t = 20)]
    top_words: usize,
    #[arg(long = "top-users", default_value_t = 5)]
    top_users: usize,

    /// Custom stop-word list, one word per line
    #[arg(long = "stop-words")]
    stop_words: Option<String>,

    /// Output format: json | table (default: table on a terminal, json otherwise)
    #[arg(long = "format")]
    format: Option<String>,
}

fn read_input(path: &str) -> anyhow::Result<parser::ParseOutcome> {
    if path == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(parser::parse_transcript(&text))
    } else {
        parser::parse_file(path).with_context(|| format!("cannot read {path}"))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let outcome = read_input(&cli.input)?;
    let ds = Dataset::from_messages(outcome.messages);
    if ds.is_empty() {
        bail!("no messages found in transcript; nothing to analyse");
    }

    if cli.list_users {
        for user in ds.participants() {
            println!("{user}");
        }
        return Ok(());
    }

    let filter = match &cli.user {
        Some(name) => {
            if !ds.participants().iter().any(|u| u == name) {
                bail!("unknown participant: {name}");
            }
            UserFilter::User(name.clone())
        }
        None => UserFilter::Overall,
    };

    let stop = match &cli.stop_words {
        Some(path) => StopWords::from_reader(
            File::open(path).with_context(|| format!("cannot open {path}"))?,
        )?,
        None => StopWords::default(),
    };

    let opts = ReportOpts { top_words: cli.top_words, top_users: cli.top_users };
    let rep = build_report(&filter, &ds, &stop, &opts, outcome.skipped_lines);

    if rep.skipped_lines > 0 {
        eprintln!("skipped {} malformed line(s)", rep.skipped_lines);
    }

    let as_table = match cli.format.as_deref() {
        Some("table") => true,
        Some("json") => false,
        Some(other) => bail!("unknown format: {other}"),
        None => atty::is(atty::Stream::Stdout),
    };

    if as_table {
        print_table(&rep, cli.only.as_deref())?;
    } else {
        print_json(&rep, cli.only.as_deref())?;
    }
    Ok(())
}

fn print_json(rep: &AnalysisReport, only: Option<&str>) -> anyhow::Result<()> {
    let value = match only {
        None => serde_json::to_value(rep)?,
        Some("stats") => serde_json::to_value(&rep.stats)?,
        Some("monthly") => serde_json::to_value(&rep.monthly_timeline)?,
        Some("daily") => serde_json::to_value(&rep.daily_timeline)?,
        Some("activity") => serde_json::json!({
            "week": rep.week_activity,
            "month": rep.month_activity,
        }),
        Some("heatmap") => serde_json::to_value(&rep.heatmap)?,
        Some("users") => serde_json::to_value(&rep.busy_users)?,
        Some("words") => serde_json::to_value(&rep.common_words)?,
        Some("emoji") => serde_json::to_value(&rep.emoji)?,
        Some(other) => bail!("unknown section: {other}"),
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn section(only: Option<&str>, name: &str) -> bool {
    only.map(|o| o == name).unwrap_or(true)
}

fn print_table(rep: &AnalysisReport, only: Option<&str>) -> anyhow::Result<()> {
    if let Some(o) = only {
        let known = ["stats", "monthly", "daily", "activity", "heatmap", "users", "words", "emoji"];
        if !known.contains(&o) {
            bail!("unknown section: {o}");
        }
    }
    println!("== {} ==", rep.user);
    if section(only, "stats") {
        let s = &rep.stats;
        println!(
            "messages: {}  words: {}  media: {}  links: {}",
            s.messages, s.words, s.media, s.links
        );
    }
    if section(only, "monthly") && !rep.monthly_timeline.is_empty() {
        println!("\nMonthly timeline");
        for b in &rep.monthly_timeline {
            println!("  {:<16} {}", b.label, b.count);
        }
    }
    if section(only, "daily") && !rep.daily_timeline.is_empty() {
        println!("\nDaily timeline");
        for b in &rep.daily_timeline {
            println!("  {} {}", b.date, b.count);
        }
    }
    if section(only, "activity") && !rep.week_activity.is_empty() {
        println!("\nBusiest days");
        for a in &rep.week_activity {
            println!("  {:<10} {}", a.label, a.count);
        }
        println!("\nBusiest months");
        for a in &rep.month_activity {
            println!("  {:<10} {}", a.label, a.count);
        }
    }
    if section(only, "heatmap") {
        println!("\nActivity heatmap (rows Monday..Sunday, columns 0-23)");
        for (day, row) in rep.heatmap.days.iter().zip(&rep.heatmap.counts) {
            let cells: Vec<String> = row.iter().map(|c| format!("{c:>3}")).collect();
            println!("  {:<10} {}", day, cells.join(" "));
        }
    }
    if let Some(busy) = rep.busy_users.as_ref().filter(|_| section(only, "users")) {
        println!("\nMost busy users");
        for u in &busy.top {
            println!("  {:<20} {}", u.user, u.count);
        }
        for s in &busy.shares {
            println!("  {:<20} {:.2}%", s.user, s.percent);
        }
    }
    if section(only, "words") && !rep.common_words.is_empty() {
        println!("\nMost common words");
        for w in &rep.common_words {
            println!("  {:<20} {}", w.word, w.count);
        }
    }
    if section(only, "emoji") && !rep.emoji.is_empty() {
        println!("\nEmoji");
        for e in &rep.emoji {
            println!("  {:<4} {}", e.emoji, e.count);
        }
    }
    Ok(())
}
