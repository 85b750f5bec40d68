use std::path::PathBuf;

use chrono::Datelike;
use clap::Args;
use fitgrade_core::date::{self, DateKey};
use fitgrade_core::stats::PresenceIndex;
use fitgrade_core::{Config, ExerciseKind};
use serde::Serialize;

#[derive(Args)]
pub struct CalendarArgs {
    /// Last day of the week shown (YYYY-MM-DD), defaults to today at +09:00
    #[arg(long)]
    pub today: Option<DateKey>,
    /// Read a weekly response body from a file instead of the backend
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Print the markers as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct CalendarDay {
    date: DateKey,
    kinds: Vec<ExerciseKind>,
    selectable: bool,
}

fn days(presence: &PresenceIndex, today: DateKey) -> Vec<CalendarDay> {
    (0..7)
        .map(|i| {
            let day = today.offset_days(i - 6);
            CalendarDay {
                date: day,
                kinds: presence.kinds_on(day),
                selectable: date::is_selectable(day, today),
            }
        })
        .collect()
}

fn marker(kind: ExerciseKind) -> &'static str {
    match kind {
        ExerciseKind::Pushup => "P",
        ExerciseKind::Run => "R",
        ExerciseKind::Situp => "S",
    }
}

pub fn run(args: CalendarArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let today = args.today.unwrap_or_else(date::today);
    let loaded = super::weekly::load(today, args.input.as_ref(), config)?;
    let Some(view) = super::ready_or_report(loaded)? else {
        return Ok(());
    };
    let days = days(&view.presence, today);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&days)?);
        return Ok(());
    }

    println!("{}", view.range_label);
    for day in &days {
        let markers: Vec<&str> = day.kinds.iter().map(|&k| marker(k)).collect();
        let weekday = day.date.naive().weekday();
        let note = if day.selectable { "" } else { "  (previous month)" };
        println!(
            "  {} {weekday}  {:<5}{note}",
            day.date.short_label(),
            markers.join(" ")
        );
    }
    Ok(())
}
