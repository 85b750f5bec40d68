use std::path::PathBuf;

use clap::Args;
use fitgrade_core::date::{self, DateKey};
use fitgrade_core::stats::format_clock;
use fitgrade_core::{Config, ExerciseKind, Loadable, WeeklySummary, WeeklyView};

#[derive(Args)]
pub struct WeeklyArgs {
    /// Last day of the window (YYYY-MM-DD), defaults to today at +09:00
    #[arg(long)]
    pub today: Option<DateKey>,
    /// Read a weekly response body from a file instead of the backend
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Print the view as JSON
    #[arg(long)]
    pub json: bool,
}

/// Weekly view from `--input` or the backend.
pub(crate) fn load(
    today: DateKey,
    input: Option<&PathBuf>,
    config: &Config,
) -> Result<Loadable<WeeklyView>, Box<dyn std::error::Error>> {
    match input {
        Some(path) => Ok(Loadable::Ready(WeeklyView::from_response(
            super::read_json(path)?,
            today,
        ))),
        None => {
            let dashboard = super::dashboard(config)?;
            Ok(super::block_on(dashboard.load_weekly(today))?)
        }
    }
}

pub fn run(args: WeeklyArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let today = args.today.unwrap_or_else(date::today);
    let loaded = load(today, args.input.as_ref(), config)?;

    if args.json {
        return super::print_json(&loaded);
    }

    let Some(view) = super::ready_or_report(loaded)? else {
        return Ok(());
    };
    println!("{}", view.range_label);
    print_summary(&view.pushup);
    println!();
    print_summary(&view.running);
    Ok(())
}

fn print_summary(summary: &WeeklySummary) {
    let render = |value: u32| match summary.kind {
        ExerciseKind::Run => format_clock(f64::from(value)),
        _ => value.to_string(),
    };

    println!("{}", summary.kind.display_name());
    for (point, (_, grade)) in summary.points.iter().zip(summary.grades()) {
        let value = point.value.map(render).unwrap_or_else(|| point.display_value());
        match grade {
            Some(grade) => println!("  {}  {value:>6}  {grade}", point.date.short_label()),
            None => println!("  {}  {value:>6}", point.date.short_label()),
        }
    }
    if let Some(best) = summary.best() {
        println!("  best: {}", render(best));
    }
}
