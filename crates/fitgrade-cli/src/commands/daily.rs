use std::path::PathBuf;

use clap::Args;
use fitgrade_core::date::{self, DateKey};
use fitgrade_core::{Config, DailyResponse, DailyView, Loadable, PushupDetail, RunningDetail};

#[derive(Args)]
pub struct DailyArgs {
    /// Day to show (YYYY-MM-DD), defaults to today at +09:00
    #[arg(long)]
    pub date: Option<DateKey>,
    /// Read a daily response body from a file instead of the backend
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Print the view as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: DailyArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let day = args.date.unwrap_or_else(date::today);
    let loaded = match &args.input {
        Some(path) => {
            let response: DailyResponse = super::read_json(path)?;
            Loadable::Ready(DailyView::build(day, &response))
        }
        None => {
            let dashboard = super::dashboard(config)?;
            super::block_on(dashboard.load_daily(day))?
        }
    };

    if args.json {
        return super::print_json(&loaded);
    }

    let Some(view) = super::ready_or_report(loaded)? else {
        return Ok(());
    };
    println!("{}", view.date);
    if let Some(pushup) = super::ready_or_report(view.pushup)? {
        print_pushup(&pushup);
    }
    println!();
    if let Some(running) = super::ready_or_report(view.running)? {
        print_running(&running);
    }
    Ok(())
}

fn print_pushup(detail: &PushupDetail) {
    println!("팔굽혀펴기  {}", detail.grade.headline());
    for bucket in &detail.buckets {
        println!("  {:>8}  {}", bucket.label(), bucket.count().unwrap_or(0));
    }
    println!("  total: {} reps in {}", detail.total_reps, detail.duration_label);
}

fn print_running(detail: &RunningDetail) {
    println!("3km 달리기  {}", detail.grade.headline());
    for (km, pace) in detail.paces.iter().enumerate() {
        println!("  {}km  {pace}", km + 1);
    }
    println!("  total: {}  average: {}", detail.total_label, detail.average_pace);
}
