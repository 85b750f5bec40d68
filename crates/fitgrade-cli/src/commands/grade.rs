use clap::Args;
use fitgrade_core::grade::{classify_kind, tiers_for};
use fitgrade_core::{Direction, ExerciseKind, ValidationError};
use serde::Serialize;

#[derive(Args)]
pub struct GradeArgs {
    /// Exercise kind: pushup or run
    pub kind: ExerciseKind,
    /// Rep count, or run time as seconds or MM:SS
    pub value: String,
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct GradeReport {
    kind: ExerciseKind,
    value: f64,
    grade: String,
    /// How far the value is from the next better tier, if there is one.
    to_next_tier: Option<f64>,
}

/// Parse `13:30` or `810` as seconds.
fn parse_value(raw: &str) -> Result<f64, ValidationError> {
    let invalid = |message: &str| ValidationError::InvalidValue {
        field: "value".to_string(),
        message: format!("{message}: '{raw}'"),
    };
    let value: f64 = match raw.split_once(':') {
        Some((minutes, seconds)) => {
            let minutes: u32 = minutes.trim().parse().map_err(|_| invalid("bad minutes"))?;
            let seconds: f64 = seconds.trim().parse().map_err(|_| invalid("bad seconds"))?;
            if !(0.0..60.0).contains(&seconds) {
                return Err(invalid("seconds must be below 60"));
            }
            f64::from(minutes) * 60.0 + seconds
        }
        None => raw.trim().parse().map_err(|_| invalid("not a number"))?,
    };
    if !value.is_finite() || value < 0.0 {
        return Err(invalid("must be a non-negative number"));
    }
    Ok(value)
}

/// Gap to the closest tier above the one `value` reached.
fn to_next_tier(kind: ExerciseKind, value: f64) -> Option<f64> {
    let tiers = tiers_for(kind)?;
    tiers
        .iter()
        .rev()
        .find(|tier| !tier.direction.satisfied(value, tier.boundary))
        .map(|tier| match tier.direction {
            Direction::MinInclusive => tier.boundary - value,
            Direction::MaxInclusive => value - tier.boundary,
        })
}

pub fn run(args: GradeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let value = parse_value(&args.value)?;
    let grade = classify_kind(args.kind, value)
        .ok_or_else(|| format!("{} has no grade table", args.kind))?;

    let report = GradeReport {
        kind: args.kind,
        value,
        grade: grade.label().to_string(),
        to_next_tier: to_next_tier(args.kind, value),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", grade.headline());
    if let Some(gap) = report.to_next_tier {
        match args.kind {
            ExerciseKind::Run => println!("{gap} s to the next tier"),
            _ => println!("{gap} more to the next tier"),
        }
    }
    Ok(())
}
