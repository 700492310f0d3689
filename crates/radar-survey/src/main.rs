// File: crates/radar-survey/src/main.rs
// Summary: Persona survey CLI; collects ratings interactively (or from CSV) and prints skill and interest radar charts.

mod csv_input;
mod survey;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use radar_core::RadarChart;
use tracing_subscriber::EnvFilter;

use crate::survey::{profile_summary, Profile, Survey, ThreadRandom};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let profile = match csv_arg()? {
        Some(path) => csv_input::load_profile_csv(&path)?,
        None => {
            println!("Persona Profile Survey\n");
            let stdin = io::stdin();
            let mut survey = Survey::new(stdin.lock(), io::stdout());
            survey.run(&mut ThreadRandom::new())?
        }
    };

    if profile.skills.is_empty() {
        bail!("no categories to chart");
    }
    print_profile(&profile)
}

/// `--csv <path>` (or `--csv=<path>`) selects file input instead of the interactive survey.
fn csv_arg() -> Result<Option<PathBuf>> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if let Some(path) = arg.strip_prefix("--csv=") {
            return Ok(Some(PathBuf::from(path)));
        }
        match arg.as_str() {
            "--csv" => {
                let path = args.next().context("--csv needs a file path")?;
                return Ok(Some(PathBuf::from(path)));
            }
            "-h" | "--help" => {
                println!("usage: radar-survey [--csv <file>]");
                std::process::exit(0);
            }
            other => bail!("unexpected argument: {other}"),
        }
    }
    Ok(None)
}

fn print_profile(profile: &Profile) -> Result<()> {
    let chart = RadarChart::new();
    let skills = chart.render(&profile.skills).context("rendering skills chart")?;
    let interests = if profile.interests.is_empty() {
        None
    } else {
        Some(chart.render(&profile.interests).context("rendering interests chart")?)
    };

    let mut out = io::stdout().lock();
    writeln!(out, "\nYour Persona Profile:")?;
    for line in profile_summary(profile) {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "\nSkills Radar Chart:")?;
    for line in skills {
        writeln!(out, "{line}")?;
    }
    if let Some(lines) = interests {
        writeln!(out, "\nInterests Radar Chart:")?;
        for line in lines {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
