mod options;
mod report;

use std::process::ExitCode;

use anyhow::{Context, Result};
use quarrel::{Matches, ParseConfig, ParseOutcome};
use tracing_subscriber::{EnvFilter, fmt};

use crate::report::CopyPlan;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &[String]) -> Result<ExitCode> {
    tracing::debug!(version = %quarrel::version(), "qcp starting");

    let specs = options::specs();
    let m = match quarrel::parse(args, &specs, &ParseConfig::default())? {
        ParseOutcome::Help(lines) => {
            print_lines(&lines);
            return Ok(ExitCode::SUCCESS);
        }
        ParseOutcome::Matches(m) => m,
    };

    let Some(plan) = CopyPlan::from_matches(&m, &options::FLAGS) else {
        println!("Missing parameters, you need to pass the source and dest targets.");
        print_lines(&quarrel::help::render(&specs)?);
        return Ok(ExitCode::FAILURE);
    };

    if m.contains(options::JSON) {
        let json = serde_json::to_string_pretty(&plan).context("failed to encode copy plan")?;
        println!("{json}");
        return Ok(ExitCode::SUCCESS);
    }

    report_flags(&m);
    for src in &plan.sources {
        match plan.backup_suffix {
            Some(suffix) => println!("Copying {src} -> {} (backup suffix {suffix})", plan.destination),
            None => println!("Copying {src} -> {}", plan.destination),
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn report_flags(m: &Matches) {
    for flag in options::FLAGS {
        if m.contains(flag) {
            println!("Found option '{flag}'.");
        }
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
