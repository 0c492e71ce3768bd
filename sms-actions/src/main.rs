use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sms_actions::config::RunConfig;
use sms_actions::domain::{DEFAULT_DESTINATION, Destination};
use sms_actions::error::GenerateError;
use sms_actions::pipeline::run;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "sms_actions=info";

/// Skipped numbers are always reported, whatever `RUST_LOG` says.
const SKIPPED_NUMBERS: &str = "sms_actions::validate=warn";

/// Generate SMS routing action lines from numbers.txt.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Routing group written into every line
    #[arg(default_value = DEFAULT_DESTINATION)]
    destination: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    tracing_subscriber::registry()
        .with(report_skipped_numbers(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = RunConfig::for_destination(Destination::new(args.destination));
    info!("Looking for numbers at: {}", config.input().display());
    info!("Output file will be: {}", config.output_path().display());

    match run(&config) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", error_message(&e));
            ExitCode::FAILURE
        }
    }
}

fn report_skipped_numbers(filter: EnvFilter) -> EnvFilter {
    match SKIPPED_NUMBERS.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

fn error_message(err: &GenerateError) -> String {
    format!("Error: {err}.")
}
