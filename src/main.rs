use crate::dispatcher::DispatcherProfile;
use crate::error::AppError;
use crate::registry::FlightRegistry;
use clap::Parser;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod console;
mod dispatcher;
mod error;
mod flight;
mod registry;
mod render;

#[derive(Parser, Debug)]
#[command(about = "Airport traffic control and dispatcher desk")]
struct Args {
    /// JSON file with the on-duty dispatcher profile; prompted for when omitted
    #[arg(short, long, value_name = "FILE")]
    dispatcher: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    log: String,
}

fn init_logging(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.log);

    println!("===== Airport Traffic Control & Dispatcher System =====");

    let mut rl = console::console().map_err(AppError::from)?;

    let profile = match &args.dispatcher {
        Some(path) => {
            let profile = DispatcherProfile::load_from_file(path)?;
            println!("Dispatcher {} on duty (loaded from {}).", profile.name, path.display());
            profile
        }
        None => match console::prompt_dispatcher(&mut rl) {
            Ok(profile) => profile,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()),
            Err(err) => return Err(AppError::from(err).into()),
        },
    };
    tracing::info!(dispatcher = %profile.name, shift = %profile.shift, "desk opened");

    let mut registry = FlightRegistry::new(profile);
    console::run(&mut rl, &mut registry).map_err(AppError::from)?;

    tracing::info!(flights = registry.len(), "desk closed");
    Ok(())
}
