mod clock;
mod config;
mod logging;
mod models;
mod run;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    logging::init_tracing();

    let mut args: Vec<String> = std::env::args().collect();
    let config = config::Config::load(&mut args)?;
    tracing::info!(daily_budget = %config.daily_budget, "starting");

    match args.len() {
        0 | 1 => run::as_shell(&config),
        _ => run::as_cli(&args, &config),
    }
}
